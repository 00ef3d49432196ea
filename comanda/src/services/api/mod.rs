//! # Backend API Client Module
//!
//! HTTP client for the food-ordering backend: a GraphQL root for accounts,
//! orders and the menu, and REST endpoints under `/api` for invoices.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs          - Module exports and documentation
//! ├── client.rs       - ApiClient, bearer injection, GraphQL/REST plumbing
//! ├── queries.rs      - GraphQL documents
//! ├── auth.rs         - login, register, changePassword
//! ├── pedidos.rs      - pedidos, updatePedido
//! ├── platillos.rs    - platillos
//! └── facturacion.rs  - /facturacion REST endpoints
//! ```

pub mod auth;
pub mod client;
pub mod facturacion;
pub mod pedidos;
pub mod platillos;
pub mod queries;

pub use client::ApiClient;
