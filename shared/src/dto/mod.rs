//! # Data Transfer Objects (DTOs)
//!
//! Data structures exchanged with the food-ordering backend.
//!
//! ## Module Organization
//!
//! - [`graphql`] - Request body and response envelope for the GraphQL root
//! - [`auth`] - Login, registration, password change, cached user record
//! - [`pedido`] - Orders, order lines and the order status workflow
//! - [`platillo`] - Menu items
//! - [`factura`] - Direct invoice creation payload
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /graphql
//! Authorization: Bearer eyJhbGciOi...
//!
//! {
//!   "query": "mutation UpdatePedidoEstado($updatePedidoInput: UpdatePedidoInput!) { ... }",
//!   "variables": { "updatePedidoInput": { "id": 5, "estadoPedido": "Autorizado" } }
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//!
//! {
//!   "data": { "updatePedido": { "id": "5", "estadoPedido": "Autorizado" } }
//! }
//! ```

pub mod auth;
pub mod factura;
pub mod graphql;
pub mod pedido;
pub mod platillo;

pub use auth::*;
pub use factura::*;
pub use graphql::*;
pub use pedido::*;
pub use platillo::*;
