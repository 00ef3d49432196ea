//! # Services Module
//!
//! External service integrations.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                 Comanda GUI                 │
//! │             ┌──────────────────┐            │
//! │             │  ApiClient       │◄── LocalStore (bearer token)
//! │             └────────┬─────────┘            │
//! └──────────────────────┼──────────────────────┘
//!                        │ HTTP/JSON
//!          ┌─────────────┴──────────────┐
//!          ▼                            ▼
//! ┌──────────────────┐       ┌────────────────────────┐
//! │  POST /graphql   │       │  /api/facturacion/*    │
//! │  login, register │       │  mis-facturas, :id,    │
//! │  pedidos, ...    │       │  crear-directa         │
//! └──────────────────┘       └────────────────────────┘
//! ```

pub mod api;
