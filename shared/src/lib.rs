//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the Comanda desktop client and the
//! food-ordering backend. The backend is owned by another team, so every type here
//! mirrors what the GraphQL schema and the REST `facturacion` endpoints actually
//! send, including their naming quirks.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::graphql`]**: `{ query, variables }` request and `{ data, errors }` envelope
//!   - **[`dto::auth`]**: Login, registration, password change and the cached `User`
//!   - **[`dto::pedido`]**: Orders and the five-state `EstadoPedido` workflow
//!   - **[`dto::platillo`]**: Menu items
//!   - **[`dto::factura`]**: Direct invoice creation request
//! - **[`utils`]**: Lenient deserializers and timestamp parsing
//!
//! ## Wire Format
//!
//! GraphQL payloads use **camelCase** (`estadoPedido`, `direccionPrincipal`), with the
//! single exception of `access_token` in the login payload. Numeric ids may arrive as
//! numbers or as strings (GraphQL `ID`), so id and amount fields go through the
//! lenient deserializers in [`utils`].
//!
//! Invoices themselves are *not* modelled here: their shape differs between
//! endpoints and the client reads them as raw `serde_json::Value`.
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::pedido::{EstadoPedido, Pedido};
//!
//! let pedido: Pedido = serde_json::from_value(serde_json::json!({
//!     "id": "5",
//!     "estadoPedido": "Pendiente",
//!     "detalles": [{ "cantidad": 3, "platillo": { "id": 9, "nombreItem": "Pizza", "precio": 10 } }]
//! })).unwrap();
//!
//! assert_eq!(pedido.id, 5);
//! assert!(pedido.estado_pedido.can_transition_to(EstadoPedido::Autorizado));
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
