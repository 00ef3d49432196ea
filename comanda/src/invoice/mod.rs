//! # Invoice Reconciliation
//!
//! The invoice endpoints do not agree on one payload shape: field names come in
//! snake_case, camelCase and English variants, detail lines may be nested or
//! keyed, and the server's tax and total values are not trusted. This module is
//! the compatibility layer between those payloads and everything the seller
//! screen shows or exports.
//!
//! ```text
//! raw JSON ──► fields (alias table)
//!          ├─► detalles (normalize_detalles, product names, MenuMap)
//!          ├─► totals (iva fallback, total = subtotal + iva)
//!          └─► view::FacturaView ──► list card / detail modal
//!                                └─► export (HTML, PDF, CSV)
//! ```
//!
//! Going the other way, [`from_pedido::build_from_pedido`] turns an authorized
//! order into a `crear-directa` request and [`collection`] keeps the local
//! invoice list in step with creations.

pub mod collection;
pub mod detalles;
pub mod export;
pub mod fields;
pub mod from_pedido;
pub mod menu;
pub mod totals;
pub mod view;

pub use collection::{merge_created, unwrap_factura_list};
pub use detalles::{display_product_name, normalize_detalles, resolve_product_name};
pub use export::{ExportKind, ExportedFile, Exporter};
pub use from_pedido::build_from_pedido;
pub use menu::MenuMap;
pub use totals::{Totals, IVA_RATE};
pub use view::FacturaView;
