//! # Async Tasks
//!
//! Background fetches for the order and invoice screens. Each task sets its
//! loading flag, runs on the tokio runtime and reports back through an
//! [`crate::app::AppEvent`].

pub mod facturas;
pub mod pedidos;
