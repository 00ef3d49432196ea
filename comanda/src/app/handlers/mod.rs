//! # Event Handlers
//!
//! Event handlers organized by domain for better modularity and testability.

pub mod auth;
pub mod dialogs;
pub mod facturas;
pub mod navigation;
pub mod pedidos;
pub mod profile;
