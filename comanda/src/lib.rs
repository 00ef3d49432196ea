//! # Comanda Desktop Client - Library Root
//!
//! Native desktop GUI for the Comanda food-ordering backend. This library
//! crate contains all modules used by the binary crate (`main.rs`).
//!
//! ## Features
//!
//! - **Accounts**: login, registration, password change, persisted session
//! - **Order workflow**: administrators move orders through
//!   `Pendiente → Autorizado → Enviado → Entregado` (or `Cancelado`)
//! - **Invoices**: sellers list, inspect and create invoices from authorized
//!   orders, and export them as HTML, PDF or CSV
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              comanda (this crate)                      │
//! ├────────────────────────────────────────────────────────┤
//! │  egui / eframe  - Immediate-mode GUI, native window    │
//! │  Tokio          - Async runtime behind the UI thread   │
//! │  Reqwest        - GraphQL and REST over HTTP           │
//! │  minijinja      - HTML invoice template                │
//! │  genpdf         - PDF invoices                         │
//! └────────────────────────────────────────────────────────┘
//!          │ POST /graphql          │ /api/facturacion/*
//!          ▼                        ▼
//! ┌──────────────────────────────────────────────────────┐
//! │                 Comanda backend                      │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: state, events, handlers and async tasks
//! - **config**: endpoint and directory configuration from the environment
//! - **core**: `AppError` and the `ApiService` trait
//! - **debug**: tracing setup (rolling log file, optional stderr)
//! - **invoice**: invoice payload reconciliation and exports
//! - **orders**: order list with the optimistic status rewrite
//! - **services**: the HTTP `ApiClient`
//! - **session**: logged-in user and the account flows
//! - **storage**: file-backed key/value store for the token and user
//! - **ui**: screens, widgets and theme
//! - **utils**: form validation
//!
//! ## Testing
//!
//! ```bash
//! cargo test -p comanda
//! ```
//!
//! Unit tests live next to the code; `tests/api_client.rs` runs the HTTP
//! client against an in-process mock backend.

pub mod app;
pub mod config;
pub mod core;
pub mod debug;
pub mod invoice;
pub mod orders;
pub mod services;
pub mod session;
pub mod storage;
pub mod ui;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::app::{App, AppEvent, AppState, Screen};
pub use crate::config::ClientConfig;
pub use crate::core::{AppError, ApiService, Result};
