//! # Core Abstractions
//!
//! Error types and the service trait the rest of the client is written against.
//!
//! - **[`error`]**: Application error type (`AppError`, `Result<T>`)
//! - **[`service`]**: `ApiService`, implemented by
//!   [`crate::services::api::ApiClient`] and by test doubles
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use comanda::config::ClientConfig;
//! use comanda::core::ApiService;
//! use comanda::services::api::ApiClient;
//! use comanda::storage::LocalStore;
//!
//! let config = ClientConfig::default();
//! let api: Arc<dyn ApiService> = Arc::new(ApiClient::new(&config, LocalStore::in_memory()));
//! ```

pub mod error;
pub mod service;

pub use error::{AppError, Result};
pub use service::ApiService;
