//! # Common Error Types
//!
//! Consolidated error handling for the desktop client.
//!
//! Every fallible operation in the crate returns [`Result<T>`], so failures reach
//! the handler boundary with `?` and are turned into a blocking dialog there.
//!
//! ## Error Categories
//!
//! - **Network**: transport failures (connection refused, timeout, unreadable body)
//! - **Http**: the backend answered with a non-success status
//! - **GraphQl**: the GraphQL envelope carried a non-empty `errors` array
//! - **MissingData**: a success envelope without the expected field
//! - **Validation**: local checks (empty form fields, no valid invoice lines)
//! - **Storage / Export / Config**: local resources the client owns
//!
//! ## Usage Pattern
//!
//! ```rust
//! use comanda::core::error::{AppError, Result};
//!
//! fn require_email(email: &str) -> Result<&str> {
//!     if email.trim().is_empty() {
//!         return Err(AppError::Validation("Por favor ingresa correo y contraseña".to_string()));
//!     }
//!     Ok(email)
//! }
//!
//! assert!(require_email("").is_err());
//! ```
//!
//! ## User-Facing Text
//!
//! `Display` is meant for logs. Dialogs use [`AppError::user_message`], which
//! digs the backend's own `message` out of HTTP error bodies.

use serde_json::Value;
use thiserror::Error;

/// Application-wide error type.
///
/// Variants carry plain strings so the error can travel inside `AppEvent`
/// (which is `Clone`) from async tasks back to the UI thread.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    /// Transport failure: the request never got an HTTP answer, or the body
    /// could not be read.
    #[error("Network error: {0}")]
    Network(String),

    /// Non-success HTTP status. `body` is the raw response text.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// First message of a non-empty GraphQL `errors` array.
    ///
    /// Raised even when `data` is also present.
    #[error("GraphQL error: {0}")]
    GraphQl(String),

    /// A response parsed but lacked the field the operation needs.
    #[error("Missing data: {0}")]
    MissingData(String),

    /// Local validation failure. The message is already user-facing.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Local persisted storage could not be read or written.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Document or CSV generation, or writing the file, failed.
    #[error("Export error: {0}")]
    Export(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// Text shown to the user in the error dialog.
    ///
    /// For HTTP errors this is the `message` field of a JSON body (NestJS sends
    /// either a string or a list of strings), else the raw body, else the status.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Network(_) => "Error de conexión".to_string(),
            AppError::Http { status, body } => http_body_message(body)
                .unwrap_or_else(|| format!("El servidor respondió con estado {}", status)),
            AppError::GraphQl(msg)
            | AppError::MissingData(msg)
            | AppError::Validation(msg)
            | AppError::Export(msg)
            | AppError::Config(msg) => msg.clone(),
            AppError::Storage(msg) => format!("Error de almacenamiento local: {}", msg),
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, AppError::Network(_))
    }
}

fn http_body_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    match serde_json::from_str::<Value>(trimmed) {
        Ok(json) => match json.get("message") {
            Some(Value::String(msg)) if !msg.is_empty() => Some(msg.clone()),
            Some(Value::Array(items)) if !items.is_empty() => Some(
                items
                    .iter()
                    .map(|item| item.as_str().map(str::to_string).unwrap_or_else(|| item.to_string()))
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            _ => Some(trimmed.to_string()),
        },
        Err(_) => Some(trimmed.to_string()),
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err.to_string())
    }
}
