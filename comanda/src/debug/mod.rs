//! # Logging
//!
//! Structured logging for the desktop client.
//!
//! - **File-based logging**: `logs/comanda.log.YYYY-MM-DD` (daily rotation,
//!   non-blocking writer)
//! - **Stderr copy**: compact lines while developing
//! - **Panic hook**: panics land in the log file with their location
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (e.g., `comanda=debug,info`)
//! - `COMANDA_LOG_DIR`: Log directory (default: `logs`)
//! - `COMANDA_LOG_STDERR`: `0` disables the stderr copy
//!
//! ## Usage
//!
//! ```rust,no_run
//! comanda::debug::init();
//!
//! tracing::info!(count = 3, "Fetched invoices");
//! ```

pub mod config;
pub mod logger;

pub use config::DebugConfig;
pub use logger::init as init_logger;

/// Initialize logging. Call once at startup, before anything logs.
pub fn init() {
    init_logger();
}
