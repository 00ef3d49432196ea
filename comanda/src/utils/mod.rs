//! # Utility Functions
//!
//! Shared utility functions used across the client.
//!
//! ## Modules
//!
//! - **[`validation`]**: Form validation (login, registration, password change)
//!
//! ## Related Modules
//!
//! - [`shared::utils`]: Lenient deserializers and timestamp parsing
//! - [`crate::core`]: Core abstractions and error types

pub mod validation;

pub use validation::ValidationResult;
