//! # Utility Functions
//!
//! Shared utility functions used across the terminal application.
//!
//! ## Modules
//!
//! - **[`format`]**: Currency, percentage, magnitude and date formatting plus
//!   semantic class names
//! - **[`validation`]**: Input validation (symbols, configured URLs)
//! - **[`runtime`]**: The process-wide tokio runtime
//!
//! ## Related Modules
//!
//! - [`shared::utils`]: Symbol helpers (`display_symbol`, `normalize_symbol`)
//! - [`crate::core`]: Core abstractions and error types

pub mod format;
pub mod runtime;
pub mod validation;
