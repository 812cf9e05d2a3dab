//! # Configuration and Logging
//!
//! Startup plumbing for the terminal binary.
//!
//! - **[`config`]**: [`AppConfig`] read from `STOCKSENSE_*` environment variables
//! - **[`logger`]**: `tracing-subscriber` with a daily-rotated file log
//!
//! ## Usage
//!
//! ```rust,no_run
//! use terminal::debug::{self, AppConfig};
//!
//! let config = AppConfig::from_env();
//! let _guard = debug::init_logger(&config);
//!
//! tracing::info!(endpoint = "/api/dashboard-data", "Request sent");
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `STOCKSENSE_API_URL`: backend base URL (default `http://127.0.0.1:5000`)
//! - `STOCKSENSE_TIMEOUT_SECS`: request timeout (default 10)
//! - `STOCKSENSE_DASHBOARD_REFRESH_SECS`: dashboard refresh (default 300)
//! - `STOCKSENSE_TWEETS_REFRESH_SECS`: trending refresh (default 600)
//! - `STOCKSENSE_SEARCH_DEBOUNCE_MS`: search debounce (default 300)
//! - `STOCKSENSE_LOG_DIR`: log directory (default `logs`)
//! - `RUST_LOG`: log level filter (e.g. `terminal=debug,info`)

pub mod config;
pub mod logger;

pub use config::AppConfig;
pub use logger::init as init_logger;
