//! # Services Module
//!
//! External service integrations for the StockSense terminal.
//!
//! ```text
//! ┌───────────────────────────────────────────┐
//! │              StockSense UI                │
//! │                                           │
//! │   pages ──> Arc<dyn ApiService>           │
//! │                    │                      │
//! │              ┌─────┴──────┐               │
//! │              │ ApiClient  │ (api/)        │
//! │              └─────┬──────┘               │
//! └────────────────────┼──────────────────────┘
//!                      │ HTTP/JSON
//!                      ▼
//! ┌───────────────────────────────────────────┐
//! │        StockSense backend (Flask)         │
//! │                                           │
//! │  /api/dashboard-data                      │
//! │  /api/stock-data/{symbol}?period=         │
//! │  /api/search-stocks?q=                    │
//! │  /api/trending-tweets-data                │
//! │  /api/predictions-data/{symbol}           │
//! │  /api/prediction-accuracy/{symbol}        │
//! │  /api/prediction-history/{symbol}         │
//! └───────────────────────────────────────────┘
//! ```
//!
//! ## Error Handling
//!
//! Every endpoint returns `Result<T, ApiError>`:
//! - Network errors: `ApiError::Transport`
//! - Non-2xx responses: `ApiError::HttpStatus` with the body's `error`
//! - Unparseable bodies: `ApiError::Decode`
//! - `{"error": "..."}` payloads: `ApiError::Application`
//!
//! ## Configuration
//!
//! - Base URL: `STOCKSENSE_API_URL` (default `http://127.0.0.1:5000`)
//! - Timeout: `STOCKSENSE_TIMEOUT_SECS` (default 10 seconds)
//!
//! ## Testing
//!
//! ```bash
//! cargo test --lib services::api
//! ```
//!
//! The tests run against a one-shot local TCP server, no backend required.

pub mod api;
