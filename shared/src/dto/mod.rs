//! # Data Transfer Objects (DTOs)
//!
//! Data structures received from the backend REST API.
//!
//! ## Module Organization
//!
//! - [`market`] - Dashboard, stock data, historical prices, search
//! - [`sentiment`] - Sentiment records and trending tweets
//! - [`prediction`] - Predictions, technical indicators, accuracy and history
//! - [`lenient`] - Forgiving field decoders shared by the modules above
//!
//! ## Example JSON Communication
//!
//! ```text
//! GET /api/stock-data/TCS.NS?period=1mo
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "current": { "symbol": "TCS.NS", "name": "Tata Consultancy", "price": 3500.0, ... },
//!   "historical": [ { "date": "2024-01-02", "close": 3480.5, "volume": 1200000 }, ... ]
//! }
//! ```

pub mod lenient;
pub mod market;
pub mod prediction;
pub mod sentiment;

pub use market::*;
pub use prediction::*;
pub use sentiment::*;

use serde::{Deserialize, Serialize};

/// `{success, data, error}` wrapper used by the database-backed endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
