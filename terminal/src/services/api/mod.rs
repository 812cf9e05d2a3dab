//! # Backend API Client Module
//!
//! HTTP client for the StockSense REST backend.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs          - Module exports and documentation
//! ├── client.rs       - ApiClient, request/error mapping, ApiService impl
//! ├── market.rs       - Dashboard, stock data, search
//! ├── sentiment.rs    - Trending tweets
//! └── predictions.rs  - Predictions, accuracy, history
//! ```

pub mod client;
pub mod market;
pub mod predictions;
pub mod sentiment;

pub use crate::core::error::{ApiError, ApiResult};
pub use client::ApiClient;
