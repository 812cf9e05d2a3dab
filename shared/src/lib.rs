//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the StockSense terminal and the
//! backend JSON API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::market`]**: Quotes, index snapshots, historical points, search results
//!   - **[`dto::sentiment`]**: Sentiment records and tweets
//!   - **[`dto::prediction`]**: Price predictions, technical indicators, accuracy
//! - **[`utils`]**: Symbol helpers shared by every screen
//!
//! ## Wire Format
//!
//! The backend is loose about numbers: fields may be missing, `null`, or even
//! numeric strings. Every numeric field is therefore an `Option` decoded with
//! the lenient helpers in [`dto::lenient`], so one bad field never fails the
//! whole payload.
//!
//! ## Usage in Frontend
//!
//! ```rust
//! use shared::dto::market::Quote;
//! use shared::utils::display_symbol;
//!
//! let quote: Quote = serde_json::from_str(r#"{"symbol":"TCS.NS","price":"3500"}"#).unwrap();
//! assert_eq!(quote.price, Some(3500.0));
//! assert_eq!(display_symbol(&quote.symbol), "TCS");
//! ```

pub mod dto;
pub mod utils;

pub use dto::*;
pub use utils::*;
