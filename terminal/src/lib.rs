//! # StockSense Terminal - Library Root
//!
//! A **native desktop dashboard** for Indian equities (NSE/BSE), backed by
//! the StockSense HTTP API. This library crate contains all modules used by
//! the binary crate (`main.rs`).
//!
//! ## Features
//!
//! - **Dashboard**: NIFTY 50 and SENSEX cards, market sentiment, top stocks
//! - **Market Data**: debounced stock search, quote details, price/volume chart
//! - **Predictions**: model recommendation, technical indicators, accuracy
//! - **Trending Tweets**: sentiment-scored finance tweets
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              terminal (this crate)                     │
//! ├────────────────────────────────────────────────────────┤
//! │  egui          - Immediate-mode GUI framework          │
//! │  eframe        - Native window framework               │
//! │  egui_plot     - Charts and plotting                   │
//! │  Tokio         - Async runtime                         │
//! │  Reqwest       - HTTP client                           │
//! └────────────────────────────────────────────────────────┘
//!          │
//!          │ HTTP (JSON)
//!          ▼
//! ┌─────────────────────────┐
//! │  StockSense API         │
//! │  /api/dashboard-data    │
//! │  /api/stock-data/{sym}  │
//! │  /api/predictions-data  │
//! │  /api/trending-tweets   │
//! └─────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: orchestrator, page controllers, search, charts registry
//! - **core**: error types, the `ApiService` trait, clock and timers
//! - **debug**: configuration and logging setup
//! - **services**: the reqwest-backed `ApiClient`
//! - **ui**: egui screens and widgets
//! - **utils**: formatting, validation, the tokio runtime
//!
//! ### Module Dependency Graph
//!
//! ```text
//! main.rs
//!   │
//!   ├── app (state, events, page controllers)
//!   │   ├── core::service (ApiService trait)
//!   │   └── services::api (ApiClient implements it)
//!   │
//!   └── ui (rendering)
//!       ├── screens::* (dashboard, market data, predictions, trending)
//!       ├── widgets::* (tables, nav bar, load feedback)
//!       ├── chart (egui_plot)
//!       └── theme (colors, class names)
//! ```
//!
//! ## Core Concepts
//!
//! ### Event-Driven Architecture
//!
//! - Main thread: input, state changes and rendering
//! - Async tasks: HTTP requests only
//!
//! Results flow back to the main thread as `AppEvent`s.
//!
//! ### View Binding
//!
//! Page controllers write text, class names and visibility into a
//! `ViewModel` by element id. They never touch egui, so every page is
//! testable with a mock `ApiService`.
//!
//! ## Testing
//!
//! ```bash
//! cargo test --lib
//! ```

pub mod app;
pub mod core;
pub mod debug;
pub mod services;
pub mod ui;
pub mod utils;
