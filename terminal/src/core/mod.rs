//! # Core Abstractions
//!
//! Foundational types shared by the services, the app orchestrator and the
//! page controllers.
//!
//! ## Modules
//!
//! - **[`error`]**: `ApiError`, `AppError` and their `Result` aliases
//! - **[`service`]**: the `ApiService` trait the pages are written against
//! - **[`clock`]**: injectable monotonic time (`SystemClock`, `ManualClock`)
//! - **[`schedule`]**: cancellable `Debouncer` and `IntervalTask`
//!
//! ## Dependency Injection
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use terminal::core::service::ApiService;
//! use terminal::services::api::ApiClient;
//!
//! // In production: the reqwest-backed client
//! let api: Arc<dyn ApiService> = Arc::new(ApiClient::default());
//! ```
//!
//! Tests swap in their own `ApiService` implementations and a `ManualClock`.

pub mod clock;
pub mod error;
pub mod schedule;
pub mod service;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{ApiError, ApiResult, AppError, Result};
pub use schedule::{Debouncer, IntervalTask};
pub use service::ApiService;
