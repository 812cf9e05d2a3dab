//! # Common Error Types
//!
//! Consolidated error handling for the terminal application.
//!
//! ## Error Categories
//!
//! - [`ApiError`]: everything that can go wrong while talking to the backend.
//!   Page controllers collapse it into a single error state with
//!   [`ApiError::user_message`].
//! - [`AppError`]: application-level failures (configuration, input
//!   validation), plus API errors bubbled up through `?`.
//!
//! Empty results are not errors. A page with nothing to show moves to
//! `LoadState::Empty` instead.
//!
//! ## Usage Pattern
//!
//! ```rust
//! use terminal::core::error::{ApiError, AppError};
//!
//! let err = ApiError::Application("Stock not found".to_string());
//! assert_eq!(err.user_message(), "Stock not found");
//!
//! let app_err: AppError = err.into();
//! assert_eq!(app_err.to_string(), "API error: Stock not found");
//! ```

use thiserror::Error;

/// Message shown when a failure carries nothing more specific.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Failure channel for every backend call.
///
/// `Clone` so results can travel through the event channel and be replayed
/// by test doubles.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Connection refused, DNS failure, timeout, or an interrupted body.
    #[error("Network error: {0}")]
    Transport(String),

    /// Non-2xx status. `message` is the body's `error` field when present.
    #[error("HTTP error! status: {status}")]
    HttpStatus {
        status: u16,
        message: Option<String>,
    },

    /// A 2xx payload with a non-null top-level `error` field.
    #[error("{0}")]
    Application(String),

    /// The body was not valid JSON or did not match the expected shape.
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text to put in front of the user.
    ///
    /// Server-provided messages pass through verbatim; everything else falls
    /// back to [`GENERIC_ERROR_MESSAGE`].
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Application(message) => message.clone(),
            ApiError::HttpStatus {
                message: Some(message),
                ..
            } => message.clone(),
            ApiError::Transport(_) | ApiError::HttpStatus { .. } | ApiError::Decode(_) => {
                GENERIC_ERROR_MESSAGE.to_string()
            }
        }
    }

    /// Short tag for structured log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Transport(_) => "transport",
            ApiError::HttpStatus { .. } => "http_status",
            ApiError::Application(_) => "application",
            ApiError::Decode(_) => "decode",
        }
    }
}

/// Application-wide error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Backend API communication error.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Invalid or unreadable configuration (bad base URL, zero intervals).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input validation error.
    ///
    /// ```rust
    /// use terminal::core::error::AppError;
    ///
    /// let err = AppError::Validation("Please enter a stock symbol".to_string());
    /// assert_eq!(err.to_string(), "Validation error: Please enter a stock symbol");
    /// ```
    #[error("Validation error: {0}")]
    Validation(String),

    /// Runtime or window startup failure.
    #[error("Startup error: {0}")]
    Startup(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Convenience type alias for backend calls.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Startup(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_server_text() {
        let err = ApiError::HttpStatus {
            status: 404,
            message: Some("Symbol not found".to_string()),
        };
        assert_eq!(err.user_message(), "Symbol not found");
        assert_eq!(err.to_string(), "HTTP error! status: 404");
    }

    #[test]
    fn test_user_message_falls_back_to_generic() {
        let cases = [
            ApiError::Transport("connection refused".to_string()),
            ApiError::HttpStatus {
                status: 500,
                message: None,
            },
            ApiError::Decode("expected value at line 1".to_string()),
        ];
        for err in cases {
            assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE, "{:?}", err);
        }
    }

    #[test]
    fn test_api_error_converts_into_app_error() {
        let err: AppError = ApiError::Decode("bad json".to_string()).into();
        assert!(matches!(err, AppError::Api(ApiError::Decode(_))));
    }
}
