//! Validation utilities for user input

/// Shown when the predictions form is submitted empty.
pub const EMPTY_SYMBOL_MESSAGE: &str = "Please enter a stock symbol";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}

/// Validate a stock symbol typed by the user.
///
/// Accepts bare tickers (`tcs`) and exchange-qualified ones (`RELIANCE.BO`).
pub fn validate_symbol(input: &str) -> ValidationResult {
    let symbol = input.trim();
    if symbol.is_empty() {
        return ValidationResult::err(EMPTY_SYMBOL_MESSAGE);
    }

    if symbol.len() > 32 {
        return ValidationResult::err("Symbol must be less than 32 characters");
    }

    if !symbol
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '&' | '_' | '^'))
    {
        return ValidationResult::err("Symbol can only contain letters, numbers, '.', '-', '&', '_' and '^'");
    }

    ValidationResult::ok()
}

/// Validate the backend base URL from configuration.
pub fn validate_base_url(url: &str) -> ValidationResult {
    let url = url.trim();
    if url.is_empty() {
        return ValidationResult::err("API URL is required");
    }

    let Some(rest) = url
        .strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"))
    else {
        return ValidationResult::err("API URL must start with http:// or https://");
    };

    if rest.is_empty() || rest.starts_with('/') {
        return ValidationResult::err("API URL is missing a host");
    }

    ValidationResult::ok()
}
