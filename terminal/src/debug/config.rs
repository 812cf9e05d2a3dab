//! Application configuration from environment variables

use std::path::PathBuf;
use std::time::Duration;

use crate::core::error::{AppError, Result};
use crate::utils::validation::validate_base_url;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_LOG_LEVEL: &str = "terminal=info,warn";

/// Runtime configuration for the terminal
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Backend base URL, without the `/api` prefix
    pub api_url: String,
    /// Per-request timeout
    pub request_timeout: Duration,
    /// Dashboard auto-refresh period
    pub dashboard_refresh: Duration,
    /// Trending tweets auto-refresh period
    pub tweets_refresh: Duration,
    /// Quiet window before a typed search is sent
    pub search_debounce: Duration,
    /// Log directory (for rotation)
    pub log_dir: PathBuf,
    /// Log level filter used when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout: Duration::from_secs(10),
            dashboard_refresh: Duration::from_secs(5 * 60),
            tweets_refresh: Duration::from_secs(10 * 60),
            search_debounce: Duration::from_millis(300),
            log_dir: PathBuf::from("logs"),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unparseable values keep the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let secs = |key: &str, fallback: Duration| {
            lookup(key)
                .and_then(|v| v.trim().parse::<u64>().ok())
                .map(Duration::from_secs)
                .unwrap_or(fallback)
        };

        Self {
            api_url: lookup("STOCKSENSE_API_URL")
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.api_url),
            request_timeout: secs("STOCKSENSE_TIMEOUT_SECS", defaults.request_timeout),
            dashboard_refresh: secs("STOCKSENSE_DASHBOARD_REFRESH_SECS", defaults.dashboard_refresh),
            tweets_refresh: secs("STOCKSENSE_TWEETS_REFRESH_SECS", defaults.tweets_refresh),
            search_debounce: lookup("STOCKSENSE_SEARCH_DEBOUNCE_MS")
                .and_then(|v| v.trim().parse::<u64>().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.search_debounce),
            log_dir: lookup("STOCKSENSE_LOG_DIR")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            log_level: lookup("RUST_LOG")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.log_level),
        }
    }

    /// Reject configurations the app cannot run with.
    pub fn validate(&self) -> Result<()> {
        let url = validate_base_url(&self.api_url);
        if let Some(error) = url.error {
            return Err(AppError::Config(format!("{}: {}", error, self.api_url)));
        }

        for (name, value) in [
            ("request timeout", self.request_timeout),
            ("dashboard refresh", self.dashboard_refresh),
            ("tweets refresh", self.tweets_refresh),
        ] {
            if value.is_zero() {
                return Err(AppError::Config(format!("{} must be greater than zero", name)));
            }
        }

        Ok(())
    }

    /// Check if debug logging is enabled
    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.log_level.contains("trace")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api_url, "http://127.0.0.1:5000");
        assert_eq!(config.dashboard_refresh, Duration::from_secs(300));
        assert_eq!(config.tweets_refresh, Duration::from_secs(600));
        assert_eq!(config.search_debounce, Duration::from_millis(300));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides_and_bad_values() {
        let config = AppConfig::from_lookup(lookup(&[
            ("STOCKSENSE_API_URL", "https://api.stocksense.in/"),
            ("STOCKSENSE_TIMEOUT_SECS", "30"),
            ("STOCKSENSE_DASHBOARD_REFRESH_SECS", "soon"),
            ("STOCKSENSE_SEARCH_DEBOUNCE_MS", "150"),
            ("STOCKSENSE_LOG_DIR", "/tmp/stocksense"),
            ("RUST_LOG", "terminal=debug"),
        ]));

        assert_eq!(config.api_url, "https://api.stocksense.in");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.dashboard_refresh, Duration::from_secs(300));
        assert_eq!(config.search_debounce, Duration::from_millis(150));
        assert_eq!(config.log_dir, PathBuf::from("/tmp/stocksense"));
        assert!(config.is_debug_enabled());
    }

    #[test]
    fn test_validate_rejects_bad_config() {
        let config = AppConfig {
            api_url: "localhost:5000".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(AppError::Config(_))));

        let config = AppConfig {
            tweets_refresh: Duration::ZERO,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }
}
