//! # API Client
//!
//! Main HTTP client for backend API communication.
//!
//! Every endpoint goes through [`ApiClient::call`], which owns the error
//! mapping:
//!
//! | Condition | Result |
//! |---|---|
//! | request never completed | [`ApiError::Transport`] |
//! | non-2xx status | [`ApiError::HttpStatus`], message from the body's `error` |
//! | body is not JSON | [`ApiError::Decode`] |
//! | JSON with a non-null top-level `error` | [`ApiError::Application`] |

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::dto::{
    DashboardData, Envelope, Period, Prediction, PredictionAccuracy, PredictionHistoryEntry,
    SearchResults, StockData, TrendingTweets,
};
use std::borrow::Cow;
use std::time::{Duration, Instant};

use crate::core::error::{ApiError, ApiResult};
use crate::core::service::ApiService;
use crate::debug::config::{AppConfig, DEFAULT_API_URL};

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the StockSense backend.
///
/// Cheap to share behind an `Arc`; `reqwest::Client` pools connections
/// internally.
#[derive(Debug, Clone)]
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for `base_url` with the given request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.api_url.clone(), config.request_timeout)
    }

    /// Base URL for API requests, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for `path` with percent-encoded query parameters.
    pub(crate) fn url(&self, path: &str, query: &[(&str, &str)]) -> String {
        let mut url = format!("{}{}", self.base_url, path);
        for (i, (key, value)) in query.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(&urlencoding::encode(key));
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }
        url
    }

    /// `GET` a JSON document and apply the shared error mapping.
    #[tracing::instrument(skip(self, query), fields(path = %path))]
    pub async fn call(&self, path: &str, query: &[(&str, &str)]) -> ApiResult<Value> {
        let url = self.url(path, query);
        let start = Instant::now();
        tracing::debug!(url = %url, "Sending request");

        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::error!(
                error = %e,
                url = %url,
                duration_ms = start.elapsed().as_millis(),
                "Request network error"
            );
            ApiError::Transport(e.to_string())
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            tracing::error!(error = %e, url = %url, "Failed to read response body");
            ApiError::Transport(e.to_string())
        })?;
        let duration = start.elapsed();
        let parsed = serde_json::from_str::<Value>(&body);

        if !status.is_success() {
            let message = parsed.ok().as_ref().and_then(error_field);
            tracing::warn!(
                status = status.as_u16(),
                message = ?message,
                duration_ms = duration.as_millis(),
                "Request failed with HTTP status"
            );
            return Err(ApiError::HttpStatus {
                status: status.as_u16(),
                message,
            });
        }

        let value = parsed.map_err(|e| {
            tracing::error!(error = %e, url = %url, "Response parse error");
            ApiError::Decode(e.to_string())
        })?;

        if let Some(message) = error_field(&value) {
            tracing::warn!(
                message = %message,
                duration_ms = duration.as_millis(),
                "Backend reported an error"
            );
            return Err(ApiError::Application(message));
        }

        tracing::debug!(
            status = status.as_u16(),
            duration_ms = duration.as_millis(),
            "Request completed"
        );
        Ok(value)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL, DEFAULT_TIMEOUT)
    }
}

/// The top-level `error` field, when present and non-null.
fn error_field(value: &Value) -> Option<String> {
    match value.get("error")? {
        Value::Null => None,
        Value::String(message) => Some(message.clone()),
        other => Some(other.to_string()),
    }
}

/// Percent-encode one path segment.
pub(crate) fn segment(raw: &str) -> Cow<'_, str> {
    urlencoding::encode(raw)
}

/// Decode a JSON value into a DTO.
pub(crate) fn decode<T: DeserializeOwned>(value: Value) -> ApiResult<T> {
    serde_json::from_value(value).map_err(|e| {
        tracing::error!(error = %e, "Response did not match the expected shape");
        ApiError::Decode(e.to_string())
    })
}

/// Decode a `{success, data, error}` envelope and unwrap its data.
pub(crate) fn decode_envelope<T: DeserializeOwned>(value: Value) -> ApiResult<T> {
    let envelope: Envelope<T> = decode(value)?;
    match (envelope.data, envelope.error) {
        (Some(data), _) => Ok(data),
        (None, Some(error)) => Err(ApiError::Application(error)),
        (None, None) => Err(ApiError::Decode("response has no data".to_string())),
    }
}

#[async_trait::async_trait]
impl ApiService for ApiClient {
    async fn dashboard_data(&self) -> ApiResult<DashboardData> {
        super::market::dashboard_data(self).await
    }

    async fn stock_data(&self, symbol: &str, period: Option<Period>) -> ApiResult<StockData> {
        super::market::stock_data(self, symbol, period).await
    }

    async fn trending_tweets(&self) -> ApiResult<TrendingTweets> {
        super::sentiment::trending_tweets(self).await
    }

    async fn prediction(&self, symbol: &str) -> ApiResult<Prediction> {
        super::predictions::prediction(self, symbol).await
    }

    async fn search_stocks(&self, query: &str) -> ApiResult<SearchResults> {
        super::market::search_stocks(self, query).await
    }

    async fn prediction_accuracy(&self, symbol: &str) -> ApiResult<PredictionAccuracy> {
        super::predictions::prediction_accuracy(self, symbol).await
    }

    async fn prediction_history(&self, symbol: &str) -> ApiResult<Vec<PredictionHistoryEntry>> {
        super::predictions::prediction_history(self, symbol).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::api::testing::{refused_url, serve_once};

    #[test]
    fn test_url_encodes_query_and_trims_base() {
        let client = ApiClient::new("http://localhost:5000/", DEFAULT_TIMEOUT);
        assert_eq!(client.base_url(), "http://localhost:5000");
        assert_eq!(
            client.url("/api/search-stocks", &[("q", "M&M LTD")]),
            "http://localhost:5000/api/search-stocks?q=M%26M%20LTD"
        );
        assert_eq!(client.url("/api/dashboard-data", &[]), "http://localhost:5000/api/dashboard-data");
    }

    #[tokio::test]
    async fn test_call_returns_json_on_success() {
        let (base, server) = serve_once(200, r#"{"value": 42, "error": null}"#).await;
        let client = ApiClient::new(base, DEFAULT_TIMEOUT);

        let value = client.call("/api/ping", &[("a", "1")]).await.unwrap();
        assert_eq!(value["value"], 42);
        assert_eq!(server.await.unwrap(), "GET /api/ping?a=1 HTTP/1.1");
    }

    #[tokio::test]
    async fn test_http_status_uses_body_error() {
        let (base, _server) = serve_once(404, r#"{"error": "Stock not found"}"#).await;
        let client = ApiClient::new(base, DEFAULT_TIMEOUT);

        let err = client.call("/api/stock-data/XYZ", &[]).await.unwrap_err();
        assert_eq!(
            err,
            ApiError::HttpStatus {
                status: 404,
                message: Some("Stock not found".to_string())
            }
        );
        assert_eq!(err.user_message(), "Stock not found");
    }

    #[tokio::test]
    async fn test_http_status_without_json_body() {
        let (base, _server) = serve_once(500, "<html>boom</html>").await;
        let client = ApiClient::new(base, DEFAULT_TIMEOUT);

        let err = client.call("/api/dashboard-data", &[]).await.unwrap_err();
        assert_eq!(err, ApiError::HttpStatus { status: 500, message: None });
        assert_eq!(err.to_string(), "HTTP error! status: 500");
    }

    #[tokio::test]
    async fn test_application_error_on_success_status() {
        let (base, _server) = serve_once(200, r#"{"error": "Symbol not supported"}"#).await;
        let client = ApiClient::new(base, DEFAULT_TIMEOUT);

        let err = client.call("/api/predictions-data/FOO.NS", &[]).await.unwrap_err();
        assert_eq!(err, ApiError::Application("Symbol not supported".to_string()));
    }

    #[tokio::test]
    async fn test_invalid_json_is_decode_error() {
        let (base, _server) = serve_once(200, "not json").await;
        let client = ApiClient::new(base, DEFAULT_TIMEOUT);

        let err = client.call("/api/dashboard-data", &[]).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let client = ApiClient::new(refused_url().await, DEFAULT_TIMEOUT);

        let err = client.call("/api/dashboard-data", &[]).await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
        assert_eq!(err.user_message(), crate::core::error::GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn test_decode_envelope() {
        let ok: Vec<u32> = decode_envelope(serde_json::json!({"success": true, "data": [1, 2]})).unwrap();
        assert_eq!(ok, vec![1, 2]);

        let missing = decode_envelope::<Vec<u32>>(serde_json::json!({"success": true}));
        assert!(matches!(missing, Err(ApiError::Decode(_))));

        let wrong = decode::<Vec<u32>>(serde_json::json!({"data": 1}));
        assert!(matches!(wrong, Err(ApiError::Decode(_))));
    }
}
