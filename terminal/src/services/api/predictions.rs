//! # Prediction Endpoints
//!
//! Model predictions per symbol, plus the accuracy and history records kept
//! by the backend database.

use shared::dto::{flatten_prediction, Prediction, PredictionAccuracy, PredictionHistoryEntry};

use super::client::{decode, decode_envelope, segment, ApiClient};
use crate::core::error::ApiResult;

/// `GET /api/predictions-data/{symbol}`
///
/// Older backends nest the model output under `prediction`; both shapes
/// decode to the same [`Prediction`].
#[tracing::instrument(skip(client), fields(symbol = %symbol))]
pub async fn prediction(client: &ApiClient, symbol: &str) -> ApiResult<Prediction> {
    let path = format!("/api/predictions-data/{}", segment(symbol));
    let value = client.call(&path, &[]).await?;
    let prediction: Prediction = decode(flatten_prediction(value))?;

    tracing::debug!(
        recommendation = %prediction.recommendation,
        confidence = ?prediction.confidence,
        "Prediction fetched"
    );
    Ok(prediction)
}

/// `GET /api/prediction-accuracy/{symbol}`
#[tracing::instrument(skip(client), fields(symbol = %symbol))]
pub async fn prediction_accuracy(client: &ApiClient, symbol: &str) -> ApiResult<PredictionAccuracy> {
    let path = format!("/api/prediction-accuracy/{}", segment(symbol));
    let value = client.call(&path, &[]).await?;
    decode_envelope(value)
}

/// `GET /api/prediction-history/{symbol}`
#[tracing::instrument(skip(client), fields(symbol = %symbol))]
pub async fn prediction_history(
    client: &ApiClient,
    symbol: &str,
) -> ApiResult<Vec<PredictionHistoryEntry>> {
    let path = format!("/api/prediction-history/{}", segment(symbol));
    let value = client.call(&path, &[]).await?;
    let history: Vec<PredictionHistoryEntry> = decode_envelope(value)?;

    tracing::debug!(entries = history.len(), "Prediction history fetched");
    Ok(history)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ApiError;
    use crate::services::api::client::DEFAULT_TIMEOUT;
    use crate::services::api::testing::serve_once;
    use shared::dto::Recommendation;

    #[tokio::test]
    async fn test_prediction_flattens_nested_payload() {
        let body = r#"{
            "symbol": "TCS.NS",
            "prediction": {"current_price": 3500, "predicted_price": 3600,
                           "recommendation": "BUY", "confidence": 78.5},
            "technical_indicators": {"rsi": 28.4}
        }"#;
        let (base, server) = serve_once(200, body).await;
        let client = ApiClient::new(base, DEFAULT_TIMEOUT);

        let p = prediction(&client, "TCS.NS").await.unwrap();
        assert_eq!(p.current_price, Some(3500.0));
        assert_eq!(p.recommendation, Recommendation::Buy);
        assert_eq!(p.technical_indicators.and_then(|t| t.rsi), Some(28.4));
        assert_eq!(server.await.unwrap(), "GET /api/predictions-data/TCS.NS HTTP/1.1");
    }

    #[tokio::test]
    async fn test_accuracy_unwraps_envelope() {
        let body = r#"{"success": true, "data": {"accuracy_percent": 64.2,
                        "total_predictions": 50, "accurate_predictions": 32, "period_days": 30}}"#;
        let (base, server) = serve_once(200, body).await;
        let client = ApiClient::new(base, DEFAULT_TIMEOUT);

        let accuracy = prediction_accuracy(&client, "INFY.NS").await.unwrap();
        assert_eq!(accuracy.accuracy_percent, Some(64.2));
        assert_eq!(accuracy.total_predictions, Some(50));
        assert_eq!(server.await.unwrap(), "GET /api/prediction-accuracy/INFY.NS HTTP/1.1");
    }

    #[tokio::test]
    async fn test_history_error_envelope() {
        let body = r#"{"success": false, "error": "Database unavailable"}"#;
        let (base, _server) = serve_once(503, body).await;
        let client = ApiClient::new(base, DEFAULT_TIMEOUT);

        let err = prediction_history(&client, "INFY.NS").await.unwrap_err();
        assert_eq!(
            err,
            ApiError::HttpStatus {
                status: 503,
                message: Some("Database unavailable".to_string())
            }
        );
    }
}
