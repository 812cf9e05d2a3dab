//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.

use async_trait::async_trait;
use shared::dto::{
    DashboardData, Period, Prediction, PredictionAccuracy, PredictionHistoryEntry, SearchResults,
    StockData, TrendingTweets,
};

use super::error::ApiResult;

/// Every backend endpoint the terminal consumes.
///
/// [`ApiClient`](crate::services::api::ApiClient) is the production
/// implementation; page controllers and tasks only ever see this trait.
#[async_trait]
pub trait ApiService: Send + Sync {
    /// `GET /api/dashboard-data`
    async fn dashboard_data(&self) -> ApiResult<DashboardData>;

    /// `GET /api/stock-data/{symbol}`, with `?period=` when given.
    async fn stock_data(&self, symbol: &str, period: Option<Period>) -> ApiResult<StockData>;

    /// `GET /api/trending-tweets-data`
    async fn trending_tweets(&self) -> ApiResult<TrendingTweets>;

    /// `GET /api/predictions-data/{symbol}`
    async fn prediction(&self, symbol: &str) -> ApiResult<Prediction>;

    /// `GET /api/search-stocks?q=`
    async fn search_stocks(&self, query: &str) -> ApiResult<SearchResults>;

    /// `GET /api/prediction-accuracy/{symbol}`
    async fn prediction_accuracy(&self, symbol: &str) -> ApiResult<PredictionAccuracy>;

    /// `GET /api/prediction-history/{symbol}`
    async fn prediction_history(&self, symbol: &str) -> ApiResult<Vec<PredictionHistoryEntry>>;
}
