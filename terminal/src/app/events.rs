//! # Application Events
//!
//! Results sent from background tasks to the UI thread.

use shared::dto::{
    DashboardData, Period, Prediction, PredictionAccuracy, PredictionHistoryEntry, SearchResults,
    StockData, TrendingTweets,
};

use crate::core::error::ApiResult;

/// Async task results sent to main thread
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Dashboard snapshot received
    DashboardLoaded(ApiResult<DashboardData>),
    /// Full stock-data load for the market-data page
    StockDataLoaded {
        symbol: String,
        result: ApiResult<StockData>,
    },
    /// Chart-only reload after a timeframe change
    TimeframeLoaded {
        symbol: String,
        period: Period,
        result: ApiResult<StockData>,
    },
    /// Search results for a debounced or submitted query
    SearchCompleted {
        query: String,
        result: ApiResult<SearchResults>,
    },
    /// Prediction received
    PredictionLoaded {
        symbol: String,
        result: ApiResult<Prediction>,
    },
    /// Accuracy record for the last prediction
    AccuracyLoaded {
        symbol: String,
        result: ApiResult<PredictionAccuracy>,
    },
    /// History for the last prediction
    HistoryLoaded {
        symbol: String,
        result: ApiResult<Vec<PredictionHistoryEntry>>,
    },
    /// Trending tweets received
    TweetsLoaded(ApiResult<TrendingTweets>),
}

impl AppEvent {
    /// Short name for log fields.
    pub fn name(&self) -> &'static str {
        match self {
            AppEvent::DashboardLoaded(_) => "dashboard_loaded",
            AppEvent::StockDataLoaded { .. } => "stock_data_loaded",
            AppEvent::TimeframeLoaded { .. } => "timeframe_loaded",
            AppEvent::SearchCompleted { .. } => "search_completed",
            AppEvent::PredictionLoaded { .. } => "prediction_loaded",
            AppEvent::AccuracyLoaded { .. } => "accuracy_loaded",
            AppEvent::HistoryLoaded { .. } => "history_loaded",
            AppEvent::TweetsLoaded(_) => "tweets_loaded",
        }
    }
}
