//! # Market Data Tasks
//!
//! Dashboard, stock data and search fetches.

use async_channel::Sender;
use shared::dto::Period;
use std::sync::Arc;
use tokio::spawn;

use super::deliver;
use crate::app::events::AppEvent;
use crate::core::service::ApiService;

/// Fetch the dashboard snapshot.
pub(crate) fn fetch_dashboard(api: Arc<dyn ApiService>, event_tx: Sender<AppEvent>) {
    spawn(async move {
        let result = api.dashboard_data().await;
        if let Err(e) = &result {
            tracing::debug!(error = %e, "Dashboard fetch failed");
        }
        deliver(&event_tx, AppEvent::DashboardLoaded(result)).await;
    });
}

/// Fetch quote and history for the market-data page.
pub(crate) fn fetch_stock_data(api: Arc<dyn ApiService>, event_tx: Sender<AppEvent>, symbol: String) {
    spawn(async move {
        let result = api.stock_data(&symbol, None).await;
        tracing::debug!(symbol = %symbol, ok = result.is_ok(), "Stock data fetch finished");
        deliver(&event_tx, AppEvent::StockDataLoaded { symbol, result }).await;
    });
}

/// Fetch history for a new timeframe.
pub(crate) fn fetch_timeframe(
    api: Arc<dyn ApiService>,
    event_tx: Sender<AppEvent>,
    symbol: String,
    period: Period,
) {
    spawn(async move {
        let result = api.stock_data(&symbol, Some(period)).await;
        tracing::debug!(symbol = %symbol, period = %period, ok = result.is_ok(), "Timeframe fetch finished");
        deliver(&event_tx, AppEvent::TimeframeLoaded { symbol, period, result }).await;
    });
}

/// Run a stock search.
pub(crate) fn search_stocks(api: Arc<dyn ApiService>, event_tx: Sender<AppEvent>, query: String) {
    spawn(async move {
        let result = api.search_stocks(&query).await;
        deliver(&event_tx, AppEvent::SearchCompleted { query, result }).await;
    });
}
