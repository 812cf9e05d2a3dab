//! # Market Data Endpoints
//!
//! Dashboard snapshot, per-symbol quotes with history, and stock search.

use shared::dto::{DashboardData, Period, SearchResults, StockData};

use super::client::{decode, segment, ApiClient};
use crate::core::error::ApiResult;

/// `GET /api/dashboard-data`
#[tracing::instrument(skip(client))]
pub async fn dashboard_data(client: &ApiClient) -> ApiResult<DashboardData> {
    let value = client.call("/api/dashboard-data", &[]).await?;
    let data: DashboardData = decode(value)?;

    tracing::debug!(
        top_stocks = data.top_stocks.as_ref().map(|s| s.len()),
        "Dashboard data fetched"
    );
    Ok(data)
}

/// `GET /api/stock-data/{symbol}`, with `?period=` when a timeframe is given.
#[tracing::instrument(skip(client), fields(symbol = %symbol, period = ?period))]
pub async fn stock_data(
    client: &ApiClient,
    symbol: &str,
    period: Option<Period>,
) -> ApiResult<StockData> {
    let path = format!("/api/stock-data/{}", segment(symbol));
    let value = match period {
        Some(period) => client.call(&path, &[("period", period.as_str())]).await?,
        None => client.call(&path, &[]).await?,
    };
    let data: StockData = decode(value)?;

    tracing::debug!(
        points = data.historical.as_ref().map(|h| h.len()),
        "Stock data fetched"
    );
    Ok(data)
}

/// `GET /api/search-stocks?q=`
#[tracing::instrument(skip(client), fields(query = %query))]
pub async fn search_stocks(client: &ApiClient, query: &str) -> ApiResult<SearchResults> {
    let value = client.call("/api/search-stocks", &[("q", query)]).await?;
    let results: SearchResults = decode(value)?;

    tracing::debug!(matches = results.stocks.len(), "Search completed");
    Ok(results)
}
