//! # Market Data Transfer Objects
//!
//! Quotes, index snapshots and historical price points.
//!
//! ## Endpoints Using These DTOs
//!
//! - `GET /api/dashboard-data` - [`DashboardData`]
//! - `GET /api/stock-data/{symbol}?period=1mo` - [`StockData`]
//! - `GET /api/search-stocks?q=TAT` - [`SearchResults`]
//!
//! ## Example Quote
//!
//! ```json
//! {
//!   "symbol": "TCS.NS",
//!   "name": "Tata Consultancy",
//!   "price": 3500.0,
//!   "change": -20.0,
//!   "change_percent": -0.57,
//!   "volume": 1200000
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::lenient;

/// Snapshot of a tradable instrument's price and volume state.
///
/// Every numeric field may be absent; the terminal renders a placeholder
/// for anything missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Lookup key, may carry an exchange suffix (`TCS.NS`, `RELIANCE.BO`).
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub symbol: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::f64")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "lenient::f64")]
    pub change: Option<f64>,
    #[serde(default, deserialize_with = "lenient::f64")]
    pub change_percent: Option<f64>,
    #[serde(default, deserialize_with = "lenient::f64")]
    pub day_low: Option<f64>,
    #[serde(default, deserialize_with = "lenient::f64")]
    pub day_high: Option<f64>,
    #[serde(default, deserialize_with = "lenient::f64")]
    pub volume: Option<f64>,
    #[serde(default, deserialize_with = "lenient::f64")]
    pub pe_ratio: Option<f64>,
    #[serde(default, deserialize_with = "lenient::f64")]
    pub market_cap: Option<f64>,
}

/// Price summary of a market index (NIFTY 50, SENSEX).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexSnapshot {
    #[serde(default, deserialize_with = "lenient::f64")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "lenient::f64")]
    pub change: Option<f64>,
    #[serde(default, deserialize_with = "lenient::f64")]
    pub change_percent: Option<f64>,
}

/// Aggregate market mood shown on the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketSentiment {
    #[serde(default, deserialize_with = "lenient::f64")]
    pub score: Option<f64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub label: Option<String>,
}

/// Response of `GET /api/dashboard-data`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    #[serde(default)]
    pub nifty: Option<IndexSnapshot>,
    #[serde(default)]
    pub sensex: Option<IndexSnapshot>,
    #[serde(default)]
    pub sentiment: Option<MarketSentiment>,
    /// `None` when the backend omitted the list entirely.
    #[serde(default)]
    pub top_stocks: Option<Vec<Quote>>,
}

/// One closing price in a historical series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPoint {
    /// `YYYY-MM-DD` or a full ISO timestamp.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub date: String,
    #[serde(default, deserialize_with = "lenient::f64")]
    pub close: Option<f64>,
    #[serde(default, deserialize_with = "lenient::f64")]
    pub volume: Option<f64>,
}

/// Response of `GET /api/stock-data/{symbol}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StockData {
    #[serde(default)]
    pub current: Option<Quote>,
    /// Ordered by ascending date.
    #[serde(default)]
    pub historical: Option<Vec<HistoricalPoint>>,
}

/// Response of `GET /api/search-stocks?q=...`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub stocks: Vec<Quote>,
}

/// Historical window requested from the stock-data endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "1d")]
    OneDay,
    #[serde(rename = "5d")]
    FiveDays,
    #[default]
    #[serde(rename = "1mo")]
    OneMonth,
    #[serde(rename = "3mo")]
    ThreeMonths,
    #[serde(rename = "6mo")]
    SixMonths,
    #[serde(rename = "1y")]
    OneYear,
}

impl Period {
    /// All periods in selector order.
    pub fn all() -> &'static [Period] {
        &[
            Period::OneDay,
            Period::FiveDays,
            Period::OneMonth,
            Period::ThreeMonths,
            Period::SixMonths,
            Period::OneYear,
        ]
    }

    /// Query-string value understood by the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::OneDay => "1d",
            Period::FiveDays => "5d",
            Period::OneMonth => "1mo",
            Period::ThreeMonths => "3mo",
            Period::SixMonths => "6mo",
            Period::OneYear => "1y",
        }
    }

    /// Button caption.
    pub fn label(&self) -> &'static str {
        match self {
            Period::OneDay => "1D",
            Period::FiveDays => "5D",
            Period::OneMonth => "1M",
            Period::ThreeMonths => "3M",
            Period::SixMonths => "6M",
            Period::OneYear => "1Y",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Period::all()
            .iter()
            .copied()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown period: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_decodes_partial_payload() {
        let json = r#"{
            "nifty": {"price": 18000, "change": 50, "change_percent": 0.28},
            "top_stocks": [{"symbol": "TCS.NS", "name": "Tata Consultancy", "price": 3500,
                            "change": -20, "change_percent": -0.57, "volume": 1200000}]
        }"#;
        let data: DashboardData = serde_json::from_str(json).unwrap();

        assert_eq!(data.nifty.as_ref().and_then(|n| n.price), Some(18000.0));
        assert!(data.sensex.is_none());
        assert!(data.sentiment.is_none());
        let stocks = data.top_stocks.unwrap();
        assert_eq!(stocks.len(), 1);
        assert_eq!(stocks[0].volume, Some(1_200_000.0));
        assert_eq!(stocks[0].pe_ratio, None);
    }

    #[test]
    fn test_quote_tolerates_bad_fields() {
        let quote: Quote =
            serde_json::from_str(r#"{"symbol": "INFY.NS", "price": null, "volume": "abc", "pe_ratio": "24.1"}"#)
                .unwrap();
        assert_eq!(quote.price, None);
        assert_eq!(quote.volume, None);
        assert_eq!(quote.pe_ratio, Some(24.1));
        assert_eq!(quote.name, None);
    }

    #[test]
    fn test_search_results_treat_null_as_empty() {
        let results: SearchResults = serde_json::from_str(r#"{"stocks":null}"#).unwrap();
        assert!(results.stocks.is_empty());
        let results: SearchResults = serde_json::from_str("{}").unwrap();
        assert!(results.stocks.is_empty());
    }

    #[test]
    fn test_period_round_trip_strings() {
        assert_eq!(Period::default(), Period::OneMonth);
        assert_eq!("1mo".parse::<Period>().unwrap(), Period::OneMonth);
        assert_eq!("1Y".parse::<Period>().unwrap(), Period::OneYear);
        assert!("2w".parse::<Period>().is_err());
        assert_eq!(serde_json::to_string(&Period::ThreeMonths).unwrap(), "\"3mo\"");
    }
}
