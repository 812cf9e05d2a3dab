//! # Market Data Page
//!
//! Detail view for one symbol: quote, day range, P/E and a price/volume
//! chart with selectable timeframe.
//!
//! Loading a symbol always resets the timeframe to [`Period::OneMonth`].
//! Changing the timeframe only redraws the chart; its failures are logged
//! and never disturb what is already on screen.

use chrono::Local;
use shared::dto::{HistoricalPoint, Period, Quote, StockData};
use shared::utils::display_symbol;

use super::{LoadCycle, LoadState, Outcome};
use crate::app::charts::{Axis, ChartBackend, ChartSlot, ChartSpec, Dataset};
use crate::app::search::SEARCH_RESULTS_ID;
use crate::app::view::ViewBinding;
use crate::core::error::ApiResult;
use crate::core::service::ApiService;
use crate::utils::format::{
    color_class_for_change, format_chart_label, format_clock_time, format_currency2,
    format_large_number, format_percentage2, ChangeClass,
};

pub const CHART_CONTAINER: &str = "priceChart";

const CONTENT: &[&str] = &["stock-details", "chart-section"];

/// A stock-data call the app should issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockRequest {
    pub symbol: String,
    pub period: Option<Period>,
}

#[derive(Clone)]
pub struct MarketDataPage {
    cycle: LoadCycle,
    chart: ChartSlot,
    symbol: Option<String>,
    period: Period,
}

impl MarketDataPage {
    pub fn new() -> Self {
        Self {
            cycle: LoadCycle::new(CONTENT),
            chart: ChartSlot::new(CHART_CONTAINER),
            symbol: None,
            period: Period::default(),
        }
    }

    pub fn state(&self) -> LoadState {
        self.cycle.state()
    }

    pub fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    pub fn period(&self) -> Period {
        self.period
    }

    /// Make `symbol` current and enter the loading state.
    pub fn begin_load(&mut self, symbol: &str, view: &mut dyn ViewBinding) -> StockRequest {
        let symbol = symbol.trim().to_string();
        self.symbol = Some(symbol.clone());
        self.period = Period::default();

        view.set_rows(SEARCH_RESULTS_ID, Vec::new());
        self.cycle.begin(view);

        StockRequest {
            symbol,
            period: None,
        }
    }

    pub fn apply(
        &mut self,
        symbol: &str,
        result: ApiResult<StockData>,
        view: &mut dyn ViewBinding,
        charts: &mut dyn ChartBackend,
    ) {
        match result {
            Ok(data) => {
                if let Some(current) = data.current.as_ref() {
                    render_details(current, view);
                }
                self.chart
                    .render(charts, price_volume(symbol, data.historical.as_deref().unwrap_or(&[])));
                self.cycle.finish(view, Outcome::Content);
            }
            Err(e) => {
                tracing::error!(symbol = %symbol, error = %e, kind = e.kind(), "Failed to load stock data");
                self.cycle.finish(
                    view,
                    Outcome::Error(Some(format!(
                        "Failed to load data for {}. Please check the symbol and try again.",
                        symbol
                    ))),
                );
            }
        }
    }

    pub async fn load_symbol(
        &mut self,
        api: &dyn ApiService,
        symbol: &str,
        view: &mut dyn ViewBinding,
        charts: &mut dyn ChartBackend,
    ) {
        let request = self.begin_load(symbol, view);
        let result = api.stock_data(&request.symbol, request.period).await;
        self.apply(&request.symbol, result, view, charts);
    }

    /// Switch timeframe. `None` when nothing is loaded or the period is
    /// already active.
    pub fn begin_timeframe(&mut self, period: Period) -> Option<StockRequest> {
        let symbol = self.symbol.clone()?;
        if self.period == period {
            return None;
        }
        self.period = period;
        Some(StockRequest {
            symbol,
            period: Some(period),
        })
    }

    /// Redraw the chart for a timeframe change. Responses for a symbol or
    /// period that is no longer selected are dropped.
    pub fn apply_timeframe(
        &mut self,
        symbol: &str,
        period: Period,
        result: ApiResult<StockData>,
        charts: &mut dyn ChartBackend,
    ) {
        if self.symbol.as_deref() != Some(symbol) || self.period != period {
            tracing::debug!(symbol = %symbol, period = %period, "Ignoring stale timeframe data");
            return;
        }
        match result {
            Ok(data) => {
                self.chart
                    .render(charts, price_volume(symbol, data.historical.as_deref().unwrap_or(&[])));
            }
            Err(e) => {
                tracing::warn!(
                    symbol = %symbol,
                    period = %period,
                    error = %e,
                    "Failed to load data for timeframe"
                );
            }
        }
    }

    pub async fn change_timeframe(
        &mut self,
        api: &dyn ApiService,
        period: Period,
        charts: &mut dyn ChartBackend,
    ) {
        if let Some(request) = self.begin_timeframe(period) {
            let result = api.stock_data(&request.symbol, request.period).await;
            self.apply_timeframe(&request.symbol, period, result, charts);
        }
    }

    /// Symbol to reload on retry.
    pub fn retry_target(&self) -> Option<String> {
        self.symbol.clone()
    }

    pub async fn retry(
        &mut self,
        api: &dyn ApiService,
        view: &mut dyn ViewBinding,
        charts: &mut dyn ChartBackend,
    ) {
        if let Some(symbol) = self.retry_target() {
            self.load_symbol(api, &symbol, view, charts).await;
        }
    }
}

impl Default for MarketDataPage {
    fn default() -> Self {
        Self::new()
    }
}

fn render_details(stock: &Quote, view: &mut dyn ViewBinding) {
    let display = display_symbol(&stock.symbol);
    let title = match stock.name.as_deref() {
        Some(name) => format!("{} - {}", display, name),
        None => display,
    };
    view.set_text("stock-title", &title);
    view.set_text(
        "last-updated",
        &format!("Last updated: {}", format_clock_time(Local::now())),
    );

    view.set_text("current-price", &format_currency2(stock.price));
    view.set_styled(
        "price-change",
        &format!(
            "{} ({})",
            format_currency2(stock.change),
            format_percentage2(stock.change_percent)
        ),
        color_class_for_change(stock.change).css(),
    );

    view.set_text("day-low", &format_currency2(stock.day_low));
    view.set_text("day-high", &format_currency2(stock.day_high));
    view.set_text("volume", &format_large_number(stock.volume));
    let pe = match stock.pe_ratio {
        Some(pe) if pe != 0.0 && pe.is_finite() => format!("{:.2}", pe),
        _ => "N/A".to_string(),
    };
    view.set_text("pe-ratio", &pe);
}

/// Close-price line on the left axis, volume bars on the right.
pub fn price_volume(symbol: &str, history: &[HistoricalPoint]) -> ChartSpec {
    let labels = history.iter().map(|p| format_chart_label(&p.date)).collect();
    let prices: Vec<Option<f64>> = history.iter().map(|p| p.close).collect();
    let volumes: Vec<Option<f64>> = history.iter().map(|p| p.volume).collect();

    let first = prices.iter().flatten().next();
    let last = prices.iter().flatten().last();
    let trend = match (first, last) {
        (Some(first), Some(last)) if last >= first => ChangeClass::Positive,
        _ => ChangeClass::Negative,
    };

    ChartSpec {
        title: format!("{} - Price & Volume Chart", display_symbol(symbol)),
        labels,
        datasets: vec![
            Dataset::line("Close Price", prices, trend.css()),
            Dataset::bar("Volume", volumes, "muted").on_axis(Axis::Right),
        ],
        x_title: "Date".to_string(),
        left_title: "Price (₹)".to_string(),
        right_title: Some("Volume".to_string()),
    }
}

impl std::fmt::Debug for MarketDataPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarketDataPage")
            .field("state", &self.cycle.state())
            .field("symbol", &self.symbol)
            .field("period", &self.period)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::charts::PlotRegistry;
    use crate::app::pages::{ERROR_ID, ERROR_MESSAGE_ID, LOADING_ID};
    use crate::app::view::{Row, ViewModel};
    use crate::core::error::ApiError;
    use crate::core::service::mock::MockApi;

    fn stock() -> StockData {
        serde_json::from_str(
            r#"{
                "current": {"symbol": "TCS.NS", "name": "Tata Consultancy", "price": 3500,
                            "change": 35, "change_percent": 1.01, "day_low": 3450, "day_high": 3520,
                            "volume": 2500000, "pe_ratio": 28.456},
                "historical": [
                    {"date": "2024-01-02", "close": 3400, "volume": 1000000},
                    {"date": "2024-01-03", "close": 3450, "volume": 1100000},
                    {"date": "2024-01-04", "close": 3500, "volume": 1200000}
                ]
            }"#,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_load_symbol_fills_details_and_chart() {
        let api = MockApi {
            stock: Ok(stock()),
            ..Default::default()
        };
        let mut page = MarketDataPage::new();
        let mut view = ViewModel::default();
        let mut charts = PlotRegistry::default();
        view.set_rows(SEARCH_RESULTS_ID, vec![Row::message("stale", "")]);

        page.load_symbol(&api, "TCS.NS", &mut view, &mut charts).await;

        assert_eq!(page.state(), LoadState::Content);
        assert_eq!(page.symbol(), Some("TCS.NS"));
        assert_eq!(api.calls(), vec!["stock_data TCS.NS -"]);
        assert!(view.rows(SEARCH_RESULTS_ID).is_empty());
        assert_eq!(view.text("stock-title"), Some("TCS - Tata Consultancy"));
        assert_eq!(view.text("current-price"), Some("₹3,500.00"));
        assert_eq!(view.text("price-change"), Some("₹35.00 (+1.01%)"));
        assert_eq!(view.class("price-change"), Some("price-positive"));
        assert_eq!(view.text("day-low"), Some("₹3,450.00"));
        assert_eq!(view.text("volume"), Some("2.50M"));
        assert_eq!(view.text("pe-ratio"), Some("28.46"));
        assert!(view.text("last-updated").unwrap().starts_with("Last updated: "));

        let chart = charts.chart_for(CHART_CONTAINER).unwrap();
        assert_eq!(chart.title, "TCS - Price & Volume Chart");
        assert!(chart.is_dual_axis());
        assert_eq!(chart.right_title.as_deref(), Some("Volume"));
        assert_eq!(chart.datasets[0].color_class, "price-positive");
        assert_eq!(chart.labels[0], "02 Jan");
    }

    #[tokio::test]
    async fn test_load_failure_names_symbol() {
        let api = MockApi {
            stock: Err(ApiError::HttpStatus {
                status: 404,
                message: None,
            }),
            ..Default::default()
        };
        let mut page = MarketDataPage::new();
        let mut view = ViewModel::default();
        let mut charts = PlotRegistry::default();

        page.load_symbol(&api, "XYZ.NS", &mut view, &mut charts).await;

        assert_eq!(page.state(), LoadState::Error);
        assert!(!view.is_visible(LOADING_ID));
        assert!(view.is_visible(ERROR_ID));
        assert_eq!(
            view.text(ERROR_MESSAGE_ID),
            Some("Failed to load data for XYZ.NS. Please check the symbol and try again.")
        );
    }

    #[tokio::test]
    async fn test_timeframe_change_rules() {
        let api = MockApi {
            stock: Ok(stock()),
            ..Default::default()
        };
        let mut page = MarketDataPage::new();
        let mut view = ViewModel::default();
        let mut charts = PlotRegistry::default();

        // Nothing loaded yet.
        page.change_timeframe(&api, Period::OneYear, &mut charts).await;
        assert!(api.calls().is_empty());

        page.load_symbol(&api, "TCS.NS", &mut view, &mut charts).await;
        // Already on the default period.
        page.change_timeframe(&api, Period::OneMonth, &mut charts).await;
        page.change_timeframe(&api, Period::ThreeMonths, &mut charts).await;

        assert_eq!(api.calls(), vec!["stock_data TCS.NS -", "stock_data TCS.NS 3mo"]);
        assert_eq!(page.period(), Period::ThreeMonths);
        assert_eq!(charts.live_count(), 1);

        // A new symbol resets the timeframe.
        page.begin_load("INFY.NS", &mut view);
        assert_eq!(page.period(), Period::OneMonth);
    }

    #[tokio::test]
    async fn test_timeframe_failure_keeps_page() {
        let mut page = MarketDataPage::new();
        let mut view = ViewModel::default();
        let mut charts = PlotRegistry::default();
        let ok = MockApi {
            stock: Ok(stock()),
            ..Default::default()
        };
        page.load_symbol(&ok, "TCS.NS", &mut view, &mut charts).await;
        let handle = charts.chart_for(CHART_CONTAINER).cloned();

        let failing = MockApi::default();
        page.change_timeframe(&failing, Period::OneYear, &mut charts).await;

        assert_eq!(page.state(), LoadState::Content);
        assert!(!view.is_visible(ERROR_ID));
        assert_eq!(charts.chart_for(CHART_CONTAINER).cloned(), handle);
    }

    #[test]
    fn test_stale_timeframe_data_is_ignored() {
        let mut page = MarketDataPage::new();
        let mut view = ViewModel::default();
        let mut charts = PlotRegistry::default();
        let title = |charts: &PlotRegistry| charts.chart_for(CHART_CONTAINER).map(|c| c.title.clone());
        page.begin_load("TCS.NS", &mut view);
        page.apply("TCS.NS", Ok(stock()), &mut view, &mut charts);
        page.begin_timeframe(Period::ThreeMonths);

        // INFY replaces TCS before the TCS 3mo response lands.
        page.begin_load("INFY.NS", &mut view);
        let mut infy = stock();
        infy.historical = Some(vec![HistoricalPoint {
            date: "2024-01-02".to_string(),
            close: Some(1500.0),
            volume: Some(10.0),
        }]);
        page.apply_timeframe("TCS.NS", Period::ThreeMonths, Ok(stock()), &mut charts);
        assert_eq!(title(&charts).as_deref(), Some("TCS - Price & Volume Chart"));
        assert_eq!(charts.chart_for(CHART_CONTAINER).unwrap().labels.len(), 3);

        // Superseded period for the current symbol.
        page.begin_timeframe(Period::OneYear);
        page.apply_timeframe("INFY.NS", Period::OneMonth, Ok(infy.clone()), &mut charts);
        assert_eq!(title(&charts).as_deref(), Some("TCS - Price & Volume Chart"));

        page.apply_timeframe("INFY.NS", Period::OneYear, Ok(infy), &mut charts);
        assert_eq!(charts.live_count(), 1);
        assert_eq!(title(&charts).as_deref(), Some("INFY - Price & Volume Chart"));
        assert_eq!(charts.chart_for(CHART_CONTAINER).unwrap().labels.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_history_removes_chart() {
        let mut page = MarketDataPage::new();
        let mut view = ViewModel::default();
        let mut charts = PlotRegistry::default();
        page.begin_load("TCS.NS", &mut view);
        page.apply("TCS.NS", Ok(stock()), &mut view, &mut charts);
        assert_eq!(charts.live_count(), 1);

        let bare = StockData {
            current: stock().current,
            historical: None,
        };
        page.apply("TCS.NS", Ok(bare), &mut view, &mut charts);
        assert_eq!(charts.live_count(), 0);
        assert_eq!(page.state(), LoadState::Content);
    }

    #[tokio::test]
    async fn test_retry_reloads_current_symbol() {
        let api = MockApi::default();
        let mut page = MarketDataPage::new();
        let mut view = ViewModel::default();
        let mut charts = PlotRegistry::default();

        page.retry(&api, &mut view, &mut charts).await;
        assert!(api.calls().is_empty());

        page.load_symbol(&api, "SBIN.NS", &mut view, &mut charts).await;
        page.retry(&api, &mut view, &mut charts).await;
        assert_eq!(api.count("stock_data SBIN.NS"), 2);
    }

    #[test]
    fn test_downtrend_line_is_negative() {
        let history = vec![
            HistoricalPoint {
                date: "2024-01-02".to_string(),
                close: Some(110.0),
                volume: None,
            },
            HistoricalPoint {
                date: "2024-01-03".to_string(),
                close: Some(100.0),
                volume: Some(5.0),
            },
        ];
        let spec = price_volume("SBIN.NS", &history);
        assert_eq!(spec.datasets[0].color_class, "price-negative");
        assert_eq!(spec.title, "SBIN - Price & Volume Chart");
        assert!(price_volume("SBIN.NS", &[]).is_empty());
    }
}
