//! # Dashboard Page
//!
//! NIFTY/SENSEX cards, market sentiment, the top-stocks table and the index
//! comparison chart. Refreshed every five minutes by the app.

use chrono::{Duration as ChronoDuration, Local, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shared::dto::{DashboardData, IndexSnapshot, Quote};
use shared::utils::display_symbol;

use super::{LoadCycle, LoadState, Outcome};
use crate::app::charts::{ChartBackend, ChartSlot, ChartSpec, Dataset};
use crate::app::view::{Cell, Row, ViewBinding};
use crate::core::error::ApiResult;
use crate::core::service::ApiService;
use crate::utils::format::{
    color_class_for_change, color_class_for_sentiment, format_currency, format_currency2,
    format_large_number, format_percentage2, format_plain, sentiment_label, PLACEHOLDER,
};

pub const CHART_CONTAINER: &str = "marketChart";
pub const TOP_STOCKS_TABLE: &str = "top-stocks-table";
pub const NO_STOCKS_MESSAGE: &str = "No stock data available";

const CONTENT: &[&str] = &["market-overview", "top-stocks-section", "chart-section"];
const TREND_DAYS: i64 = 7;
const NIFTY_FALLBACK: f64 = 18000.0;
const SENSEX_FALLBACK: f64 = 60000.0;

/// Column order of [`TOP_STOCKS_TABLE`] rows.
pub mod columns {
    pub const SYMBOL: usize = 0;
    pub const NAME: usize = 1;
    pub const PRICE: usize = 2;
    pub const CHANGE: usize = 3;
    pub const CHANGE_PERCENT: usize = 4;
    pub const VOLUME: usize = 5;
}

#[derive(Clone)]
pub struct DashboardPage {
    cycle: LoadCycle,
    chart: ChartSlot,
    rng: StdRng,
}

impl DashboardPage {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Deterministic chart jitter.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            cycle: LoadCycle::new(CONTENT),
            chart: ChartSlot::new(CHART_CONTAINER),
            rng,
        }
    }

    pub fn state(&self) -> LoadState {
        self.cycle.state()
    }

    pub fn begin_refresh(&mut self, view: &mut dyn ViewBinding) {
        self.cycle.begin(view);
    }

    pub fn apply(
        &mut self,
        result: ApiResult<DashboardData>,
        view: &mut dyn ViewBinding,
        charts: &mut dyn ChartBackend,
    ) {
        match result {
            Ok(data) => {
                render_overview(&data, view);
                render_top_stocks(data.top_stocks.as_deref(), view);
                let spec = index_comparison(&data, Local::now().date_naive(), &mut self.rng);
                self.chart.render(charts, spec);
                self.cycle.finish(view, Outcome::Content);
            }
            Err(e) => {
                tracing::error!(error = %e, kind = e.kind(), "Failed to load dashboard data");
                self.cycle.finish(view, Outcome::Error(Some(e.user_message())));
            }
        }
    }

    pub async fn refresh(
        &mut self,
        api: &dyn ApiService,
        view: &mut dyn ViewBinding,
        charts: &mut dyn ChartBackend,
    ) {
        self.begin_refresh(view);
        let result = api.dashboard_data().await;
        self.apply(result, view, charts);
    }
}

impl Default for DashboardPage {
    fn default() -> Self {
        Self::new()
    }
}

fn render_index(prefix: &str, index: Option<&IndexSnapshot>, view: &mut dyn ViewBinding) {
    let price_id = format!("{}-price", prefix);
    let change_id = format!("{}-change", prefix);
    match index {
        Some(index) => {
            view.set_text(&price_id, &format_currency(index.price, 0));
            view.set_styled(
                &change_id,
                &format_percentage2(index.change_percent),
                color_class_for_change(index.change).css(),
            );
        }
        None => {
            view.set_text(&price_id, PLACEHOLDER);
            view.set_styled(&change_id, PLACEHOLDER, color_class_for_change(None).css());
        }
    }
}

fn render_overview(data: &DashboardData, view: &mut dyn ViewBinding) {
    render_index("nifty", data.nifty.as_ref(), view);
    render_index("sensex", data.sensex.as_ref(), view);

    let score = data.sentiment.as_ref().and_then(|s| s.score);
    let label = data
        .sentiment
        .as_ref()
        .and_then(|s| s.label.clone())
        .unwrap_or_else(|| sentiment_label(score).to_string());
    view.set_text("sentiment-score", &format!("{}/100", format_plain(score)));
    view.set_styled(
        "sentiment-label",
        &label,
        &format!("badge {}", color_class_for_sentiment(score).css()),
    );

    let active = data.top_stocks.as_ref().map(|s| s.len()).unwrap_or(0);
    view.set_text("active-stocks", &active.to_string());
}

fn stock_row(stock: &Quote) -> Row {
    Row::new(vec![
        Cell::new(display_symbol(&stock.symbol)),
        Cell::new(stock.name.clone().unwrap_or_else(|| PLACEHOLDER.to_string())),
        Cell::new(format_currency2(stock.price)),
        Cell::classed(format_currency2(stock.change), color_class_for_change(stock.change).css()),
        Cell::classed(
            format_percentage2(stock.change_percent),
            color_class_for_change(stock.change_percent).css(),
        ),
        Cell::new(format_large_number(stock.volume)),
    ])
    .with_key(stock.symbol.clone())
}

fn render_top_stocks(stocks: Option<&[Quote]>, view: &mut dyn ViewBinding) {
    let rows = match stocks {
        Some(stocks) if !stocks.is_empty() => stocks.iter().map(stock_row).collect(),
        _ => vec![Row::message(NO_STOCKS_MESSAGE, "text-center text-muted")],
    };
    view.set_rows(TOP_STOCKS_TABLE, rows);
}

/// Seven-day synthetic trend around the current index levels.
///
/// Both series share the same ±1% jitter per day so they move together.
pub fn index_comparison(data: &DashboardData, today: NaiveDate, rng: &mut impl Rng) -> ChartSpec {
    let nifty = data.nifty.as_ref().and_then(|n| n.price).unwrap_or(NIFTY_FALLBACK);
    let sensex = data.sensex.as_ref().and_then(|s| s.price).unwrap_or(SENSEX_FALLBACK);

    let mut labels = Vec::with_capacity(TREND_DAYS as usize);
    let mut nifty_values = Vec::with_capacity(TREND_DAYS as usize);
    let mut sensex_values = Vec::with_capacity(TREND_DAYS as usize);

    for days_back in (0..TREND_DAYS).rev() {
        let day = today - ChronoDuration::days(days_back);
        labels.push(day.format("%d %b").to_string());

        let variation = (rng.random::<f64>() - 0.5) * 0.02;
        nifty_values.push(Some(nifty * (1.0 + variation)));
        sensex_values.push(Some(sensex * (1.0 + variation)));
    }

    ChartSpec {
        title: "Market Index Comparison".to_string(),
        labels,
        datasets: vec![
            Dataset::line("NIFTY 50", nifty_values, "primary"),
            Dataset::line("SENSEX", sensex_values, "success"),
        ],
        x_title: "Time".to_string(),
        left_title: "Price (₹)".to_string(),
        right_title: None,
    }
}
