//! # Application Orchestrator
//!
//! The main [`App`] struct coordinates the UI thread, the async fetch tasks
//! and the page controllers.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Main Thread (egui)                       │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │  App (orchestrator)                                  │   │
//! │  │  - on_tick() - events, search debounce, refreshes    │   │
//! │  │  - handle_event() - applies async results            │   │
//! │  │  - search_input(), open_stock(), ... - user actions  │   │
//! │  └────────────┬─────────────────────────────────────────┘   │
//! │               │                                             │
//! │  ┌────────────▼─────────────────────────────────────────┐   │
//! │  │  State: Arc<RwLock<AppState>>                        │   │
//! │  │  - page controllers + their ViewModels               │   │
//! │  │  - PlotRegistry (live charts)                        │   │
//! │  └──────────────────────────────────────────────────────┘   │
//! └───────────────────────┬─────────────────────────────────────┘
//!                         │ async_channel
//!                         │ (unbounded)
//! ┌───────────────────────▼─────────────────────────────────────┐
//! │              Async Task Threads (Tokio)                     │
//! │  - tasks::market      - dashboard, stock data, search       │
//! │  - tasks::sentiment   - trending tweets                     │
//! │  - tasks::predictions - prediction, accuracy, history       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Timing
//!
//! Nothing here sleeps or owns a timer thread. `on_tick` reads the injected
//! [`Clock`] and polls the search [`Debouncer`](crate::core::Debouncer) and
//! the two refresh [`IntervalTask`]s. Tests drive time with a
//! [`ManualClock`](crate::core::ManualClock).
//!
//! ## Thread Safety
//!
//! - **Main Thread**: all state changes (egui requirement)
//! - **Async Tasks**: network I/O only, results go through `AppEvent`
//! - **State Access**: `Arc<RwLock<AppState>>`, locks held briefly and never
//!   across an `.await`
//!
//! In-flight requests are never cancelled. A late response is applied when
//! it arrives, so the last response to land wins.

pub mod charts;
pub mod events;
pub mod pages;
pub mod search;
mod state;
mod tasks;
pub mod view;

pub use events::AppEvent;
pub use state::*;

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;
use shared::dto::Period;
use std::sync::Arc;

use crate::core::clock::{Clock, SystemClock};
use crate::core::schedule::IntervalTask;
use crate::core::service::ApiService;
use crate::debug::config::AppConfig;
use crate::services::api::ApiClient;
use search::SearchAction;

/// Main application orchestrator.
///
/// # Example
///
/// ```rust,no_run
/// use terminal::app::App;
/// use terminal::debug::AppConfig;
///
/// let mut app = App::new(&AppConfig::default());
/// app.start();
///
/// // In the egui update loop:
/// app.on_tick();
/// let state = app.state.read();
/// // draw from state...
/// drop(state);
/// ```
pub struct App {
    /// Thread-safe shared application state.
    pub state: Arc<RwLock<AppState>>,

    /// Channel receiver for async task results, polled in `on_tick()`.
    pub event_rx: Receiver<AppEvent>,

    /// Cloned into every spawned task.
    event_tx: Sender<AppEvent>,

    api: Arc<dyn ApiService>,
    clock: Arc<dyn Clock>,
    dashboard_timer: IntervalTask,
    trending_timer: IntervalTask,
}

impl App {
    /// Create the app with the reqwest client and the system clock.
    pub fn new(config: &AppConfig) -> Self {
        Self::with_services(
            config,
            Arc::new(ApiClient::from_config(config)),
            Arc::new(SystemClock),
        )
    }

    /// Create the app with injected services.
    pub fn with_services(config: &AppConfig, api: Arc<dyn ApiService>, clock: Arc<dyn Clock>) -> Self {
        let (event_tx, event_rx) = unbounded();

        tracing::info!(
            api_url = %config.api_url,
            dashboard_refresh_secs = config.dashboard_refresh.as_secs(),
            tweets_refresh_secs = config.tweets_refresh.as_secs(),
            "App state initialized"
        );

        Self {
            state: Arc::new(RwLock::new(AppState::new(config))),
            event_rx,
            event_tx,
            api,
            clock,
            dashboard_timer: IntervalTask::new(config.dashboard_refresh),
            trending_timer: IntervalTask::new(config.tweets_refresh),
        }
    }

    /// Initial loads and auto-refresh. Calling it again does nothing.
    pub fn start(&mut self) {
        if self.dashboard_timer.is_running() {
            return;
        }
        let now = self.clock.now();
        self.refresh_dashboard();
        self.refresh_trending();
        self.dashboard_timer.start(now);
        self.trending_timer.start(now);
    }

    /// Called every frame: apply finished tasks, fire due timers.
    pub fn on_tick(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
        }

        let now = self.clock.now();
        let action = self.state.write().search.poll(now);
        if let Some(action) = action {
            self.dispatch_search(action);
        }

        if self.dashboard_timer.poll(now) {
            tracing::debug!("Dashboard auto-refresh");
            self.refresh_dashboard();
        }
        if self.trending_timer.poll(now) {
            tracing::debug!("Trending tweets auto-refresh");
            self.refresh_trending();
        }
    }

    /// Apply one async result to its page.
    pub fn handle_event(&mut self, event: AppEvent) {
        tracing::trace!(event = event.name(), "Handling event");
        let mut guard = self.state.write();
        let state = &mut *guard;

        match event {
            AppEvent::DashboardLoaded(result) => {
                let page = &mut state.dashboard;
                page.controller.apply(result, &mut page.view, &mut state.charts);
            }
            AppEvent::StockDataLoaded { symbol, result } => {
                let page = &mut state.market;
                page.controller.apply(&symbol, result, &mut page.view, &mut state.charts);
            }
            AppEvent::TimeframeLoaded {
                symbol,
                period,
                result,
            } => {
                state
                    .market
                    .controller
                    .apply_timeframe(&symbol, period, result, &mut state.charts);
            }
            AppEvent::SearchCompleted { query, result } => {
                tracing::debug!(query = %query, ok = result.is_ok(), "Search results received");
                state.search.show_results(&mut state.market.view, &result);
            }
            AppEvent::PredictionLoaded { symbol, result } => {
                let succeeded = result.is_ok();
                let page = &mut state.predictions;
                page.controller.apply(result, &mut page.view);
                drop(guard);

                if succeeded {
                    tasks::predictions::fetch_prediction_insights(
                        self.api.clone(),
                        self.event_tx.clone(),
                        symbol,
                    );
                }
            }
            AppEvent::AccuracyLoaded { symbol, result } => {
                let page = &mut state.predictions;
                if page.controller.symbol() == Some(symbol.as_str()) {
                    page.controller.apply_accuracy(result, &mut page.view);
                }
            }
            AppEvent::HistoryLoaded { symbol, result } => {
                let page = &mut state.predictions;
                if page.controller.symbol() == Some(symbol.as_str()) {
                    page.controller.apply_history(result, &mut page.view);
                }
            }
            AppEvent::TweetsLoaded(result) => {
                let page = &mut state.trending;
                page.controller.apply(result, &mut page.view);
            }
        }
    }

    pub fn refresh_dashboard(&mut self) {
        {
            let mut state = self.state.write();
            let page = &mut state.dashboard;
            page.controller.begin_refresh(&mut page.view);
        }
        tasks::market::fetch_dashboard(self.api.clone(), self.event_tx.clone());
    }

    pub fn refresh_trending(&mut self) {
        {
            let mut state = self.state.write();
            let page = &mut state.trending;
            page.controller.begin_refresh(&mut page.view);
        }
        tasks::sentiment::fetch_trending_tweets(self.api.clone(), self.event_tx.clone());
    }

    pub fn select_screen(&mut self, screen: Screen) {
        let mut state = self.state.write();
        if state.screen != screen {
            tracing::debug!(from = ?state.screen, to = ?screen, "Screen changed");
            state.screen = screen;
        }
    }

    /// A keystroke in the search box.
    pub fn search_input(&mut self, text: &str) {
        let now = self.clock.now();
        self.state.write().search.on_input(text, now);
    }

    /// Enter key or search button.
    pub fn search_submit(&mut self) {
        let action = self.state.write().search.submit();
        if let Some(action) = action {
            self.dispatch_search(action);
        }
    }

    /// A search result row was clicked.
    pub fn select_search_result(&mut self, index: usize) {
        let action = {
            let state = self.state.read();
            state.search.select(&state.market.view, index)
        };
        if let Some(action) = action {
            self.dispatch_search(action);
        }
    }

    fn dispatch_search(&mut self, action: SearchAction) {
        match action {
            SearchAction::Query(query) => {
                tasks::market::search_stocks(self.api.clone(), self.event_tx.clone(), query);
            }
            SearchAction::ClearResults => {
                let mut state = self.state.write();
                let AppState { search, market, .. } = &mut *state;
                search.clear(&mut market.view);
            }
            SearchAction::LoadSymbol(symbol) => self.load_symbol(&symbol),
        }
    }

    /// Open `symbol` on the market-data screen (e.g. a dashboard row click).
    pub fn open_stock(&mut self, symbol: &str) {
        self.select_screen(Screen::MarketData);
        self.load_symbol(symbol);
    }

    fn load_symbol(&mut self, symbol: &str) {
        let request = {
            let mut state = self.state.write();
            let AppState { search, market, .. } = &mut *state;
            search.set_input(symbol);
            market.controller.begin_load(symbol, &mut market.view)
        };
        tracing::info!(symbol = %request.symbol, "Loading stock data");
        tasks::market::fetch_stock_data(self.api.clone(), self.event_tx.clone(), request.symbol);
    }

    pub fn change_timeframe(&mut self, period: Period) {
        let request = self.state.write().market.controller.begin_timeframe(period);
        if let Some(request) = request {
            tasks::market::fetch_timeframe(self.api.clone(), self.event_tx.clone(), request.symbol, period);
        }
    }

    /// Retry button on the market-data error state.
    pub fn retry_market_data(&mut self) {
        let target = self.state.read().market.controller.retry_target();
        if let Some(symbol) = target {
            self.load_symbol(&symbol);
        }
    }

    /// A keystroke in the predictions symbol box.
    pub fn prediction_input(&mut self, text: &str) {
        let mut state = self.state.write();
        state.prediction_input = text.to_string();
        state.predictions.controller.on_input(text);
    }

    /// Generate a prediction for the current input.
    pub fn request_prediction(&mut self) {
        let symbol = {
            let mut state = self.state.write();
            let AppState {
                predictions,
                prediction_input,
                ..
            } = &mut *state;
            predictions.controller.request(prediction_input, &mut predictions.view)
        };
        if let Some(symbol) = symbol {
            tracing::info!(symbol = %symbol, "Requesting prediction");
            tasks::predictions::fetch_prediction(self.api.clone(), self.event_tx.clone(), symbol);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::charts::ChartBackend;
    use crate::app::pages::{dashboard, LoadState};
    use crate::app::view::ViewBinding;
    use crate::core::clock::ManualClock;
    use crate::core::error::ApiError;
    use crate::core::service::mock::MockApi;
    use std::time::Duration;

    fn dashboard_payload() -> shared::dto::DashboardData {
        serde_json::from_str(
            r#"{
                "nifty": {"price": 18000, "change": 50, "change_percent": 0.28},
                "sensex": {"price": 60000, "change": 120, "change_percent": 0.2},
                "sentiment": {"score": 65, "label": "Positive"},
                "top_stocks": [{"symbol": "TCS.NS", "name": "Tata Consultancy", "price": 3500,
                                "change": -20, "change_percent": -0.57, "volume": 1200000}]
            }"#,
        )
        .unwrap()
    }

    fn app_with(api: Arc<MockApi>) -> (App, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new());
        let app = App::with_services(&AppConfig::default(), api, clock.clone());
        (app, clock)
    }

    async fn pump(app: &mut App, events: usize) {
        for _ in 0..events {
            let event = app.event_rx.recv().await.unwrap();
            app.handle_event(event);
        }
    }

    #[tokio::test]
    async fn test_start_loads_dashboard_end_to_end() {
        let api = Arc::new(MockApi {
            dashboard: Ok(dashboard_payload()),
            tweets: Err(ApiError::Transport("offline".to_string())),
            ..Default::default()
        });
        let (mut app, _clock) = app_with(api.clone());

        app.start();
        assert_eq!(app.state.read().dashboard.controller.state(), LoadState::Loading);
        pump(&mut app, 2).await;

        let state = app.state.read();
        let view = &state.dashboard.view;
        assert_eq!(state.dashboard.controller.state(), LoadState::Content);
        assert_eq!(view.text("nifty-price"), Some("₹18,000"));
        assert_eq!(view.class("nifty-change"), Some("price-positive"));
        let rows = view.rows(dashboard::TOP_STOCKS_TABLE);
        assert_eq!(rows[0].cell(dashboard::columns::SYMBOL), "TCS");
        assert_eq!(rows[0].cell(dashboard::columns::VOLUME), "1.20M");
        assert!(state.charts.chart_for(dashboard::CHART_CONTAINER).is_some());

        assert_eq!(state.trending.controller.state(), LoadState::Error);
        assert_eq!(api.count("dashboard_data"), 1);
        assert_eq!(api.count("trending_tweets"), 1);
    }

    #[tokio::test]
    async fn test_auto_refresh_follows_clock() {
        let api = Arc::new(MockApi::default());
        let (mut app, clock) = app_with(api.clone());
        app.start();
        app.start();
        pump(&mut app, 2).await;

        clock.advance(Duration::from_secs(299));
        app.on_tick();
        assert!(app.event_rx.is_empty());

        clock.advance(Duration::from_secs(1));
        app.on_tick();
        pump(&mut app, 1).await;
        assert_eq!(api.count("dashboard_data"), 2);
        assert_eq!(api.count("trending_tweets"), 1);

        clock.advance(Duration::from_secs(300));
        app.on_tick();
        pump(&mut app, 2).await;
        assert_eq!(api.count("dashboard_data"), 3);
        assert_eq!(api.count("trending_tweets"), 2);
    }

    #[tokio::test]
    async fn test_debounced_search_then_select_loads_stock() {
        let api = Arc::new(MockApi {
            search: Ok(serde_json::from_str(
                r#"{"stocks": [{"symbol": "TATASTEEL.NS", "name": "Tata Steel", "price": 120.5}]}"#,
            )
            .unwrap()),
            stock: Ok(serde_json::from_str(
                r#"{"current": {"symbol": "TATASTEEL.NS", "name": "Tata Steel", "price": 120.5},
                    "historical": [{"date": "2024-01-02", "close": 120.5, "volume": 10}]}"#,
            )
            .unwrap()),
            ..Default::default()
        });
        let (mut app, clock) = app_with(api.clone());
        app.select_screen(Screen::MarketData);

        for text in ["T", "TA", "TAT"] {
            app.search_input(text);
            clock.advance(Duration::from_millis(100));
            app.on_tick();
        }
        assert_eq!(api.count("search_stocks"), 0);

        clock.advance(Duration::from_millis(200));
        app.on_tick();
        pump(&mut app, 1).await;
        assert_eq!(api.calls(), vec!["search_stocks TAT"]);
        assert_eq!(app.state.read().market.view.rows(search::SEARCH_RESULTS_ID).len(), 1);

        app.select_search_result(0);
        pump(&mut app, 1).await;

        let state = app.state.read();
        assert_eq!(state.search.input(), "TATASTEEL.NS");
        assert!(state.market.view.rows(search::SEARCH_RESULTS_ID).is_empty());
        assert_eq!(state.market.controller.state(), LoadState::Content);
        assert_eq!(state.market.view.text("current-price"), Some("₹120.50"));
        assert_eq!(state.charts.live_count(), 1);
    }

    #[tokio::test]
    async fn test_direct_symbol_submit_and_timeframe() {
        let api = Arc::new(MockApi {
            stock: Ok(Default::default()),
            ..Default::default()
        });
        let (mut app, _clock) = app_with(api.clone());

        app.search_input("reliance.ns");
        app.search_submit();
        pump(&mut app, 1).await;
        app.change_timeframe(Period::FiveDays);
        pump(&mut app, 1).await;
        app.change_timeframe(Period::FiveDays);
        app.retry_market_data();
        pump(&mut app, 1).await;

        assert_eq!(
            api.calls(),
            vec![
                "stock_data RELIANCE.NS -",
                "stock_data RELIANCE.NS 5d",
                "stock_data RELIANCE.NS -"
            ]
        );
        assert_eq!(app.state.read().market.controller.period(), Period::OneMonth);
    }

    #[tokio::test]
    async fn test_prediction_flow_loads_insights() {
        let api = Arc::new(MockApi {
            prediction: Ok(serde_json::from_str(
                r#"{"current_price": 100, "predicted_price": 95, "recommendation": "sell"}"#,
            )
            .unwrap()),
            accuracy: Err(ApiError::Transport("offline".to_string())),
            history: Ok(Vec::new()),
            ..Default::default()
        });
        let (mut app, _clock) = app_with(api.clone());

        app.prediction_input("");
        app.request_prediction();
        assert!(api.calls().is_empty());
        assert_eq!(
            app.state.read().predictions.controller.state(),
            LoadState::Error
        );

        app.prediction_input("wipro");
        app.request_prediction();
        pump(&mut app, 3).await;

        assert_eq!(
            api.calls(),
            vec![
                "prediction WIPRO.NS",
                "prediction_accuracy WIPRO.NS",
                "prediction_history WIPRO.NS"
            ]
        );
        let state = app.state.read();
        assert_eq!(state.predictions.controller.state(), LoadState::Content);
        assert_eq!(state.predictions.view.text("price-change-display"), Some("-5.00%"));
        assert_eq!(state.predictions.view.class("recommendation-badge"), Some("badge bg-danger"));
        assert!(!state.predictions.view.is_visible(pages::predictions::ACCURACY_PANEL));
    }

    #[tokio::test]
    async fn test_dashboard_row_opens_market_data() {
        let api = Arc::new(MockApi::default());
        let (mut app, _clock) = app_with(api.clone());

        app.open_stock("TCS.NS");
        assert_eq!(app.state.read().screen, Screen::MarketData);
        pump(&mut app, 1).await;

        let state = app.state.read();
        assert_eq!(state.market.controller.state(), LoadState::Error);
        assert_eq!(
            state.market.view.text(pages::ERROR_MESSAGE_ID),
            Some("Failed to load data for TCS.NS. Please check the symbol and try again.")
        );
    }
}
