//! # Application State Types
//!
//! Screens and the per-page controllers with their views. Everything here is
//! owned by `App::state` and only mutated on the UI thread.

use crate::app::charts::PlotRegistry;
use crate::app::pages::{DashboardPage, MarketDataPage, Page, PredictionsPage, TrendingPage};
use crate::app::search::SearchController;
use crate::debug::config::AppConfig;

/// Application screens
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Screen {
    /// Index cards, sentiment and top stocks
    #[default]
    Dashboard,
    /// Single-symbol detail with search
    MarketData,
    /// Model predictions and indicators
    Predictions,
    /// Sentiment from finance tweets
    Trending,
}

impl Screen {
    /// Get all screens in navigation order
    pub fn all() -> &'static [Screen] {
        &[
            Screen::Dashboard,
            Screen::MarketData,
            Screen::Predictions,
            Screen::Trending,
        ]
    }

    /// Get screen title for header display
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Dashboard => "Dashboard",
            Screen::MarketData => "Market Data",
            Screen::Predictions => "Predictions",
            Screen::Trending => "Trending Tweets",
        }
    }
}

/// Main application state
#[derive(Clone)]
pub struct AppState {
    /// Screen currently shown
    pub screen: Screen,
    /// Live charts for every page
    pub charts: PlotRegistry,
    /// Stock search box on the market-data screen
    pub search: SearchController,
    pub dashboard: Page<DashboardPage>,
    pub market: Page<MarketDataPage>,
    pub predictions: Page<PredictionsPage>,
    pub trending: Page<TrendingPage>,
    /// Contents of the predictions symbol box
    pub prediction_input: String,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            screen: Screen::default(),
            charts: PlotRegistry::default(),
            search: SearchController::new(config.search_debounce),
            dashboard: Page::new(DashboardPage::new()),
            market: Page::new(MarketDataPage::new()),
            predictions: Page::new(PredictionsPage::new()),
            trending: Page::new(TrendingPage::new()),
            prediction_input: String::new(),
        }
    }
}
