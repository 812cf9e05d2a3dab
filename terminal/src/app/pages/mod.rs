//! # Page Controllers
//!
//! One controller per screen. Each owns its load cycle and chart slots and
//! writes into a [`ViewBinding`]; none of them touch egui or spawn tasks.
//!
//! ## Load Cycle
//!
//! ```text
//!  Idle ──begin──> Loading ──finish──> Content
//!                     ▲                Empty
//!                     │                Error(message)
//!                     └──────begin─────────┘
//! ```
//!
//! `begin` shows the loading indicator and clears the previous error.
//! `finish` always hides the loading indicator, whatever the outcome.
//!
//! ## Pages
//!
//! - [`dashboard`]: index cards, top stocks, index comparison chart
//! - [`market_data`]: per-symbol detail with price/volume chart and timeframes
//! - [`predictions`]: model prediction, indicators, accuracy and history
//! - [`trending`]: tweet sentiment overview and feed

pub mod dashboard;
pub mod market_data;
pub mod predictions;
pub mod trending;

pub use dashboard::DashboardPage;
pub use market_data::{MarketDataPage, StockRequest};
pub use predictions::PredictionsPage;
pub use trending::TrendingPage;

use crate::app::view::{ViewBinding, ViewModel};
use crate::core::error::GENERIC_ERROR_MESSAGE;

pub const LOADING_ID: &str = "loading";
pub const ERROR_ID: &str = "error-state";
pub const ERROR_MESSAGE_ID: &str = "error-message";
pub const EMPTY_ID: &str = "empty-state";

/// Where a page is in its load cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Content,
    Empty,
    Error,
}

/// How a load ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Content,
    Empty,
    /// `None` shows the generic message.
    Error(Option<String>),
}

/// Loading/content/empty/error visibility for one page.
#[derive(Debug, Clone)]
pub struct LoadCycle {
    state: LoadState,
    content: &'static [&'static str],
    empty: Option<&'static str>,
}

impl LoadCycle {
    pub fn new(content: &'static [&'static str]) -> Self {
        Self {
            state: LoadState::Idle,
            content,
            empty: None,
        }
    }

    /// Page has a dedicated empty-state section.
    pub fn with_empty(mut self, id: &'static str) -> Self {
        self.empty = Some(id);
        self
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    pub fn content_ids(&self) -> &'static [&'static str] {
        self.content
    }

    pub fn begin(&mut self, view: &mut dyn ViewBinding) {
        self.state = LoadState::Loading;
        view.show(LOADING_ID);
        view.hide(ERROR_ID);
        view.set_text(ERROR_MESSAGE_ID, "");
    }

    pub fn finish(&mut self, view: &mut dyn ViewBinding, outcome: Outcome) {
        view.hide(LOADING_ID);

        match outcome {
            Outcome::Content => {
                self.state = LoadState::Content;
                self.set_content(view, true);
                self.set_empty(view, false);
                view.hide(ERROR_ID);
            }
            Outcome::Empty => {
                self.state = LoadState::Empty;
                self.set_content(view, false);
                self.set_empty(view, true);
                view.hide(ERROR_ID);
            }
            Outcome::Error(message) => {
                self.state = LoadState::Error;
                let message = message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string());
                view.set_text(ERROR_MESSAGE_ID, &message);
                view.show(ERROR_ID);
                self.set_content(view, false);
                self.set_empty(view, false);
            }
        }
    }

    fn set_content(&self, view: &mut dyn ViewBinding, visible: bool) {
        for id in self.content {
            view.set_visible(id, visible);
        }
    }

    fn set_empty(&self, view: &mut dyn ViewBinding, visible: bool) {
        if let Some(id) = self.empty {
            view.set_visible(id, visible);
        }
    }
}

/// A controller together with the view it draws into.
#[derive(Debug, Clone, Default)]
pub struct Page<C> {
    pub controller: C,
    pub view: ViewModel,
}

impl<C> Page<C> {
    pub fn new(controller: C) -> Self {
        Self {
            controller,
            view: ViewModel::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTENT: &[&str] = &["results"];

    #[test]
    fn test_error_path_clears_loading() {
        let mut view = ViewModel::default();
        let mut cycle = LoadCycle::new(CONTENT);
        assert_eq!(cycle.state(), LoadState::Idle);

        cycle.begin(&mut view);
        assert!(cycle.is_loading());
        assert!(view.is_visible(LOADING_ID));

        cycle.finish(&mut view, Outcome::Error(None));
        assert_eq!(cycle.state(), LoadState::Error);
        assert!(!view.is_visible(LOADING_ID));
        assert!(view.is_visible(ERROR_ID));
        assert!(!view.is_visible("results"));
        assert_eq!(view.text(ERROR_MESSAGE_ID), Some(GENERIC_ERROR_MESSAGE));
    }

    #[test]
    fn test_begin_hides_previous_error() {
        let mut view = ViewModel::default();
        let mut cycle = LoadCycle::new(CONTENT);
        cycle.finish(&mut view, Outcome::Error(Some("Stock not found".to_string())));
        assert_eq!(view.text(ERROR_MESSAGE_ID), Some("Stock not found"));

        cycle.begin(&mut view);
        assert!(!view.is_visible(ERROR_ID));
        assert_eq!(view.text(ERROR_MESSAGE_ID), Some(""));

        cycle.finish(&mut view, Outcome::Content);
        assert!(view.is_visible("results"));
        assert!(!view.is_visible(ERROR_ID));
    }

    #[test]
    fn test_empty_hides_content() {
        let mut view = ViewModel::default();
        let mut cycle = LoadCycle::new(CONTENT).with_empty(EMPTY_ID);
        cycle.begin(&mut view);
        cycle.finish(&mut view, Outcome::Content);
        cycle.begin(&mut view);
        cycle.finish(&mut view, Outcome::Empty);

        assert_eq!(cycle.state(), LoadState::Empty);
        assert!(view.is_visible(EMPTY_ID));
        assert!(!view.is_visible("results"));
        assert!(!view.is_visible(LOADING_ID));
    }
}
