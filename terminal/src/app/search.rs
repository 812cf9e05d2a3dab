//! # Stock Search
//!
//! Debounced search box on the market-data screen.
//!
//! Typing arms a single-slot debouncer; only the last keystroke inside the
//! window turns into a query. Enter bypasses the debounce, and input that is
//! already exchange-qualified (`TCS.NS`, `RELIANCE.BO`) loads directly.
//!
//! The controller only decides *what* should happen ([`SearchAction`]); the
//! app issues the call and routes `LoadSymbol` to the market-data page.

use std::time::{Duration, Instant};

use shared::dto::SearchResults;
use shared::utils::{display_symbol, is_direct_symbol};

use crate::app::view::{Cell, Row, ViewBinding};
use crate::core::error::ApiResult;
use crate::core::schedule::Debouncer;
use crate::utils::format::{color_class_for_change, format_currency2, format_percentage2, PLACEHOLDER};

pub const SEARCH_RESULTS_ID: &str = "search-results";
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);
pub const NO_RESULTS_MESSAGE: &str = "No stocks found";
pub const SEARCH_FAILED_MESSAGE: &str = "Search failed. Please try again.";

/// Column order of result rows.
pub mod columns {
    pub const SYMBOL: usize = 0;
    pub const NAME: usize = 1;
    pub const PRICE: usize = 2;
    pub const CHANGE_PERCENT: usize = 3;
}

/// What the app should do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchAction {
    /// Call the search endpoint.
    Query(String),
    /// Empty the result list, no call.
    ClearResults,
    /// Open the symbol on the market-data page.
    LoadSymbol(String),
}

#[derive(Debug, Clone)]
pub struct SearchController {
    input: String,
    debouncer: Debouncer<String>,
}

impl SearchController {
    pub fn new(delay: Duration) -> Self {
        Self {
            input: String::new(),
            debouncer: Debouncer::new(delay),
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replace the box contents without searching (a symbol was opened).
    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
        self.debouncer.cancel();
    }

    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// A keystroke. Restarts the debounce window.
    pub fn on_input(&mut self, text: &str, now: Instant) {
        self.input = text.to_string();
        self.debouncer.schedule(text.trim().to_string(), now);
    }

    /// Fires once the window after the last keystroke has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<SearchAction> {
        let query = self.debouncer.poll(now)?;
        if query.is_empty() {
            Some(SearchAction::ClearResults)
        } else {
            tracing::debug!(query = %query, "Debounced search fired");
            Some(SearchAction::Query(query))
        }
    }

    /// Enter key or search button.
    pub fn submit(&mut self) -> Option<SearchAction> {
        self.debouncer.cancel();
        let term = self.input.trim();
        if term.is_empty() {
            return Some(SearchAction::ClearResults);
        }
        if is_direct_symbol(term) {
            return Some(SearchAction::LoadSymbol(term.to_uppercase()));
        }
        Some(SearchAction::Query(term.to_string()))
    }

    pub fn show_results(&self, view: &mut dyn ViewBinding, result: &ApiResult<SearchResults>) {
        let rows = match result {
            Ok(results) if results.stocks.is_empty() => {
                vec![Row::message(NO_RESULTS_MESSAGE, "text-muted")]
            }
            Ok(results) => results
                .stocks
                .iter()
                .map(|stock| {
                    Row::new(vec![
                        Cell::new(display_symbol(&stock.symbol)),
                        Cell::new(stock.name.clone().unwrap_or_else(|| PLACEHOLDER.to_string())),
                        Cell::new(format_currency2(stock.price)),
                        Cell::classed(
                            format_percentage2(stock.change_percent),
                            color_class_for_change(stock.change_percent).css(),
                        ),
                    ])
                    .with_key(stock.symbol.clone())
                    .with_class("list-group-item")
                })
                .collect(),
            Err(e) => {
                tracing::warn!(error = %e, "Search failed");
                vec![Row::message(SEARCH_FAILED_MESSAGE, "alert alert-warning")]
            }
        };
        view.set_rows(SEARCH_RESULTS_ID, rows);
    }

    /// Activate result `index`.
    pub fn select(&self, view: &dyn ViewBinding, index: usize) -> Option<SearchAction> {
        view.rows(SEARCH_RESULTS_ID)
            .get(index)
            .and_then(|row| row.key.clone())
            .map(SearchAction::LoadSymbol)
    }

    pub fn clear(&mut self, view: &mut dyn ViewBinding) {
        self.debouncer.cancel();
        view.set_rows(SEARCH_RESULTS_ID, Vec::new());
    }
}

impl Default for SearchController {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}
