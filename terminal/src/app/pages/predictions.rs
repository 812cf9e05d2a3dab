//! # Predictions Page
//!
//! Model prediction for one symbol with technical indicators and signal
//! counts. After a successful prediction the app also loads the symbol's
//! accuracy record and prediction history; those panels simply stay hidden
//! when their calls fail.

use shared::dto::{Prediction, PredictionAccuracy, PredictionHistoryEntry, Signals, TechnicalIndicators};
use shared::utils::{normalize_symbol, suggest};

use super::{LoadCycle, LoadState, Outcome};
use crate::app::view::{Cell, Row, ViewBinding};
use crate::core::error::ApiResult;
use crate::core::service::ApiService;
use crate::utils::format::{
    color_class_for_change, color_class_for_sentiment, confidence_class, format_currency2,
    format_date, format_fixed, format_percentage2, recommendation_class, rsi_signal,
    sentiment_label, PLACEHOLDER,
};
use crate::utils::validation::validate_symbol;

const CONTENT: &[&str] = &["prediction-results"];
const SUGGESTION_LIMIT: usize = 8;

pub const TECHNICAL_SECTION: &str = "technical-section";
pub const SIGNALS_SECTION: &str = "signals-section";
pub const ACCURACY_PANEL: &str = "accuracy-panel";
pub const HISTORY_SECTION: &str = "history-section";
pub const HISTORY_TABLE: &str = "history-table";

/// Column order of [`HISTORY_TABLE`] rows.
pub mod history_columns {
    pub const DATE: usize = 0;
    pub const RECOMMENDATION: usize = 1;
    pub const PREDICTED: usize = 2;
    pub const PRICE_THEN: usize = 3;
    pub const CONFIDENCE: usize = 4;
}

#[derive(Debug, Clone)]
pub struct PredictionsPage {
    cycle: LoadCycle,
    symbol: Option<String>,
    suggestions: Vec<&'static str>,
}

impl PredictionsPage {
    pub fn new() -> Self {
        Self {
            cycle: LoadCycle::new(CONTENT),
            symbol: None,
            suggestions: Vec::new(),
        }
    }

    pub fn state(&self) -> LoadState {
        self.cycle.state()
    }

    /// Symbol of the last accepted request.
    pub fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    pub fn suggestions(&self) -> &[&'static str] {
        &self.suggestions
    }

    /// Autocomplete from the popular NSE symbols.
    pub fn on_input(&mut self, text: &str) {
        self.suggestions = suggest(text, SUGGESTION_LIMIT);
    }

    /// Validate and normalize the input. `None` means nothing should be
    /// fetched; the validation message is already on screen.
    pub fn request(&mut self, input: &str, view: &mut dyn ViewBinding) -> Option<String> {
        let validation = validate_symbol(input);
        let symbol = match (validation.error, normalize_symbol(input)) {
            (None, Some(symbol)) => symbol,
            (error, _) => {
                tracing::debug!(input = %input, "Prediction request rejected");
                self.cycle.finish(view, Outcome::Error(error));
                return None;
            }
        };

        self.symbol = Some(symbol.clone());
        self.suggestions.clear();
        view.hide(ACCURACY_PANEL);
        view.hide(HISTORY_SECTION);
        self.cycle.begin(view);
        Some(symbol)
    }

    pub fn apply(&mut self, result: ApiResult<Prediction>, view: &mut dyn ViewBinding) {
        match result {
            Ok(prediction) => {
                render_prediction(&prediction, view);
                self.cycle.finish(view, Outcome::Content);
            }
            Err(e) => {
                tracing::error!(
                    symbol = ?self.symbol,
                    error = %e,
                    kind = e.kind(),
                    "Failed to generate prediction"
                );
                self.cycle.finish(view, Outcome::Error(Some(e.user_message())));
            }
        }
    }

    pub fn apply_accuracy(&mut self, result: ApiResult<PredictionAccuracy>, view: &mut dyn ViewBinding) {
        match result {
            Ok(accuracy) => {
                view.set_text(
                    "accuracy-percent",
                    &suffixed(accuracy.accuracy_percent, 1, "%"),
                );
                let detail = match (accuracy.accurate_predictions, accuracy.total_predictions) {
                    (Some(hit), Some(total)) => {
                        let days = accuracy
                            .period_days
                            .map(|d| format!(" over {} days", d))
                            .unwrap_or_default();
                        format!("{} of {} predictions correct{}", hit, total, days)
                    }
                    _ => PLACEHOLDER.to_string(),
                };
                view.set_text("accuracy-detail", &detail);
                view.show(ACCURACY_PANEL);
            }
            Err(e) => {
                tracing::debug!(error = %e, "Prediction accuracy unavailable");
                view.hide(ACCURACY_PANEL);
            }
        }
    }

    pub fn apply_history(
        &mut self,
        result: ApiResult<Vec<PredictionHistoryEntry>>,
        view: &mut dyn ViewBinding,
    ) {
        match result {
            Ok(entries) if !entries.is_empty() => {
                let rows = entries.iter().map(history_row).collect();
                view.set_rows(HISTORY_TABLE, rows);
                view.show(HISTORY_SECTION);
            }
            Ok(_) => {
                view.set_rows(HISTORY_TABLE, Vec::new());
                view.hide(HISTORY_SECTION);
            }
            Err(e) => {
                tracing::debug!(error = %e, "Prediction history unavailable");
                view.hide(HISTORY_SECTION);
            }
        }
    }

    /// Request, fetch and render, including the accuracy and history panels.
    pub async fn predict(&mut self, api: &dyn ApiService, input: &str, view: &mut dyn ViewBinding) {
        let Some(symbol) = self.request(input, view) else {
            return;
        };

        let result = api.prediction(&symbol).await;
        let succeeded = result.is_ok();
        self.apply(result, view);

        if succeeded {
            let accuracy = api.prediction_accuracy(&symbol).await;
            self.apply_accuracy(accuracy, view);
            let history = api.prediction_history(&symbol).await;
            self.apply_history(history, view);
        }
    }
}

impl Default for PredictionsPage {
    fn default() -> Self {
        Self::new()
    }
}

/// `value` with fixed decimals and a unit, or the placeholder.
fn suffixed(value: Option<f64>, decimals: usize, suffix: &str) -> String {
    match value.filter(|v| v.is_finite()) {
        Some(_) => format!("{}{}", format_fixed(value, decimals), suffix),
        None => PLACEHOLDER.to_string(),
    }
}

fn count(value: Option<u64>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

fn render_prediction(prediction: &Prediction, view: &mut dyn ViewBinding) {
    view.set_text("current-price-display", &format_currency2(prediction.current_price));
    view.set_text("predicted-price-display", &format_currency2(prediction.predicted_price));

    let change = prediction.expected_change_percent();
    view.set_styled(
        "price-change-display",
        &format_percentage2(change),
        color_class_for_change(change).css(),
    );

    view.set_styled(
        "recommendation-badge",
        prediction.recommendation.as_str(),
        &format!("badge {}", recommendation_class(&prediction.recommendation)),
    );

    view.set_text("confidence-text", &suffixed(prediction.confidence, 1, "%"));
    view.set_styled(
        "confidence-bar",
        &format_fixed(prediction.confidence, 1),
        &format!("progress-bar {}", confidence_class(prediction.confidence)),
    );

    let sentiment = prediction.sentiment_score;
    view.set_text("sentiment-score-display", &suffixed(sentiment, 1, "/100"));
    view.set_styled(
        "sentiment-label-display",
        sentiment_label(sentiment),
        color_class_for_sentiment(sentiment).css(),
    );

    match prediction.technical_indicators.as_ref() {
        Some(indicators) => {
            render_indicators(indicators, view);
            view.show(TECHNICAL_SECTION);
        }
        None => view.hide(TECHNICAL_SECTION),
    }

    match prediction.signals.as_ref() {
        Some(signals) => {
            render_signals(signals, view);
            view.show(SIGNALS_SECTION);
        }
        None => view.hide(SIGNALS_SECTION),
    }
}

fn render_indicators(indicators: &TechnicalIndicators, view: &mut dyn ViewBinding) {
    for (id, value) in [
        ("ma-5", indicators.ma_5),
        ("ma-10", indicators.ma_10),
        ("ma-20", indicators.ma_20),
        ("ema-12", indicators.ema_12),
        ("ema-26", indicators.ema_26),
        ("support", indicators.support),
        ("resistance", indicators.resistance),
        ("bollinger-upper", indicators.bollinger_upper),
        ("bollinger-lower", indicators.bollinger_lower),
    ] {
        view.set_text(id, &format_currency2(value));
    }

    view.set_text("rsi", &format_fixed(indicators.rsi, 1));
    let (signal, class) = rsi_signal(indicators.rsi);
    view.set_styled("rsi-signal", signal, class);

    view.set_text("macd", &format_fixed(indicators.macd, 4));
    view.set_text(
        "macd-signal",
        &format!("Signal: {}", format_fixed(indicators.macd_signal, 4)),
    );
    view.set_text("volatility", &suffixed(indicators.volatility, 2, "%"));
    view.set_text("volume-ratio", &suffixed(indicators.volume_ratio, 2, "x"));

    for (id, value) in [
        ("trend-short", indicators.trend_short),
        ("trend-medium", indicators.trend_medium),
    ] {
        view.set_styled(id, &format_percentage2(value), color_class_for_change(value).css());
    }
}

fn render_signals(signals: &Signals, view: &mut dyn ViewBinding) {
    view.set_text("buy-signals", &format!("{} Buy", count(signals.buy_signals)));
    view.set_text("sell-signals", &format!("{} Sell", count(signals.sell_signals)));
}

fn history_row(entry: &PredictionHistoryEntry) -> Row {
    Row::new(vec![
        Cell::new(format_date(entry.prediction_date.as_deref())),
        Cell::classed(
            entry.recommendation.as_str(),
            format!("badge {}", recommendation_class(&entry.recommendation)),
        ),
        Cell::new(format_currency2(entry.predicted_price)),
        Cell::new(format_currency2(entry.current_price)),
        Cell::new(suffixed(entry.confidence, 1, "%")),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pages::{ERROR_ID, ERROR_MESSAGE_ID, LOADING_ID};
    use crate::app::view::ViewModel;
    use crate::core::error::ApiError;
    use crate::core::service::mock::MockApi;
    use crate::utils::validation::EMPTY_SYMBOL_MESSAGE;
    use shared::dto::Recommendation;

    fn prediction() -> Prediction {
        serde_json::from_str(
            r#"{
                "symbol": "INFY.NS",
                "current_price": 1500,
                "predicted_price": 1560,
                "recommendation": "Strong Buy",
                "confidence": 82.35,
                "sentiment_score": 35.5,
                "technical_indicators": {
                    "ma_5": 1490, "rsi": 75.2, "macd": 12.345678, "macd_signal": 10.5,
                    "volatility": 1.234, "volume_ratio": 1.5, "trend_short": -0.8, "trend_medium": 2.1
                },
                "signals": {"buy_signals": 5, "sell_signals": 2}
            }"#,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_empty_input_shows_validation_without_call() {
        let api = MockApi::default();
        let mut page = PredictionsPage::new();
        let mut view = ViewModel::default();

        page.predict(&api, "   ", &mut view).await;

        assert!(api.calls().is_empty());
        assert_eq!(page.state(), LoadState::Error);
        assert!(view.is_visible(ERROR_ID));
        assert_eq!(view.text(ERROR_MESSAGE_ID), Some(EMPTY_SYMBOL_MESSAGE));
    }

    #[test]
    fn test_unrecognised_recommendation_shown_as_sent() {
        let mut page = PredictionsPage::new();
        let mut view = ViewModel::default();
        let mut outperform = prediction();
        outperform.recommendation = Recommendation::parse("Outperform");

        page.apply(Ok(outperform), &mut view);

        assert_eq!(view.text("recommendation-badge"), Some("Outperform"));
        assert_eq!(view.class("recommendation-badge"), Some("badge bg-secondary"));
    }

    #[tokio::test]
    async fn test_prediction_renders_all_panels() {
        let api = MockApi {
            prediction: Ok(prediction()),
            accuracy: Ok(PredictionAccuracy {
                accuracy_percent: Some(64.24),
                total_predictions: Some(40),
                accurate_predictions: Some(26),
                period_days: Some(30),
            }),
            history: Ok(vec![PredictionHistoryEntry {
                predicted_price: Some(1520.0),
                current_price: Some(1490.0),
                recommendation: Recommendation::Buy,
                confidence: Some(70.0),
                prediction_date: Some("2024-01-05T15:45:00".to_string()),
            }]),
            ..Default::default()
        };
        let mut page = PredictionsPage::new();
        let mut view = ViewModel::default();

        page.predict(&api, "infy", &mut view).await;

        assert_eq!(
            api.calls(),
            vec![
                "prediction INFY.NS",
                "prediction_accuracy INFY.NS",
                "prediction_history INFY.NS"
            ]
        );
        assert_eq!(page.state(), LoadState::Content);
        assert!(view.is_visible("prediction-results"));
        assert!(!view.is_visible(LOADING_ID));

        assert_eq!(view.text("current-price-display"), Some("₹1,500.00"));
        assert_eq!(view.text("price-change-display"), Some("+4.00%"));
        assert_eq!(view.class("price-change-display"), Some("price-positive"));
        assert_eq!(view.text("recommendation-badge"), Some("Strong Buy"));
        assert_eq!(view.class("recommendation-badge"), Some("badge bg-success"));
        assert_eq!(view.text("confidence-text"), Some("82.3%"));
        assert_eq!(view.class("confidence-bar"), Some("progress-bar bg-success"));
        assert_eq!(view.text("sentiment-score-display"), Some("35.5/100"));
        assert_eq!(view.text("sentiment-label-display"), Some("Negative"));

        assert!(view.is_visible(TECHNICAL_SECTION));
        assert_eq!(view.text("rsi"), Some("75.2"));
        assert_eq!(view.text("rsi-signal"), Some("Overbought"));
        assert_eq!(view.class("rsi-signal"), Some("badge bg-danger"));
        assert_eq!(view.text("macd"), Some("12.3457"));
        assert_eq!(view.text("macd-signal"), Some("Signal: 10.5000"));
        assert_eq!(view.text("volatility"), Some("1.23%"));
        assert_eq!(view.text("volume-ratio"), Some("1.50x"));
        assert_eq!(view.text("ma-10"), Some(PLACEHOLDER));
        assert_eq!(view.class("trend-short"), Some("price-negative"));
        assert_eq!(view.text("buy-signals"), Some("5 Buy"));
        assert_eq!(view.text("sell-signals"), Some("2 Sell"));

        assert!(view.is_visible(ACCURACY_PANEL));
        assert_eq!(view.text("accuracy-percent"), Some("64.2%"));
        assert_eq!(
            view.text("accuracy-detail"),
            Some("26 of 40 predictions correct over 30 days")
        );
        assert!(view.is_visible(HISTORY_SECTION));
        let rows = view.rows(HISTORY_TABLE);
        assert_eq!(rows[0].cell(history_columns::DATE), "05 Jan 2024, 03:45 pm");
        assert_eq!(rows[0].cell(history_columns::RECOMMENDATION), "Buy");
        assert_eq!(rows[0].cell(history_columns::CONFIDENCE), "70.0%");
    }

    #[tokio::test]
    async fn test_backend_error_message_is_shown() {
        let api = MockApi {
            prediction: Err(ApiError::Application("Insufficient data for FOO.NS".to_string())),
            ..Default::default()
        };
        let mut page = PredictionsPage::new();
        let mut view = ViewModel::default();

        page.predict(&api, "foo", &mut view).await;

        assert_eq!(api.calls(), vec!["prediction FOO.NS"]);
        assert_eq!(view.text(ERROR_MESSAGE_ID), Some("Insufficient data for FOO.NS"));
        assert!(!view.is_visible("prediction-results"));
    }

    #[tokio::test]
    async fn test_insight_failures_only_hide_panels() {
        let api = MockApi {
            prediction: Ok(Prediction {
                technical_indicators: None,
                signals: None,
                ..prediction()
            }),
            ..Default::default()
        };
        let mut page = PredictionsPage::new();
        let mut view = ViewModel::default();

        page.predict(&api, "RELIANCE.BO", &mut view).await;

        assert_eq!(page.symbol(), Some("RELIANCE.BO"));
        assert_eq!(page.state(), LoadState::Content);
        assert!(!view.is_visible(ERROR_ID));
        assert!(!view.is_visible(ACCURACY_PANEL));
        assert!(!view.is_visible(HISTORY_SECTION));
        assert!(!view.is_visible(TECHNICAL_SECTION));
    }

    #[test]
    fn test_suggestions() {
        let mut page = PredictionsPage::new();
        page.on_input("tata");
        assert_eq!(page.suggestions(), &["TATAMOTORS.NS", "TATASTEEL.NS"]);
        page.on_input("");
        assert!(page.suggestions().is_empty());
    }
}
