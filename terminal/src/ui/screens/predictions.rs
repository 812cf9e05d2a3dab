//! # Predictions Screen
//!
//! Symbol input with autocomplete, the prediction summary, technical
//! indicators, signal counts, accuracy and past predictions.

use egui;

use crate::app::pages::predictions::{
    ACCURACY_PANEL, HISTORY_SECTION, HISTORY_TABLE, SIGNALS_SECTION, TECHNICAL_SECTION,
};
use crate::app::view::{ViewBinding, ViewModel};
use crate::app::{App, AppState};
use crate::ui::theme::Theme;
use crate::ui::widgets::feedback::{render_load_feedback, styled_label};
use crate::ui::widgets::tables::{render_rows, TableConfig};

const HISTORY_HEADERS: &[&str] = &["Date", "Recommendation", "Predicted", "Price Then", "Confidence"];

const PRICE_LEVELS: &[(&str, &str)] = &[
    ("MA 5", "ma-5"),
    ("MA 10", "ma-10"),
    ("MA 20", "ma-20"),
    ("EMA 12", "ema-12"),
    ("EMA 26", "ema-26"),
    ("Support", "support"),
    ("Resistance", "resistance"),
    ("Bollinger Upper", "bollinger-upper"),
    ("Bollinger Lower", "bollinger-lower"),
];

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    let view = &state.predictions.view;

    render_input(ui, state, app);
    ui.add_space(8.0);

    render_load_feedback(ui, view, "", false, theme);

    if !view.is_visible("prediction-results") {
        return;
    }

    egui::ScrollArea::vertical().id_salt("prediction-scroll").show(ui, |ui| {
        render_summary(ui, view, theme);

        if view.is_visible(TECHNICAL_SECTION) {
            ui.add_space(8.0);
            render_indicators(ui, view, theme);
        }

        if view.is_visible(SIGNALS_SECTION) {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.strong("Signals");
                ui.colored_label(theme.success, view.text_or("buy-signals", "--"));
                ui.colored_label(theme.error, view.text_or("sell-signals", "--"));
            });
        }

        if view.is_visible(ACCURACY_PANEL) {
            ui.add_space(8.0);
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.strong("Model Accuracy");
                    ui.label(view.text_or("accuracy-percent", "--"));
                    ui.colored_label(theme.dim, view.text_or("accuracy-detail", ""));
                });
            });
        }

        if view.is_visible(HISTORY_SECTION) {
            ui.add_space(8.0);
            ui.heading("Recent Predictions");
            render_rows(
                ui,
                HISTORY_TABLE,
                TableConfig::default(),
                HISTORY_HEADERS,
                view.rows(HISTORY_TABLE),
                theme,
            );
        }
    });
}

fn render_input(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let mut text = state.prediction_input.clone();

    ui.horizontal(|ui| {
        let response = ui.add(
            egui::TextEdit::singleline(&mut text)
                .hint_text("Stock symbol (e.g. RELIANCE)")
                .desired_width(240.0),
        );
        if response.changed() {
            app.prediction_input(&text);
        }
        let entered = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        let busy = state.predictions.view.is_visible(crate::app::pages::LOADING_ID);
        let clicked = ui
            .add_enabled(!busy, egui::Button::new("Generate Prediction"))
            .clicked();
        if entered || clicked {
            app.request_prediction();
        }
    });

    let suggestions = state.predictions.controller.suggestions();
    if !suggestions.is_empty() {
        ui.horizontal_wrapped(|ui| {
            for symbol in suggestions {
                if ui.small_button(*symbol).clicked() {
                    app.prediction_input(symbol);
                    app.request_prediction();
                }
            }
        });
    }
}

fn render_summary(ui: &mut egui::Ui, view: &ViewModel, theme: &Theme) {
    egui::Grid::new("prediction-summary")
        .num_columns(2)
        .spacing([24.0, 6.0])
        .show(ui, |ui| {
            ui.colored_label(theme.dim, "Current Price");
            ui.label(view.text_or("current-price-display", "--"));
            ui.end_row();

            ui.colored_label(theme.dim, "Predicted Price");
            ui.label(egui::RichText::new(view.text_or("predicted-price-display", "--")).strong());
            ui.end_row();

            ui.colored_label(theme.dim, "Expected Change");
            styled_label(ui, view, "price-change-display", theme);
            ui.end_row();

            ui.colored_label(theme.dim, "Recommendation");
            styled_label(ui, view, "recommendation-badge", theme);
            ui.end_row();

            ui.colored_label(theme.dim, "Confidence");
            ui.horizontal(|ui| {
                let fraction = view
                    .text("confidence-bar")
                    .and_then(|t| t.parse::<f32>().ok())
                    .map(|c| (c / 100.0).clamp(0.0, 1.0))
                    .unwrap_or(0.0);
                let mut bar = egui::ProgressBar::new(fraction).desired_width(160.0);
                if let Some(color) = view.class("confidence-bar").and_then(|c| theme.class_color(c)) {
                    bar = bar.fill(color);
                }
                ui.add(bar);
                ui.label(view.text_or("confidence-text", "--"));
            });
            ui.end_row();

            ui.colored_label(theme.dim, "Sentiment");
            ui.horizontal(|ui| {
                ui.label(view.text_or("sentiment-score-display", "--"));
                styled_label(ui, view, "sentiment-label-display", theme);
            });
            ui.end_row();
        });
}

fn render_indicators(ui: &mut egui::Ui, view: &ViewModel, theme: &Theme) {
    ui.heading("Technical Indicators");
    egui::Grid::new("technical-indicators")
        .num_columns(4)
        .spacing([24.0, 4.0])
        .striped(true)
        .show(ui, |ui| {
            for pair in PRICE_LEVELS.chunks(2) {
                for (label, id) in pair {
                    ui.colored_label(theme.dim, *label);
                    ui.label(view.text_or(id, "--"));
                }
                ui.end_row();
            }

            ui.colored_label(theme.dim, "RSI");
            ui.horizontal(|ui| {
                ui.label(view.text_or("rsi", "--"));
                styled_label(ui, view, "rsi-signal", theme);
            });
            ui.colored_label(theme.dim, "MACD");
            ui.horizontal(|ui| {
                ui.label(view.text_or("macd", "--"));
                ui.colored_label(theme.dim, view.text_or("macd-signal", ""));
            });
            ui.end_row();

            ui.colored_label(theme.dim, "Volatility");
            ui.label(view.text_or("volatility", "--"));
            ui.colored_label(theme.dim, "Volume Ratio");
            ui.label(view.text_or("volume-ratio", "--"));
            ui.end_row();

            ui.colored_label(theme.dim, "Short Trend");
            styled_label(ui, view, "trend-short", theme);
            ui.colored_label(theme.dim, "Medium Trend");
            styled_label(ui, view, "trend-medium", theme);
            ui.end_row();
        });
}
