//! # Market Data Screen
//!
//! Debounced stock search, symbol details, timeframe selector and the
//! price/volume chart.

use egui;
use shared::dto::Period;

use crate::app::pages::market_data::CHART_CONTAINER;
use crate::app::search::SEARCH_RESULTS_ID;
use crate::app::view::{ViewBinding, ViewModel};
use crate::app::{App, AppState};
use crate::ui::chart::render_chart;
use crate::ui::theme::Theme;
use crate::ui::widgets::feedback::{render_load_feedback, styled_label, FeedbackAction};
use crate::ui::widgets::tables::{render_rows, TableConfig};

const RESULT_HEADERS: &[&str] = &["Symbol", "Name", "Price", "Change %"];

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    let view = &state.market.view;

    render_search(ui, state, app, theme);
    ui.add_space(8.0);

    if render_load_feedback(ui, view, "", true, theme) == Some(FeedbackAction::Retry) {
        app.retry_market_data();
    }

    if view.is_visible("stock-details") {
        render_details(ui, view, theme);
        ui.add_space(8.0);
    }

    if view.is_visible("chart-section") {
        ui.horizontal(|ui| {
            let active = state.market.controller.period();
            for period in Period::all() {
                if ui.selectable_label(active == *period, period.label()).clicked() {
                    app.change_timeframe(*period);
                }
            }
        });
        render_chart(ui, CHART_CONTAINER, state.charts.chart_for(CHART_CONTAINER), theme);
    }

    if state.market.controller.symbol().is_none() && view.rows(SEARCH_RESULTS_ID).is_empty() {
        ui.add_space(20.0);
        ui.colored_label(theme.dim, "Search for a stock to see its details.");
    }
}

fn render_search(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    let mut text = state.search.input().to_string();

    ui.horizontal(|ui| {
        let response = ui.add(
            egui::TextEdit::singleline(&mut text)
                .hint_text("Search stocks (e.g. TCS, RELIANCE.NS)")
                .desired_width(320.0),
        );
        if response.changed() {
            app.search_input(&text);
        }
        let entered = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if entered || ui.button("Search").clicked() {
            app.search_submit();
        }
        if state.search.is_pending() {
            ui.spinner();
        }
    });

    let rows = state.market.view.rows(SEARCH_RESULTS_ID);
    if !rows.is_empty() {
        let config = TableConfig {
            scrollable: true,
            max_height: 220.0,
            ..Default::default()
        };
        if let Some(index) = render_rows(ui, SEARCH_RESULTS_ID, config, RESULT_HEADERS, rows, theme) {
            app.select_search_result(index);
        }
    }
}

fn render_details(ui: &mut egui::Ui, view: &ViewModel, theme: &Theme) {
    ui.horizontal(|ui| {
        ui.heading(view.text_or("stock-title", ""));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.colored_label(theme.dim, view.text_or("last-updated", ""));
        });
    });

    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(view.text_or("current-price", "--")).size(24.0).strong());
        styled_label(ui, view, "price-change", theme);
    });

    egui::Grid::new("stock-stats")
        .num_columns(4)
        .spacing([24.0, 4.0])
        .show(ui, |ui| {
            for label in ["Day Low", "Day High", "Volume", "P/E Ratio"] {
                ui.colored_label(theme.dim, label);
            }
            ui.end_row();
            for id in ["day-low", "day-high", "volume", "pe-ratio"] {
                ui.label(view.text_or(id, "--"));
            }
            ui.end_row();
        });
}
