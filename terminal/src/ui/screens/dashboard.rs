//! # Dashboard Screen
//!
//! Index cards, market sentiment, the NIFTY/SENSEX trend chart and the top
//! stocks table. Clicking a symbol opens it on the market-data screen.

use egui;

use crate::app::pages::dashboard::{CHART_CONTAINER, TOP_STOCKS_TABLE};
use crate::app::view::{ViewBinding, ViewModel};
use crate::app::{App, AppState};
use crate::ui::chart::render_chart;
use crate::ui::theme::Theme;
use crate::ui::widgets::feedback::{render_load_feedback, styled_label};
use crate::ui::widgets::tables::{render_rows, TableConfig};

const HEADERS: &[&str] = &["Symbol", "Name", "Price", "Change", "Change %", "Volume"];

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    let view = &state.dashboard.view;

    render_load_feedback(ui, view, "No dashboard data", false, theme);

    if view.is_visible("market-overview") {
        ui.horizontal(|ui| {
            index_card(ui, view, "NIFTY 50", "nifty", theme);
            index_card(ui, view, "SENSEX", "sensex", theme);
            sentiment_card(ui, view, theme);
        });
        ui.add_space(8.0);
    }

    if view.is_visible("chart-section") {
        ui.heading("Market Trend");
        render_chart(ui, CHART_CONTAINER, state.charts.chart_for(CHART_CONTAINER), theme);
        ui.add_space(8.0);
    }

    if view.is_visible("top-stocks-section") {
        ui.heading("Top Stocks");
        let rows = view.rows(TOP_STOCKS_TABLE);
        let config = TableConfig {
            scrollable: true,
            ..Default::default()
        };
        if let Some(index) = render_rows(ui, TOP_STOCKS_TABLE, config, HEADERS, rows, theme) {
            if let Some(symbol) = rows[index].key.as_deref() {
                app.open_stock(symbol);
            }
        }
    }
}

fn index_card(ui: &mut egui::Ui, view: &ViewModel, title: &str, prefix: &str, theme: &Theme) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_width(180.0);
        ui.vertical(|ui| {
            ui.colored_label(theme.dim, title);
            ui.label(
                egui::RichText::new(view.text_or(&format!("{}-price", prefix), "--"))
                    .size(22.0)
                    .strong(),
            );
            styled_label(ui, view, &format!("{}-change", prefix), theme);
        });
    });
}

fn sentiment_card(ui: &mut egui::Ui, view: &ViewModel, theme: &Theme) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_width(180.0);
        ui.vertical(|ui| {
            ui.colored_label(theme.dim, "Market Sentiment");
            ui.label(egui::RichText::new(view.text_or("sentiment-score", "--")).size(22.0).strong());
            styled_label(ui, view, "sentiment-label", theme);
            ui.colored_label(
                theme.dim,
                format!("{} active stocks", view.text_or("active-stocks", "0")),
            );
        });
    });
}
