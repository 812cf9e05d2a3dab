//! # Trending Tweets Screen
//!
//! Aggregate sentiment of the tweet feed and one card per tweet.

use egui;

use crate::app::pages::trending::{cells, TWEETS_LIST};
use crate::app::view::{Row, ViewBinding, ViewModel};
use crate::app::AppState;
use crate::ui::theme::Theme;
use crate::ui::widgets::feedback::{render_load_feedback, styled_label};

pub fn render(ui: &mut egui::Ui, state: &AppState, theme: &Theme) {
    let view = &state.trending.view;

    render_load_feedback(ui, view, "No trending tweets right now.", false, theme);

    if view.is_visible("sentiment-overview") {
        render_overview(ui, view, theme);
        ui.add_space(8.0);
    }

    if view.is_visible("tweets-container") {
        egui::ScrollArea::vertical().id_salt(TWEETS_LIST).show(ui, |ui| {
            for row in view.rows(TWEETS_LIST) {
                tweet_card(ui, row, theme);
                ui.add_space(6.0);
            }
        });
    }
}

fn render_overview(ui: &mut egui::Ui, view: &ViewModel, theme: &Theme) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.colored_label(theme.dim, "Overall Sentiment");
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(view.text_or("overall-sentiment-score", "--"))
                            .size(22.0)
                            .strong(),
                    );
                    styled_label(ui, view, "overall-sentiment-label", theme);
                });
            });
            ui.separator();
            ui.vertical(|ui| {
                ui.colored_label(theme.dim, "Market Trend");
                styled_label(ui, view, "market-trend", theme);
            });
            ui.separator();
            ui.vertical(|ui| {
                ui.colored_label(theme.dim, "Tweets Analyzed");
                ui.label(view.text_or("tweet-count", "0"));
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.colored_label(
                    theme.dim,
                    format!("Updated {}", view.text_or("last-updated", "--")),
                );
            });
        });
    });
}

fn tweet_card(ui: &mut egui::Ui, row: &Row, theme: &Theme) {
    let accent = row
        .class
        .as_deref()
        .and_then(|c| theme.class_color(c))
        .unwrap_or(theme.dim);

    egui::Frame::group(ui.style())
        .stroke(egui::Stroke::new(1.0, accent))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.strong(row.cell(cells::AUTHOR));
                ui.colored_label(theme.info, row.cell(cells::VERIFIED));
                ui.colored_label(theme.warning, row.cell(cells::RELIABLE));
                ui.colored_label(theme.dim, row.cell(cells::HANDLE));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.colored_label(theme.dim, row.cell(cells::DATE));
                    if let Some(sentiment) = row.cells.get(cells::SENTIMENT) {
                        let color = sentiment
                            .class
                            .as_deref()
                            .and_then(|c| theme.class_color(c))
                            .unwrap_or(theme.normal);
                        ui.colored_label(color, &sentiment.text);
                    }
                });
            });
            ui.label(row.cell(cells::TEXT));
            ui.horizontal(|ui| {
                ui.colored_label(theme.dim, format!("🔁 {}", row.cell(cells::RETWEETS)));
                ui.colored_label(theme.dim, format!("♥ {}", row.cell(cells::LIKES)));
                ui.colored_label(theme.dim, format!("💬 {}", row.cell(cells::REPLIES)));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.colored_label(theme.dim, row.cell(cells::IMPACT));
                });
            });
        });
}
