//! # Navigation Bar
//!
//! Screen tabs plus the refresh control for the current screen.

use egui;

use crate::app::{AppState, Screen};
use crate::ui::theme::Theme;

/// What the user picked in the nav bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Select(Screen),
    Refresh,
}

/// Render the tab strip. Returns at most one action per frame.
pub fn render_nav_bar(ui: &mut egui::Ui, state: &AppState, theme: &Theme) -> Option<NavAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        ui.set_height(32.0);
        ui.colored_label(theme.selected, egui::RichText::new("StockSense").strong());
        ui.add_space(16.0);

        for screen in Screen::all() {
            if ui
                .selectable_label(state.screen == *screen, screen.title())
                .clicked()
            {
                action = Some(NavAction::Select(*screen));
            }
        }

        if matches!(state.screen, Screen::Dashboard | Screen::Trending) {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("⟳ Refresh").clicked() {
                    action = Some(NavAction::Refresh);
                }
            });
        }
    });

    action
}
