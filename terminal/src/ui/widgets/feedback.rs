//! # Load Feedback
//!
//! Loading spinner, error card and empty state, driven by the visibility a
//! page's load cycle wrote into its view.

use egui;

use crate::app::pages::{EMPTY_ID, ERROR_ID, ERROR_MESSAGE_ID, LOADING_ID};
use crate::app::view::{ViewBinding, ViewModel};
use crate::ui::theme::Theme;
use crate::ui::widgets::tables::render_empty_state;
use crate::utils::format::PLACEHOLDER;

/// What the user did on a feedback widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackAction {
    Retry,
}

/// Draw whichever of loading/error/empty is visible.
///
/// `retry` adds a retry button to the error card.
pub fn render_load_feedback(
    ui: &mut egui::Ui,
    view: &ViewModel,
    empty_text: &str,
    retry: bool,
    theme: &Theme,
) -> Option<FeedbackAction> {
    if view.is_visible(LOADING_ID) {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.colored_label(theme.dim, "Loading...");
        });
    }

    if view.is_visible(EMPTY_ID) {
        render_empty_state(ui, empty_text, None, theme);
    }

    if !view.is_visible(ERROR_ID) {
        return None;
    }

    let mut action = None;
    egui::Frame::group(ui.style())
        .stroke(egui::Stroke::new(1.0, theme.error))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(theme.error, "⚠");
                ui.colored_label(theme.error, view.text_or(ERROR_MESSAGE_ID, ""));
            });
            if retry && ui.button("Retry").clicked() {
                action = Some(FeedbackAction::Retry);
            }
        });
    action
}

/// Label colored by the class the controller set on `id`.
pub fn styled_label(ui: &mut egui::Ui, view: &ViewModel, id: &str, theme: &Theme) -> egui::Response {
    let text = egui::RichText::new(view.text_or(id, PLACEHOLDER));
    let text = match view.class(id).and_then(|c| theme.class_color(c)) {
        Some(color) => text.color(color),
        None => text,
    };
    ui.label(text)
}
