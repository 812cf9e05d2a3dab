//! # Table Components
//!
//! Grids that draw the [`Row`]s a page controller wrote into its view.

use egui;

use crate::app::view::{Cell, Row};
use crate::ui::theme::Theme;

/// Configuration for table styling
pub struct TableConfig {
    pub spacing: [f32; 2],
    pub striped: bool,
    pub scrollable: bool,
    pub max_height: f32,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            spacing: [16.0, 6.0],
            striped: true,
            scrollable: false,
            max_height: 320.0,
        }
    }
}

/// Draw `rows` under `headers`. Returns the index of a clicked row that
/// carries a key.
///
/// Single-cell message rows ("No stocks found") span the grid as plain
/// colored text.
pub fn render_rows(
    ui: &mut egui::Ui,
    id: &str,
    config: TableConfig,
    headers: &[&str],
    rows: &[Row],
    theme: &Theme,
) -> Option<usize> {
    let mut clicked = None;

    let mut table = |ui: &mut egui::Ui| {
        egui::Grid::new(id)
            .num_columns(headers.len())
            .spacing(config.spacing)
            .striped(config.striped)
            .show(ui, |ui| {
                for header in headers {
                    ui.colored_label(theme.selected, *header);
                }
                ui.end_row();

                for (index, row) in rows.iter().enumerate() {
                    if !row.is_selectable() && row.cells.len() == 1 {
                        let color = row_color(row, theme);
                        ui.colored_label(color, &row.cells[0].text);
                        ui.end_row();
                        continue;
                    }

                    for (column, cell) in row.cells.iter().enumerate() {
                        let response = render_cell(ui, cell, theme, row.is_selectable() && column == 0);
                        if row.is_selectable() && response.clicked() {
                            clicked = Some(index);
                        }
                    }
                    ui.end_row();
                }
            });
    };

    if config.scrollable {
        egui::ScrollArea::vertical()
            .id_salt(id)
            .max_height(config.max_height)
            .show(ui, |ui| table(ui));
    } else {
        table(ui);
    }

    clicked
}

fn render_cell(ui: &mut egui::Ui, cell: &Cell, theme: &Theme, link: bool) -> egui::Response {
    if link {
        return ui.link(&cell.text);
    }
    let text = egui::RichText::new(&cell.text);
    let text = match cell.class.as_deref().and_then(|c| theme.class_color(c)) {
        Some(color) => text.color(color),
        None => text,
    };
    ui.add(egui::Label::new(text).sense(egui::Sense::click()))
}

fn row_color(row: &Row, theme: &Theme) -> egui::Color32 {
    row.class
        .as_deref()
        .and_then(|c| theme.class_color(c))
        .unwrap_or(theme.dim)
}

/// Render an empty state message
pub fn render_empty_state(
    ui: &mut egui::Ui,
    primary_text: &str,
    secondary_text: Option<&str>,
    theme: &Theme,
) {
    ui.vertical_centered(|ui| {
        ui.add_space(20.0);
        ui.colored_label(theme.dim, primary_text);
        if let Some(secondary) = secondary_text {
            ui.add_space(10.0);
            ui.colored_label(theme.dim, secondary);
        }
    });
}
