//! # Chart Module
//!
//! Draws a [`ChartSpec`] from the plot registry with egui_plot.
//!
//! Bars and lines share the x axis (category index, labelled from
//! `spec.labels`). A dual-axis spec is drawn as two plots stacked and linked
//! on x: left-axis datasets on top, right-axis datasets underneath.

use egui::Color32;
use egui_plot::{Bar, BarChart, GridMark, Legend, Line, Plot, PlotPoints, PlotUi};
use std::ops::RangeInclusive;

use crate::app::charts::{Axis, ChartSpec, Dataset, SeriesKind};
use crate::ui::theme::Theme;
use crate::ui::widgets::tables::render_empty_state;

const PLOT_HEIGHT: f32 = 260.0;
const SECONDARY_HEIGHT: f32 = 110.0;

/// Draw the chart registered for `container`, or an empty placeholder.
pub fn render_chart(ui: &mut egui::Ui, container: &str, spec: Option<&ChartSpec>, theme: &Theme) {
    let spec = match spec {
        Some(spec) if !spec.is_empty() => spec,
        _ => {
            render_empty_state(ui, "No chart data available", None, theme);
            return;
        }
    };

    if !spec.title.is_empty() {
        ui.colored_label(theme.dim, &spec.title);
    }

    let labels = spec.labels.clone();
    let link_group = egui::Id::new(container).with("x-link");

    let left = base_plot(container, "left", labels.clone())
        .height(if spec.is_dual_axis() { PLOT_HEIGHT - SECONDARY_HEIGHT } else { PLOT_HEIGHT })
        .y_axis_label(spec.left_title.clone())
        .link_axis(link_group, [true, false]);
    let left = if spec.is_dual_axis() {
        left.show_axes([false, true])
    } else {
        left.x_axis_label(spec.x_title.clone())
    };
    left.show(ui, |plot_ui| {
        for dataset in spec.datasets_on(Axis::Left) {
            draw_dataset(plot_ui, dataset, theme);
        }
    });

    if spec.is_dual_axis() {
        let right_title = spec.right_title.clone().unwrap_or_default();
        base_plot(container, "right", labels)
            .height(SECONDARY_HEIGHT)
            .x_axis_label(spec.x_title.clone())
            .y_axis_label(right_title)
            .link_axis(link_group, [true, false])
            .show(ui, |plot_ui| {
                for dataset in spec.datasets_on(Axis::Right) {
                    draw_dataset(plot_ui, dataset, theme);
                }
            });
    }
}

fn base_plot(container: &str, part: &str, labels: Vec<String>) -> Plot<'static> {
    Plot::new(format!("{}-{}", container, part))
        .legend(Legend::default())
        .allow_scroll(false)
        .x_axis_formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
            category_label(&labels, mark.value)
        })
}

/// Label for an x grid mark: the category name at whole indices only.
fn category_label(labels: &[String], value: f64) -> String {
    if value < 0.0 || value.fract().abs() > f64::EPSILON {
        return String::new();
    }
    labels.get(value as usize).cloned().unwrap_or_default()
}

fn draw_dataset(plot_ui: &mut PlotUi, dataset: &Dataset, theme: &Theme) {
    let color = series_color(dataset, theme);
    match dataset.kind {
        SeriesKind::Line => {
            let points: Vec<[f64; 2]> = dataset.points().map(|(i, v)| [i as f64, v]).collect();
            plot_ui.line(
                Line::new(dataset.label.clone(), PlotPoints::from(points))
                    .color(color)
                    .width(2.0),
            );
        }
        SeriesKind::Bar => {
            let bars: Vec<Bar> = dataset
                .points()
                .map(|(i, v)| Bar::new(i as f64, v).width(0.6))
                .collect();
            plot_ui.bar_chart(
                BarChart::new(dataset.label.clone(), bars).color(color.gamma_multiply(0.6)),
            );
        }
    }
}

fn series_color(dataset: &Dataset, theme: &Theme) -> Color32 {
    theme.class_color(&dataset.color_class).unwrap_or(theme.normal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_label_only_on_whole_indices() {
        let labels = vec!["01 Jan".to_string(), "02 Jan".to_string()];
        assert_eq!(category_label(&labels, 1.0), "02 Jan");
        assert_eq!(category_label(&labels, 0.5), "");
        assert_eq!(category_label(&labels, -1.0), "");
        assert_eq!(category_label(&labels, 5.0), "");
    }

    #[test]
    fn test_series_color_follows_class() {
        let theme = Theme::default();
        let line = Dataset::line("Close Price", vec![Some(1.0)], "price-negative");
        assert_eq!(series_color(&line, &theme), theme.error);
        let bar = Dataset::bar("Volume", vec![Some(1.0)], "unknown");
        assert_eq!(series_color(&bar, &theme), theme.normal);
    }
}
