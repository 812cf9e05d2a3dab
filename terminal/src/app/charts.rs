//! # Chart Renderer
//!
//! Backend-agnostic chart lifecycle. A page describes what to draw with a
//! [`ChartSpec`] and hands it to its [`ChartSlot`]; the slot makes sure each
//! container only ever owns one live chart. [`PlotRegistry`] is the backend
//! the egui layer draws from.

use std::collections::BTreeMap;

/// Opaque id of a live chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChartHandle(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    Line,
    Bar,
}

/// Which y scale a dataset is plotted against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub label: String,
    pub kind: SeriesKind,
    pub axis: Axis,
    /// One value per x label; `None` leaves a gap.
    pub values: Vec<Option<f64>>,
    /// Semantic color (`price-positive`, `info`, ...), resolved by the theme.
    pub color_class: String,
}

impl Dataset {
    pub fn line(label: impl Into<String>, values: Vec<Option<f64>>, color_class: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind: SeriesKind::Line,
            axis: Axis::Left,
            values,
            color_class: color_class.into(),
        }
    }

    pub fn bar(label: impl Into<String>, values: Vec<Option<f64>>, color_class: impl Into<String>) -> Self {
        Self {
            kind: SeriesKind::Bar,
            ..Self::line(label, values, color_class)
        }
    }

    pub fn on_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    /// `(index, value)` for every present, finite value.
    pub fn points(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.values
            .iter()
            .enumerate()
            .filter_map(|(i, v)| (*v).filter(|v| v.is_finite()).map(|v| (i, v)))
    }
}

/// Everything needed to draw one chart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    pub x_title: String,
    pub left_title: String,
    /// Set only for dual-axis charts.
    pub right_title: Option<String>,
}

impl ChartSpec {
    /// True when no dataset has a drawable point.
    pub fn is_empty(&self) -> bool {
        self.datasets.iter().all(|d| d.points().next().is_none())
    }

    pub fn is_dual_axis(&self) -> bool {
        self.datasets.iter().any(|d| d.axis == Axis::Right)
    }

    pub fn datasets_on(&self, axis: Axis) -> impl Iterator<Item = &Dataset> {
        self.datasets.iter().filter(move |d| d.axis == axis)
    }
}

/// Something that can draw and tear down charts.
pub trait ChartBackend {
    fn render(&mut self, container: &str, spec: ChartSpec) -> ChartHandle;
    /// False when the handle was not live.
    fn destroy(&mut self, handle: ChartHandle) -> bool;
    fn live_count(&self) -> usize;
}

/// In-memory backend holding the live specs for the UI to draw.
#[derive(Debug, Clone, Default)]
pub struct PlotRegistry {
    next_id: u64,
    live: BTreeMap<ChartHandle, (String, ChartSpec)>,
}

impl PlotRegistry {
    /// Most recent live chart in `container`.
    pub fn chart_for(&self, container: &str) -> Option<&ChartSpec> {
        self.live
            .values()
            .rev()
            .find(|(c, _)| c == container)
            .map(|(_, spec)| spec)
    }

    /// Number of live charts in `container`.
    pub fn count_in(&self, container: &str) -> usize {
        self.live.values().filter(|(c, _)| c == container).count()
    }
}

impl ChartBackend for PlotRegistry {
    fn render(&mut self, container: &str, spec: ChartSpec) -> ChartHandle {
        self.next_id += 1;
        let handle = ChartHandle(self.next_id);
        self.live.insert(handle, (container.to_string(), spec));
        handle
    }

    fn destroy(&mut self, handle: ChartHandle) -> bool {
        self.live.remove(&handle).is_some()
    }

    fn live_count(&self) -> usize {
        self.live.len()
    }
}

/// The single chart a page owns in one container.
#[derive(Debug, Clone)]
pub struct ChartSlot {
    container: &'static str,
    handle: Option<ChartHandle>,
}

impl ChartSlot {
    pub fn new(container: &'static str) -> Self {
        Self {
            container,
            handle: None,
        }
    }

    pub fn container(&self) -> &'static str {
        self.container
    }

    pub fn handle(&self) -> Option<ChartHandle> {
        self.handle
    }

    /// Replace the current chart. An empty spec only removes the old one.
    pub fn render(&mut self, backend: &mut dyn ChartBackend, spec: ChartSpec) -> Option<ChartHandle> {
        self.clear(backend);
        if spec.is_empty() {
            tracing::debug!(container = self.container, "Chart cleared, no data");
            return None;
        }
        let handle = backend.render(self.container, spec);
        self.handle = Some(handle);
        Some(handle)
    }

    pub fn clear(&mut self, backend: &mut dyn ChartBackend) {
        if let Some(handle) = self.handle.take() {
            backend.destroy(handle);
        }
    }
}
