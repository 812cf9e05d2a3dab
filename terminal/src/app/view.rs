//! # View Binding
//!
//! Page controllers never touch egui. They write text, class names,
//! visibility and table rows into a [`ViewBinding`] keyed by element id
//! (`nifty-price`, `error-state`, `top-stocks-table`, ...). The UI layer reads
//! the same ids back out of a [`ViewModel`] when it draws a frame.
//!
//! ```rust
//! use terminal::app::view::{ViewBinding, ViewModel};
//!
//! let mut view = ViewModel::default();
//! view.set_text("nifty-price", "₹18,000");
//! view.set_class("nifty-change", "price-positive");
//! view.show("market-overview");
//!
//! assert_eq!(view.text("nifty-price"), Some("₹18,000"));
//! assert!(view.is_visible("market-overview"));
//! assert!(!view.is_visible("error-state"));
//! ```

use std::collections::HashMap;

/// One cell of a rendered row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cell {
    pub text: String,
    pub class: Option<String>,
}

impl Cell {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            class: None,
        }
    }

    pub fn classed(text: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            class: Some(class.into()),
        }
    }
}

/// A table row, list entry or card.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    /// Value handed back when the row is activated (usually a symbol).
    pub key: Option<String>,
    pub class: Option<String>,
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self {
            key: None,
            class: None,
            cells,
        }
    }

    /// Single-cell placeholder row ("No stocks found").
    pub fn message(text: impl Into<String>, class: impl Into<String>) -> Self {
        Self::new(vec![Cell::new(text)]).with_class(class)
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Text of cell `index`, empty when out of range.
    pub fn cell(&self, index: usize) -> &str {
        self.cells.get(index).map(|c| c.text.as_str()).unwrap_or("")
    }

    /// Rows that can be activated carry a key.
    pub fn is_selectable(&self) -> bool {
        self.key.is_some()
    }
}

/// Element-id addressed access to whatever displays a page.
pub trait ViewBinding {
    fn text(&self, id: &str) -> Option<&str>;
    fn set_text(&mut self, id: &str, text: &str);

    fn class(&self, id: &str) -> Option<&str>;
    fn set_class(&mut self, id: &str, class: &str);

    fn show(&mut self, id: &str);
    fn hide(&mut self, id: &str);
    fn is_visible(&self, id: &str) -> bool;

    fn set_rows(&mut self, id: &str, rows: Vec<Row>);
    fn rows(&self, id: &str) -> &[Row];

    /// Text and class in one call.
    fn set_styled(&mut self, id: &str, text: &str, class: &str) {
        self.set_text(id, text);
        self.set_class(id, class);
    }

    fn set_visible(&mut self, id: &str, visible: bool) {
        if visible {
            self.show(id);
        } else {
            self.hide(id);
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
struct Element {
    text: Option<String>,
    class: Option<String>,
    visible: bool,
    rows: Vec<Row>,
}

/// In-memory [`ViewBinding`]. Elements start hidden and empty.
#[derive(Debug, Clone, Default)]
pub struct ViewModel {
    elements: HashMap<String, Element>,
}

impl ViewModel {
    fn element(&mut self, id: &str) -> &mut Element {
        self.elements.entry(id.to_string()).or_default()
    }

    /// Text of `id`, or `fallback` when it was never set.
    pub fn text_or<'a>(&'a self, id: &str, fallback: &'a str) -> &'a str {
        self.text(id).unwrap_or(fallback)
    }
}

impl ViewBinding for ViewModel {
    fn text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).and_then(|e| e.text.as_deref())
    }

    fn set_text(&mut self, id: &str, text: &str) {
        self.element(id).text = Some(text.to_string());
    }

    fn class(&self, id: &str) -> Option<&str> {
        self.elements.get(id).and_then(|e| e.class.as_deref())
    }

    fn set_class(&mut self, id: &str, class: &str) {
        self.element(id).class = Some(class.to_string());
    }

    fn show(&mut self, id: &str) {
        self.element(id).visible = true;
    }

    fn hide(&mut self, id: &str) {
        self.element(id).visible = false;
    }

    fn is_visible(&self, id: &str) -> bool {
        self.elements.get(id).map(|e| e.visible).unwrap_or(false)
    }

    fn set_rows(&mut self, id: &str, rows: Vec<Row>) {
        self.element(id).rows = rows;
    }

    fn rows(&self, id: &str) -> &[Row] {
        self.elements.get(id).map(|e| e.rows.as_slice()).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_replace_previous_content() {
        let mut view = ViewModel::default();
        assert!(view.rows("search-results").is_empty());

        view.set_rows(
            "search-results",
            vec![Row::new(vec![Cell::new("TCS")]).with_key("TCS.NS")],
        );
        view.set_rows("search-results", vec![Row::message("No stocks found", "text-muted")]);

        let rows = view.rows("search-results");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].cell(0), "No stocks found");
        assert_eq!(rows[0].cell(3), "");
        assert!(!rows[0].is_selectable());
    }

    #[test]
    fn test_styled_and_visibility() {
        let mut view = ViewModel::default();
        view.set_styled("price-change", "+1.20%", "price-positive");
        view.set_visible("chart-section", true);
        view.set_visible("chart-section", false);

        assert_eq!(view.text("price-change"), Some("+1.20%"));
        assert_eq!(view.class("price-change"), Some("price-positive"));
        assert!(!view.is_visible("chart-section"));
        assert_eq!(view.text_or("volume", "--"), "--");
    }
}
