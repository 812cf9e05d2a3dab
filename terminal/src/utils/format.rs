//! # Display Formatting
//!
//! Pure functions turning raw backend values into display strings and
//! semantic class names. Every function is total: `None`, NaN and infinities
//! render as [`PLACEHOLDER`] instead of panicking.
//!
//! Class names mirror the CSS vocabulary the theme understands
//! (`price-positive`, `sentiment-negative`, `bg-success`, ...). The theme in
//! [`crate::ui::theme`] maps them to colors.
//!
//! ## Examples
//!
//! ```rust
//! use terminal::utils::format::*;
//!
//! assert_eq!(format_currency(Some(1234567.891), 2), "₹12,34,567.89");
//! assert_eq!(format_large_number(Some(1_200_000.0)), "1.20M");
//! assert_eq!(format_percentage2(Some(3.456)), "+3.46%");
//! assert_eq!(format_currency2(None), "--");
//! ```

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use shared::dto::Recommendation;

/// Rendered for anything missing or non-finite.
pub const PLACEHOLDER: &str = "--";

const RUPEE: char = '₹';

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// Group an unsigned digit string the Indian way: last three digits, then
/// pairs (`1234567` → `12,34,567`).
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// Indian rupee amount with en-IN grouping and a fixed number of decimals.
///
/// Negative amounts put the sign before the symbol: `-₹20.00`.
pub fn format_currency(value: Option<f64>, decimals: usize) -> String {
    let Some(value) = finite(value) else {
        return PLACEHOLDER.to_string();
    };
    let rounded = format!("{:.*}", decimals, value.abs());
    let (integer, fraction) = match rounded.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (rounded.as_str(), None),
    };
    let is_zero = rounded.chars().all(|c| c == '0' || c == '.');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };
    match fraction {
        Some(fraction) => format!("{}{}{}.{}", sign, RUPEE, group_indian(integer), fraction),
        None => format!("{}{}{}", sign, RUPEE, group_indian(integer)),
    }
}

/// [`format_currency`] with two decimals.
pub fn format_currency2(value: Option<f64>) -> String {
    format_currency(value, 2)
}

/// A number as plain text: integers without a fraction, otherwise the
/// shortest representation (`500`, `72.5`).
pub fn format_plain(value: Option<f64>) -> String {
    let Some(value) = finite(value) else {
        return PLACEHOLDER.to_string();
    };
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Compact magnitude with `B`/`M`/`K` suffixes and two decimals.
pub fn format_large_number(value: Option<f64>) -> String {
    let Some(value) = finite(value) else {
        return PLACEHOLDER.to_string();
    };
    if value >= 1e9 {
        format!("{:.2}B", value / 1e9)
    } else if value >= 1e6 {
        format!("{:.2}M", value / 1e6)
    } else if value >= 1e3 {
        format!("{:.2}K", value / 1e3)
    } else {
        format_plain(Some(value))
    }
}

/// Signed percentage; non-negative values get a leading `+`.
pub fn format_percentage(value: Option<f64>, decimals: usize) -> String {
    let Some(value) = finite(value) else {
        return PLACEHOLDER.to_string();
    };
    // Normalize -0.0 so it prints as "+0.00%".
    let value = if value == 0.0 { 0.0 } else { value };
    let sign = if value >= 0.0 { "+" } else { "" };
    format!("{}{:.*}%", sign, decimals, value)
}

/// [`format_percentage`] with two decimals.
pub fn format_percentage2(value: Option<f64>) -> String {
    format_percentage(value, 2)
}

/// Fixed-point number without any decoration.
pub fn format_fixed(value: Option<f64>, decimals: usize) -> String {
    match finite(value) {
        Some(value) => format!("{:.*}", decimals, value),
        None => PLACEHOLDER.to_string(),
    }
}

/// Direction of a price move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeClass {
    Positive,
    Negative,
    Neutral,
}

impl ChangeClass {
    pub fn css(&self) -> &'static str {
        match self {
            ChangeClass::Positive => "price-positive",
            ChangeClass::Negative => "price-negative",
            ChangeClass::Neutral => "price-neutral",
        }
    }
}

/// Strictly positive, strictly negative, or neutral (including missing).
pub fn color_class_for_change(value: Option<f64>) -> ChangeClass {
    match finite(value) {
        Some(v) if v > 0.0 => ChangeClass::Positive,
        Some(v) if v < 0.0 => ChangeClass::Negative,
        _ => ChangeClass::Neutral,
    }
}

/// Sentiment band of a 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentClass {
    Positive,
    Negative,
    Neutral,
}

impl SentimentClass {
    pub fn css(&self) -> &'static str {
        match self {
            SentimentClass::Positive => "sentiment-positive",
            SentimentClass::Negative => "sentiment-negative",
            SentimentClass::Neutral => "sentiment-neutral",
        }
    }

    /// Left-border accent used on tweet cards.
    pub fn border_css(&self) -> &'static str {
        match self {
            SentimentClass::Positive => "border-start-success",
            SentimentClass::Negative => "border-start-danger",
            SentimentClass::Neutral => "border-start-warning",
        }
    }
}

/// Above 60 positive, below 40 negative, otherwise (or missing) neutral.
pub fn color_class_for_sentiment(score: Option<f64>) -> SentimentClass {
    match finite(score) {
        Some(s) if s > 60.0 => SentimentClass::Positive,
        Some(s) if s < 40.0 => SentimentClass::Negative,
        _ => SentimentClass::Neutral,
    }
}

/// Textual band using the same 60/40 thresholds as
/// [`color_class_for_sentiment`].
pub fn sentiment_label(score: Option<f64>) -> &'static str {
    if finite(score).is_none() {
        return PLACEHOLDER;
    }
    match color_class_for_sentiment(score) {
        SentimentClass::Positive => "Positive",
        SentimentClass::Negative => "Negative",
        SentimentClass::Neutral => "Neutral",
    }
}

/// Textual band split at the 50 midpoint (trending overview).
pub fn midpoint_sentiment_label(score: Option<f64>) -> &'static str {
    match finite(score) {
        Some(s) if s > 50.0 => "Positive",
        Some(s) if s < 50.0 => "Negative",
        Some(_) => "Neutral",
        None => PLACEHOLDER,
    }
}

/// Overall market direction from an average sentiment score, with its
/// text class.
pub fn market_trend(score: Option<f64>) -> (&'static str, &'static str) {
    match finite(score) {
        Some(s) if s > 60.0 => ("Bullish", "text-success"),
        Some(s) if s < 40.0 => ("Bearish", "text-danger"),
        _ => ("Stable", "text-muted"),
    }
}

/// RSI reading with its badge class. Missing RSI reads as neutral.
pub fn rsi_signal(rsi: Option<f64>) -> (&'static str, &'static str) {
    match finite(rsi) {
        Some(r) if r < 30.0 => ("Oversold", "badge bg-success"),
        Some(r) if r > 70.0 => ("Overbought", "badge bg-danger"),
        _ => ("Neutral", "badge bg-secondary"),
    }
}

/// Impact wording from the sign of a polarity.
pub fn impact_label(polarity: Option<f64>) -> &'static str {
    match finite(polarity) {
        Some(p) if p > 0.0 => "Positive",
        Some(p) if p < 0.0 => "Negative",
        _ => "Neutral",
    }
}

/// Badge class for a prediction confidence (0-100).
pub fn confidence_class(confidence: Option<f64>) -> &'static str {
    match finite(confidence) {
        Some(c) if c >= 80.0 => "bg-success",
        Some(c) if c >= 60.0 => "bg-info",
        Some(c) if c >= 40.0 => "bg-warning",
        _ => "bg-danger",
    }
}

/// Badge class for a recommendation.
pub fn recommendation_class(recommendation: &Recommendation) -> &'static str {
    match recommendation {
        Recommendation::StrongBuy | Recommendation::Buy => "bg-success",
        Recommendation::Hold => "bg-warning",
        Recommendation::Sell | Recommendation::StrongSell => "bg-danger",
        Recommendation::Unknown(_) => "bg-secondary",
    }
}

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Parse a backend timestamp into local wall time.
///
/// Offset-carrying timestamps are converted to the local zone. Naive ones are
/// taken as already local. A bare date becomes local midnight.
fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw).or_else(|_| DateTime::parse_from_rfc2822(raw)) {
        return Some(dt.with_timezone(&Local).naive_local());
    }
    if let Some(dt) = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
    {
        return Some(dt);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// en-IN style date and time, e.g. `05 Jan 2024, 03:45 pm`.
pub fn format_date(raw: Option<&str>) -> String {
    raw.and_then(parse_timestamp)
        .map(|dt| dt.format("%d %b %Y, %I:%M %P").to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Short axis label, e.g. `05 Jan`. Unparseable input is returned as-is.
pub fn format_chart_label(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|dt| dt.format("%d %b").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Local time of day for "last updated" stamps, e.g. `03:45:12 pm`.
pub fn format_clock_time(at: DateTime<Local>) -> String {
    at.format("%I:%M:%S %P").to_string()
}
