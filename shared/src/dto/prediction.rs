//! # Prediction Data Transfer Objects
//!
//! Price predictions produced by the backend model for a single symbol,
//! plus the accuracy and history records kept per symbol.
//!
//! ## Endpoints Using These DTOs
//!
//! - `GET /api/predictions-data/{symbol}` - [`Prediction`]
//! - `GET /api/prediction-accuracy/{symbol}` - `Envelope<PredictionAccuracy>`
//! - `GET /api/prediction-history/{symbol}` - `Envelope<Vec<PredictionHistoryEntry>>`
//!
//! The predictions endpoint may nest the model output under a `prediction`
//! key next to `symbol`, `current_price` and `sentiment_score`. Use
//! [`flatten_prediction`] on the raw JSON before decoding.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

use super::lenient;

/// Categorical trading signal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Recommendation {
    StrongBuy,
    Buy,
    Hold,
    Sell,
    StrongSell,
    /// Anything else the backend sends, kept verbatim. Empty when missing.
    Unknown(String),
}

impl Default for Recommendation {
    fn default() -> Self {
        Recommendation::Unknown(String::new())
    }
}

impl Recommendation {
    /// Parse case-insensitively; `"strong buy"`, `"STRONG_BUY"` and
    /// `"Strong Buy"` are all accepted.
    pub fn parse(raw: &str) -> Self {
        let normalized: String = raw
            .trim()
            .chars()
            .map(|c| if c == '_' || c == '-' { ' ' } else { c.to_ascii_lowercase() })
            .collect();
        match normalized.split_whitespace().collect::<Vec<_>>().join(" ").as_str() {
            "strong buy" => Recommendation::StrongBuy,
            "buy" => Recommendation::Buy,
            "hold" => Recommendation::Hold,
            "sell" => Recommendation::Sell,
            "strong sell" => Recommendation::StrongSell,
            _ => Recommendation::Unknown(raw.trim().to_string()),
        }
    }

    /// Display text; unrecognised values show as received, missing ones as `--`.
    pub fn as_str(&self) -> &str {
        match self {
            Recommendation::StrongBuy => "Strong Buy",
            Recommendation::Buy => "Buy",
            Recommendation::Hold => "Hold",
            Recommendation::Sell => "Sell",
            Recommendation::StrongSell => "Strong Sell",
            Recommendation::Unknown(raw) if raw.is_empty() => "--",
            Recommendation::Unknown(raw) => raw.as_str(),
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Recommendation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Recommendation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = lenient::string(deserializer)?;
        Ok(raw.map(|s| Recommendation::parse(&s)).unwrap_or_default())
    }
}

/// Indicator values computed alongside a prediction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TechnicalIndicators {
    #[serde(default, deserialize_with = "lenient::f64")]
    pub ma_5: Option<f64>,
    #[serde(default, deserialize_with = "lenient::f64")]
    pub ma_10: Option<f64>,
    #[serde(default, deserialize_with = "lenient::f64")]
    pub ma_20: Option<f64>,
    #[serde(default, deserialize_with = "lenient::f64")]
    pub ema_12: Option<f64>,
    #[serde(default, deserialize_with = "lenient::f64")]
    pub ema_26: Option<f64>,
    #[serde(default, deserialize_with = "lenient::f64")]
    pub rsi: Option<f64>,
    #[serde(default, deserialize_with = "lenient::f64")]
    pub macd: Option<f64>,
    #[serde(default, deserialize_with = "lenient::f64")]
    pub macd_signal: Option<f64>,
    /// Percent.
    #[serde(default, deserialize_with = "lenient::f64")]
    pub volatility: Option<f64>,
    #[serde(default, deserialize_with = "lenient::f64")]
    pub volume_ratio: Option<f64>,
    #[serde(default, deserialize_with = "lenient::f64")]
    pub support: Option<f64>,
    #[serde(default, deserialize_with = "lenient::f64")]
    pub resistance: Option<f64>,
    #[serde(default, deserialize_with = "lenient::f64")]
    pub bollinger_upper: Option<f64>,
    #[serde(default, deserialize_with = "lenient::f64")]
    pub bollinger_lower: Option<f64>,
    /// Percent.
    #[serde(default, deserialize_with = "lenient::f64")]
    pub trend_short: Option<f64>,
    /// Percent.
    #[serde(default, deserialize_with = "lenient::f64")]
    pub trend_medium: Option<f64>,
}

/// Count of indicators voting each way.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Signals {
    #[serde(default, deserialize_with = "lenient::u64")]
    pub buy_signals: Option<u64>,
    #[serde(default, deserialize_with = "lenient::u64")]
    pub sell_signals: Option<u64>,
    #[serde(default, deserialize_with = "lenient::f64")]
    pub net_signal: Option<f64>,
}

/// Response of `GET /api/predictions-data/{symbol}` after flattening.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    #[serde(default, deserialize_with = "lenient::string")]
    pub symbol: Option<String>,
    #[serde(default, deserialize_with = "lenient::f64")]
    pub current_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient::f64")]
    pub predicted_price: Option<f64>,
    #[serde(default)]
    pub recommendation: Recommendation,
    /// 0-100.
    #[serde(default, deserialize_with = "lenient::f64")]
    pub confidence: Option<f64>,
    #[serde(default, deserialize_with = "lenient::f64")]
    pub sentiment_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient::f64")]
    pub price_change_percent: Option<f64>,
    #[serde(default)]
    pub technical_indicators: Option<TechnicalIndicators>,
    #[serde(default)]
    pub signals: Option<Signals>,
}

impl Prediction {
    /// Expected move from current to predicted price, in percent.
    ///
    /// `None` when either price is missing or the current price is zero.
    pub fn expected_change_percent(&self) -> Option<f64> {
        let current = self.current_price?;
        let predicted = self.predicted_price?;
        if current == 0.0 {
            return None;
        }
        Some((predicted - current) / current * 100.0)
    }
}

/// Merge a nested `prediction` object into the top level.
///
/// Keys already present at the top level win, except `null`s which are
/// replaced.
pub fn flatten_prediction(mut payload: Value) -> Value {
    let nested = match payload.as_object_mut().and_then(|obj| obj.remove("prediction")) {
        Some(Value::Object(nested)) => nested,
        _ => return payload,
    };
    if let Some(obj) = payload.as_object_mut() {
        for (key, value) in nested {
            let slot = obj.entry(key).or_insert(Value::Null);
            if slot.is_null() {
                *slot = value;
            }
        }
    }
    payload
}

/// Direction-hit statistics for past predictions of one symbol.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionAccuracy {
    #[serde(default, deserialize_with = "lenient::f64")]
    pub accuracy_percent: Option<f64>,
    #[serde(default, deserialize_with = "lenient::u64")]
    pub total_predictions: Option<u64>,
    #[serde(default, deserialize_with = "lenient::u64")]
    pub accurate_predictions: Option<u64>,
    #[serde(default, deserialize_with = "lenient::u64")]
    pub period_days: Option<u64>,
}

/// One stored prediction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionHistoryEntry {
    #[serde(default, deserialize_with = "lenient::f64")]
    pub predicted_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient::f64")]
    pub current_price: Option<f64>,
    #[serde(default)]
    pub recommendation: Recommendation,
    #[serde(default, deserialize_with = "lenient::f64")]
    pub confidence: Option<f64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub prediction_date: Option<String>,
}
