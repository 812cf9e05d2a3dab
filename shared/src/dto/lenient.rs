//! Forgiving decoders for loosely typed backend fields.
//!
//! The backend sometimes sends `null`, omits a field, or serializes a number
//! as a string. These helpers map anything unusable to `None` instead of
//! failing the enclosing payload.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decode a number, numeric string, or anything else (as `None`).
pub fn f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    })
    .filter(|v| v.is_finite()))
}

/// Decode a non-negative count. Fractions are truncated, negatives dropped.
pub fn u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = self::f64(deserializer)?;
    Ok(value.filter(|v| *v >= 0.0).map(|v| v as u64))
}

/// Decode a string, accepting numbers and booleans as their text form.
pub fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }))
}

/// Decode a flag; anything other than `true` (or "true") is `false`.
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(b)) => b,
        Some(Value::String(s)) => s.eq_ignore_ascii_case("true"),
        _ => false,
    })
}

/// Decode a nested object, treating `null` as its default.
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "super::f64")]
        price: Option<f64>,
        #[serde(default, deserialize_with = "super::u64")]
        count: Option<u64>,
        #[serde(default, deserialize_with = "super::flag")]
        verified: bool,
    }

    #[test]
    fn test_numbers_strings_and_garbage() {
        let p: Probe = serde_json::from_str(r#"{"price": 12.5, "count": 3, "verified": true}"#).unwrap();
        assert_eq!(p.price, Some(12.5));
        assert_eq!(p.count, Some(3));
        assert!(p.verified);

        let p: Probe = serde_json::from_str(r#"{"price": "99.1", "count": -4}"#).unwrap();
        assert_eq!(p.price, Some(99.1));
        assert_eq!(p.count, None);
        assert!(!p.verified);

        let p: Probe = serde_json::from_str(r#"{"price": "N/A", "count": null, "verified": "yes"}"#).unwrap();
        assert_eq!(p.price, None);
        assert_eq!(p.count, None);
        assert!(!p.verified);
    }

    #[test]
    fn test_missing_fields_default_to_none() {
        let p: Probe = serde_json::from_str("{}").unwrap();
        assert_eq!(p.price, None);
        assert_eq!(p.count, None);
    }
}
