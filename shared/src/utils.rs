//! # Symbol Helpers
//!
//! Conventions for NSE/BSE tickers shared by every screen.
//!
//! - Lookup keys carry the exchange suffix (`TCS.NS`, `RELIANCE.BO`)
//! - Display strips `.NS` only; the lookup key is never modified
//! - Bare input (`tcs`) is normalized to the NSE key (`TCS.NS`)

/// NSE suffix appended to bare symbols.
pub const NSE_SUFFIX: &str = ".NS";

/// BSE suffix.
pub const BSE_SUFFIX: &str = ".BO";

/// Frequently traded NSE symbols offered as autocomplete suggestions.
pub const POPULAR_SYMBOLS: &[&str] = &[
    "RELIANCE.NS",
    "TCS.NS",
    "HDFCBANK.NS",
    "INFY.NS",
    "HINDUNILVR.NS",
    "ICICIBANK.NS",
    "KOTAKBANK.NS",
    "BHARTIARTL.NS",
    "ITC.NS",
    "SBIN.NS",
    "LT.NS",
    "ASIANPAINT.NS",
    "AXISBANK.NS",
    "MARUTI.NS",
    "NESTLEIND.NS",
    "HCLTECH.NS",
    "BAJFINANCE.NS",
    "WIPRO.NS",
    "ULTRACEMCO.NS",
    "TITAN.NS",
    "TATAMOTORS.NS",
    "TATASTEEL.NS",
    "SUNPHARMA.NS",
    "ONGC.NS",
    "POWERGRID.NS",
];

/// Symbol for presentation, with the first `.NS` removed.
///
/// ```
/// assert_eq!(shared::utils::display_symbol("TCS.NS"), "TCS");
/// assert_eq!(shared::utils::display_symbol("RELIANCE.BO"), "RELIANCE.BO");
/// ```
pub fn display_symbol(symbol: &str) -> String {
    symbol.replacen(NSE_SUFFIX, "", 1)
}

/// True when the input already names an exchange-qualified ticker.
pub fn is_direct_symbol(input: &str) -> bool {
    let upper = input.trim().to_ascii_uppercase();
    upper.contains(NSE_SUFFIX) || upper.contains(BSE_SUFFIX)
}

/// Trim and upper-case user input, appending `.NS` when no exchange is given.
///
/// Returns `None` for blank input.
pub fn normalize_symbol(input: &str) -> Option<String> {
    let symbol = input.trim().to_ascii_uppercase();
    if symbol.is_empty() {
        return None;
    }
    if symbol.contains('.') {
        Some(symbol)
    } else {
        Some(format!("{}{}", symbol, NSE_SUFFIX))
    }
}

/// Popular symbols whose display form starts with `prefix`, case-insensitively.
pub fn suggest(prefix: &str, limit: usize) -> Vec<&'static str> {
    let needle = prefix.trim().to_ascii_uppercase();
    if needle.is_empty() {
        return Vec::new();
    }
    POPULAR_SYMBOLS
        .iter()
        .copied()
        .filter(|s| s.starts_with(&needle))
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_symbol_strips_nse_only() {
        assert_eq!(display_symbol("TATASTEEL.NS"), "TATASTEEL");
        assert_eq!(display_symbol("SBIN.BO"), "SBIN.BO");
        assert_eq!(display_symbol("NIFTY"), "NIFTY");
    }

    #[test]
    fn test_direct_symbol_detection() {
        assert!(is_direct_symbol("tcs.ns"));
        assert!(is_direct_symbol(" RELIANCE.BO "));
        assert!(!is_direct_symbol("TATA"));
    }

    #[test]
    fn test_normalize_symbol() {
        assert_eq!(normalize_symbol(" tcs "), Some("TCS.NS".to_string()));
        assert_eq!(normalize_symbol("reliance.bo"), Some("RELIANCE.BO".to_string()));
        assert_eq!(normalize_symbol("   "), None);
    }

    #[test]
    fn test_suggest_matches_prefix() {
        assert_eq!(suggest("tata", 5), vec!["TATAMOTORS.NS", "TATASTEEL.NS"]);
        assert_eq!(suggest("HDFC", 5), vec!["HDFCBANK.NS"]);
        assert!(suggest("", 5).is_empty());
        assert_eq!(suggest("T", 1).len(), 1);
    }
}
