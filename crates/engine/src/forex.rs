//! Cross-rate derivation through a pivot currency.
//!
//! The rate upstream publishes one table relative to a single pivot (JPY).
//! Any pair is derived from it: `rate(base→target) = table[target] /
//! table[base]`. Missing entries and zero divisors are caller errors
//! (unsupported currencies), not arithmetic surprises.

use serde_json::{json, Value};
use taifin_types::{EngineError, Record};

/// Default target when a lookup names only the base currency.
pub const DEFAULT_TARGET: &str = "TWD";

fn unsupported(pair: &str, reason: &str) -> EngineError {
    EngineError::UnsupportedLookup {
        value: pair.to_string(),
        reason: reason.to_string(),
    }
}

/// Derive `base → target` from a pivot-relative rate table.
pub fn cross_rate(rates: &Record, base: &str, target: &str) -> Result<f64, EngineError> {
    let pair = format!("{base}/{target}");
    let rate_of = |code: &str| rates.get(code).and_then(Value::as_f64);

    let base_rate = rate_of(base).ok_or_else(|| unsupported(&pair, &format!("no pivot rate for {base}")))?;
    let target_rate = rate_of(target).ok_or_else(|| unsupported(&pair, &format!("no pivot rate for {target}")))?;
    if base_rate == 0.0 {
        return Err(unsupported(&pair, &format!("pivot rate for {base} is zero")));
    }
    Ok(target_rate / base_rate)
}

/// Parse a caller-supplied pair: `"USD/EUR"` (also `:` as separator), or a
/// bare `"USD"` against [`DEFAULT_TARGET`]. Codes are upper-cased; anything
/// that is not three ASCII letters per side is rejected.
pub fn parse_pair(lookup: Option<&str>) -> Result<(String, String), EngineError> {
    let raw = lookup
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .ok_or_else(|| unsupported("", "a currency pair like USD/TWD is required"))?;

    let (base, target) = match raw.split_once(|c| c == '/' || c == ':') {
        Some((base, target)) => (base.trim(), target.trim()),
        None => (raw, DEFAULT_TARGET),
    };

    let well_formed = |code: &str| code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic());
    if !well_formed(base) || !well_formed(target) {
        return Err(unsupported(raw, "currency codes must be three letters"));
    }
    Ok((base.to_uppercase(), target.to_uppercase()))
}

/// Success payload for a derived pair rate, rounded to 4 decimal places.
pub fn pair_payload(base: &str, target: &str, rate: f64) -> Value {
    let rounded = (rate * 10_000.0).round() / 10_000.0;
    json!({
        "pair": format!("{base}/{target}"),
        "rate": rounded,
        "source": "Real-time ExchangeRate-API",
        "info": format!("1 {base} ≈ {:.2} {target}", rate),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pivot_table() -> Record {
        serde_json::from_value(json!({
            "JPY": 1.0,
            "TWD": 0.2094,
            "USD": 0.006_667,
            "EUR": 0.006_15,
            "FRZ": 0.0,
        }))
        .expect("rate table")
    }

    #[test]
    fn usd_twd_from_unit_pivot_table() {
        // Direct form of the published example: TWD=31.4, USD=1.0.
        let rates: Record = serde_json::from_value(json!({"TWD": 31.4, "USD": 1.0})).unwrap();
        let rate = cross_rate(&rates, "USD", "TWD").expect("supported pair");
        assert!((rate - 31.4).abs() < 1e-9);
    }

    #[test]
    fn reciprocal_pairs_multiply_to_one() {
        let rates = pivot_table();
        for (base, target) in [("USD", "TWD"), ("EUR", "JPY"), ("TWD", "EUR")] {
            let forward = cross_rate(&rates, base, target).unwrap();
            let backward = cross_rate(&rates, target, base).unwrap();
            assert!((forward * backward - 1.0).abs() < 1e-9, "{base}/{target}");
        }
    }

    #[test]
    fn identity_pair_is_exactly_one() {
        let rate = cross_rate(&pivot_table(), "USD", "USD").unwrap();
        assert_eq!(rate, 1.0);
    }

    #[test]
    fn missing_currency_is_unsupported_not_a_panic() {
        let error = cross_rate(&pivot_table(), "USD", "XXX").unwrap_err();
        assert!(matches!(error, EngineError::UnsupportedLookup { .. }));
    }

    #[test]
    fn zero_pivot_rate_is_guarded() {
        let error = cross_rate(&pivot_table(), "FRZ", "TWD").unwrap_err();
        assert!(matches!(error, EngineError::UnsupportedLookup { .. }));
    }

    #[test]
    fn parse_pair_accepts_pair_and_bare_base() {
        assert_eq!(parse_pair(Some("usd/eur")).unwrap(), ("USD".into(), "EUR".into()));
        assert_eq!(parse_pair(Some("USD:JPY")).unwrap(), ("USD".into(), "JPY".into()));
        assert_eq!(parse_pair(Some(" gbp ")).unwrap(), ("GBP".into(), "TWD".into()));
    }

    #[test]
    fn parse_pair_rejects_garbage() {
        assert!(parse_pair(None).is_err());
        assert!(parse_pair(Some("")).is_err());
        assert!(parse_pair(Some("US/TWD")).is_err());
        assert!(parse_pair(Some("USDT/TWD")).is_err());
        assert!(parse_pair(Some("U2D")).is_err());
    }

    #[test]
    fn payload_rounds_to_four_decimals() {
        let payload = pair_payload("USD", "TWD", 31.415_926_5);
        assert_eq!(payload["rate"], json!(31.4159));
        assert_eq!(payload["pair"], json!("USD/TWD"));
    }
}
