//! Price and mileage parsing for locale-formatted listing values.
//!
//! German exports write `"12.345,67 €"` and `"45.000 km"`: the period groups
//! thousands and the comma marks decimals. Parsing never fails hard; an
//! unusable value becomes `None` and the caller applies its default.

use serde_json::Value;

/// Currency markers stripped before numeric parsing.
const CURRENCY_MARKERS: [&str; 5] = ["€", "$", "£", "¥", "EUR"];

/// Distance unit suffix stripped from mileage strings.
const KM_SUFFIX: &str = "km";

/// Normalizes a raw price value to whole currency units.
///
/// Numbers are truncated toward zero. Strings are cleaned with
/// [`parse_amount`]. Any other JSON type yields `None`.
#[must_use]
pub fn normalize_price(value: &Value) -> Option<i64> {
    normalize_amount(value)
}

/// Normalizes a raw mileage value to whole kilometres.
///
/// Same rules as [`normalize_price`]; `"45.000 km"` becomes `45000`.
#[must_use]
pub fn normalize_mileage(value: &Value) -> Option<i64> {
    normalize_amount(value)
}

fn normalize_amount(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().and_then(truncate_finite)),
        Value::String(s) => parse_amount(s),
        _ => None,
    }
}

/// Parses a locale-formatted amount such as `"12.345,67 €"` or `"45.000 km"`.
///
/// Steps: drop currency markers and a `km` unit, drop every period and
/// whitespace character, turn the remaining comma into a decimal point,
/// parse as a float and truncate toward zero.
///
/// Returns `None` for empty, non-numeric or non-finite input.
#[must_use]
pub fn parse_amount(raw: &str) -> Option<i64> {
    let mut cleaned = raw.to_owned();
    for marker in CURRENCY_MARKERS {
        cleaned = cleaned.replace(marker, "");
    }
    cleaned = cleaned.replace(KM_SUFFIX, "");

    let numeric: String = cleaned
        .chars()
        .filter(|c| *c != '.' && !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    if numeric.is_empty() {
        return None;
    }
    numeric.parse::<f64>().ok().and_then(truncate_finite)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn truncate_finite(value: f64) -> Option<i64> {
    if !value.is_finite() {
        return None;
    }
    let truncated = value.trunc();
    if truncated < i64::MIN as f64 || truncated > i64::MAX as f64 {
        return None;
    }
    Some(truncated as i64)
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
