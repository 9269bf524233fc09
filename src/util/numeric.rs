//! Numeric rounding, truncation and lenient parsing.
//!
//! Truncation and rounding are distinct policies: `truncate(2.999, 2)` is
//! `2.99`, `round(2.999, 2)` is `3.0`.

#[cfg(test)]
#[path = "numeric_test.rs"]
mod numeric_test;

use serde_json::Value;

/// Decimal places used when callers have no preference.
pub const DEFAULT_PLACES: i32 = 2;

/// Drops digits past `places` without rounding (toward zero).
pub fn truncate(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).trunc() / factor
}

/// Rounds half away from zero at `places`.
pub fn round(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// `part` as a truncated percentage of `total`.
///
/// A zero `total` yields a non-finite result; callers guard it.
pub fn percentage(part: f64, total: f64, places: i32) -> f64 {
    truncate((part / total) * 100.0, places)
}

/// Coerces arbitrary JSON input to a finite number, or `default`.
///
/// Strings are parsed by their leading numeric prefix (`"12.5kg"` is `12.5`).
pub fn parse_numeric(value: &Value, default: f64) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()).unwrap_or(default),
        Value::String(s) => parse_numeric_str(s, default),
        _ => default,
    }
}

/// String form of [`parse_numeric`].
pub fn parse_numeric_str(raw: &str, default: f64) -> f64 {
    let trimmed = raw.trim_start();
    let prefix = &trimmed[..numeric_prefix_len(trimmed)];
    prefix.parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or(default)
}

/// Length of the longest `[+-]digits[.digits][e[+-]digits]` prefix.
fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut idx = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        idx += 1;
    }
    let int_start = idx;
    while bytes.get(idx).is_some_and(u8::is_ascii_digit) {
        idx += 1;
    }
    let mut digits = idx - int_start;
    if bytes.get(idx) == Some(&b'.') {
        let frac_start = idx + 1;
        let mut end = frac_start;
        while bytes.get(end).is_some_and(u8::is_ascii_digit) {
            end += 1;
        }
        if digits > 0 || end > frac_start {
            digits += end - frac_start;
            idx = end;
        }
    }
    if digits == 0 {
        return 0;
    }
    if matches!(bytes.get(idx), Some(b'e' | b'E')) {
        let mut end = idx + 1;
        if matches!(bytes.get(end), Some(b'+' | b'-')) {
            end += 1;
        }
        let exp_start = end;
        while bytes.get(end).is_some_and(u8::is_ascii_digit) {
            end += 1;
        }
        if end > exp_start {
            idx = end;
        }
    }
    idx
}
