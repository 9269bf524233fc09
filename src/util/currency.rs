//! Rupee formatting with Indian digit grouping.
//!
//! The last three integer digits form one group and every two digits above
//! that form another (`12,34,567`). Fractions keep at most three digits with
//! trailing zeros dropped. Symbol and grouping are fixed.

#[cfg(test)]
#[path = "currency_test.rs"]
mod currency_test;

use super::numeric::round;

pub const CURRENCY_SYMBOL: &str = "₹";

const MAX_FRACTION_DIGITS: usize = 3;

/// Formats `amount` as a rupee string, e.g. `₹12,34,567`.
pub fn format_currency(amount: f64) -> String {
    format!("{CURRENCY_SYMBOL}{}", format_amount(amount))
}

/// Grouped numeral without the currency symbol, e.g. `12,34,567.5`.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub fn format_amount(amount: f64) -> String {
    if amount.is_nan() {
        return "NaN".to_owned();
    }
    if amount.is_infinite() {
        return if amount > 0.0 { "∞".to_owned() } else { "-∞".to_owned() };
    }

    // Scaling overflows for magnitudes near f64::MAX; those have no fraction to round.
    let scaled = round(amount, MAX_FRACTION_DIGITS as i32);
    let rounded = if scaled.is_finite() { scaled } else { amount };
    let sign = if rounded < 0.0 { "-" } else { "" };
    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, rounded.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let grouped = group_indian(int_part);
    if frac_part.is_empty() { format!("{sign}{grouped}") } else { format!("{sign}{grouped}.{frac_part}") }
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_owned();
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
    format!("{},{tail}", groups.join(","))
}
