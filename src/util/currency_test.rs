use super::*;

#[test]
fn format_currency_uses_indian_grouping() {
    assert_eq!(format_currency(1_234_567.0), "₹12,34,567");
    assert_eq!(format_currency(100_000.0), "₹1,00,000");
    assert_eq!(format_currency(10_000_000.0), "₹1,00,00,000");
    assert_eq!(format_currency(1_000.0), "₹1,000");
}

#[test]
fn format_currency_leaves_small_amounts_ungrouped() {
    assert_eq!(format_currency(0.0), "₹0");
    assert_eq!(format_currency(999.0), "₹999");
}

#[test]
fn format_amount_keeps_up_to_three_fraction_digits() {
    assert_eq!(format_amount(1_234.5), "1,234.5");
    assert_eq!(format_amount(12.3456), "12.346");
    assert_eq!(format_amount(250.10), "250.1");
    assert_eq!(format_amount(0.0004), "0");
}

#[test]
fn format_amount_omits_symbol() {
    assert!(!format_amount(1_234_567.0).contains(CURRENCY_SYMBOL));
    assert_eq!(format_amount(1_234_567.0), "12,34,567");
}

#[test]
fn format_amount_handles_sign_and_non_finite() {
    assert_eq!(format_amount(-1_234.0), "-1,234");
    assert_eq!(format_amount(f64::NAN), "NaN");
    assert_eq!(format_amount(f64::INFINITY), "∞");
    assert_eq!(format_amount(f64::NEG_INFINITY), "-∞");
}

#[test]
fn format_currency_handles_huge_finite_amounts() {
    let rendered = format_currency(1e306);
    assert!(!rendered.contains("inf"), "got {rendered}");
    let numeral = rendered.strip_prefix(CURRENCY_SYMBOL).unwrap();
    assert!(numeral.chars().all(|c| c.is_ascii_digit() || c == ','));
    assert!(numeral.chars().filter(char::is_ascii_digit).count() > 300);
    let groups: Vec<&str> = numeral.split(',').collect();
    assert_eq!(groups.last().unwrap().len(), 3);
    assert!(groups[1..groups.len() - 1].iter().all(|g| g.len() == 2));
    assert!(format_amount(-1e306).starts_with('-'));
}
