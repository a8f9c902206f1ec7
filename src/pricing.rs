//! Currency conversion and price display formatting.

use crate::market::{Currency, BASE_CURRENCY};

/// Amounts at or above this are shown with grouping separators.
pub const GROUPING_THRESHOLD: f64 = 1000.0;

/// Convert `amount` between two currencies through the base currency.
///
/// No rounding happens here; that is the formatter's job.
pub fn convert(amount: f64, from: Currency, to: Currency) -> f64 {
    let base_amount = amount / from.rate();
    base_amount * to.rate()
}

/// Format an amount for display.
///
/// `>= 1000`: en-IN digit grouping (`1,23,456`), no fraction digits.
/// Below that: rounded to the nearest integer, no grouping.
pub fn format_price(amount: f64) -> String {
    if amount.is_nan() {
        return "NaN".to_string();
    }
    if amount >= GROUPING_THRESHOLD {
        if amount.is_infinite() {
            return "∞".to_string();
        }
        // f64::round is half-away-from-zero, which is what the locale
        // formatter does for positive values.
        let digits = format!("{:.0}", amount.round());
        return group_en_in(&digits);
    }
    if amount == f64::NEG_INFINITY {
        return "-Infinity".to_string();
    }
    let rounded = round_half_up(amount);
    if rounded == 0.0 {
        // Avoid "-0".
        return "0".to_string();
    }
    format!("{:.0}", rounded)
}

/// Price node text for a base-currency amount shown in `currency`.
pub fn render_price(base_amount: f64, currency: Currency) -> String {
    format_price(convert(base_amount, BASE_CURRENCY, currency))
}

/// Round to the nearest integer with halves going toward positive infinity.
fn round_half_up(n: f64) -> f64 {
    (n + 0.5).floor()
}

/// Insert en-IN separators into a string of ASCII digits: the last three
/// digits form one group, everything before is grouped in pairs.
fn group_en_in(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);

    let mut result = String::new();
    for (i, c) in head.chars().rev().enumerate() {
        if i > 0 && i % 2 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    let mut result: String = result.chars().rev().collect();
    result.push(',');
    result.push_str(tail);
    result
}
