//! Shared display formatting for monetary values.

/// Formats an amount the way the reports print it: whole rupees without a
/// decimal tail, fractional amounts with two places.
pub fn format_amount(value: f64) -> String {
    if value.fract().abs() < 1e-9 {
        format!("{}", value as i64)
    } else {
        format!("{value:.2}")
    }
}
