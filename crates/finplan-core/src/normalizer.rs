//! Conversion of raw recurring amounts into their monthly equivalent.

use finplan_domain::Frequency;

/// Returns the monthly-equivalent of `amount` recurring at `frequency`.
///
/// A day counts as 1/30 of a month and a week as 1/4 of a month. This is a
/// fixed policy, not a calendar computation.
pub fn normalize_monthly(amount: f64, frequency: Frequency) -> f64 {
    amount * frequency.monthly_multiplier()
}
