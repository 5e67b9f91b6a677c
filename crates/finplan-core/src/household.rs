//! Per-person scaling of liabilities.

use finplan_domain::EntryType;

/// Multiplies `monthly_amount` by `household_size` for per-person liabilities.
///
/// Assets are returned unchanged whatever `is_per_person` says. The household
/// size is taken as given; it is sanitized where settings enter the system.
pub fn apply_household_scale(
    monthly_amount: f64,
    entry_type: EntryType,
    is_per_person: bool,
    household_size: f64,
) -> f64 {
    match (entry_type, is_per_person) {
        (EntryType::Liability, true) => monthly_amount * household_size,
        _ => monthly_amount,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assets_are_never_scaled() {
        for flag in [true, false] {
            for size in [1.0, 2.0, 7.0] {
                assert_eq!(apply_household_scale(500.0, EntryType::Asset, flag, size), 500.0);
            }
        }
    }

    #[test]
    fn per_person_liabilities_scale_by_household() {
        assert_eq!(apply_household_scale(9000.0, EntryType::Liability, true, 2.0), 18000.0);
        assert_eq!(apply_household_scale(9000.0, EntryType::Liability, false, 4.0), 9000.0);
    }
}
