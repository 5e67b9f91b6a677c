//! Per-type monthly totals over an entry snapshot.

use finplan_domain::{EntryType, FinancialEntry, HouseholdSettings};

use crate::{household::apply_household_scale, normalizer::normalize_monthly};

/// Effective monthly amount of a single entry under `settings`.
pub fn monthly_amount(entry: &FinancialEntry, settings: &HouseholdSettings) -> f64 {
    let monthly = normalize_monthly(entry.amount, entry.frequency);
    apply_household_scale(
        monthly,
        entry.entry_type,
        entry.is_per_person,
        settings.household_size(),
    )
}

/// Sums the monthly amounts of every entry of `entry_type`. Empty input sums to zero.
pub fn total_for(
    entries: &[FinancialEntry],
    entry_type: EntryType,
    settings: &HouseholdSettings,
) -> f64 {
    entries_of(entries, entry_type)
        .map(|entry| monthly_amount(entry, settings))
        .sum()
}

/// Entries of `entry_type`, in collection order.
pub fn entries_of(
    entries: &[FinancialEntry],
    entry_type: EntryType,
) -> impl Iterator<Item = &FinancialEntry> {
    entries
        .iter()
        .filter(move |entry| entry.entry_type == entry_type)
}
