//! Dashboard figures derived from an entry snapshot.

use finplan_domain::{EntryType, FinancialEntry, HouseholdSettings};

use crate::{
    aggregate::total_for,
    balance::{compute_balance, Balance},
    projection::{Projection, ProjectionYears},
};

/// One slice of the asset/liability breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownSlice {
    pub entry_type: EntryType,
    pub value: f64,
    /// Fraction of the sum of all slices, in `[0, 1]`.
    pub share: f64,
}

/// Everything the dashboard shows for one snapshot of entries and settings.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub total_assets: f64,
    pub total_liabilities: f64,
    pub balance: Balance,
    pub entry_count: usize,
}

impl DashboardSummary {
    pub fn is_surplus(&self) -> bool {
        self.balance.is_surplus
    }

    pub fn project(&self, years: ProjectionYears) -> Projection {
        years.project(self.balance.balance)
    }

    /// Slices with a strictly positive value. Empty when there is nothing to
    /// chart, or when the totals overflowed and no share can be computed.
    pub fn breakdown(&self) -> Vec<BreakdownSlice> {
        let slices: Vec<(EntryType, f64)> = [
            (EntryType::Asset, self.total_assets),
            (EntryType::Liability, self.total_liabilities),
        ]
        .into_iter()
        .filter(|(_, value)| *value > 0.0)
        .collect();
        let sum: f64 = slices.iter().map(|(_, value)| value).sum();
        if !sum.is_finite() {
            return Vec::new();
        }
        slices
            .into_iter()
            .map(|(entry_type, value)| BreakdownSlice {
                entry_type,
                value,
                share: value / sum,
            })
            .collect()
    }
}

pub struct SummaryService;

impl SummaryService {
    /// Recomputes the dashboard from scratch; nothing is cached between calls.
    pub fn dashboard(entries: &[FinancialEntry], settings: &HouseholdSettings) -> DashboardSummary {
        let total_assets = total_for(entries, EntryType::Asset, settings);
        let total_liabilities = total_for(entries, EntryType::Liability, settings);
        DashboardSummary {
            total_assets,
            total_liabilities,
            balance: compute_balance(total_assets, total_liabilities),
            entry_count: entries.len(),
        }
    }
}
