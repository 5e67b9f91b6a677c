//! Facade that pairs the current entry/settings snapshot with its stores.

use finplan_core::{
    entries_of, monthly_amount,
    storage::{EntryStore, SettingsStore},
    CoreError, DashboardSummary, EntryDraft, EntryService, Projection, ProjectionYears,
    SummaryService,
};
use finplan_domain::{EntryId, EntryType, FinancialEntry, HouseholdSettings};
use tracing::{debug, info};

use crate::errors::Result;

/// Holds the working snapshot and writes every change back to the stores.
///
/// Derived figures are recomputed on each read; nothing is cached.
pub struct FinanceSession {
    entry_store: Box<dyn EntryStore>,
    settings_store: Box<dyn SettingsStore>,
    entries: Vec<FinancialEntry>,
    settings: HouseholdSettings,
}

impl FinanceSession {
    pub fn open(entry_store: Box<dyn EntryStore>, settings_store: Box<dyn SettingsStore>) -> Self {
        let entries = entry_store.load_entries();
        let settings = settings_store.load_settings();
        info!(
            entries = entries.len(),
            family_members = settings.family_members,
            "session opened"
        );
        Self {
            entry_store,
            settings_store,
            entries,
            settings,
        }
    }

    /// Discards the in-memory snapshot and reads both stores again.
    pub fn reload(&mut self) {
        self.entries = self.entry_store.load_entries();
        self.settings = self.settings_store.load_settings();
    }

    pub fn entries(&self) -> &[FinancialEntry] {
        &self.entries
    }

    pub fn entries_of(&self, entry_type: EntryType) -> Vec<&FinancialEntry> {
        entries_of(&self.entries, entry_type).collect()
    }

    pub fn settings(&self) -> &HouseholdSettings {
        &self.settings
    }

    pub fn monthly_amount(&self, entry: &FinancialEntry) -> f64 {
        monthly_amount(entry, &self.settings)
    }

    pub fn summary(&self) -> DashboardSummary {
        SummaryService::dashboard(&self.entries, &self.settings)
    }

    pub fn project(&self, years: ProjectionYears) -> Projection {
        self.summary().project(years)
    }

    pub fn add_entry(&mut self, draft: EntryDraft) -> Result<EntryId> {
        let mut next = self.entries.clone();
        let id = EntryService::add(&mut next, draft)?;
        self.commit_entries(next)?;
        debug!(%id, "entry added");
        Ok(id)
    }

    pub fn update_entry(&mut self, id: &EntryId, draft: EntryDraft) -> Result<()> {
        let mut next = self.entries.clone();
        EntryService::update(&mut next, id, draft)?;
        self.commit_entries(next)?;
        debug!(%id, "entry updated");
        Ok(())
    }

    pub fn remove_entry(&mut self, id: &EntryId) -> Result<FinancialEntry> {
        let mut next = self.entries.clone();
        let removed = EntryService::remove(&mut next, id)?;
        self.commit_entries(next)?;
        debug!(%id, "entry removed");
        Ok(removed)
    }

    /// Applies `change` to a copy of the settings and persists it if it succeeds.
    pub fn update_settings<F>(&mut self, change: F) -> Result<()>
    where
        F: FnOnce(&mut HouseholdSettings) -> std::result::Result<(), CoreError>,
    {
        let mut next = self.settings.clone();
        change(&mut next)?;
        self.settings_store.save_settings(&next)?;
        self.settings = next;
        Ok(())
    }

    fn commit_entries(&mut self, next: Vec<FinancialEntry>) -> Result<()> {
        self.entry_store.save_entries(&next)?;
        self.entries = next;
        Ok(())
    }
}
