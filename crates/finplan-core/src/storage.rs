use std::sync::RwLock;

use finplan_domain::{FinancialEntry, HouseholdSettings};

use crate::CoreError;

/// Persistence backend for the entry collection.
///
/// Loading never fails: a backend that cannot read its data substitutes a
/// default state instead of surfacing the error to callers.
pub trait EntryStore: Send + Sync {
    fn load_entries(&self) -> Vec<FinancialEntry>;
    fn save_entries(&self, entries: &[FinancialEntry]) -> Result<(), CoreError>;
}

/// Persistence backend for the single [`HouseholdSettings`] record. Loading fails closed.
pub trait SettingsStore: Send + Sync {
    fn load_settings(&self) -> HouseholdSettings;
    fn save_settings(&self, settings: &HouseholdSettings) -> Result<(), CoreError>;
}

/// Keeps entries in memory; useful for tests and embedding.
#[derive(Debug, Default)]
pub struct InMemoryEntryStore {
    entries: RwLock<Vec<FinancialEntry>>,
}

impl InMemoryEntryStore {
    pub fn new(entries: Vec<FinancialEntry>) -> Self {
        Self {
            entries: RwLock::new(entries),
        }
    }
}

impl EntryStore for InMemoryEntryStore {
    fn load_entries(&self) -> Vec<FinancialEntry> {
        self.entries
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    fn save_entries(&self, entries: &[FinancialEntry]) -> Result<(), CoreError> {
        let mut guard = self
            .entries
            .write()
            .map_err(|_| CoreError::Storage("entry store lock poisoned".into()))?;
        *guard = entries.to_vec();
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct InMemorySettingsStore {
    settings: RwLock<HouseholdSettings>,
}

impl InMemorySettingsStore {
    pub fn new(settings: HouseholdSettings) -> Self {
        Self {
            settings: RwLock::new(settings),
        }
    }
}

impl SettingsStore for InMemorySettingsStore {
    fn load_settings(&self) -> HouseholdSettings {
        self.settings
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    fn save_settings(&self, settings: &HouseholdSettings) -> Result<(), CoreError> {
        let mut guard = self
            .settings
            .write()
            .map_err(|_| CoreError::Storage("settings store lock poisoned".into()))?;
        *guard = settings.clone();
        Ok(())
    }
}
