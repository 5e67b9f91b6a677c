//! Validated edits of a caller-owned entry collection.

use finplan_domain::{EntryId, EntryType, FinancialEntry, Frequency};

use crate::CoreError;

/// Editable fields of an entry, as captured by an input form.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryDraft {
    pub name: String,
    pub amount: f64,
    pub frequency: Frequency,
    pub entry_type: EntryType,
    pub icon: String,
    pub is_per_person: bool,
}

impl EntryDraft {
    pub fn new(
        name: impl Into<String>,
        amount: f64,
        frequency: Frequency,
        entry_type: EntryType,
    ) -> Self {
        Self {
            name: name.into(),
            amount,
            frequency,
            entry_type,
            icon: String::new(),
            is_per_person: false,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn per_person(mut self, is_per_person: bool) -> Self {
        self.is_per_person = is_per_person;
        self
    }

    fn into_entry(self, id: EntryId) -> FinancialEntry {
        let is_per_person = self.entry_type == EntryType::Liability && self.is_per_person;
        FinancialEntry {
            id,
            name: self.name.trim().to_string(),
            amount: self.amount,
            frequency: self.frequency,
            entry_type: self.entry_type,
            icon: self.icon,
            is_per_person,
        }
    }
}

impl From<&FinancialEntry> for EntryDraft {
    /// Pre-fills a draft with the current fields of `entry`.
    fn from(entry: &FinancialEntry) -> Self {
        Self {
            name: entry.name.clone(),
            amount: entry.amount,
            frequency: entry.frequency,
            entry_type: entry.entry_type,
            icon: entry.icon.clone(),
            is_per_person: entry.is_per_person,
        }
    }
}

pub struct EntryService;

impl EntryService {
    /// Appends a new entry and returns its freshly assigned id.
    pub fn add(entries: &mut Vec<FinancialEntry>, draft: EntryDraft) -> Result<EntryId, CoreError> {
        Self::validate(&draft)?;
        let id = EntryId::new();
        entries.push(draft.into_entry(id.clone()));
        Ok(id)
    }

    /// Replaces the fields of entry `id`, keeping its id and position.
    pub fn update(
        entries: &mut [FinancialEntry],
        id: &EntryId,
        draft: EntryDraft,
    ) -> Result<(), CoreError> {
        Self::validate(&draft)?;
        let slot = entries
            .iter_mut()
            .find(|entry| &entry.id == id)
            .ok_or_else(|| CoreError::EntryNotFound(id.to_string()))?;
        *slot = draft.into_entry(id.clone());
        Ok(())
    }

    pub fn remove(
        entries: &mut Vec<FinancialEntry>,
        id: &EntryId,
    ) -> Result<FinancialEntry, CoreError> {
        let index = entries
            .iter()
            .position(|entry| &entry.id == id)
            .ok_or_else(|| CoreError::EntryNotFound(id.to_string()))?;
        Ok(entries.remove(index))
    }

    pub fn find<'a>(entries: &'a [FinancialEntry], id: &EntryId) -> Option<&'a FinancialEntry> {
        entries.iter().find(|entry| &entry.id == id)
    }

    fn validate(draft: &EntryDraft) -> Result<(), CoreError> {
        if draft.name.trim().is_empty() {
            return Err(CoreError::Validation("entry name must not be empty".into()));
        }
        if !draft.amount.is_finite() || draft.amount < 0.0 {
            return Err(CoreError::Validation(format!(
                "amount must be a non-negative number, got {}",
                draft.amount
            )));
        }
        Ok(())
    }
}
