//! Domain types representing recurring assets and liabilities.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

/// Opaque identifier of a [`FinancialEntry`].
///
/// New entries receive a v4 UUID; identifiers loaded from older data are kept
/// verbatim, whatever their shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for EntryId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for EntryId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Classifies whether an entry adds to or subtracts from the balance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    Asset,
    Liability,
}

impl EntryType {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "asset" | "assets" | "income" => Some(EntryType::Asset),
            "liability" | "liabilities" | "expense" => Some(EntryType::Liability),
            _ => None,
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntryType::Asset => "Asset",
            EntryType::Liability => "Liability",
        };
        f.write_str(label)
    }
}

/// A recorded recurring asset or liability.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FinancialEntry {
    pub id: EntryId,
    pub name: String,
    pub amount: f64,
    pub frequency: Frequency,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub icon: String,
    #[serde(default)]
    pub is_per_person: bool,
}

impl FinancialEntry {
    pub fn new(
        name: impl Into<String>,
        amount: f64,
        frequency: Frequency,
        entry_type: EntryType,
    ) -> Self {
        Self {
            id: EntryId::new(),
            name: name.into(),
            amount,
            frequency,
            entry_type,
            icon: String::new(),
            is_per_person: false,
        }
    }

    pub fn with_id(mut self, id: impl Into<EntryId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn per_person(mut self, is_per_person: bool) -> Self {
        self.is_per_person = is_per_person;
        self
    }

    pub fn is_asset(&self) -> bool {
        self.entry_type == EntryType::Asset
    }

    pub fn is_liability(&self) -> bool {
        self.entry_type == EntryType::Liability
    }

    /// Per-person scaling only applies to liabilities; the flag is ignored on assets.
    pub fn scales_with_household(&self) -> bool {
        self.is_liability() && self.is_per_person
    }
}

/// The starter entries offered on first launch.
pub fn starter_entries() -> Vec<FinancialEntry> {
    vec![
        FinancialEntry::new("Salary", 20000.0, Frequency::Month, EntryType::Asset)
            .with_id("1")
            .with_icon("Wallet"),
        FinancialEntry::new("Groceries", 300.0, Frequency::Day, EntryType::Liability)
            .with_id("2")
            .with_icon("ShoppingBasket")
            .per_person(true),
        FinancialEntry::new("Rent", 10000.0, Frequency::Month, EntryType::Liability)
            .with_id("3")
            .with_icon("Home"),
    ]
}
