use std::{
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use finplan_core::{
    storage::{EntryStore, SettingsStore},
    CoreError,
};
use finplan_domain::{FinancialEntry, HouseholdSettings};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

pub const ENTRIES_SCHEMA_VERSION: u32 = 1;
const ENTRIES_FILE: &str = "entries.json";
const SETTINGS_FILE: &str = "settings.json";
const TMP_SUFFIX: &str = "tmp";

/// Locations of the two JSON documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePaths {
    pub entries_file: PathBuf,
    pub settings_file: PathBuf,
}

impl StoragePaths {
    pub fn under(root: &Path) -> Self {
        Self {
            entries_file: root.join(ENTRIES_FILE),
            settings_file: root.join(SETTINGS_FILE),
        }
    }
}

#[derive(Serialize)]
struct EntriesDocument<'a> {
    schema_version: u32,
    saved_at: DateTime<Utc>,
    entries: &'a [FinancialEntry],
}

/// Filesystem-backed JSON persistence for the entry collection.
///
/// Both the versioned document written by [`EntryStore::save_entries`] and a
/// bare array of entries are accepted on load.
#[derive(Debug, Clone)]
pub struct JsonEntryStore {
    path: PathBuf,
    fallback: Vec<FinancialEntry>,
}

impl JsonEntryStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            fallback: Vec::new(),
        }
    }

    /// Entries substituted when the file is missing or unreadable.
    pub fn with_fallback(mut self, entries: Vec<FinancialEntry>) -> Self {
        self.fallback = entries;
        self
    }

    /// Reads the file, reporting I/O and syntax errors instead of falling back.
    pub fn try_load(&self) -> Result<Vec<FinancialEntry>, CoreError> {
        let data = fs::read_to_string(&self.path)?;
        let document: Value =
            serde_json::from_str(&data).map_err(|err| CoreError::Serde(err.to_string()))?;
        let items = match document {
            Value::Array(items) => items,
            Value::Object(mut map) => match map.remove("entries") {
                Some(Value::Array(items)) => items,
                _ => {
                    return Err(CoreError::Serde(
                        "document has no `entries` array".into(),
                    ))
                }
            },
            _ => {
                return Err(CoreError::Serde(
                    "expected an array or an entries document".into(),
                ))
            }
        };
        Ok(decode_entries(items))
    }
}

impl EntryStore for JsonEntryStore {
    fn load_entries(&self) -> Vec<FinancialEntry> {
        match self.try_load() {
            Ok(entries) => {
                debug!(path = %self.path.display(), count = entries.len(), "loaded entries");
                entries
            }
            Err(CoreError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no entries file; using fallback");
                self.fallback.clone()
            }
            Err(err) => {
                warn!(path = %self.path.display(), "unreadable entries file ({err}); using fallback");
                self.fallback.clone()
            }
        }
    }

    fn save_entries(&self, entries: &[FinancialEntry]) -> Result<(), CoreError> {
        let document = EntriesDocument {
            schema_version: ENTRIES_SCHEMA_VERSION,
            saved_at: Utc::now(),
            entries,
        };
        let json = serde_json::to_string_pretty(&document)
            .map_err(|err| CoreError::Serde(err.to_string()))?;
        save_atomic(&self.path, &json)?;
        debug!(path = %self.path.display(), count = entries.len(), "saved entries");
        Ok(())
    }
}

/// Decodes each element on its own; elements that do not form a valid entry
/// (for example an unknown `frequency` or `type`) are dropped.
fn decode_entries(items: Vec<Value>) -> Vec<FinancialEntry> {
    items
        .into_iter()
        .enumerate()
        .filter_map(
            |(index, item)| match serde_json::from_value::<FinancialEntry>(item) {
                Ok(entry) => Some(entry),
                Err(err) => {
                    warn!(index, "skipping malformed entry: {err}");
                    None
                }
            },
        )
        .collect()
}

/// Filesystem-backed JSON persistence for [`HouseholdSettings`].
#[derive(Debug, Clone)]
pub struct JsonSettingsStore {
    path: PathBuf,
}

impl JsonSettingsStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn try_load(&self) -> Result<HouseholdSettings, CoreError> {
        let data = fs::read_to_string(&self.path)?;
        serde_json::from_str(&data).map_err(|err| CoreError::Serde(err.to_string()))
    }
}

impl SettingsStore for JsonSettingsStore {
    fn load_settings(&self) -> HouseholdSettings {
        match self.try_load() {
            Ok(settings) => settings,
            Err(CoreError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no settings file; using defaults");
                HouseholdSettings::default()
            }
            Err(err) => {
                warn!(path = %self.path.display(), "unreadable settings file ({err}); using defaults");
                HouseholdSettings::default()
            }
        }
    }

    fn save_settings(&self, settings: &HouseholdSettings) -> Result<(), CoreError> {
        let json = serde_json::to_string_pretty(settings)
            .map_err(|err| CoreError::Serde(err.to_string()))?;
        save_atomic(&self.path, &json)
    }
}

fn save_atomic(path: &Path, data: &str) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp = tmp_path(path);
    write_file(&tmp, data)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_file(path: &Path, data: &str) -> Result<(), CoreError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tmp_path_appends_suffix_to_extension() {
        assert_eq!(
            tmp_path(Path::new("/data/entries.json")),
            PathBuf::from("/data/entries.json.tmp")
        );
        assert_eq!(tmp_path(Path::new("/data/entries")), PathBuf::from("/data/entries.tmp"));
    }
}
