use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Stores application preferences that are not part of the household data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional custom directory for entries and settings. Defaults to the platform data dir.
    pub data_dir: Option<PathBuf>,

    #[serde(default = "Config::default_projection_years_value")]
    pub default_projection_years: u32,

    #[serde(default = "Config::default_log_filter_value")]
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            default_projection_years: Self::default_projection_years_value(),
            log_filter: Self::default_log_filter_value(),
        }
    }
}

impl Config {
    pub fn default_projection_years_value() -> u32 {
        1
    }

    pub fn default_log_filter_value() -> String {
        "finplan=info".into()
    }

    pub fn resolve_data_dir(&self) -> PathBuf {
        if let Some(path) = &self.data_dir {
            return path.clone();
        }

        let base = dirs::data_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        base.join("finplan")
    }
}
