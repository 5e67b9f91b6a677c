use std::{io, result::Result as StdResult};

use finplan_config::ConfigError;
use finplan_core::CoreError;
use thiserror::Error;

/// Unified error type for the session and shell layers.
#[derive(Error, Debug)]
pub enum FinplanError {
    #[error("Entry not found: {0}")]
    EntryNotFound(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Persistence error: {0}")]
    StorageError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

pub type Result<T> = StdResult<T, FinplanError>;

/// Failures that end the shell itself.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] FinplanError),
    #[error("Terminal error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl From<io::Error> for FinplanError {
    fn from(err: io::Error) -> Self {
        FinplanError::StorageError(err.to_string())
    }
}

impl From<CoreError> for FinplanError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::EntryNotFound(id) => FinplanError::EntryNotFound(id),
            CoreError::Validation(message) => FinplanError::InvalidInput(message),
            CoreError::Storage(message) | CoreError::Serde(message) => {
                FinplanError::StorageError(message)
            }
            CoreError::Io(err) => FinplanError::StorageError(err.to_string()),
        }
    }
}

impl From<ConfigError> for FinplanError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Io(io) => FinplanError::StorageError(io.to_string()),
            ConfigError::Serde(message) => FinplanError::ConfigError(message),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::from(FinplanError::from(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_validation_maps_to_invalid_input() {
        let err = FinplanError::from(CoreError::Validation("bad amount".into()));
        assert!(matches!(err, FinplanError::InvalidInput(message) if message == "bad amount"));
    }

    #[test]
    fn config_serde_maps_to_config_error() {
        let err = CliError::from(ConfigError::Serde("broken".into()));
        assert_eq!(err.to_string(), "Configuration error: broken");
    }
}
