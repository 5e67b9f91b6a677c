//! Shell state, dispatch, and command error handling.

use std::{env, path::PathBuf};

use finplan_config::{Config, ConfigManager};
use finplan_core::{CoreError, ProjectionYears};
use finplan_domain::starter_entries;
use finplan_storage_json::{JsonEntryStore, JsonSettingsStore, StoragePaths};
use strsim::levenshtein;
use thiserror::Error;

use crate::errors::{CliError, FinplanError};
use crate::session::FinanceSession;

use super::commands;
use super::output;
use super::registry::{CommandEntry, CommandRegistry};

/// Overrides the directory holding `config.json` (and, by default, the data files).
pub const HOME_ENV: &str = "FINPLAN_HOME";
/// When set, commands are read line by line from stdin without a prompt.
pub const SCRIPT_ENV: &str = "FINPLAN_CLI_SCRIPT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Core(#[from] FinplanError),
    #[error("exit requested")]
    ExitRequested,
}

impl From<CoreError> for CommandError {
    fn from(err: CoreError) -> Self {
        CommandError::Core(FinplanError::from(err))
    }
}

impl CommandError {
    pub fn usage(usage: &str) -> Self {
        CommandError::InvalidArguments(format!("Usage: {usage}"))
    }
}

pub struct ShellContext {
    pub mode: CliMode,
    pub running: bool,
    pub registry: CommandRegistry,
    pub session: FinanceSession,
    pub config: Config,
}

impl ShellContext {
    /// Loads configuration and opens the JSON stores under the data directory.
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let base = env::var_os(HOME_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| Config::default().resolve_data_dir());
        let config_manager = ConfigManager::with_base_dir(base.clone())?;
        let (config, config_warning) = match config_manager.load() {
            Ok(config) => (config, None),
            Err(err) => (Config::default(), Some(err)),
        };
        crate::init(&config.log_filter);
        if let Some(err) = config_warning {
            tracing::warn!(
                path = %config_manager.config_path().display(),
                "unreadable config ({err}); using defaults"
            );
        }

        let data_dir = config.data_dir.clone().unwrap_or(base);
        let paths = StoragePaths::under(&data_dir);
        let session = FinanceSession::open(
            Box::new(JsonEntryStore::new(paths.entries_file).with_fallback(starter_entries())),
            Box::new(JsonSettingsStore::new(paths.settings_file)),
        );
        Ok(Self::from_parts(mode, session, config))
    }

    pub fn from_parts(mode: CliMode, session: FinanceSession, config: Config) -> Self {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);
        if mode == CliMode::Script {
            colored::control::set_override(false);
        }
        Self {
            mode,
            running: true,
            registry,
            session,
            config,
        }
    }

    pub fn prompt(&self) -> String {
        let balance = self.session.summary().balance;
        let marker = if balance.is_surplus { "+" } else { "-" };
        format!("finplan [{marker}]> ")
    }

    pub fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    /// Canonical names and aliases, for completion.
    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.keys().collect()
    }

    /// Projection horizon from the config, or the smallest valid one if the
    /// configured value is out of range.
    pub fn default_projection_years(&self) -> ProjectionYears {
        ProjectionYears::new(self.config.default_projection_years).unwrap_or_default()
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        let Some(handler) = self.registry.handler(command) else {
            self.suggest_command(raw);
            return Ok(LoopControl::Continue);
        };
        match handler(self, args) {
            Ok(()) => Ok(LoopControl::Continue),
            Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
            Err(err) => Err(err),
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let best = self
            .registry
            .keys()
            .map(|key| (levenshtein(key, input), key))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, best)) = best {
            if distance <= 3 {
                output::info(format!("Suggestion: `{}`?", best));
            }
        }
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        output::error(err);
    }
}
