pub mod entry;
pub mod settings;
pub mod summary;
pub mod system;

use finplan_core::EntryDraft;
use finplan_domain::{EntryType, Frequency};

use crate::cli::context::CommandError;
use crate::cli::registry::{CommandEntry, CommandRegistry};

pub(crate) fn all_definitions() -> Vec<CommandEntry> {
    let mut commands = Vec::new();
    commands.extend(system::definitions());
    commands.extend(entry::definitions());
    commands.extend(summary::definitions());
    commands.extend(settings::definitions());
    commands
}

pub fn register_all(registry: &mut CommandRegistry) {
    for entry in all_definitions() {
        registry.register(entry);
    }
}

/// Options shared by `add` and `edit`; only `edit` may switch the type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DraftOptions {
    Add,
    Edit,
}

/// Fills `draft` from `<name> <amount> <frequency> [options]`.
///
/// Fields not named by an option keep the value already in `draft`, so an
/// edit seeded from the stored entry only changes what the user typed.
pub(crate) fn parse_draft(
    mut draft: EntryDraft,
    args: &[&str],
    options: DraftOptions,
    usage: &str,
) -> Result<EntryDraft, CommandError> {
    let [name, amount, frequency, flags @ ..] = args else {
        return Err(CommandError::usage(usage));
    };
    draft.name = (*name).to_string();
    draft.amount = parse_amount(amount)?;
    draft.frequency = Frequency::parse(frequency).ok_or_else(|| {
        CommandError::InvalidArguments(format!(
            "Unknown frequency `{frequency}`. Use day, week or month."
        ))
    })?;

    let mut flags = flags.iter();
    while let Some(flag) = flags.next() {
        match *flag {
            "--per-person" | "-p" => draft.is_per_person = true,
            "--shared" => draft.is_per_person = false,
            "--icon" => {
                let icon = flags.next().ok_or_else(|| CommandError::usage(usage))?;
                draft.icon = (*icon).to_string();
            }
            "--no-icon" => draft.icon.clear(),
            "--type" if options == DraftOptions::Edit => {
                let raw = flags.next().ok_or_else(|| CommandError::usage(usage))?;
                draft.entry_type = parse_entry_type(raw)?;
            }
            other => {
                return Err(CommandError::InvalidArguments(format!(
                    "Unknown option `{other}`."
                )))
            }
        }
    }
    Ok(draft)
}

pub(crate) fn parse_entry_type(raw: &str) -> Result<EntryType, CommandError> {
    EntryType::parse(raw).ok_or_else(|| {
        CommandError::InvalidArguments(format!(
            "Unknown entry type `{raw}`. Use asset or liability."
        ))
    })
}

pub(crate) fn parse_amount(raw: &str) -> Result<f64, CommandError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| CommandError::InvalidArguments(format!("`{raw}` is not a valid amount.")))
}
