use finplan_core::{EntryDraft, EntryService};
use finplan_domain::{EntryId, EntryType, FinancialEntry, Frequency};

use crate::cli::context::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::{CommandEntry, CommandGroup};

use super::{parse_draft, parse_entry_type, DraftOptions};

const ADD_USAGE: &str =
    "add <asset|liability> <name> <amount> <day|week|month> [--per-person] [--icon NAME]";
const EDIT_USAGE: &str = "edit <id> <name> <amount> <day|week|month> \
     [--type asset|liability] [--per-person|--shared] [--icon NAME|--no-icon]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "list",
            CommandGroup::Entries,
            "List entries with their monthly amount",
            "list [assets|liabilities]",
            cmd_list,
        ),
        CommandEntry::new(
            "add",
            CommandGroup::Entries,
            "Record a recurring asset or liability",
            ADD_USAGE,
            cmd_add,
        ),
        CommandEntry::new(
            "edit",
            CommandGroup::Entries,
            "Change an entry; omitted options keep their current value",
            EDIT_USAGE,
            cmd_edit,
        ),
        CommandEntry::new(
            "remove",
            CommandGroup::Entries,
            "Delete an entry",
            "remove <id>",
            cmd_remove,
        )
        .with_aliases(&["rm"]),
    ]
}

fn cmd_list(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let types = match args.first() {
        None => vec![EntryType::Asset, EntryType::Liability],
        Some(raw) => vec![parse_entry_type(raw)?],
    };

    for entry_type in types {
        let title = match entry_type {
            EntryType::Asset => "Assets",
            EntryType::Liability => "Liabilities",
        };
        output::section(title);
        let entries = context.session.entries_of(entry_type);
        if entries.is_empty() {
            output::info("  No entries.");
            continue;
        }
        for entry in entries {
            output::info(describe(context, entry));
        }
    }
    Ok(())
}

fn describe(context: &ShellContext, entry: &FinancialEntry) -> String {
    let settings = context.session.settings();
    let currency = settings.currency;
    let mut line = format!(
        "  {:<38} {:<20} {}{} = {}/month",
        entry.id.as_str(),
        entry.name,
        output::money(entry.amount, currency),
        entry.frequency.suffix(),
        output::money(context.session.monthly_amount(entry), currency),
    );
    if entry.scales_with_household() {
        line.push_str(&format!(" (per person x{})", settings.family_members));
    }
    line
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [raw_type, rest @ ..] = args else {
        return Err(CommandError::usage(ADD_USAGE));
    };
    let entry_type = parse_entry_type(raw_type)?;
    let seed = EntryDraft::new("", 0.0, Frequency::Month, entry_type);
    let draft = parse_draft(seed, rest, DraftOptions::Add, ADD_USAGE)?;
    let name = draft.name.trim().to_string();
    let id = context.session.add_entry(draft)?;
    output::success(format!("Added {} `{}` ({}).", entry_type, name, id));
    Ok(())
}

fn cmd_edit(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [raw_id, rest @ ..] = args else {
        return Err(CommandError::usage(EDIT_USAGE));
    };
    let id = EntryId::from(*raw_id);
    let seed = EntryService::find(context.session.entries(), &id)
        .map(EntryDraft::from)
        .ok_or_else(|| CommandError::InvalidArguments(format!("No entry with id `{raw_id}`.")))?;
    let draft = parse_draft(seed, rest, DraftOptions::Edit, EDIT_USAGE)?;
    context.session.update_entry(&id, draft)?;
    output::success(format!("Updated entry {}.", id));
    Ok(())
}

fn cmd_remove(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [raw_id] = args else {
        return Err(CommandError::usage("remove <id>"));
    };
    let removed = context.session.remove_entry(&EntryId::from(*raw_id))?;
    output::success(format!("Removed `{}`.", removed.name));
    Ok(())
}
