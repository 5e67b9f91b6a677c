use finplan_core::SettingsService;
use finplan_domain::Currency;

use crate::cli::context::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::{CommandEntry, CommandGroup};

const USAGE: &str = "settings [family <n> | currency <₴|$|€> | job <yes|no>]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "settings",
        CommandGroup::Household,
        "Show or change household settings",
        USAGE,
        cmd_settings,
    )]
}

fn cmd_settings(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] => {
            show(context);
            Ok(())
        }
        ["family", raw] => {
            let members = raw.parse::<u32>().map_err(|_| {
                CommandError::InvalidArguments(format!("`{raw}` is not a whole number."))
            })?;
            context
                .session
                .update_settings(|settings| SettingsService::set_family_members(settings, members))?;
            output::success(format!("Household size set to {members}."));
            Ok(())
        }
        ["currency", raw] => {
            let currency = Currency::parse(raw).ok_or_else(|| {
                CommandError::InvalidArguments(format!("Unknown currency `{raw}`."))
            })?;
            context.session.update_settings(|settings| {
                SettingsService::set_currency(settings, currency);
                Ok(())
            })?;
            output::success(format!("Currency set to {currency}."));
            Ok(())
        }
        ["job", raw] => {
            let has_job = parse_yes_no(raw)?;
            context.session.update_settings(|settings| {
                SettingsService::set_has_job(settings, has_job);
                Ok(())
            })?;
            output::success(format!(
                "Employment set to {}.",
                if has_job { "yes" } else { "no" }
            ));
            Ok(())
        }
        _ => Err(CommandError::usage(USAGE)),
    }
}

fn show(context: &ShellContext) {
    let settings = context.session.settings();
    output::section("Settings");
    output::info(format!("  Currency       : {}", settings.currency));
    output::info(format!("  Family members : {}", settings.family_members));
    output::info(format!(
        "  Employed       : {}",
        if settings.has_job { "yes" } else { "no" }
    ));
}

fn parse_yes_no(raw: &str) -> Result<bool, CommandError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "yes" | "y" | "true" | "on" => Ok(true),
        "no" | "n" | "false" | "off" => Ok(false),
        _ => Err(CommandError::InvalidArguments(format!(
            "Expected yes or no, got `{raw}`."
        ))),
    }
}
