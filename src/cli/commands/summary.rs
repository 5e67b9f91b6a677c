use finplan_core::ProjectionYears;
use finplan_domain::EntryType;

use crate::cli::context::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::{CommandEntry, CommandGroup};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "summary",
            CommandGroup::Reports,
            "Show monthly totals and balance",
            "summary",
            cmd_summary,
        ),
        CommandEntry::new(
            "project",
            CommandGroup::Reports,
            "Extrapolate the monthly balance over years",
            "project [years 1-100]",
            cmd_project,
        ),
    ]
}

fn cmd_summary(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let summary = context.session.summary();
    let currency = context.session.settings().currency;

    output::section("Monthly balance");
    output::info(format!(
        "  Assets      : {}",
        output::money(summary.total_assets, currency)
    ));
    output::info(format!(
        "  Liabilities : {}",
        output::money(summary.total_liabilities, currency)
    ));
    output::info(format!(
        "  Balance     : {}",
        output::signed(
            output::money(summary.balance.balance, currency),
            summary.is_surplus()
        )
    ));
    let status = if summary.is_surplus() {
        "SURPLUS"
    } else {
        "DEFICIT"
    };
    output::info(format!(
        "  Status      : {}",
        output::signed(status, summary.is_surplus())
    ));

    let breakdown = summary.breakdown();
    if breakdown.is_empty() {
        output::info("  No data to break down.");
    } else {
        for slice in breakdown {
            let label = match slice.entry_type {
                EntryType::Asset => "Assets",
                EntryType::Liability => "Liabilities",
            };
            output::info(format!("  {:<12}: {:.1}%", label, slice.share * 100.0));
        }
    }
    Ok(())
}

fn cmd_project(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let years = match args {
        [] => context.default_projection_years(),
        [raw] => {
            let value = raw.parse::<u32>().map_err(|_| {
                CommandError::InvalidArguments(format!("`{raw}` is not a whole number of years."))
            })?;
            ProjectionYears::new(value)?
        }
        _ => return Err(CommandError::usage("project [years 1-100]")),
    };

    let summary = context.session.summary();
    let projection = summary.project(years);
    let currency = context.session.settings().currency;

    output::section(format!("Projection over {}", years));
    output::info(format!(
        "  Monthly balance : {}",
        output::money(summary.balance.balance, currency)
    ));
    output::info(format!(
        "  Projected total : {}",
        output::signed(
            output::money(projection.projected_total, currency),
            projection.is_positive
        )
    ));
    Ok(())
}
