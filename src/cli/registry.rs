//! Command table: canonical names, aliases, and the help grouping.

use std::collections::HashMap;

use crate::cli::context::{CommandResult, ShellContext};

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

/// Section under which a command is listed by `help`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Entries,
    Reports,
    Household,
    Shell,
}

impl CommandGroup {
    pub const ORDER: [CommandGroup; 4] = [
        CommandGroup::Entries,
        CommandGroup::Reports,
        CommandGroup::Household,
        CommandGroup::Shell,
    ];

    pub fn title(self) -> &'static str {
        match self {
            CommandGroup::Entries => "Entries",
            CommandGroup::Reports => "Reports",
            CommandGroup::Household => "Household",
            CommandGroup::Shell => "Shell",
        }
    }
}

pub struct CommandEntry {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub group: CommandGroup,
    pub description: &'static str,
    pub usage: &'static str,
    pub handler: CommandHandler,
}

impl CommandEntry {
    pub const fn new(
        name: &'static str,
        group: CommandGroup,
        description: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            aliases: &[],
            group,
            description,
            usage,
            handler,
        }
    }

    pub fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }
}

/// Commands in registration order, looked up by name or alias.
#[derive(Default)]
pub struct CommandRegistry {
    entries: Vec<CommandEntry>,
    lookup: HashMap<&'static str, usize>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `entry`. A command whose name is already taken is dropped; a
    /// taken alias is skipped.
    pub fn register(&mut self, entry: CommandEntry) {
        if self.lookup.contains_key(entry.name) {
            tracing::warn!(command = entry.name, "duplicate command ignored");
            return;
        }
        let index = self.entries.len();
        self.lookup.insert(entry.name, index);
        for &alias in entry.aliases {
            if self.lookup.contains_key(alias) {
                tracing::warn!(command = entry.name, alias, "duplicate alias ignored");
                continue;
            }
            self.lookup.insert(alias, index);
        }
        self.entries.push(entry);
    }

    /// Resolves a canonical name or an alias.
    pub fn get(&self, key: &str) -> Option<&CommandEntry> {
        self.lookup.get(key).map(|&index| &self.entries[index])
    }

    pub fn handler(&self, key: &str) -> Option<CommandHandler> {
        self.get(key).map(|entry| entry.handler)
    }

    pub fn in_group(&self, group: CommandGroup) -> impl Iterator<Item = &CommandEntry> + '_ {
        self.entries.iter().filter(move |entry| entry.group == group)
    }

    /// Every accepted spelling, canonical names first.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        let names = self.entries.iter().map(|entry| entry.name);
        let aliases = self
            .entries
            .iter()
            .flat_map(|entry| entry.aliases.iter().copied());
        names.chain(aliases)
    }
}
