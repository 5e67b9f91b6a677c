//! Tab completion for the interactive shell.

use finplan_domain::{Currency, Frequency};
use rustyline::{
    completion::{Completer, Pair},
    highlight::Highlighter,
    hint::Hinter,
    validate::Validator,
    Context as ReadlineContext, Helper,
};

const ENTRY_TYPES: [&str; 2] = ["asset", "liability"];
const LIST_FILTERS: [&str; 2] = ["assets", "liabilities"];
const SETTINGS_KEYS: [&str; 3] = ["family", "currency", "job"];
const ENTRY_FLAGS: [&str; 5] = ["--per-person", "--shared", "--icon", "--no-icon", "--type"];

pub(crate) struct ShellHelper {
    commands: Vec<String>,
}

impl ShellHelper {
    pub(crate) fn new(names: Vec<&'static str>) -> Self {
        let mut commands: Vec<String> = names
            .into_iter()
            .map(|name| name.to_ascii_lowercase())
            .collect();
        commands.sort();
        commands.dedup();
        Self { commands }
    }

    /// Candidates for the word being typed, given the words before it.
    pub(crate) fn candidates(&self, previous: &[&str], partial: &str) -> Vec<String> {
        let pool: Vec<String> = match previous {
            [] | ["help"] => self.commands.clone(),
            ["list"] => owned(&LIST_FILTERS),
            ["add"] => owned(&ENTRY_TYPES),
            [.., "--type"] => owned(&ENTRY_TYPES),
            ["add", _, _, _] | ["edit", _, _, _] => Frequency::ALL
                .iter()
                .map(|frequency| frequency.as_str().to_string())
                .collect(),
            ["add", ..] if partial.starts_with('-') => owned(&ENTRY_FLAGS[..4]),
            ["edit", ..] if partial.starts_with('-') => owned(&ENTRY_FLAGS),
            ["settings"] => owned(&SETTINGS_KEYS),
            ["settings", "currency"] => Currency::ALL
                .iter()
                .map(|currency| currency.symbol().to_string())
                .collect(),
            ["settings", "job"] => owned(&["yes", "no"]),
            _ => Vec::new(),
        };

        let partial = partial.to_lowercase();
        pool.into_iter()
            .filter(|candidate| candidate.starts_with(&partial))
            .collect()
    }
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

impl Helper for ShellHelper {}

impl Completer for ShellHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let prefix = &line[..pos];
        let start = prefix
            .rfind(char::is_whitespace)
            .map(|idx| idx + 1)
            .unwrap_or(0);
        let lowered = prefix[..start].to_lowercase();
        let previous: Vec<&str> = lowered.split_whitespace().collect();

        let candidates = self
            .candidates(&previous, &prefix[start..])
            .into_iter()
            .map(|candidate| Pair {
                display: candidate.clone(),
                replacement: candidate,
            })
            .collect();
        Ok((start, candidates))
    }
}

impl Hinter for ShellHelper {
    type Hint = String;
}

impl Highlighter for ShellHelper {}

impl Validator for ShellHelper {}

#[cfg(test)]
mod tests {
    use super::*;

    fn helper() -> ShellHelper {
        ShellHelper::new(vec!["summary", "settings", "exit", "quit", "exit"])
    }

    #[test]
    fn first_word_completes_commands() {
        assert_eq!(helper().candidates(&[], "s"), vec!["settings", "summary"]);
        assert_eq!(helper().candidates(&[], "e"), vec!["exit"]);
        assert_eq!(helper().candidates(&["help"], "q"), vec!["quit"]);
    }

    #[test]
    fn arguments_complete_by_position() {
        let helper = helper();
        assert_eq!(helper.candidates(&["add"], "l"), vec!["liability"]);
        assert_eq!(
            helper.candidates(&["add", "asset", "salary", "100"], ""),
            vec!["day", "week", "month"]
        );
        assert_eq!(
            helper.candidates(&["edit", "1", "rent", "10", "month", "--type"], "a"),
            vec!["asset"]
        );
        assert_eq!(helper.candidates(&["settings", "currency"], "€"), vec!["€"]);
        assert_eq!(helper.candidates(&["settings", "job"], "y"), vec!["yes"]);
    }

    #[test]
    fn type_flag_is_offered_only_when_editing() {
        let helper = helper();
        let add = helper.candidates(&["add", "asset", "x", "1", "month"], "--t");
        assert!(add.is_empty());
        let edit = helper.candidates(&["edit", "1", "x", "1", "month"], "--t");
        assert_eq!(edit, vec!["--type"]);
    }

    #[test]
    fn unknown_positions_offer_nothing() {
        assert!(helper().candidates(&["summary"], "").is_empty());
        assert!(helper().candidates(&["remove"], "1").is_empty());
    }
}
