use std::{
    borrow::Cow,
    collections::BTreeMap,
    fmt,
    io::{self, BufRead},
    path::PathBuf,
};

use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::{ValidationContext, ValidationResult, Validator},
    Cmd, Context as ReadlineContext, Editor, Helper, KeyEvent,
};
use shell_words::split;

use crate::cli::core::{CliError, CliMode, LoopControl, ShellContext};
use crate::cli::output::info as output_info;
use crate::config::SETTABLE_KEYS;
use crate::utils::paths;

/// Setting this variable switches the shell to reading commands from stdin.
pub const SCRIPT_ENV: &str = "DAYBOOK_CLI_SCRIPT";

const HISTORY_FILE: &str = "history.txt";

pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os(SCRIPT_ENV).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let mut context = ShellContext::new(mode)?;
    if let Err(err) = context.show_ledger() {
        context.report_error(err)?;
    }

    let outcome = match mode {
        CliMode::Interactive => run_interactive(&mut context),
        CliMode::Script => run_script(&mut context),
    };
    tracing::debug!(state = %context.status(), "shell stopped");
    outcome
}

fn history_path() -> PathBuf {
    paths::app_data_dir().join(HISTORY_FILE)
}

fn run_interactive(context: &mut ShellContext) -> Result<(), CliError> {
    let mut editor = Editor::<CommandHelper, DefaultHistory>::new()?;
    editor.set_helper(Some(CommandHelper::from_context(context)));
    editor.bind_sequence(KeyEvent::from('?'), Cmd::Complete);

    let history = history_path();
    if editor.load_history(&history).is_err() {
        tracing::debug!(path = %history.display(), "no shell history yet");
    }

    while context.running {
        match editor.readline(&context.prompt()) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                editor.add_history_entry(trimmed).ok();

                match context.process_line(trimmed) {
                    Ok(LoopControl::Continue) => {}
                    Ok(LoopControl::Exit) => break,
                    Err(err) => context.report_error(err)?,
                }
            }
            Err(ReadlineError::Interrupted) => {
                if context.confirm_exit()? {
                    break;
                }
            }
            Err(ReadlineError::Eof) => {
                output_info("Goodbye.");
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }

    if let Err(err) = editor.save_history(&history) {
        tracing::warn!(error = %err, "could not save shell history");
    }
    Ok(())
}

fn run_script(context: &mut ShellContext) -> Result<(), CliError> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        if !context.running {
            break;
        }
        let line = line?;
        if line.trim_start().starts_with('#') {
            continue;
        }
        match context.process_line(&line) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(err) => context.report_error(err)?,
        }
    }
    Ok(())
}

/// Completes command names and their fixed arguments, and hints usage.
struct CommandHelper {
    usages: BTreeMap<String, &'static str>,
}

impl CommandHelper {
    fn from_context(context: &ShellContext) -> Self {
        let usages = context
            .command_names()
            .into_iter()
            .filter_map(|name| {
                context
                    .command(name)
                    .map(|entry| (name.to_string(), entry.usage))
            })
            .collect();
        Self { usages }
    }

    /// Fixed words accepted after `command` given the words typed so far.
    fn arguments_for(command: &str, typed: &[&str]) -> &'static [&'static str] {
        match (command, typed) {
            ("category", []) => &["add", "delete", "list"],
            ("config", []) => &["set", "show"],
            ("config", ["set"]) => SETTABLE_KEYS,
            ("day", []) => &["today", "-3", "-2", "-1", "1", "2", "3"],
            _ => &[],
        }
    }

    fn candidates(&self, words: &[&str], needle: &str) -> Vec<String> {
        match words.split_first() {
            None => self
                .usages
                .keys()
                .filter(|name| name.starts_with(needle))
                .cloned()
                .collect(),
            Some((&"help", [])) => self
                .usages
                .keys()
                .filter(|name| name.starts_with(needle))
                .cloned()
                .collect(),
            Some((command, typed)) => Self::arguments_for(&command.to_lowercase(), typed)
                .iter()
                .filter(|word| word.starts_with(needle))
                .map(|word| word.to_string())
                .collect(),
        }
    }
}

impl Helper for CommandHelper {}

impl Completer for CommandHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let prefix = &line[..pos];
        let start = prefix
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
            .map(|(idx, c)| idx + c.len_utf8())
            .unwrap_or(0);
        let words: Vec<&str> = prefix[..start].split_whitespace().collect();
        let needle = prefix[start..].to_ascii_lowercase();

        let pairs = self
            .candidates(&words, &needle)
            .into_iter()
            .map(|word| Pair {
                display: word.clone(),
                replacement: word,
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Hinter for CommandHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &ReadlineContext<'_>) -> Option<String> {
        if pos != line.len() {
            return None;
        }
        let command = line.strip_suffix(' ')?.trim().to_ascii_lowercase();
        let usage = self.usages.get(&command)?;
        usage
            .strip_prefix(command.as_str())
            .map(str::trim_start)
            .filter(|rest| !rest.is_empty())
            .map(str::to_string)
    }
}

impl Highlighter for CommandHelper {
    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{}\x1b[0m", hint))
    }
}

impl Validator for CommandHelper {
    fn validate(&self, ctx: &mut ValidationContext) -> rustyline::Result<ValidationResult> {
        match split(ctx.input()) {
            Ok(_) => Ok(ValidationResult::Valid(None)),
            Err(_) => Ok(ValidationResult::Invalid(Some(
                "  (unterminated quote)".into(),
            ))),
        }
    }
}

pub(crate) fn parse_command_line(input: &str) -> Result<Vec<String>, ParseError> {
    split(input).map_err(|err| ParseError {
        message: err.to_string(),
    })
}

#[derive(Debug)]
pub(crate) struct ParseError {
    message: String,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn helper() -> CommandHelper {
        let usages = [
            ("category", "category [list|add <name> <budget>|delete <row>]"),
            ("categories", "categories"),
            ("config", "config [show|set <key> <value>]"),
            ("day", "day <YYYY-MM-DD|today|-3..3>"),
            ("help", "help [command]"),
        ]
        .into_iter()
        .map(|(name, usage)| (name.to_string(), usage))
        .collect();
        CommandHelper { usages }
    }

    fn complete(line: &str) -> (usize, Vec<String>) {
        let history = DefaultHistory::new();
        let ctx = ReadlineContext::new(&history);
        let (start, pairs) = helper().complete(line, line.len(), &ctx).unwrap();
        (start, pairs.into_iter().map(|pair| pair.replacement).collect())
    }

    #[test]
    fn quoted_arguments_stay_together() {
        let tokens = parse_command_line(r#"category add "Eating out" 80"#).unwrap();
        assert_eq!(tokens, vec!["category", "add", "Eating out", "80"]);
    }

    #[test]
    fn unterminated_quotes_are_parse_errors() {
        let err = parse_command_line("add \"Food 25").unwrap_err();
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn completes_command_names_then_arguments() {
        assert_eq!(
            complete("cat"),
            (0, vec!["categories".to_string(), "category".to_string()])
        );
        assert_eq!(complete("category d"), (9, vec!["delete".to_string()]));
        assert_eq!(
            complete("config set s"),
            (11, vec!["show_week_strip".to_string()])
        );
        assert_eq!(complete("help da").1, vec!["day".to_string()]);
        assert!(complete("category add Fo").1.is_empty());
    }

    #[test]
    fn completion_handles_multibyte_whitespace() {
        assert_eq!(
            complete("category\u{00A0}d"),
            (10, vec!["delete".to_string()])
        );
        assert_eq!(complete("day\u{3000}to"), (6, vec!["today".to_string()]));
    }

    #[test]
    fn hints_show_remaining_usage() {
        let history = DefaultHistory::new();
        let ctx = ReadlineContext::new(&history);
        let helper = helper();
        assert_eq!(
            helper.hint("day ", 4, &ctx).as_deref(),
            Some("<YYYY-MM-DD|today|-3..3>")
        );
        assert_eq!(helper.hint("categories ", 11, &ctx), None);
        assert_eq!(helper.hint("day", 3, &ctx), None);
    }
}
