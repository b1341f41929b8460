//! Core CLI dispatch, error types, and shell context helpers.

use std::{io, sync::Arc};

use dialoguer::theme::ColorfulTheme;
use rustyline::error::ReadlineError;
use strsim::levenshtein;

use crate::{
    config::{Config, ConfigManager},
    core::{
        services::{CategoryService, LedgerService, ServiceError},
        AppState, Clock, SystemClock,
    },
    domain::dates,
    errors::DaybookError,
    storage::{JsonFileStore, KeyValueStore},
    utils::paths,
};

pub use crate::cli::shell_context::{CliMode, ShellContext};
pub use crate::errors::CliError;

use super::commands;
use super::io as cli_io;
use super::output;
use super::registry::{CommandEntry, CommandRegistry};
use super::screens;
use super::ui::{style::refresh_style, UiStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

impl ShellContext {
    /// Opens the data directory (`DAYBOOK_HOME` or `~/.daybook`) and hydrates
    /// the application state from it.
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let base = paths::app_data_dir();
        let storage = JsonFileStore::new(paths::storage_dir_in(&base))?;
        let config_manager = ConfigManager::with_base_dir(base)?;
        Self::with_parts(mode, Box::new(storage), Arc::new(SystemClock), config_manager)
    }

    pub fn with_parts(
        mode: CliMode,
        storage: Box<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
        config_manager: ConfigManager,
    ) -> Result<Self, CliError> {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        let config = config_manager.load()?;
        output::apply_config(&config);
        refresh_style();

        let app = AppState::hydrate(storage, clock)?;
        tracing::debug!(?mode, "shell context ready");

        Ok(ShellContext {
            mode,
            registry,
            app,
            theme: ColorfulTheme::default(),
            config_manager,
            config,
            last_command: None,
            running: true,
        })
    }

    pub(crate) fn can_prompt(&self) -> bool {
        self.mode == CliMode::Interactive
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn prompt(&self) -> String {
        format!("daybook [{}]> ", dates::format_date(self.app.selected_day()))
    }

    pub(crate) fn currency_symbol(&self) -> &str {
        &self.config.currency_symbol
    }

    pub(crate) fn ui_style(&self) -> UiStyle {
        match self.mode {
            CliMode::Interactive => super::ui::style(),
            CliMode::Script => UiStyle::plain(),
        }
    }

    /// Prints a rendered screen, clearing the terminal first when interactive.
    pub(crate) fn print_screen(&self, lines: &[String]) -> CommandResult {
        if self.mode == CliMode::Interactive {
            cli_io::clear_screen()?;
        }
        for line in lines {
            cli_io::println_text(line)?;
        }
        Ok(())
    }

    pub(crate) fn ledger_lines(&self) -> Vec<String> {
        let snapshot = LedgerService::snapshot(&self.app);
        screens::ledger::render(
            &snapshot,
            self.currency_symbol(),
            self.config.show_week_strip,
            &self.ui_style(),
        )
    }

    pub(crate) fn show_ledger(&self) -> CommandResult {
        self.print_screen(&self.ledger_lines())
    }

    pub(crate) fn category_lines(&self) -> Result<Vec<String>, CommandError> {
        let categories = CategoryService::list(self.app.storage())?;
        Ok(screens::categories::render(
            &categories,
            self.currency_symbol(),
            &self.ui_style(),
        ))
    }

    pub(crate) fn show_categories(&self) -> CommandResult {
        let lines = self.category_lines()?;
        self.print_screen(&lines)
    }

    pub(crate) fn persist_config(&self) -> CommandResult {
        self.config_manager.save(&self.config)?;
        Ok(())
    }

    /// Stores a changed configuration and re-applies output preferences.
    pub(crate) fn replace_config(&mut self, config: Config) -> CommandResult {
        self.config = config;
        self.persist_config()?;
        output::apply_config(&self.config);
        refresh_style();
        Ok(())
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match crate::cli::shell::parse_command_line(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                self.print_warning(&err.to_string());
                return Ok(LoopControl::Continue);
            }
        };

        if tokens.is_empty() {
            return Ok(LoopControl::Continue);
        }

        let command = tokens[0].to_lowercase();
        let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();
        self.last_command = Some(line.trim().to_string());

        match self.dispatch(&command, &tokens[0], &args) {
            Ok(LoopControl::Exit) => {
                self.running = false;
                Ok(LoopControl::Exit)
            }
            other => other,
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let needle = input.to_lowercase();
        let mut suggestions: Vec<_> = self
            .registry
            .names()
            .map(|key| (levenshtein(key, &needle), key))
            .collect();
        suggestions.sort();

        if let Some((distance, best)) = suggestions.first() {
            if *distance <= 3 {
                cli_io::print_info(format!("Suggestion: `{}`?", best));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        cli_io::confirm_action(&self.theme, "Exit daybook?", true).map_err(CliError::from)
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::InvalidArguments(message) => {
                self.print_error(&message);
                self.print_hint("Use `help <command>` for usage details.");
                Ok(())
            }
            CommandError::Rejected(message) => {
                self.print_warning(&message);
                Ok(())
            }
            other => {
                tracing::error!(error = %other, "command failed");
                self.print_error(&other.to_string());
                Ok(())
            }
        }
    }

    pub(crate) fn print_error(&self, message: &str) {
        cli_io::print_error(message);
    }

    pub(crate) fn print_warning(&self, message: &str) {
        cli_io::print_warning(message);
    }

    pub(crate) fn print_hint(&self, message: &str) {
        cli_io::print_hint(message);
    }
}

/// Parses a 1-based row number against `len` rows.
pub(crate) fn parse_row(input: &str, len: usize) -> Result<usize, CommandError> {
    let row: usize = input.trim().parse().map_err(|_| {
        CommandError::InvalidArguments(format!("`{}` is not a row number", input))
    })?;
    if row == 0 || row > len {
        return Err(CommandError::InvalidArguments(format!(
            "row {} is out of range (1-{})",
            row, len
        )));
    }
    Ok(row - 1)
}

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    /// Input the services refused; nothing was persisted.
    #[error("{0}")]
    Rejected(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Core(#[from] DaybookError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

impl From<ServiceError> for CommandError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Core(err) => CommandError::Core(err),
            ServiceError::Invalid(message) => CommandError::Rejected(message),
        }
    }
}

impl From<CommandError> for CliError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::Core(inner) => CliError::Core(inner),
            CommandError::InvalidArguments(message) | CommandError::Rejected(message) => {
                CliError::Input(message)
            }
            other => CliError::Command(other.to_string()),
        }
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        CliError::Command(err.to_string())
    }
}

impl From<ReadlineError> for CliError {
    fn from(err: ReadlineError) -> Self {
        CliError::Command(err.to_string())
    }
}

#[cfg(test)]
pub(crate) fn test_context(today: chrono::NaiveDate) -> (ShellContext, tempfile::TempDir) {
    use crate::core::FixedClock;
    use crate::storage::MemoryStore;

    let dir = tempfile::tempdir().expect("temp dir");
    let config_manager =
        ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("config manager");
    let context = ShellContext::with_parts(
        CliMode::Script,
        Box::new(MemoryStore::new()),
        Arc::new(FixedClock::new(today)),
        config_manager,
    )
    .expect("shell context");
    (context, dir)
}

#[cfg(test)]
pub(crate) fn run_lines(context: &mut ShellContext, lines: &[&str]) -> Result<(), CliError> {
    for line in lines {
        match context.process_line(line) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(err) => context.report_error(err)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn scripted_session_adds_and_totals() {
        let (mut context, _dir) = test_context(day(1));
        run_lines(
            &mut context,
            &["category add Food 100", "add Food 25 2024-03-01", "ledger"],
        )
        .unwrap();

        assert_eq!(LedgerService::daily_total(&context.app), 25.0);
        let lines = context.ledger_lines();
        assert!(lines.contains(&"Food: $25".to_string()));
        assert!(lines.contains(&"Daily Total: $25".to_string()));
    }

    #[test]
    fn rejected_input_does_not_abort_the_session() {
        let (mut context, _dir) = test_context(day(1));
        run_lines(
            &mut context,
            &["add Food 25", "category add Food -1", "next", "bogus"],
        )
        .unwrap();
        assert!(context.app.transactions().is_empty());
        assert_eq!(context.app.selected_day(), day(2));
        assert!(context.running);
    }

    #[test]
    fn exit_stops_the_loop() {
        let (mut context, _dir) = test_context(day(1));
        run_lines(&mut context, &["exit", "next"]).unwrap();
        assert!(!context.running);
        assert_eq!(context.app.selected_day(), day(1));
    }

    #[test]
    fn unbalanced_quotes_are_reported_not_fatal() {
        let (mut context, _dir) = test_context(day(1));
        let result = context.process_line("category add \"Food 10");
        assert!(matches!(result, Ok(LoopControl::Continue)));
    }

    #[test]
    fn rows_are_one_based() {
        assert_eq!(parse_row("1", 2).unwrap(), 0);
        assert!(parse_row("0", 2).is_err());
        assert!(parse_row("3", 2).is_err());
        assert!(parse_row("x", 2).is_err());
    }

    #[test]
    fn service_rejections_map_to_rejected() {
        let err = CommandError::from(ServiceError::Invalid("Select a category".into()));
        assert!(matches!(err, CommandError::Rejected(_)));
        let cli = CliError::from(err);
        assert!(matches!(cli, CliError::Input(_)));
    }
}
