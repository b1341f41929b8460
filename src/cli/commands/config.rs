use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::registry::CommandEntry;
use crate::config::SETTABLE_KEYS;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "View and change shell preferences",
        "config [show|set <key> <value>]",
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() || args[0].eq_ignore_ascii_case("show") {
        return show_config(context);
    }

    match args[0].to_lowercase().as_str() {
        "set" => {
            if args.len() < 3 {
                return Err(CommandError::InvalidArguments(format!(
                    "usage: config set <{}> <value>",
                    SETTABLE_KEYS.join("|")
                )));
            }
            let key = args[1];
            let value = args[2..].join(" ");
            let mut updated = context.config.clone();
            updated.set_value(key, value.trim())?;
            context.replace_config(updated)?;
            io::print_success(format!("`{}` set to `{}`.", key, value.trim()));
            Ok(())
        }
        other => Err(CommandError::InvalidArguments(format!(
            "unknown config action `{}`",
            other
        ))),
    }
}

fn show_config(context: &ShellContext) -> CommandResult {
    let style = context.ui_style();
    let mut lines = vec![style.header("Configuration")];
    for (key, value) in context.config.entries() {
        lines.push(format!("  {:<18} {}", key, value));
    }
    lines.push(format!(
        "  {:<18} {}",
        "file",
        context.config_manager.path().display()
    ));
    for line in lines {
        io::println_text(&line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::core::{run_lines, test_context};
    use chrono::NaiveDate;

    #[test]
    fn set_persists_and_changes_rendering() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let (mut context, _dir) = test_context(today);
        run_lines(
            &mut context,
            &[
                "config set currency_symbol €",
                "config set show_week_strip off",
                "config set theme dark",
            ],
        )
        .unwrap();

        let saved = context.config_manager.load().unwrap();
        assert_eq!(saved.currency_symbol, "€");
        assert!(!saved.show_week_strip);
        let lines = context.ledger_lines();
        assert_eq!(lines.last().map(String::as_str), Some("Daily Total: €0"));
        assert!(!lines.iter().any(|line| line.starts_with("< ")));
    }
}
