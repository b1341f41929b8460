use chrono::NaiveDate;

use crate::cli::core::{parse_row, CommandError, CommandResult, ShellContext};
use crate::cli::formatters::format_amount;
use crate::cli::io;
use crate::cli::registry::CommandEntry;
use crate::core::services::{Direction, LedgerService};
use crate::domain::{dates, day::DAYS_AROUND_SELECTED};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "ledger",
            "Show the transactions of the selected day",
            "ledger",
            cmd_ledger,
        )
        .with_aliases(&["home"]),
        CommandEntry::new("prev", "Go back one day", "prev", cmd_prev),
        CommandEntry::new("next", "Go forward one day", "next", cmd_next),
        CommandEntry::new(
            "day",
            "Jump to a day",
            "day <YYYY-MM-DD|today|-3..3>",
            cmd_day,
        ),
        CommandEntry::new(
            "delete",
            "Delete a transaction of the selected day",
            "delete <row>",
            cmd_delete,
        ),
    ]
}

fn cmd_ledger(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.show_ledger()
}

fn cmd_prev(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    LedgerService::navigate_day(&mut context.app, Direction::Prev)?;
    context.show_ledger()
}

fn cmd_next(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    LedgerService::navigate_day(&mut context.app, Direction::Next)?;
    context.show_ledger()
}

fn cmd_day(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let target = match args.first() {
        Some(raw) => parse_day_argument(raw, context.app.selected_day(), context.app.today())?,
        None if context.can_prompt() => match pick_from_week(context)? {
            Some(day) => day,
            None => return Ok(()),
        },
        None => {
            return Err(CommandError::InvalidArguments(
                "usage: day <YYYY-MM-DD|today|-3..3>".into(),
            ))
        }
    };
    LedgerService::select_day(&mut context.app, target)?;
    context.show_ledger()
}

fn pick_from_week(context: &ShellContext) -> Result<Option<NaiveDate>, CommandError> {
    let week = LedgerService::week(&context.app);
    let labels: Vec<String> = week
        .iter()
        .map(|day| {
            let mut label = format!("{} {}", day.name, dates::format_date(day.date));
            if day.is_today {
                label.push_str(" (today)");
            }
            label
        })
        .collect();
    let choice = io::select_index(&context.theme, "Select day", &labels)?;
    Ok(choice.map(|index| week[index].date))
}

/// Accepts `today`, an offset within the visible strip, or an explicit date.
pub(crate) fn parse_day_argument(
    raw: &str,
    selected: NaiveDate,
    today: NaiveDate,
) -> Result<NaiveDate, CommandError> {
    let value = raw.trim();
    if value.eq_ignore_ascii_case("today") {
        return Ok(today);
    }
    if let Ok(offset) = value.parse::<i64>() {
        if offset.abs() > DAYS_AROUND_SELECTED {
            return Err(CommandError::InvalidArguments(format!(
                "offset {} is outside the visible week (-{}..{})",
                offset, DAYS_AROUND_SELECTED, DAYS_AROUND_SELECTED
            )));
        }
        return Ok(dates::shift_days(selected, offset));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        CommandError::InvalidArguments(format!("invalid date `{}` (use YYYY-MM-DD)", raw))
    })
}

fn cmd_delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let rows: Vec<(String, String)> = LedgerService::filtered_transactions(&context.app)
        .into_iter()
        .map(|txn| {
            (
                txn.id.clone(),
                format!(
                    "{} {}",
                    txn.category,
                    format_amount(context.currency_symbol(), txn.amount)
                ),
            )
        })
        .collect();
    if rows.is_empty() {
        io::print_info("No transactions for this day.");
        return Ok(());
    }

    let index = match args.first() {
        Some(raw) => parse_row(raw, rows.len())?,
        None if context.can_prompt() => {
            let labels: Vec<String> = rows.iter().map(|(_, label)| label.clone()).collect();
            match io::select_index(&context.theme, "Delete which transaction?", &labels)? {
                Some(index) => index,
                None => return Ok(()),
            }
        }
        None => {
            return Err(CommandError::InvalidArguments("usage: delete <row>".into()));
        }
    };

    let (id, label) = &rows[index];
    LedgerService::delete_transaction(&mut context.app, id)?;
    context.show_ledger()?;
    io::print_success(format!("Deleted {}.", label));
    Ok(())
}
