use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::formatters::format_amount;
use crate::cli::io;
use crate::cli::registry::CommandEntry;
use crate::cli::screens;
use crate::core::services::{TransactionDraft, TransactionService};
use crate::domain::Transaction;

const ADD_USAGE: &str = "add [<category> <amount> [YYYY-MM-DD]]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "add",
        "Record a transaction (defaults to the selected day)",
        ADD_USAGE,
        cmd_add,
    )]
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let target = Some(context.app.selected_day());
    let added = match args {
        [] if context.can_prompt() => match screens::add_transaction::run(context, target)? {
            Some(transaction) => transaction,
            None => {
                io::print_info("Operation cancelled.");
                return Ok(());
            }
        },
        [category, amount] => submit(context, category, amount, None)?,
        [category, amount, date] => submit(context, category, amount, Some(*date))?,
        _ => return Err(CommandError::InvalidArguments(format!("usage: {}", ADD_USAGE))),
    };

    context.show_ledger()?;
    io::print_success(format!(
        "Added {} {} on {}.",
        added.category,
        format_amount(context.currency_symbol(), added.amount),
        added.date
    ));
    Ok(())
}

fn submit(
    context: &mut ShellContext,
    category: &str,
    amount: &str,
    date: Option<&str>,
) -> Result<Transaction, CommandError> {
    let mut draft = TransactionDraft::new(Some(context.app.selected_day()), context.app.today())
        .with_category(category);
    draft.amount = amount.trim().parse::<f64>().ok();
    if let Some(date) = date {
        draft = draft.with_date(date);
    }
    Ok(TransactionService::submit(&mut context.app, draft)?)
}
