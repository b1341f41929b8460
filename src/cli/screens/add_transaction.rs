//! Interactive add-transaction form.

use chrono::NaiveDate;

use crate::cli::core::{CommandError, ShellContext};
use crate::cli::io;
use crate::core::services::{CategoryService, ServiceError, TransactionDraft, TransactionService};
use crate::domain::{dates, Transaction};

/// Walks the user through category, amount and date, re-asking after a
/// rejected submission. `None` means the form was abandoned.
pub fn run(
    context: &mut ShellContext,
    target: Option<NaiveDate>,
) -> Result<Option<Transaction>, CommandError> {
    let names = CategoryService::names(context.app.storage())?;
    if names.is_empty() {
        io::print_warning("No categories yet. Add one with `category add <name> <budget>`.");
        return Ok(None);
    }

    let today = context.app.today();
    let mut draft = TransactionDraft::new(target, today);
    loop {
        let Some(index) = io::select_index(&context.theme, "Category", &names)? else {
            return Ok(None);
        };
        draft.category = names[index].clone();
        draft.amount = io::prompt_amount(&context.theme, "Amount")?;
        let default_date = dates::calendar_day(&draft.date).unwrap_or(today);
        draft.date = io::prompt_date(&context.theme, "Date (YYYY-MM-DD)", default_date)?;

        match TransactionService::submit(&mut context.app, draft.clone()) {
            Ok(transaction) => return Ok(Some(transaction)),
            Err(ServiceError::Invalid(message)) => {
                io::print_warning(message);
                if !io::confirm_action(&context.theme, "Try again?", true)? {
                    return Ok(None);
                }
            }
            Err(err) => return Err(err.into()),
        }
    }
}
