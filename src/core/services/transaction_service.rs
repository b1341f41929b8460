//! Add-transaction flow: form state, validation, and commit.

use chrono::NaiveDate;

use crate::core::app_state::AppState;
use crate::core::services::{CategoryService, ServiceError, ServiceResult};
use crate::domain::{dates, Transaction};
use crate::storage::{self, TRANSACTIONS_KEY};

/// Values captured by the add-transaction form before submission.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    pub category: String,
    pub amount: Option<f64>,
    pub date: String,
}

impl TransactionDraft {
    /// Starts a draft dated `target`, or `today` when the form was opened
    /// without a date.
    pub fn new(target: Option<NaiveDate>, today: NaiveDate) -> Self {
        Self {
            category: String::new(),
            amount: None,
            date: dates::format_date(target.unwrap_or(today)),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_amount(mut self, amount: f64) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }
}

pub struct TransactionService;

impl TransactionService {
    /// Validates the draft, appends it to the persisted list and refreshes the store.
    ///
    /// A zero, missing or NaN amount and a blank or unknown category are
    /// rejected; negative amounts are accepted.
    pub fn submit(app: &mut AppState, draft: TransactionDraft) -> ServiceResult<Transaction> {
        let category = draft.category.trim();
        if category.is_empty() {
            return Err(ServiceError::Invalid("Select a category".into()));
        }
        let amount = match draft.amount {
            Some(value) if value.is_finite() && value != 0.0 => value,
            _ => return Err(ServiceError::Invalid("Enter a non-zero amount".into())),
        };
        let date = dates::calendar_day(&draft.date).ok_or_else(|| {
            ServiceError::Invalid(format!("invalid date `{}` (use YYYY-MM-DD)", draft.date))
        })?;

        let known = CategoryService::names(app.storage())?;
        if !known.iter().any(|name| name == category) {
            return Err(ServiceError::Invalid(format!(
                "Unknown category `{}`",
                category
            )));
        }

        let transaction = Transaction::new(category, amount, date);
        let mut persisted: Vec<Transaction> =
            storage::load_list(app.storage(), TRANSACTIONS_KEY)?;
        persisted.push(transaction.clone());
        app.commit_transactions(persisted)?;
        tracing::info!(
            id = %transaction.id,
            category = %transaction.category,
            amount,
            date = %transaction.date,
            "transaction added"
        );
        Ok(transaction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::FixedClock;
    use crate::storage::MemoryStore;
    use std::sync::Arc;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn app_with_food() -> AppState {
        let store = MemoryStore::new();
        CategoryService::add(&store, "Food", 100.0).unwrap();
        AppState::hydrate(Box::new(store), Arc::new(FixedClock::new(day(7)))).unwrap()
    }

    #[test]
    fn draft_defaults_to_target_or_today() {
        assert_eq!(TransactionDraft::new(Some(day(1)), day(7)).date, "2024-03-01");
        assert_eq!(TransactionDraft::new(None, day(7)).date, "2024-03-07");
    }

    #[test]
    fn submit_appends_and_mirrors_storage() {
        let mut app = app_with_food();
        let draft = TransactionDraft::new(Some(day(1)), app.today())
            .with_category("Food")
            .with_amount(25.0);

        let txn = TransactionService::submit(&mut app, draft).expect("submitted");
        assert_eq!(txn.date, "2024-03-01");
        let persisted: Vec<Transaction> =
            storage::load_list(app.storage(), TRANSACTIONS_KEY).unwrap();
        assert_eq!(persisted, vec![txn.clone()]);
        assert_eq!(app.transactions().transactions(), &[txn]);
    }

    #[test]
    fn submit_rejects_falsy_inputs_without_writing() {
        let mut app = app_with_food();
        let base = TransactionDraft::new(None, app.today());
        let drafts = vec![
            base.clone().with_amount(10.0),
            base.clone().with_category("Food"),
            base.clone().with_category("Food").with_amount(0.0),
            base.clone().with_category("Food").with_amount(f64::NAN),
            base.clone().with_category("Travel").with_amount(10.0),
            base.clone()
                .with_category("Food")
                .with_amount(10.0)
                .with_date("someday"),
        ];
        for draft in drafts {
            let err = TransactionService::submit(&mut app, draft).expect_err("rejected");
            assert!(matches!(err, ServiceError::Invalid(_)), "unexpected error: {err:?}");
        }
        assert_eq!(app.storage().get(TRANSACTIONS_KEY).unwrap(), None);
        assert!(app.transactions().is_empty());
    }

    #[test]
    fn negative_amounts_are_accepted() {
        let mut app = app_with_food();
        let draft = TransactionDraft::new(None, app.today())
            .with_category("Food")
            .with_amount(-4.5);
        let txn = TransactionService::submit(&mut app, draft).unwrap();
        assert_eq!(txn.amount, -4.5);
    }
}
