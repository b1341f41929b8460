//! Daily ledger: day selection, filtering, and totals.

use std::{fmt, str::FromStr};

use chrono::NaiveDate;

use crate::core::app_state::AppState;
use crate::core::services::{ServiceError, ServiceResult};
use crate::domain::{dates, Amounted, CategoryTotal, Day, Transaction};

/// Direction of a one-day step through the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

impl Direction {
    fn offset(self) -> i64 {
        match self {
            Direction::Prev => -1,
            Direction::Next => 1,
        }
    }
}

impl FromStr for Direction {
    type Err = ServiceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "prev" | "previous" | "back" => Ok(Direction::Prev),
            "next" | "forward" => Ok(Direction::Next),
            other => Err(ServiceError::Invalid(format!(
                "unknown direction `{}` (use prev or next)",
                other
            ))),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Prev => "prev",
            Direction::Next => "next",
        })
    }
}

/// Everything the ledger screen renders for the selected day.
#[derive(Debug, Clone)]
pub struct LedgerSnapshot {
    pub selected_day: NaiveDate,
    pub week: Vec<Day>,
    pub rows: Vec<Transaction>,
    pub category_totals: Vec<CategoryTotal>,
    pub daily_total: f64,
}

pub struct LedgerService;

impl LedgerService {
    /// Transactions on the selected day, in store order.
    pub fn filtered_transactions(app: &AppState) -> Vec<&Transaction> {
        let day = app.selected_day();
        app.transactions()
            .transactions()
            .iter()
            .filter(|txn| txn.falls_on(day))
            .collect()
    }

    /// Steps the selected day by one and persists it.
    pub fn navigate_day(app: &mut AppState, direction: Direction) -> ServiceResult<NaiveDate> {
        let target = dates::shift_days(app.selected_day(), direction.offset());
        app.set_selected_day(target)?;
        tracing::debug!(%direction, day = %target, "navigated ledger");
        Ok(target)
    }

    /// Jumps to `day` and persists it.
    pub fn select_day(app: &mut AppState, day: NaiveDate) -> ServiceResult<()> {
        app.set_selected_day(day)?;
        tracing::debug!(%day, "selected ledger day");
        Ok(())
    }

    /// Removes the transaction with `id` from the full list and persists the rest.
    ///
    /// Returns `false` without writing anything when no transaction matched.
    pub fn delete_transaction(app: &mut AppState, id: &str) -> ServiceResult<bool> {
        let remaining: Vec<Transaction> = app
            .transactions()
            .transactions()
            .iter()
            .filter(|txn| txn.id != id)
            .cloned()
            .collect();
        if remaining.len() == app.transactions().len() {
            return Ok(false);
        }
        app.commit_transactions(remaining)?;
        tracing::info!(id, "transaction deleted");
        Ok(true)
    }

    /// Per-category sums over the selected day, in first-occurrence order.
    pub fn category_totals(app: &AppState) -> Vec<CategoryTotal> {
        let mut totals: Vec<CategoryTotal> = Vec::new();
        for txn in Self::filtered_transactions(app) {
            match totals.iter_mut().find(|total| total.category == txn.category) {
                Some(total) => total.total += txn.amount,
                None => totals.push(CategoryTotal {
                    category: txn.category.clone(),
                    total: txn.amount,
                }),
            }
        }
        totals
    }

    /// Sum of all amounts on the selected day.
    pub fn daily_total(app: &AppState) -> f64 {
        Self::filtered_transactions(app)
            .into_iter()
            .map(Amounted::amount)
            .sum()
    }

    /// The seven-day strip around the selected day.
    pub fn week(app: &AppState) -> Vec<Day> {
        Day::week_around(app.selected_day(), app.today())
    }

    pub fn snapshot(app: &AppState) -> LedgerSnapshot {
        LedgerSnapshot {
            selected_day: app.selected_day(),
            week: Self::week(app),
            rows: Self::filtered_transactions(app)
                .into_iter()
                .cloned()
                .collect(),
            category_totals: Self::category_totals(app),
            daily_total: Self::daily_total(app),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::FixedClock;
    use crate::storage::{self, MemoryStore, TRANSACTIONS_KEY};
    use std::sync::Arc;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn app_with(transactions: Vec<Transaction>, selected: NaiveDate) -> AppState {
        let store = MemoryStore::new();
        storage::save_list(&store, TRANSACTIONS_KEY, &transactions).unwrap();
        storage::save_selected_day(&store, selected).unwrap();
        AppState::hydrate(Box::new(store), Arc::new(FixedClock::new(day(10)))).unwrap()
    }

    #[test]
    fn empty_day_has_no_totals() {
        let app = app_with(Vec::new(), day(1));
        assert!(LedgerService::category_totals(&app).is_empty());
        assert_eq!(LedgerService::daily_total(&app), 0.0);
    }

    #[test]
    fn totals_follow_first_occurrence_order() {
        let app = app_with(
            vec![
                Transaction::new("Fuel", 40.0, day(1)),
                Transaction::new("Food", 12.5, day(1)),
                Transaction::new("Rent", 900.0, day(2)),
                Transaction::new("Fuel", 20.0, day(1)),
            ],
            day(1),
        );

        let totals = LedgerService::category_totals(&app);
        assert_eq!(
            totals,
            vec![
                CategoryTotal {
                    category: "Fuel".into(),
                    total: 60.0
                },
                CategoryTotal {
                    category: "Food".into(),
                    total: 12.5
                },
            ]
        );
        assert_eq!(LedgerService::daily_total(&app), 72.5);
    }

    #[test]
    fn navigation_round_trips_and_persists() {
        let mut app = app_with(Vec::new(), day(1));
        assert_eq!(
            LedgerService::navigate_day(&mut app, Direction::Next).unwrap(),
            day(2)
        );
        assert_eq!(
            storage::load_selected_day(app.storage()).unwrap(),
            Some(day(2))
        );
        LedgerService::navigate_day(&mut app, Direction::Prev).unwrap();
        assert_eq!(app.selected_day(), day(1));
    }

    #[test]
    fn delete_keeps_other_rows_on_the_same_day() {
        let twin_a = Transaction::new("Food", 10.0, day(1));
        let twin_b = Transaction::new("Food", 10.0, day(1));
        let other_day = Transaction::new("Food", 10.0, day(2));
        let target = twin_a.id.clone();
        let mut app = app_with(vec![twin_a, twin_b.clone(), other_day.clone()], day(1));

        assert!(LedgerService::delete_transaction(&mut app, &target).unwrap());
        assert_eq!(app.transactions().transactions(), &[twin_b.clone(), other_day.clone()]);
        let rows = LedgerService::filtered_transactions(&app);
        assert_eq!(rows, vec![&twin_b]);

        let persisted: Vec<Transaction> =
            storage::load_list(app.storage(), TRANSACTIONS_KEY).unwrap();
        assert_eq!(persisted, vec![twin_b, other_day]);
    }

    #[test]
    fn delete_unknown_id_is_a_no_op() {
        let mut app = app_with(vec![Transaction::new("Food", 10.0, day(1))], day(1));
        assert!(!LedgerService::delete_transaction(&mut app, "missing").unwrap());
        assert_eq!(app.transactions().len(), 1);
    }

    #[test]
    fn direction_parses_aliases() {
        assert_eq!("Prev".parse::<Direction>().unwrap(), Direction::Prev);
        assert_eq!("next".parse::<Direction>().unwrap(), Direction::Next);
        assert!("sideways".parse::<Direction>().is_err());
    }
}
