//! Application-level state container shared by every screen.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::core::{clock::Clock, store::TransactionStore};
use crate::domain::Transaction;
use crate::errors::Result;
use crate::storage::{self, KeyValueStore, TRANSACTIONS_KEY};

/// Owns the injected key-value store, the in-memory transaction list and the
/// selected ledger day.
pub struct AppState {
    storage: Box<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    transactions: TransactionStore,
    selected_day: NaiveDate,
}

impl AppState {
    /// Builds the state from persisted data: transactions are loaded into the
    /// store and the selected day is restored. Without a readable stored day,
    /// today is selected and written back.
    pub fn hydrate(storage: Box<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Result<Self> {
        let persisted: Vec<Transaction> = storage::load_list(storage.as_ref(), TRANSACTIONS_KEY)?;
        let mut transactions = TransactionStore::new();
        transactions.replace_all(persisted);

        let selected_day = match storage::load_selected_day(storage.as_ref())? {
            Some(day) => day,
            None => {
                let today = clock.today();
                storage::save_selected_day(storage.as_ref(), today)?;
                today
            }
        };
        tracing::debug!(
            transactions = transactions.len(),
            %selected_day,
            "application state hydrated"
        );

        Ok(Self {
            storage,
            clock,
            transactions,
            selected_day,
        })
    }

    pub fn storage(&self) -> &dyn KeyValueStore {
        self.storage.as_ref()
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn transactions(&self) -> &TransactionStore {
        &self.transactions
    }

    pub fn selected_day(&self) -> NaiveDate {
        self.selected_day
    }

    /// Changes the selected day and persists it.
    pub(crate) fn set_selected_day(&mut self, day: NaiveDate) -> Result<()> {
        storage::save_selected_day(self.storage.as_ref(), day)?;
        self.selected_day = day;
        Ok(())
    }

    /// Persists `transactions` as the full list, then mirrors it in memory.
    pub(crate) fn commit_transactions(&mut self, transactions: Vec<Transaction>) -> Result<()> {
        storage::save_list(self.storage.as_ref(), TRANSACTIONS_KEY, &transactions)?;
        self.transactions.replace_all(transactions);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::FixedClock;
    use crate::storage::MemoryStore;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn empty_storage_starts_on_today() {
        let app = AppState::hydrate(
            Box::new(MemoryStore::new()),
            Arc::new(FixedClock::new(day(5))),
        )
        .unwrap();
        assert_eq!(app.selected_day(), day(5));
        assert!(app.transactions().is_empty());
        assert_eq!(storage::load_selected_day(app.storage()).unwrap(), Some(day(5)));
    }

    #[test]
    fn restores_persisted_selection_and_transactions() {
        let store = MemoryStore::new();
        storage::save_selected_day(&store, day(1)).unwrap();
        storage::save_list(
            &store,
            TRANSACTIONS_KEY,
            &[Transaction::new("Food", 25.0, day(1))],
        )
        .unwrap();

        let app = AppState::hydrate(Box::new(store), Arc::new(FixedClock::new(day(9)))).unwrap();
        assert_eq!(app.selected_day(), day(1));
        assert_eq!(app.transactions().len(), 1);
    }

    #[test]
    fn commit_keeps_memory_and_storage_equal() {
        let mut app = AppState::hydrate(
            Box::new(MemoryStore::new()),
            Arc::new(FixedClock::new(day(1))),
        )
        .unwrap();
        app.commit_transactions(vec![Transaction::new("Fuel", 60.0, day(1))])
            .unwrap();

        let persisted: Vec<Transaction> =
            storage::load_list(app.storage(), TRANSACTIONS_KEY).unwrap();
        assert_eq!(persisted, app.transactions().transactions());
    }
}
