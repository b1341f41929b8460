//! In-memory mirror of the persisted transaction list.

use crate::domain::{Identifiable, Transaction};

/// Holds the current transaction list read by every screen.
///
/// No validation happens here; callers persist first and then call
/// [`TransactionStore::replace_all`] so memory and storage stay equal.
#[derive(Debug, Default, Clone)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
}

impl TransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace_all(&mut self, transactions: Vec<Transaction>) {
        self.transactions = transactions;
    }

    pub fn append(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn find(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id() == id)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample(category: &str) -> Transaction {
        Transaction::new(category, 10.0, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
    }

    #[test]
    fn replace_all_overwrites_previous_contents() {
        let mut store = TransactionStore::new();
        store.append(sample("Food"));
        store.replace_all(vec![sample("Rent"), sample("Fuel")]);

        let categories: Vec<_> = store
            .transactions()
            .iter()
            .map(|txn| txn.category.as_str())
            .collect();
        assert_eq!(categories, vec!["Rent", "Fuel"]);
    }

    #[test]
    fn append_keeps_insertion_order() {
        let mut store = TransactionStore::new();
        let first = sample("Food");
        let id = first.id.clone();
        store.append(first);
        store.append(sample("Fuel"));

        assert_eq!(store.len(), 2);
        assert_eq!(store.transactions()[0].id, id);
        assert!(store.find(&id).is_some());
        assert!(store.find("missing").is_none());
    }
}
