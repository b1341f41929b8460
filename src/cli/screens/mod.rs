//! The three shell screens: daily ledger, add-transaction form, categories.

pub mod add_transaction;
pub mod categories;
pub mod ledger;
