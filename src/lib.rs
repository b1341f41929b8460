#![doc(test(attr(deny(warnings))))]

//! Daybook tracks personal spending one day at a time: dated, categorised
//! transactions, named budget categories, and a ledger screen with daily and
//! per-category totals. State lives in an injected key-value store.

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Daybook tracing initialized.");
    });
}
