//! Persistence adapter: a string-keyed store of JSON documents.
//!
//! The application keeps three entries: the `transactions` and `categories`
//! arrays, and the scalar `selectedDay`. Every write replaces a whole entry.

pub mod json_backend;
pub mod memory;

use chrono::NaiveDate;
use serde::{de::DeserializeOwned, Serialize};

use crate::domain::dates;
use crate::errors::Result;

pub const TRANSACTIONS_KEY: &str = "transactions";
pub const CATEGORIES_KEY: &str = "categories";
pub const SELECTED_DAY_KEY: &str = "selectedDay";

/// Abstraction over key-value backends holding raw JSON text per key.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// Loads a JSON array stored under `key`.
///
/// Absent entries read as empty. Malformed entries also read as empty and are
/// logged; the next save under the same key overwrites them.
pub fn load_list<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Result<Vec<T>> {
    let Some(raw) = store.get(key)? else {
        return Ok(Vec::new());
    };
    match serde_json::from_str::<Vec<T>>(&raw) {
        Ok(items) => Ok(items),
        Err(err) => {
            tracing::warn!(key, error = %err, "stored entry is malformed, treating it as empty");
            Ok(Vec::new())
        }
    }
}

/// Replaces the JSON array stored under `key`.
pub fn save_list<T: Serialize>(store: &dyn KeyValueStore, key: &str, items: &[T]) -> Result<()> {
    let json = serde_json::to_string(items)?;
    store.set(key, &json)?;
    tracing::debug!(key, count = items.len(), "stored entry replaced");
    Ok(())
}

/// Reads the persisted selected day, if one was stored and can be parsed.
pub fn load_selected_day(store: &dyn KeyValueStore) -> Result<Option<NaiveDate>> {
    let Some(raw) = store.get(SELECTED_DAY_KEY)? else {
        return Ok(None);
    };
    // Stored as a JSON string; tolerate bare text as well.
    let text = serde_json::from_str::<String>(&raw).unwrap_or(raw);
    let parsed = dates::calendar_day(&text);
    if parsed.is_none() {
        tracing::warn!(value = %text, "stored selected day is unreadable");
    }
    Ok(parsed)
}

pub fn save_selected_day(store: &dyn KeyValueStore, day: NaiveDate) -> Result<()> {
    let json = serde_json::to_string(&dates::format_selected_day(day))?;
    store.set(SELECTED_DAY_KEY, &json)
}

pub use json_backend::JsonFileStore;
pub use memory::MemoryStore;
