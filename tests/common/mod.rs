#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use daybook::{
    core::{AppState, FixedClock},
    storage::JsonFileStore,
};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Creates a unique directory that outlives the calling test.
pub fn temp_root() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let root = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    root
}

pub fn open_store(root: &Path) -> JsonFileStore {
    JsonFileStore::new(root.join("storage")).expect("open json file store")
}

/// Application state persisted under `root`, with a clock reading `today`.
/// Calling it twice on one root simulates an app restart.
pub fn app_at(root: &Path, today: NaiveDate) -> AppState {
    AppState::hydrate(Box::new(open_store(root)), Arc::new(FixedClock::new(today)))
        .expect("hydrate application state")
}

/// Fresh application state plus the root it persists into.
pub fn setup_app(today: NaiveDate) -> (AppState, PathBuf) {
    let root = temp_root();
    let app = app_at(&root, today);
    (app, root)
}
