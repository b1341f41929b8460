mod common;

use std::fs;

use daybook::{
    core::services::{
        CategoryService, Direction, LedgerService, TransactionDraft, TransactionService,
    },
    domain::{Category, Transaction},
    storage::{self, KeyValueStore, CATEGORIES_KEY, SELECTED_DAY_KEY, TRANSACTIONS_KEY},
};

use common::{app_at, day, open_store, setup_app, temp_root};

#[test]
fn entries_are_written_one_file_per_key() {
    let root = temp_root();
    let store = open_store(&root);
    CategoryService::add(&store, "Food", 100.0).unwrap();

    let path = store.entry_path(CATEGORIES_KEY);
    assert!(path.ends_with("storage/categories.json"));
    let raw = fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed[0]["name"], "Food");
    assert_eq!(parsed[0]["budget"], 100.0);
    assert!(parsed[0]["id"].is_string());
}

#[test]
fn failed_write_preserves_previous_entry() {
    let root = temp_root();
    let store = open_store(&root);
    CategoryService::add(&store, "Food", 100.0).unwrap();
    let path = store.entry_path(CATEGORIES_KEY);
    let original = fs::read_to_string(&path).unwrap();

    // A directory where the staging file should go makes the write fail.
    let mut staging = path.clone();
    staging.set_extension("json.tmp");
    fs::create_dir_all(&staging).unwrap();

    assert!(CategoryService::add(&store, "Rent", 900.0).is_err());
    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn selected_day_survives_restart() {
    let (mut app, root) = setup_app(day(2024, 3, 10));
    LedgerService::navigate_day(&mut app, Direction::Prev).unwrap();
    LedgerService::navigate_day(&mut app, Direction::Prev).unwrap();
    drop(app);

    let raw = open_store(&root).get(SELECTED_DAY_KEY).unwrap().unwrap();
    assert_eq!(raw, "\"2024-03-08T00:00:00.000Z\"");

    let restarted = app_at(&root, day(2024, 3, 20));
    assert_eq!(restarted.selected_day(), day(2024, 3, 8));
}

#[test]
fn first_launch_selects_today() {
    let (app, _root) = setup_app(day(2024, 3, 10));
    assert_eq!(app.selected_day(), day(2024, 3, 10));
    assert!(app.transactions().is_empty());
}

#[test]
fn first_launch_day_is_kept_when_reopened_later() {
    let (app, root) = setup_app(day(2024, 3, 5));
    let raw = app.storage().get(SELECTED_DAY_KEY).unwrap();
    assert_eq!(raw.as_deref(), Some("\"2024-03-05T00:00:00.000Z\""));
    drop(app);

    let next_day = app_at(&root, day(2024, 3, 6));
    assert_eq!(next_day.selected_day(), day(2024, 3, 5));
}

#[test]
fn transactions_are_hydrated_on_startup() {
    let (mut app, root) = setup_app(day(2024, 3, 1));
    CategoryService::add(app.storage(), "Food", 100.0).unwrap();
    let draft = TransactionDraft::new(None, app.today())
        .with_category("Food")
        .with_amount(25.0);
    let added = TransactionService::submit(&mut app, draft).unwrap();
    drop(app);

    let restarted = app_at(&root, day(2024, 3, 1));
    assert_eq!(restarted.transactions().transactions(), &[added]);
}

#[test]
fn malformed_arrays_read_as_empty_and_are_overwritten() {
    let root = temp_root();
    let store = open_store(&root);
    store.set(TRANSACTIONS_KEY, "[{\"id\": 1").unwrap();
    store.set(CATEGORIES_KEY, "\"not a list\"").unwrap();

    let mut app = app_at(&root, day(2024, 3, 1));
    assert!(app.transactions().is_empty());
    assert!(CategoryService::list(app.storage()).unwrap().is_empty());

    CategoryService::add(app.storage(), "Food", 50.0).unwrap();
    let draft = TransactionDraft::new(None, app.today())
        .with_category("Food")
        .with_amount(5.0);
    TransactionService::submit(&mut app, draft).unwrap();

    let stored: Vec<Transaction> = storage::load_list(app.storage(), TRANSACTIONS_KEY).unwrap();
    assert_eq!(stored.len(), 1);
}

#[test]
fn data_written_by_earlier_versions_is_readable() {
    let root = temp_root();
    let store = open_store(&root);
    store
        .set(
            TRANSACTIONS_KEY,
            r#"[{"id":"1709251200000","category":"Food","amount":25,"date":"2024-03-01T09:30:00.000Z"}]"#,
        )
        .unwrap();
    store
        .set(
            CATEGORIES_KEY,
            r#"[{"id":"1709251100000","name":"Food","budget":100}]"#,
        )
        .unwrap();
    store
        .set(SELECTED_DAY_KEY, "\"2024-03-01T00:00:00.000Z\"")
        .unwrap();

    let app = app_at(&root, day(2024, 6, 1));
    assert_eq!(app.selected_day(), day(2024, 3, 1));
    assert_eq!(LedgerService::daily_total(&app), 25.0);
    let categories: Vec<Category> = CategoryService::list(app.storage()).unwrap();
    assert_eq!(categories[0].budget, 100.0);
}

#[test]
fn unreadable_selected_day_falls_back_to_today() {
    let root = temp_root();
    open_store(&root)
        .set(SELECTED_DAY_KEY, "\"someday\"")
        .unwrap();
    let app = app_at(&root, day(2024, 3, 10));
    assert_eq!(app.selected_day(), day(2024, 3, 10));
    assert_eq!(
        storage::load_selected_day(app.storage()).unwrap(),
        Some(day(2024, 3, 10))
    );
}
