//! Browser storage tests
//!
//! Run with `wasm-pack test --headless --firefox ui`.

use catalog_shared::fixtures::seed_forest;
use catalog_shared::{AssetStore, ForestStorage, LoadSource, StorageError};
use catalog_ui::state::BrowserStorage;
use gloo_storage::{LocalStorage, Storage};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_missing_key_reads_as_empty() {
    LocalStorage::delete("test.missing");
    let storage = BrowserStorage::with_key("test.missing");
    assert!(storage.read().unwrap().is_none());
}

#[wasm_bindgen_test]
fn test_write_then_read() {
    let storage = BrowserStorage::with_key("test.roundtrip");
    let forest = seed_forest();

    storage.write(&forest).unwrap();
    assert_eq!(storage.read().unwrap(), Some(forest));
    LocalStorage::delete("test.roundtrip");
}

#[wasm_bindgen_test]
fn test_corrupt_payload_recovers_seed() {
    LocalStorage::raw().set_item("test.corrupt", "{ not json").unwrap();
    let storage = BrowserStorage::with_key("test.corrupt");
    assert!(matches!(storage.read(), Err(StorageError::Corrupt(_))));

    let mut store = AssetStore::new(storage);
    assert_eq!(store.load().unwrap(), LoadSource::Recovered);
    assert_eq!(store.forest(), &seed_forest());
    LocalStorage::delete("test.corrupt");
}
