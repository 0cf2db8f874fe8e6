//! Asset Store
//!
//! Single source of truth for the asset forest and the current selection.
//! The forest is rehydrated once from durable storage (or seeded from the
//! fixtures) and every successful update writes the whole forest back.
//!
//! Storage is abstracted behind [`ForestStorage`] so the browser, the
//! launcher and tests can each bring their own medium.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::{debug, info, warn};

use crate::fixtures;
use crate::model::{Asset, AssetKey, Forest};

/// Storage key holding the serialized forest
pub const STORAGE_KEY: &str = "datacatalog.assets";

/// Error types for forest persistence
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Stored forest is corrupt: {0}")]
    Corrupt(String),

    #[error("Failed to read stored forest: {0}")]
    Read(String),

    #[error("Failed to write forest: {0}")]
    Write(String),
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Corrupt(err.to_string())
    }
}

/// Durable medium for the serialized forest
pub trait ForestStorage {
    /// Read the stored forest, `None` when nothing has been stored yet
    fn read(&self) -> Result<Option<Forest>, StorageError>;

    /// Replace the stored forest
    fn write(&self, forest: &Forest) -> Result<(), StorageError>;
}

/// In-memory storage holding the JSON payload
///
/// Clones share the same payload, which lets a test keep a handle while the
/// store owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    payload: Rc<RefCell<Option<String>>>,
    writes: Rc<Cell<usize>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that already holds a raw payload
    pub fn with_payload(payload: impl Into<String>) -> Self {
        let storage = Self::default();
        *storage.payload.borrow_mut() = Some(payload.into());
        storage
    }

    pub fn payload(&self) -> Option<String> {
        self.payload.borrow().clone()
    }

    /// Number of successful writes so far
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl ForestStorage for MemoryStorage {
    fn read(&self) -> Result<Option<Forest>, StorageError> {
        match self.payload.borrow().as_deref() {
            Some(payload) => Ok(Some(Forest::from_json(payload)?)),
            None => Ok(None),
        }
    }

    fn write(&self, forest: &Forest) -> Result<(), StorageError> {
        let payload = forest.to_json().map_err(|e| StorageError::Write(e.to_string()))?;
        *self.payload.borrow_mut() = Some(payload);
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

/// Where the forest came from on load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// Rehydrated from storage
    Stored,
    /// Nothing stored yet, seeded from fixtures
    Seeded,
    /// Stored payload unreadable, replaced by the seed
    Recovered,
}

/// Result of an update request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The counterpart was replaced and the forest persisted
    Replaced,
    /// No node had the same kind and id; nothing changed
    NotFound,
}

/// Holds the forest, the selection and the storage behind them
pub struct AssetStore<S> {
    storage: S,
    forest: Forest,
    selection: Option<Asset>,
}

impl<S: ForestStorage> AssetStore<S> {
    /// A store with an empty, not yet loaded forest
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            forest: Forest::default(),
            selection: None,
        }
    }

    /// Rehydrate the forest, seeding storage when nothing usable is stored
    ///
    /// The in-memory forest is always initialized when this returns, even if
    /// writing the seed back fails.
    pub fn load(&mut self) -> Result<LoadSource, StorageError> {
        let source = match self.storage.read() {
            Ok(Some(mut forest)) => {
                let assigned = forest.assign_missing_ids();
                info!(assets = forest.asset_count(), "Rehydrated catalog forest from storage");
                self.forest = forest;
                if assigned > 0 {
                    debug!(assigned, "Assigned ids to stored assets");
                    self.persist()?;
                }
                return Ok(LoadSource::Stored);
            }
            Ok(None) => LoadSource::Seeded,
            Err(e) => {
                warn!("Discarding stored forest: {}", e);
                LoadSource::Recovered
            }
        };

        self.forest = fixtures::seed_forest();
        info!(assets = self.forest.asset_count(), "Seeded catalog forest from fixtures");
        self.persist()?;
        Ok(source)
    }

    pub fn forest(&self) -> &Forest {
        &self.forest
    }

    pub fn selection(&self) -> Option<&Asset> {
        self.selection.as_ref()
    }

    /// Select an asset; it is not checked against the forest
    pub fn select(&mut self, asset: Asset) {
        debug!(kind = %asset.kind(), name = asset.name(), "Selecting asset");
        self.selection = Some(asset);
    }

    /// Select the forest's own copy of the asset with this key
    ///
    /// Views built from a pruned forest (explorer search) hand out partial
    /// nodes; selecting by key keeps those out of later updates.
    pub fn select_key(&mut self, key: &AssetKey) -> Option<Asset> {
        let asset = self.forest.find(key)?;
        self.select(asset.clone());
        Some(asset)
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    pub fn find(&self, key: &AssetKey) -> Option<Asset> {
        self.forest.find(key)
    }

    /// Replace the asset's counterpart and persist the forest
    ///
    /// When nothing matches, the forest is left as is and `NotFound` is
    /// returned. A persistence error is reported after the in-memory
    /// replacement has already happened.
    pub fn update(&mut self, asset: Asset) -> Result<UpdateOutcome, StorageError> {
        let key = asset.key();

        let Some(forest) = self.forest.replaced(&asset) else {
            warn!(kind = %key.kind, id = %key.id, "Update target not found, forest unchanged");
            return Ok(UpdateOutcome::NotFound);
        };

        self.forest = forest;
        if self.selection.as_ref().is_some_and(|s| s.key() == key) {
            self.selection = Some(asset);
        }

        self.persist()?;
        debug!(kind = %key.kind, id = %key.id, "Asset updated");
        Ok(UpdateOutcome::Replaced)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn persist(&self) -> Result<(), StorageError> {
        self.storage.write(&self.forest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::explorer::{filter_forest, tree_rows};
    use crate::model::{AssetId, AssetKind, Table};
    use std::collections::HashSet;

    fn loaded_store() -> (AssetStore<MemoryStorage>, MemoryStorage) {
        let storage = MemoryStorage::new();
        let mut store = AssetStore::new(storage.clone());
        assert_eq!(store.load().unwrap(), LoadSource::Seeded);
        (store, storage)
    }

    fn table(store: &AssetStore<MemoryStorage>, name: &str) -> Table {
        store.forest().catalogs[0].schemas[0]
            .tables
            .iter()
            .find(|t| t.name == name)
            .cloned()
            .unwrap()
    }

    #[test]
    fn test_first_load_seeds_and_persists() {
        let (store, storage) = loaded_store();

        assert_eq!(store.forest().catalogs[0].name, "ELM");
        assert_eq!(storage.write_count(), 1);
        assert!(storage.payload().unwrap().contains("\"Appropriations\""));
        assert!(store.selection().is_none());
    }

    #[test]
    fn test_forest_is_empty_until_loaded() {
        let store = AssetStore::new(MemoryStorage::new());
        assert!(store.forest().is_empty());
    }

    #[test]
    fn test_reload_rehydrates_equal_forest() {
        let (mut store, storage) = loaded_store();
        let mut customer = table(&store, "Customer");
        customer.description = Some("Edited".to_string());
        store.update(Asset::Table(customer)).unwrap();

        let mut reloaded = AssetStore::new(storage.clone());
        assert_eq!(reloaded.load().unwrap(), LoadSource::Stored);
        assert_eq!(reloaded.forest(), store.forest());
    }

    #[test]
    fn test_update_replaces_and_persists() {
        let (mut store, storage) = loaded_store();
        let before = store.forest().clone();
        let mut clinic = table(&store, "Clinic");
        clinic.description = Some("Clinics and locations".to_string());

        let outcome = store.update(Asset::Table(clinic.clone())).unwrap();

        assert_eq!(outcome, UpdateOutcome::Replaced);
        assert_eq!(table(&store, "Clinic"), clinic);
        assert_eq!(table(&store, "Service"), before.catalogs[0].schemas[0].tables[3]);
        assert_eq!(storage.write_count(), 2);
    }

    #[test]
    fn test_select_key_from_search_results_keeps_hidden_tables() {
        let (mut store, storage) = loaded_store();
        let pruned = filter_forest(store.forest(), "clin");
        let row = &tree_rows(&pruned, &HashSet::new(), true)[0];
        match &row.asset {
            Asset::Catalog(c) => assert_eq!(c.schemas[0].tables.len(), 1),
            other => panic!("expected catalog row, got {:?}", other.kind()),
        }

        let Some(Asset::Catalog(mut catalog)) = store.select_key(&row.key()) else {
            panic!("catalog not found");
        };
        catalog.add_business_area();
        store.update(Asset::Catalog(catalog)).unwrap();

        let mut reloaded = AssetStore::new(storage.clone());
        reloaded.load().unwrap();
        assert_eq!(reloaded.forest().catalogs[0].schemas[0].tables.len(), 5);
        assert_eq!(reloaded.forest().asset_count(), 7);
    }

    #[test]
    fn test_select_key_unknown_leaves_selection() {
        let (mut store, _) = loaded_store();
        let key = AssetKey::new(AssetKind::Table, AssetId::new("table:ELM/Appropriations/Ghost"));
        assert!(store.select_key(&key).is_none());
        assert!(store.selection().is_none());
    }

    #[test]
    fn test_update_missing_target_is_a_no_op() {
        let (mut store, storage) = loaded_store();
        let before = store.forest().clone();
        let mut ghost = Table::new("Ghost");
        ghost.id = AssetId::new("table:ELM/Appropriations/Ghost");

        let outcome = store.update(Asset::Table(ghost)).unwrap();

        assert_eq!(outcome, UpdateOutcome::NotFound);
        assert_eq!(store.forest(), &before);
        assert_eq!(storage.write_count(), 1);
    }

    #[test]
    fn test_update_refreshes_matching_selection() {
        let (mut store, _) = loaded_store();
        let catalog = store.forest().catalogs[0].clone();
        store.select(Asset::Catalog(catalog.clone()));

        let mut edited = catalog;
        edited.add_business_area();
        store.update(Asset::Catalog(edited.clone())).unwrap();

        assert_eq!(store.selection(), Some(&Asset::Catalog(edited)));
    }

    #[test]
    fn test_update_keeps_unrelated_selection() {
        let (mut store, _) = loaded_store();
        let consumer = table(&store, "Consumer");
        store.select(Asset::Table(consumer.clone()));

        let mut service = table(&store, "Service");
        service.description = None;
        store.update(Asset::Table(service)).unwrap();

        assert_eq!(store.selection(), Some(&Asset::Table(consumer)));
    }

    #[test]
    fn test_corrupt_payload_recovers_with_seed() {
        let storage = MemoryStorage::with_payload("{not json");
        let mut store = AssetStore::new(storage.clone());

        assert_eq!(store.load().unwrap(), LoadSource::Recovered);
        assert_eq!(store.forest(), &fixtures::seed_forest());
        assert!(Forest::from_json(&storage.payload().unwrap()).is_ok());
    }

    #[test]
    fn test_stored_forest_without_ids_gets_them() {
        let storage = MemoryStorage::with_payload(r#"[{"name":"HR","schemas":[]}]"#);
        let mut store = AssetStore::new(storage.clone());

        assert_eq!(store.load().unwrap(), LoadSource::Stored);
        assert_eq!(store.forest().catalogs[0].id.as_str(), "catalog:HR");
        assert!(storage.payload().unwrap().contains("catalog:HR"));
    }
}
