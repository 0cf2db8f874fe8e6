//! Browser persistence for the forest
//!
//! The whole forest lives as one JSON value under [`STORAGE_KEY`] in
//! `localStorage`.

use catalog_shared::{Forest, ForestStorage, StorageError, STORAGE_KEY};
use gloo_storage::errors::StorageError as GlooStorageError;
use gloo_storage::{LocalStorage, Storage};

/// `localStorage` backed forest storage
#[derive(Debug, Clone)]
pub struct BrowserStorage {
    key: &'static str,
}

impl BrowserStorage {
    pub fn new() -> Self {
        Self::with_key(STORAGE_KEY)
    }

    pub fn with_key(key: &'static str) -> Self {
        Self { key }
    }
}

impl Default for BrowserStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl ForestStorage for BrowserStorage {
    fn read(&self) -> Result<Option<Forest>, StorageError> {
        match LocalStorage::get::<Forest>(self.key) {
            Ok(forest) => Ok(Some(forest)),
            Err(GlooStorageError::KeyNotFound(_)) => Ok(None),
            Err(GlooStorageError::SerdeError(e)) => Err(StorageError::Corrupt(e.to_string())),
            Err(e) => Err(StorageError::Unavailable(e.to_string())),
        }
    }

    fn write(&self, forest: &Forest) -> Result<(), StorageError> {
        LocalStorage::set(self.key, forest).map_err(|e| StorageError::Write(e.to_string()))
    }
}
