//! File-backed forest storage
//!
//! Holds the same JSON payload the browser keeps under
//! [`STORAGE_KEY`](catalog_shared::STORAGE_KEY), so an exported payload can
//! be inspected and seeded offline.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use catalog_shared::{Forest, ForestStorage, StorageError};
use tracing::debug;

/// Forest payload stored in a JSON file
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ForestStorage for FileStorage {
    fn read(&self) -> Result<Option<Forest>, StorageError> {
        let payload = match std::fs::read_to_string(&self.path) {
            Ok(payload) => payload,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StorageError::Read(format!("{}: {}", self.path.display(), e))),
        };
        debug!("Read {} bytes from {}", payload.len(), self.path.display());
        Ok(Some(Forest::from_json(&payload)?))
    }

    fn write(&self, forest: &Forest) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| StorageError::Write(e.to_string()))?;
        }
        let payload = forest.to_json_pretty().map_err(|e| StorageError::Write(e.to_string()))?;
        std::fs::write(&self.path, payload)
            .map_err(|e| StorageError::Write(format!("{}: {}", self.path.display(), e)))
    }
}

/// Default payload location
/// Uses: $DATACATALOG_DATA_DIR > ~/.datacatalog > ./data
pub fn default_data_path() -> PathBuf {
    if let Ok(dir) = std::env::var("DATACATALOG_DATA_DIR") {
        return PathBuf::from(dir).join("assets.json");
    }

    match dirs::home_dir() {
        Some(home) => home.join(".datacatalog").join("assets.json"),
        None => PathBuf::from("./data").join("assets.json"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_shared::fixtures::seed_forest;
    use catalog_shared::{AssetStore, LoadSource};
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_reads_as_empty() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("assets.json"));
        assert!(storage.read().unwrap().is_none());
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("nested").join("assets.json"));
        let forest = seed_forest();

        storage.write(&forest).unwrap();
        assert_eq!(storage.read().unwrap(), Some(forest));
    }

    #[test]
    fn test_corrupt_file_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("assets.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = FileStorage::new(&path).read().unwrap_err();
        assert!(matches!(err, StorageError::Corrupt(_)));
    }

    #[test]
    fn test_store_seeds_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("assets.json");

        let mut store = AssetStore::new(FileStorage::new(&path));
        assert_eq!(store.load().unwrap(), LoadSource::Seeded);
        assert!(path.exists());

        let mut reloaded = AssetStore::new(FileStorage::new(&path));
        assert_eq!(reloaded.load().unwrap(), LoadSource::Stored);
        assert_eq!(reloaded.forest(), store.forest());
    }
}
