//! Global State Management
//!
//! This module manages the global application state:
//! - The asset forest and the current selection
//! - The role picked in the header
//! - Sidebar layout
//!
//! The [`AssetStore`] stays the single source of truth; the signals here
//! mirror it after every mutation so components can react.

mod storage;

pub use storage::BrowserStorage;

use catalog_shared::{Asset, AssetKey, AssetStore, Forest, Role, Session, UpdateOutcome};
use leptos::*;
use tracing::{error, info, warn};

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Current forest, empty until loaded
    pub forest: RwSignal<Forest>,

    /// Asset shown in the detail panel
    pub selection: RwSignal<Option<Asset>>,

    /// Role picked in the header; not persisted
    pub role: RwSignal<Role>,

    /// Whether the forest has been rehydrated
    pub loaded: RwSignal<bool>,

    /// Last persistence error, shown as a banner
    pub error: RwSignal<Option<String>>,

    pub sidebar_collapsed: RwSignal<bool>,

    store: StoredValue<AssetStore<BrowserStorage>>,
}

impl AppState {
    /// Create a new app state with an empty forest
    pub fn new() -> Self {
        Self {
            forest: create_rw_signal(Forest::default()),
            selection: create_rw_signal(None),
            role: create_rw_signal(Role::default()),
            loaded: create_rw_signal(false),
            error: create_rw_signal(None),
            sidebar_collapsed: create_rw_signal(false),
            store: store_value(AssetStore::new(BrowserStorage::new())),
        }
    }

    /// Rehydrate the forest from local storage, seeding it on first run
    pub fn load(&self) {
        let Some((result, forest)) = self.store.try_update_value(|store| {
            let result = store.load();
            (result, store.forest().clone())
        }) else {
            return;
        };

        self.forest.set(forest);
        match result {
            Ok(source) => info!(?source, "Catalog loaded"),
            Err(e) => {
                error!("Failed to persist catalog: {}", e);
                self.error.set(Some(e.to_string()));
            }
        }
        self.loaded.set(true);
    }

    /// Select the forest's copy of `asset`
    pub fn select(&self, asset: Asset) {
        self.select_key(asset.key());
    }

    /// Select by key, resolving against the full forest
    pub fn select_key(&self, key: AssetKey) {
        let selected = self.store.try_update_value(|store| store.select_key(&key)).flatten();
        match selected {
            Some(asset) => self.selection.set(Some(asset)),
            None => warn!(kind = %key.kind, id = %key.id, "Selected asset is not in the catalog"),
        }
    }

    /// Replace an asset in the forest and persist it
    pub fn update(&self, asset: Asset) {
        let key = asset.key();
        let Some((result, forest, selection)) = self.store.try_update_value(|store| {
            let result = store.update(asset);
            (result, store.forest().clone(), store.selection().cloned())
        }) else {
            return;
        };

        self.forest.set(forest);
        self.selection.set(selection);
        match result {
            Ok(UpdateOutcome::Replaced) => self.error.set(None),
            Ok(UpdateOutcome::NotFound) => {
                warn!(kind = %key.kind, id = %key.id, "Edited asset is no longer in the catalog")
            }
            Err(e) => {
                error!("Failed to persist catalog: {}", e);
                self.error.set(Some(e.to_string()));
            }
        }
    }

    /// What the current role may do
    pub fn session(&self) -> Signal<Session> {
        let role = self.role;
        Signal::derive(move || Session::new(role.get()))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
