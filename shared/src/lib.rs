//! Shared types for the data catalog browser
//!
//! This crate contains everything the catalog UI and launcher agree on:
//! - The asset model (catalogs, schemas, tables, columns)
//! - The fixture seed the forest starts from
//! - The asset store and its persistence seam
//! - View-state logic for filtering, sorting, tabs and access requests

pub mod access;
pub mod columns;
pub mod explorer;
pub mod filter;
pub mod fixtures;
pub mod model;
pub mod schema_tabs;
pub mod session;
pub mod store;

pub use model::*;
pub use session::{Role, Session};
pub use store::{AssetStore, ForestStorage, LoadSource, MemoryStorage, StorageError, UpdateOutcome, STORAGE_KEY};
