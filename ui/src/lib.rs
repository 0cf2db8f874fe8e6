//! Data Catalog UI Library
//!
//! Browser front end of the data catalog: a collapsible explorer of
//! catalogs, schemas and tables, a detail panel per asset type, inline
//! editing gated by the selected role, and a mock access request dialog.
//!
//! # Modules
//!
//! - [`app`]: Root application component and layout
//! - [`components`]: UI components (explorer, detail views, dialogs)
//! - [`state`]: Global state and browser persistence

pub mod app;
pub mod components;
pub mod state;

pub use app::App;
