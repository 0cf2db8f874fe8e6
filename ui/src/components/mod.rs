//! UI Components
//!
//! This module contains all UI components organized by feature:
//! - `common`: Shared/reusable components (icons, editors, modal)
//! - `layout`: Header, explorer sidebar and chat panel
//! - `detail`: Dispatches the selection to the matching view
//! - `catalog`, `schema`, `table`: Per-asset detail views

pub mod catalog;
pub mod common;
pub mod detail;
pub mod layout;
pub mod schema;
pub mod table;
