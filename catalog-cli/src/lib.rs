//! Data Catalog Launcher Library
//!
//! Web server for the embedded UI plus the offline helpers behind the
//! `seed` and `tree` commands.

pub mod server;
pub mod storage;
pub mod tree;

pub use server::create_router;
pub use storage::FileStorage;
