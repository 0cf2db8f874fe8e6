//! Catalog Components
//!
//! - `CatalogView`: Business areas, analytics and terminology of a catalog
//! - `RequestAccessModal`: Mock access request workflow

mod access;
mod view;

pub use access::*;
pub use view::*;
