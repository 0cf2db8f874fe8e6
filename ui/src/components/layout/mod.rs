//! Layout Components
//!
//! Page chrome around the detail panel:
//! - `Header`: Product title and role switcher
//! - `Sidebar`: Collapsible catalog explorer with search
//! - `ChatAssistant`: Floating chat panel

mod chat;
mod header;
mod sidebar;

pub use chat::*;
pub use header::*;
pub use sidebar::*;
