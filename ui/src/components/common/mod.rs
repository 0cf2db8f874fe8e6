//! Common/Shared Components

mod editable;
mod icons;
mod modal;

pub use editable::*;
pub use icons::*;
pub use modal::*;
