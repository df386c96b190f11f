//! Widget state: drafts, flags, focus, mode and submission

mod controls;
mod draft;
mod draft_store;
mod flags;
mod focus_trap;
mod mode;
mod responsive;
mod submission;
mod validation;
mod widget;

pub use controls::*;
pub use draft::*;
pub use draft_store::*;
pub use flags::*;
pub use focus_trap::*;
pub use mode::*;
pub use responsive::*;
pub use submission::*;
pub use validation::*;
pub use widget::*;
