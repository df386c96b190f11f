//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `feedback_form`: The feedback panel (form and success views)

mod feedback_form;
mod field_renderer;

pub use feedback_form::draw_panel;
