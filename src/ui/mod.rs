//! UI module for rendering the TUI

mod components;
mod forms;
mod host;
mod layout;
mod theme;

pub use layout::{create_layout, toggle_button_area};

use crate::app::App;
use theme::Theme;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let widget = &app.widget;
    let theme = Theme::for_flags(&widget.flags());
    let content = layout::create_layout(frame.area());

    host::draw(frame, content, &theme);
    layout::draw_toggle(frame, content, widget, &theme);
    if let Some(panel) = layout::panel_area(content, widget.mode()) {
        forms::draw_panel(frame, panel, widget, &theme);
    }
    layout::draw_status_bar(frame, widget, &theme);
}
