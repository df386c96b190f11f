//! Screen layout: host content, floating toggle, panel placement, status bar

use super::components::{render_button, BUTTON_HEIGHT};
use super::theme::Theme;
use crate::platform::{SUBMIT_SHORTCUT, TOGGLE_SHORTCUT};
use crate::state::{FeedbackWidget, Mode, PanelView};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Toggle button width in columns
pub const TOGGLE_WIDTH: u16 = 14;

/// Expanded panel size cap
pub const PANEL_WIDTH: u16 = 52;
pub const PANEL_HEIGHT: u16 = 26;

/// Distance between the floating controls and the screen edge
const MARGIN: u16 = 1;

/// Content area above the one-line status bar
pub fn create_layout(area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    chunks[0]
}

/// Bottom-right corner of the content area
pub fn toggle_button_area(content: Rect) -> Rect {
    let width = TOGGLE_WIDTH.min(content.width);
    let height = BUTTON_HEIGHT.min(content.height);
    Rect {
        x: content.right().saturating_sub(width + MARGIN).max(content.x),
        y: content.bottom().saturating_sub(height),
        width,
        height,
    }
}

/// Where the panel goes for `mode`; `None` while collapsed
pub fn panel_area(content: Rect, mode: Mode) -> Option<Rect> {
    match mode {
        Mode::Collapsed => None,
        Mode::Full => Some(content),
        Mode::Expanded => {
            let toggle = toggle_button_area(content);
            let width = PANEL_WIDTH.min(content.width.saturating_sub(MARGIN));
            let height = PANEL_HEIGHT.min(toggle.y.saturating_sub(content.y));
            Some(Rect {
                x: content.right().saturating_sub(width + MARGIN).max(content.x),
                y: toggle.y.saturating_sub(height),
                width,
                height,
            })
        }
    }
}

/// The floating toggle; hidden under the full-screen panel
pub fn draw_toggle(frame: &mut Frame, content: Rect, widget: &FeedbackWidget, theme: &Theme) {
    if widget.mode() == Mode::Full {
        return;
    }
    let label = if widget.is_open() { "Close" } else { "Feedback" };
    render_button(
        frame,
        toggle_button_area(content),
        label,
        !widget.is_open(),
        true,
        theme,
    );
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, widget: &FeedbackWidget, theme: &Theme) {
    let area = frame.area();
    let status_area = Rect {
        x: area.x,
        y: area.bottom().saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::styled(
        format!(" {} ", get_hints(widget)),
        Style::default().fg(theme.text),
    )];

    if widget.submission().is_in_flight() {
        spans.push(Span::raw("| "));
        spans.push(Span::styled(
            "Sending feedback...",
            Style::default().fg(theme.accent),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.muted));
    frame.render_widget(status, status_area);
}

/// Keyboard hints for the widget's current state
fn get_hints(widget: &FeedbackWidget) -> String {
    if !widget.is_open() {
        return format!("Enter/f:feedback  {TOGGLE_SHORTCUT}:toggle  q:quit");
    }
    match widget.panel_view() {
        PanelView::Form => {
            format!("Tab/S-Tab:move  {SUBMIT_SHORTCUT}:submit  Esc:close  {TOGGLE_SHORTCUT}:toggle")
        }
        PanelView::Success => "Enter:close  Esc:close".to_string(),
    }
}
