//! Feedback panel rendering

use super::field_renderer::{draw_field, draw_select, FieldConfig};
use crate::state::{
    message_length, Banner, ControlId, FeedbackWidget, PanelView, MAX_MESSAGE_LENGTH,
};
use crate::ui::components::{banner_height, render_banner, render_button, BUTTON_HEIGHT};
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear},
    Frame,
};

const FIELD_HEIGHT: u16 = 3;

/// Draw the open panel into `area`
pub fn draw_panel(frame: &mut Frame, area: Rect, widget: &FeedbackWidget, theme: &Theme) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Feedback ")
        .title_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent))
        .style(Style::default().bg(theme.background));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match widget.panel_view() {
        PanelView::Form => draw_form(frame, inner, widget, theme),
        PanelView::Success => draw_success(frame, inner, widget, theme),
    }
}

fn draw_form(frame: &mut Frame, area: Rect, widget: &FeedbackWidget, theme: &Theme) {
    let submission = widget.submission();
    let failure = submission.banner() == Some(Banner::Failure);
    let banner_rows = if failure {
        banner_height(Banner::Failure.text(), area.width)
    } else {
        0
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT),  // Name
            Constraint::Length(FIELD_HEIGHT),  // Email
            Constraint::Min(4),                // Message
            Constraint::Length(FIELD_HEIGHT),  // Category
            Constraint::Length(banner_rows),   // Failure banner
            Constraint::Length(BUTTON_HEIGHT), // Buttons
        ])
        .split(area);

    let focused = widget.focused();
    let error_for = |control| {
        submission
            .field_error(control)
            .map(|error| error.message.as_str())
    };

    draw_field(
        frame,
        chunks[0],
        FieldConfig {
            label: ControlId::Name.label(),
            value: widget.field_value(ControlId::Name),
            placeholder: ControlId::Name.placeholder(),
            is_active: focused == Some(ControlId::Name),
            is_multiline: ControlId::Name.is_multiline(),
            required: false,
            error: None,
        },
        theme,
    );
    draw_field(
        frame,
        chunks[1],
        FieldConfig {
            label: ControlId::Email.label(),
            value: widget.field_value(ControlId::Email),
            placeholder: ControlId::Email.placeholder(),
            is_active: focused == Some(ControlId::Email),
            is_multiline: ControlId::Email.is_multiline(),
            required: widget.flags().email_required,
            error: error_for(ControlId::Email),
        },
        theme,
    );

    let message = widget.field_value(ControlId::Message);
    let message_label = format!(
        "{} ({}/{})",
        ControlId::Message.label(),
        message_length(message),
        MAX_MESSAGE_LENGTH
    );
    draw_field(
        frame,
        chunks[2],
        FieldConfig {
            label: &message_label,
            value: message,
            placeholder: ControlId::Message.placeholder(),
            is_active: focused == Some(ControlId::Message),
            is_multiline: ControlId::Message.is_multiline(),
            required: true,
            error: error_for(ControlId::Message),
        },
        theme,
    );
    draw_select(
        frame,
        chunks[3],
        ControlId::Category.label(),
        widget.field_value(ControlId::Category),
        focused == Some(ControlId::Category),
        theme,
    );

    if failure {
        render_banner(frame, chunks[4], Banner::Failure.text(), theme.error, theme);
    }

    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[5]);
    render_button(
        frame,
        buttons[0],
        submission.submit_label(),
        focused == Some(ControlId::Submit),
        !submission.is_in_flight(),
        theme,
    );
    render_button(
        frame,
        buttons[1],
        ControlId::Close.label(),
        focused == Some(ControlId::Close),
        true,
        theme,
    );
}

fn draw_success(frame: &mut Frame, area: Rect, widget: &FeedbackWidget, theme: &Theme) {
    let text = Banner::Success.text();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(banner_height(text, area.width)),
            Constraint::Length(1),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Min(0),
        ])
        .split(area);

    render_banner(frame, chunks[1], text, theme.success, theme);
    render_button(
        frame,
        chunks[3],
        ControlId::Dismiss.label(),
        widget.focused() == Some(ControlId::Dismiss),
        true,
        theme,
    );
}
