//! Placeholder host page the widget floats over

use super::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, theme: &Theme) {
    let content = vec![
        Line::from(""),
        Line::styled(
            "Build better products",
            Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::styled(
            "Tell us what works and what doesn't.",
            Style::default().fg(theme.muted),
        ),
    ];

    let page = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().style(Style::default().bg(theme.background)));

    frame.render_widget(page, area);
}
