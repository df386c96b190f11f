//! Field rendering utilities for forms

use crate::ui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const CURSOR: &str = "▌";

/// What to draw for one form field
pub struct FieldConfig<'a> {
    pub label: &'a str,
    pub value: &'a str,
    /// Shown dimmed while the value is empty
    pub placeholder: Option<&'a str>,
    pub is_active: bool,
    pub is_multiline: bool,
    pub required: bool,
    /// Validation message rendered on the bottom border
    pub error: Option<&'a str>,
}

/// Draw a bordered field; the border turns to the error color when invalid
pub fn draw_field(frame: &mut Frame, area: Rect, field: FieldConfig, theme: &Theme) {
    let border_style = if field.error.is_some() {
        Style::default().fg(theme.error)
    } else if field.is_active {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.muted)
    };
    let cursor = Span::styled(
        if field.is_active { CURSOR } else { "" },
        Style::default().fg(theme.accent),
    );

    let mut lines: Vec<Line> = if field.value.is_empty() {
        let hint = if field.is_active {
            ""
        } else {
            field.placeholder.unwrap_or("")
        };
        vec![Line::from(Span::styled(
            hint.to_string(),
            Style::default().fg(theme.muted),
        ))]
    } else if field.is_multiline {
        // split keeps a trailing empty line so the cursor follows a newline
        field
            .value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(theme.text))))
            .collect()
    } else {
        vec![Line::from(Span::styled(
            field.value.to_string(),
            Style::default().fg(theme.text),
        ))]
    };
    if let Some(last) = lines.last_mut() {
        last.spans.push(cursor);
    }

    let title = if field.required {
        format!(" {} * ", field.label)
    } else {
        format!(" {} ", field.label)
    };
    let mut block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);
    if let Some(error) = field.error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {error} "),
            Style::default()
                .fg(theme.error)
                .add_modifier(Modifier::BOLD),
        )));
    }

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}

/// Draw a select field as `< value >`
pub fn draw_select(frame: &mut Frame, area: Rect, label: &str, value: &str, is_active: bool, theme: &Theme) {
    let (border_style, value_style) = if is_active {
        (
            Style::default().fg(theme.accent),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (Style::default().fg(theme.muted), Style::default().fg(theme.text))
    };

    let content = Line::from(vec![
        Span::styled("< ", Style::default().fg(theme.muted)),
        Span::styled(value.to_string(), value_style),
        Span::styled(" >", Style::default().fg(theme.muted)),
    ]);
    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(content).block(block), area);
}
