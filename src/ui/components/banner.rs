//! Status banner shown inside the panel

use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows a banner of `text` needs inside `width` columns, borders included
pub fn banner_height(text: &str, width: u16) -> u16 {
    let inner = width.saturating_sub(4).max(1) as usize;
    wrap_text(text, inner).len() as u16 + 2
}

/// Render a bordered, centered banner in `color`
pub fn render_banner(frame: &mut Frame, area: Rect, text: &str, color: Color, theme: &Theme) {
    let inner = area.width.saturating_sub(4).max(1) as usize;
    let lines: Vec<Line> = wrap_text(text, inner).into_iter().map(Line::from).collect();

    let banner = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .style(Style::default().bg(theme.background)),
        );

    frame.render_widget(banner, area);
}

/// Wrap text to fit within a maximum width
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        for word in paragraph.split_whitespace() {
            let current_len = current_line.chars().count();
            if current_len + word.chars().count() + 1 > max_width && !current_line.is_empty() {
                lines.push(current_line);
                current_line = String::new();
            }
            if !current_line.is_empty() {
                current_line.push(' ');
            }
            current_line.push_str(word);
        }
        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text_breaks_on_words() {
        let lines = wrap_text("Something went wrong. Please try again.", 20);
        assert_eq!(lines, vec!["Something went", "wrong. Please try", "again."]);
    }

    #[test]
    fn test_wrap_text_keeps_explicit_newlines() {
        assert_eq!(wrap_text("a\n\nb", 10), vec!["a", "", "b"]);
    }

    #[test]
    fn test_wrap_text_empty() {
        assert_eq!(wrap_text("", 10), vec![String::new()]);
    }

    #[test]
    fn test_banner_height_counts_borders() {
        assert_eq!(banner_height("Thank you for your feedback!", 60), 3);
        assert_eq!(banner_height("Thank you for your feedback!", 16), 5);
    }
}
