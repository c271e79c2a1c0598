//! Field rendering utilities for the settings pages

use super::theme::Palette;
use crate::state::{FieldValue, FormField};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw one form field as a bordered single-line row
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool, palette: &Palette) {
    let color = if is_active { palette.accent } else { palette.muted };

    let display_value = field.display_value();
    let display_str = if display_value.is_empty() && !is_active {
        "(empty)".to_string()
    } else {
        display_value
    };

    let cursor = if is_active && matches!(field.value, FieldValue::Text(_)) {
        "\u{258c}"
    } else {
        ""
    };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_str, Style::default().fg(if is_active { palette.text } else { palette.muted })),
        Span::styled(cursor, Style::default().fg(palette.accent)),
    ]));

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    frame.render_widget(content.block(block), area);
}

/// Draw an action button row (used for the factory reset control)
pub fn draw_button(frame: &mut Frame, area: Rect, label: &str, is_active: bool, palette: &Palette) {
    let color = if is_active { palette.danger } else { palette.muted };

    let style = if is_active {
        Style::default().fg(palette.danger).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.muted)
    };

    let content = Paragraph::new(Line::from(Span::styled(format!("[ {label} ]"), style)))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );

    frame.render_widget(content, area);
}
