//! Blocking validation alert dialog

use super::base::{render_dialog, DialogConfig};
use crate::ui::theme::Palette;
use ratatui::{
    style::{Modifier, Style},
    text::Span,
    Frame,
};

/// Render the validation alert overlay centered on the screen
pub fn render_alert_dialog(frame: &mut Frame, palette: &Palette, message: &str) {
    let hint = vec![
        Span::raw("Press "),
        Span::styled(
            "Enter",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" or "),
        Span::styled(
            "Esc",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" to dismiss"),
    ];

    render_dialog(
        frame,
        palette,
        DialogConfig {
            title: "Invalid input",
            color: palette.danger,
            message,
            hint,
            max_width: 60,
        },
    );
}
