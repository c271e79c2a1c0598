//! Confirmation dialog for the factory reset

use super::base::{render_dialog, DialogConfig};
use crate::ui::theme::Palette;
use ratatui::{
    style::{Modifier, Style},
    text::Span,
    Frame,
};

const RESET_WARNING: &str =
    "Are you sure you want to reset the device? This action cannot be undone.";

/// Render the factory reset confirmation overlay
pub fn render_confirm_dialog(frame: &mut Frame, palette: &Palette) {
    let hint = vec![
        Span::styled(
            "Enter",
            Style::default()
                .fg(palette.danger)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" reset  "),
        Span::styled(
            "Esc",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" cancel"),
    ];

    render_dialog(
        frame,
        palette,
        DialogConfig {
            title: "Confirm reset",
            color: palette.danger,
            message: RESET_WARNING,
            hint,
            max_width: 50,
        },
    );
}
