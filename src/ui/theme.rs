//! Color palettes for the light and dark themes

use crate::state::Theme;
use ratatui::style::Color;

/// Resolved colors for one theme
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Regular text
    pub text: Color,
    /// Labels, hints and inactive borders
    pub muted: Color,
    /// Active field borders and key hints
    pub accent: Color,
    /// Destructive controls
    pub danger: Color,
    /// Status bar background
    pub bar_bg: Color,
    /// Dialog background
    pub dialog_bg: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                text: Color::White,
                muted: Color::DarkGray,
                accent: Color::Cyan,
                danger: Color::Red,
                bar_bg: Color::DarkGray,
                dialog_bg: Color::Black,
            },
            Theme::Light => Self {
                text: Color::Black,
                muted: Color::Gray,
                accent: Color::Blue,
                danger: Color::LightRed,
                bar_bg: Color::Gray,
                dialog_bg: Color::White,
            },
        }
    }
}
