//! Layout components (tab header, status bar)

use super::theme::Palette;
use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

/// Split the screen into tab header, page content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab header
            Constraint::Min(0),    // Page content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the page tabs, one per device configuration page
pub fn draw_tabs(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let titles: Vec<Line> = View::ALL
        .iter()
        .enumerate()
        .map(|(i, view)| {
            Line::from(vec![
                Span::styled(format!("{} ", i + 1), Style::default().fg(palette.muted)),
                Span::raw(view.label()),
            ])
        })
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.state.current_view.index())
        .style(Style::default().fg(palette.muted))
        .highlight_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(" Wordclock ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.muted)),
        );

    frame.render_widget(tabs, area);
}

/// Draw the status bar with the device address and key hints
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let mut spans = vec![
        Span::styled(
            format!(" {} ", app.device_address()),
            Style::default().fg(palette.accent),
        ),
        Span::raw("| "),
        Span::styled(view_hints(app.state.current_view), Style::default().fg(palette.text)),
    ];

    let quit_hint = Span::styled(" ^T:theme  Esc:quit ", Style::default().fg(palette.text));
    // Pad by display width; the hints contain multi-byte arrow glyphs
    let used: usize = spans.iter().map(Span::width).sum::<usize>() + quit_hint.width();
    spans.push(Span::raw(" ".repeat((area.width as usize).saturating_sub(used))));
    spans.push(quit_hint);

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(palette.bar_bg));
    frame.render_widget(status, area);
}

/// Keyboard hints for the current page
fn view_hints(view: View) -> String {
    match view {
        View::Light | View::Time => "Tab:next  Space:toggle  Enter:save  \u{2190}/\u{2192}:page".to_string(),
        View::System => {
            "Tab:next  Space:toggle/select  Enter:save  \u{2190}/\u{2192}:page".to_string()
        }
    }
}
