//! UI module for rendering the TUI

mod components;
mod fields;
mod layout;
mod pages;
mod theme;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;
use theme::Palette;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let palette = Palette::for_theme(app.state.theme);
    let (tabs_area, content_area, status_area) = layout::create_layout(frame.area());

    layout::draw_tabs(frame, tabs_area, app, &palette);

    match app.state.current_view {
        View::Light => pages::draw_light(frame, content_area, app, &palette),
        View::Time => pages::draw_time(frame, content_area, app, &palette),
        View::System => pages::draw_system(frame, content_area, app, &palette),
    }

    layout::draw_status_bar(frame, status_area, app, &palette);

    // Overlays; the alert wins over the confirmation dialog
    if app.state.reset_confirm_open {
        components::render_confirm_dialog(frame, &palette);
    }
    if let Some(message) = &app.state.alert {
        components::render_alert_dialog(frame, &palette, message);
    }
}
