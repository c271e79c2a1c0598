//! The three settings pages

use super::fields::{draw_button, draw_field};
use super::theme::Palette;
use crate::app::App;
use crate::state::{Form, SectionVisibilityMap};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders},
    Frame,
};

pub fn draw_light(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    draw_form_page(
        frame,
        area,
        "Light",
        &app.state.light_form,
        &app.state.visibility,
        palette,
    );
}

pub fn draw_time(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    draw_form_page(
        frame,
        area,
        "Time",
        &app.state.time_form,
        &app.state.visibility,
        palette,
    );
}

pub fn draw_system(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    draw_form_page(
        frame,
        area,
        "System",
        &app.state.system_form,
        &app.state.visibility,
        palette,
    );
}

/// Draw one page: a bordered block holding a row per visible field.
///
/// Hidden sections take no space at all, so the page relayouts when a
/// switch reveals or hides its section. An index with no backing field is
/// an action row (the factory reset button).
fn draw_form_page<F: Form>(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    form: &F,
    visibility: &SectionVisibilityMap,
    palette: &Palette,
) {
    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.muted));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let visible: Vec<usize> = (0..form.field_count())
        .filter(|&index| form.is_field_visible(index, visibility))
        .collect();

    let mut constraints: Vec<Constraint> = vec![Constraint::Length(3); visible.len()];
    constraints.push(Constraint::Min(0));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (row, &index) in rows.iter().zip(visible.iter()) {
        let is_active = form.active_field() == index;
        match form.get_field(index) {
            Some(field) => draw_field(frame, *row, field, is_active, palette),
            None => draw_button(frame, *row, "Reset to factory defaults", is_active, palette),
        }
    }
}
