// Screen rendering
//
// `draw` dispatches to the active view, then layers the modal and toast
// overlays on top. Views render into the content area above a shared
// status bar.

pub mod dashboard;
pub mod login;
pub mod modal;
pub mod profile;
pub mod register;

use crate::tui::app::App;
use crate::tui::components::status_bar;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

pub fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    // Themed background for the whole frame
    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.background)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(2)])
        .split(area);

    match app.view {
        crate::tui::app::View::Login => login::render(f, chunks[0], app),
        crate::tui::app::View::Register => register::render(f, chunks[0], app),
        crate::tui::app::View::Dashboard => dashboard::render(f, chunks[0], app),
        crate::tui::app::View::Profile => profile::render(f, chunks[0], app),
    }

    status_bar::render(f, chunks[1], app);

    if let Some(m) = app.modal.clone() {
        modal::render(f, area, app, &m);
    }

    if let Some(toast) = &app.toast {
        toast.render(f, area, &app.theme);
    }
}
