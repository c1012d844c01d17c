// Status bar component
//
// Bottom line of every view: version, current view, theme name, demo
// badge, and the most recent log entry from the in-memory buffer.

use crate::config::VERSION;
use crate::tui::app::{App, View};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let view_name = match app.view {
        View::Login => "Login",
        View::Register => "Register",
        View::Dashboard => "Dashboard",
        View::Profile => "Profile",
    };

    let mut spans = vec![Span::styled(
        format!(" dsaquest v{} │ {} │ {}", VERSION, view_name, theme.name),
        Style::default().fg(theme.muted),
    )];

    if app.demo_mode {
        spans.push(Span::styled(" │ DEMO", Style::default().fg(theme.warning)));
    }

    if let Some(entry) = app.log_buffer.latest() {
        let level_color = match entry.level {
            crate::logging::LogLevel::Error => theme.error,
            crate::logging::LogLevel::Warn => theme.warning,
            _ => theme.muted,
        };
        spans.push(Span::styled(" │ ", Style::default().fg(theme.muted)));
        spans.push(Span::styled(
            format!("{} ", entry.level.as_str()),
            Style::default().fg(level_color),
        ));
        spans.push(Span::styled(
            entry.message,
            Style::default().fg(theme.muted),
        ));
    }

    let status = Paragraph::new(Line::from(spans))
        .style(Style::default().fg(theme.muted))
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}
