// Stopwatch bar
//
// One line under the problem table: elapsed time, run state, and the
// title of the bound problem if a session is active. The keybinding
// hints double as the tracker's affordance.

use crate::tui::app::App;
use crate::util::format_clock;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let stopwatch = &app.tracker.stopwatch;

    let clock = format_clock(stopwatch.elapsed());
    let (state_label, state_color) = if stopwatch.is_running() {
        ("RUNNING", theme.success)
    } else {
        ("STOPPED", theme.muted)
    };

    let mut spans = vec![
        Span::styled(
            format!(" ⏱ {} ", clock),
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("[{}]", state_label), Style::default().fg(state_color)),
    ];

    if let Some(session) = app.tracker.session() {
        let title = app
            .store
            .get(session.problem_id)
            .map(|p| p.title.clone())
            .unwrap_or_else(|| format!("#{}", session.problem_id));
        spans.push(Span::styled(
            format!("  tracking: {}", title),
            Style::default().fg(theme.accent),
        ));
        spans.push(Span::styled(
            "  (r submits time and resets)",
            Style::default().fg(theme.muted),
        ));
    } else if stopwatch.is_running() {
        spans.push(Span::styled(
            "  Enter on a problem to start tracking it",
            Style::default().fg(theme.muted),
        ));
    } else {
        spans.push(Span::styled(
            "  Space starts the timer",
            Style::default().fg(theme.muted),
        ));
    }

    let bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border)),
    );

    f.render_widget(bar, area);
}
