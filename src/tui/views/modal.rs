// Modal overlays: help and solve confirmation
//
// Modals are blocking: while one is open the event loop routes keys here
// before any view handler.

use crate::tui::app::{App, Modal};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Centered rect with the given percentage dimensions
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

pub fn render(f: &mut Frame, area: Rect, app: &App, modal: &Modal) {
    match modal {
        Modal::Help => render_help(f, area, app),
        Modal::ConfirmSolve { title, .. } => render_confirm_solve(f, area, app, title),
    }
}

fn render_help(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let popup = centered_rect(60, 70, area);

    let key = |k: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<12}", k), Style::default().fg(theme.highlight)),
            Span::styled(desc, Style::default().fg(theme.foreground)),
        ])
    };

    let lines = vec![
        Line::from(Span::styled(
            " Dashboard",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        key("j/k, ↑/↓", "Move selection"),
        key("Enter", "Start session and open problem page"),
        key("Space", "Start/pause stopwatch"),
        key("r", "Submit time and reset stopwatch"),
        key("m", "Mark selected problem solved"),
        key("o", "Open problem page (no session)"),
        key("y", "Copy problem URL"),
        Line::default(),
        Line::from(Span::styled(
            " Filters",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        key("d", "Cycle difficulty filter"),
        key("f", "Cycle status filter"),
        key("g", "Cycle topic filter"),
        key("c", "Clear all filters"),
        Line::default(),
        Line::from(Span::styled(
            " General",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        key("F5", "Refresh problem list"),
        key("p", "Profile"),
        key("t", "Cycle theme"),
        key("?, F1", "This help"),
        key("q", "Quit"),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.highlight))
        .title(" Help ")
        .style(Style::default().bg(theme.background));

    f.render_widget(Clear, popup);
    f.render_widget(Paragraph::new(lines).block(block), popup);
}

fn render_confirm_solve(f: &mut Frame, area: Rect, app: &App, title: &str) {
    let theme = &app.theme;
    let popup = centered_rect(50, 25, area);

    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            format!("Mark \"{}\" as solved?", title),
            Style::default().fg(theme.foreground),
        ))
        .alignment(Alignment::Center),
        Line::default(),
        Line::from(vec![
            Span::styled("Enter/y", Style::default().fg(theme.success)),
            Span::styled(" confirm    ", Style::default().fg(theme.muted)),
            Span::styled("Esc/n", Style::default().fg(theme.error)),
            Span::styled(" cancel", Style::default().fg(theme.muted)),
        ])
        .alignment(Alignment::Center),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.warning))
        .title(" Confirm ")
        .style(Style::default().bg(theme.background));

    f.render_widget(Clear, popup);
    f.render_widget(Paragraph::new(lines).block(block), popup);
}
