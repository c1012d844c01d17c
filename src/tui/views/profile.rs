// Profile screen
//
// Largely static: identity from the current session plus placeholder
// stats. Only the level and XP-to-next-level gauge are live, derived
// from the same counters the dashboard shows.

use crate::tui::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let counters = app.store.counters();

    let panel_width = 56.min(area.width.saturating_sub(4));
    let panel_height = 16;
    let x = area.x + (area.width.saturating_sub(panel_width)) / 2;
    let y = area.y + (area.height.saturating_sub(panel_height)) / 2;
    let panel = Rect::new(x, y, panel_width, panel_height.min(area.height));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title(" Adventurer Profile ");
    let inner = block.inner(panel);
    f.render_widget(block, panel);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // identity and stats
            Constraint::Length(1),
            Constraint::Length(3), // XP gauge
            Constraint::Min(1),    // footnote
        ])
        .split(inner);

    let label = |name: &'static str, value: String| {
        Line::from(vec![
            Span::styled(format!(" {:<12}", name), Style::default().fg(theme.muted)),
            Span::styled(value, Style::default().fg(theme.foreground)),
        ])
    };

    let username = app
        .profile
        .username
        .clone()
        .unwrap_or_else(|| "Adventurer".to_string());
    let email = app.profile.email.clone().unwrap_or_else(|| "—".to_string());

    let lines = vec![
        Line::from(Span::styled(
            format!(" {} ", username),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        label("Email", email),
        label("Level", counters.level().to_string()),
        label("Total XP", format!("{} ⚡", counters.total_xp)),
        label("Solved", counters.solved.to_string()),
        label("Rank", "Code Warrior".to_string()),
        label("Streak", "🔥 coming soon".to_string()),
    ];
    f.render_widget(Paragraph::new(lines), rows[0]);

    // Progress through the current 1000-XP level band
    let into_level = (counters.total_xp % 1000) as u16;
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border))
                .title(format!(" Level {} progress ", counters.level())),
        )
        .gauge_style(Style::default().fg(theme.accent))
        .percent(into_level / 10)
        .label(format!("{} / 1000 XP", into_level));
    f.render_widget(gauge, rows[2]);

    f.render_widget(
        Paragraph::new(Span::styled(
            "This page is still in development. Esc returns to the dashboard.",
            Style::default().fg(theme.muted),
        ))
        .alignment(Alignment::Center),
        rows[3],
    );
}
