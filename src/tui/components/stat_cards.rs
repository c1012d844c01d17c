// Stat cards row
//
// Three cards over the current filtered view: Solved, In Progress, To Do.
// Mirrors the dashboard header counters; values come from
// `ProblemStore::counters` so they always agree with the table below.

use crate::store::Counters;
use crate::tui::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, counters: &Counters, theme: &Theme) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    render_card(f, cards[0], "Solved", counters.solved, theme.success, theme);
    render_card(
        f,
        cards[1],
        "In Progress",
        counters.in_progress,
        theme.warning,
        theme,
    );
    render_card(f, cards[2], "To Do", counters.todo, theme.muted, theme);
}

fn render_card(f: &mut Frame, area: Rect, label: &str, value: usize, color: Color, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title(Span::styled(
            format!(" {} ", label),
            Style::default().fg(theme.muted),
        ));

    let body = Paragraph::new(Line::from(Span::styled(
        value.to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(block);

    f.render_widget(body, area);
}
