// Dashboard: header, stat cards, filter bar, problem table, stopwatch
//
// The table renders the store's filtered view. Scrolling keeps the
// selected row visible by adjusting `table_offset` against the viewport
// height on each draw.

use crate::models::Filter;
use crate::tui::app::App;
use crate::tui::components::{stat_cards, stopwatch};
use crate::util::truncate_to_width;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // header
            Constraint::Length(3), // stat cards
            Constraint::Length(1), // filter bar
            Constraint::Min(4),    // problem table
            Constraint::Length(3), // stopwatch bar
        ])
        .split(area);

    render_header(f, rows[0], app);
    stat_cards::render(f, rows[1], &app.store.counters(), &app.theme);
    render_filter_bar(f, rows[2], app);
    render_table(f, rows[3], app);
    stopwatch::render(f, rows[4], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let counters = app.store.counters();

    let left = Line::from(vec![
        Span::styled(
            " ⚔ DSA Quest",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}/{} challenges", app.store.problems().len(), app.store.source_len()),
            Style::default().fg(theme.muted),
        ),
    ]);
    f.render_widget(Paragraph::new(left), area);

    let right = Line::from(vec![
        Span::styled(
            format!("⚡ {} XP ", counters.total_xp),
            Style::default().fg(theme.warning),
        ),
        Span::styled(
            format!(" LVL {} ", counters.level()),
            Style::default()
                .fg(theme.background)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
    ]);
    f.render_widget(Paragraph::new(right).alignment(Alignment::Right), area);
}

fn render_filter_bar(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let filters = app.store.filters();

    let fmt_filter = |label: &str, value: String, active: bool| {
        let color = if active { theme.highlight } else { theme.muted };
        Span::styled(format!("{}: {}", label, value), Style::default().fg(color))
    };

    let difficulty = match &filters.difficulty {
        Filter::All => ("All".to_string(), false),
        Filter::Only(d) => (d.as_str().to_string(), true),
    };
    let status = match &filters.status {
        Filter::All => ("All".to_string(), false),
        Filter::Only(s) => (s.as_str().to_string(), true),
    };
    let topic = match &filters.topic {
        Filter::All => ("All".to_string(), false),
        Filter::Only(t) => (t.clone(), true),
    };

    let line = Line::from(vec![
        Span::raw(" "),
        fmt_filter("Difficulty", difficulty.0, difficulty.1),
        Span::styled(" │ ", Style::default().fg(theme.border)),
        fmt_filter("Status", status.0, status.1),
        Span::styled(" │ ", Style::default().fg(theme.border)),
        fmt_filter("Topic", topic.0, topic.1),
        Span::styled(
            "   (d/f/g cycle · c clear)",
            Style::default().fg(theme.muted),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn render_table(f: &mut Frame, area: Rect, app: &mut App) {
    let theme = app.theme.clone();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title(" Problems ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    if app.store.loading && !app.store.is_loaded() {
        f.render_widget(
            Paragraph::new(Span::styled(
                "Loading problems…",
                Style::default().fg(theme.muted),
            ))
            .alignment(Alignment::Center),
            inner,
        );
        return;
    }

    if let Some(error) = &app.store.error {
        f.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled(
                    format!("Failed to load problems: {}", error),
                    Style::default().fg(theme.error),
                )),
                Line::from(Span::styled(
                    "F5 to retry",
                    Style::default().fg(theme.muted),
                )),
            ])
            .alignment(Alignment::Center),
            inner,
        );
        return;
    }

    if app.store.problems().is_empty() {
        f.render_widget(
            Paragraph::new(Span::styled(
                "No problems match the current filters (c clears them)",
                Style::default().fg(theme.muted),
            ))
            .alignment(Alignment::Center),
            inner,
        );
        return;
    }

    // One header line, the rest for rows
    let visible = inner.height.saturating_sub(1) as usize;
    if visible == 0 {
        return;
    }

    // Keep the selected row inside the viewport
    if app.selected < app.table_offset {
        app.table_offset = app.selected;
    } else if app.selected >= app.table_offset + visible {
        app.table_offset = app.selected + 1 - visible;
    }
    let problems = app.store.problems();

    let title_width = inner.width.saturating_sub(38) as usize;
    let header = Line::from(Span::styled(
        format!(
            " {:<title$} {:<12} {:<8} {:<12}",
            "Title",
            "Topic",
            "Diff",
            "Status",
            title = title_width
        ),
        Style::default()
            .fg(theme.muted)
            .add_modifier(Modifier::BOLD),
    ));

    let mut lines = vec![header];
    let active_id = app.tracker.session().map(|s| s.problem_id);

    for (i, problem) in problems
        .iter()
        .enumerate()
        .skip(app.table_offset)
        .take(visible)
    {
        let selected = i == app.selected;
        let marker = if Some(problem.id) == active_id {
            "▶"
        } else {
            " "
        };

        let row_style = if selected {
            Style::default()
                .fg(theme.background)
                .bg(theme.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.foreground)
        };

        let difficulty_style = if selected {
            row_style
        } else {
            Style::default().fg(theme.difficulty_color(problem.difficulty))
        };
        let status_style = if selected {
            row_style
        } else {
            Style::default().fg(theme.status_color(problem.status))
        };

        lines.push(Line::from(vec![
            Span::styled(
                format!(
                    "{}{:<title$} {:<12} ",
                    marker,
                    truncate_to_width(&problem.title, title_width),
                    truncate_to_width(&problem.topic, 12),
                    title = title_width
                ),
                row_style,
            ),
            Span::styled(format!("{:<8} ", problem.difficulty.as_str()), difficulty_style),
            Span::styled(format!("{:<12}", problem.status.as_str()), status_style),
        ]));
    }

    f.render_widget(Paragraph::new(lines), inner);
}
