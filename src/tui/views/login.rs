// Login screen
//
// A centered two-field form. Field errors render inline under each
// input; a backend rejection renders above the hints.

use crate::forms::{LoginFocus, TextField};
use crate::tui::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let form_width = 50.min(area.width.saturating_sub(4));
    let form_height = 15;
    let x = area.x + (area.width.saturating_sub(form_width)) / 2;
    let y = area.y + (area.height.saturating_sub(form_height)) / 2;
    let form_area = Rect::new(x, y, form_width, form_height.min(area.height));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // title
            Constraint::Length(3), // email
            Constraint::Length(1), // email error
            Constraint::Length(3), // password
            Constraint::Length(1), // password error
            Constraint::Length(1), // api error / submitting
            Constraint::Length(2), // hints
        ])
        .split(form_area);

    let title = Paragraph::new(Line::from(Span::styled(
        "⚔ DSA QUEST",
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    f.render_widget(title, rows[0]);

    render_field(
        f,
        rows[1],
        app,
        "Email",
        &app.login.email,
        app.login.focus == LoginFocus::Email,
    );
    render_error(f, rows[2], app, &app.login.email.error);

    render_field(
        f,
        rows[3],
        app,
        "Password",
        &app.login.password,
        app.login.focus == LoginFocus::Password,
    );
    render_error(f, rows[4], app, &app.login.password.error);

    let status_line = if app.login.submitting {
        Line::from(Span::styled(
            "Signing in…",
            Style::default().fg(theme.muted),
        ))
    } else if let Some(e) = &app.login.api_error {
        Line::from(Span::styled(e.clone(), Style::default().fg(theme.error)))
    } else {
        Line::default()
    };
    f.render_widget(
        Paragraph::new(status_line).alignment(Alignment::Center),
        rows[5],
    );

    let hints = Paragraph::new(Line::from(Span::styled(
        "Enter sign in │ Tab next field │ F2 create account │ Ctrl+C quit",
        Style::default().fg(theme.muted),
    )))
    .alignment(Alignment::Center);
    f.render_widget(hints, rows[6]);
}

/// One bordered input with a cursor marker when focused
pub(super) fn render_field(
    f: &mut Frame,
    area: Rect,
    app: &App,
    label: &str,
    field: &TextField,
    focused: bool,
) {
    let theme = &app.theme;
    let border_color = if focused { theme.highlight } else { theme.border };

    let mut text = field.display();
    if focused {
        text.push('█');
    }

    let widget = Paragraph::new(text)
        .style(Style::default().fg(theme.foreground))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color))
                .title(format!(" {} ", label)),
        );
    f.render_widget(widget, area);
}

pub(super) fn render_error(f: &mut Frame, area: Rect, app: &App, error: &Option<String>) {
    if let Some(message) = error {
        let widget = Paragraph::new(Span::styled(
            format!(" {}", message),
            Style::default().fg(app.theme.error),
        ));
        f.render_widget(widget, area);
    }
}
