// Registration screen: Email -> OTP -> Account -> Done
//
// One screen per step with a breadcrumb indicator at the top. The Done
// step is a static confirmation; the app redirects back to login shortly
// after it appears.

use super::login::{render_error, render_field};
use crate::forms::{CompleteFocus, RegisterStep};
use crate::tui::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let form_width = 54.min(area.width.saturating_sub(4));
    let form_height = 19;
    let x = area.x + (area.width.saturating_sub(form_width)) / 2;
    let y = area.y + (area.height.saturating_sub(form_height)) / 2;
    let form_area = Rect::new(x, y, form_width, form_height.min(area.height));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // title
            Constraint::Length(2), // step indicator
            Constraint::Min(10),   // step body
            Constraint::Length(2), // hints
        ])
        .split(form_area);

    let title = Paragraph::new(Line::from(Span::styled(
        "⚔ CREATE ACCOUNT",
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    f.render_widget(title, rows[0]);

    f.render_widget(
        Paragraph::new(step_indicator(app)).alignment(Alignment::Center),
        rows[1],
    );

    match app.register.step {
        RegisterStep::Email => render_email_step(f, rows[2], app),
        RegisterStep::Otp => render_otp_step(f, rows[2], app),
        RegisterStep::Complete => render_complete_step(f, rows[2], app),
        RegisterStep::Done => render_done_step(f, rows[2], app),
    }

    let hint_text = match app.register.step {
        RegisterStep::Email => "Enter send OTP │ Esc back to login",
        RegisterStep::Otp => "Enter verify │ Esc back",
        RegisterStep::Complete => "Enter create account │ Tab next field │ Esc back",
        RegisterStep::Done => "Returning to login…",
    };
    f.render_widget(
        Paragraph::new(Span::styled(hint_text, Style::default().fg(theme.muted)))
            .alignment(Alignment::Center),
        rows[3],
    );
}

fn step_indicator(app: &App) -> Line<'static> {
    let theme = &app.theme;
    let steps = [
        ("1 Email", RegisterStep::Email),
        ("2 Verify", RegisterStep::Otp),
        ("3 Account", RegisterStep::Complete),
    ];

    let mut spans = Vec::new();
    for (i, (label, step)) in steps.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" → ", Style::default().fg(theme.muted)));
        }
        let style = if app.register.step == *step {
            Style::default()
                .fg(theme.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.muted)
        };
        spans.push(Span::styled(label.to_string(), style));
    }
    Line::from(spans)
}

fn step_rows(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area)
}

fn render_flow_status(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let line = if app.register.submitting {
        Line::from(Span::styled("Working…", Style::default().fg(theme.muted)))
    } else if let Some(e) = &app.register.api_error {
        Line::from(Span::styled(e.clone(), Style::default().fg(theme.error)))
    } else {
        Line::default()
    };
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_email_step(f: &mut Frame, area: Rect, app: &App) {
    let rows = step_rows(area);
    render_field(f, rows[0], app, "Email", &app.register.email, true);
    render_error(f, rows[1], app, &app.register.email.error);
    render_flow_status(f, rows[6], app);
}

fn render_otp_step(f: &mut Frame, area: Rect, app: &App) {
    let rows = step_rows(area);

    f.render_widget(
        Paragraph::new(Span::styled(
            format!(" Enter the 5-digit code sent to {}", app.register.email.value),
            Style::default().fg(app.theme.muted),
        )),
        rows[1],
    );
    render_field(f, rows[2], app, "OTP", &app.register.otp, true);
    render_error(f, rows[3], app, &app.register.otp.error);
    render_flow_status(f, rows[6], app);
}

fn render_complete_step(f: &mut Frame, area: Rect, app: &App) {
    let rows = step_rows(area);
    let focus = app.register.complete_focus;

    render_field(
        f,
        rows[0],
        app,
        "Username",
        &app.register.username,
        focus == CompleteFocus::Username,
    );
    render_error(f, rows[1], app, &app.register.username.error);

    render_field(
        f,
        rows[2],
        app,
        "Password",
        &app.register.password,
        focus == CompleteFocus::Password,
    );
    render_error(f, rows[3], app, &app.register.password.error);

    render_field(
        f,
        rows[4],
        app,
        "Confirm password",
        &app.register.confirm_password,
        focus == CompleteFocus::ConfirmPassword,
    );
    render_error(f, rows[5], app, &app.register.confirm_password.error);
    render_flow_status(f, rows[6], app);
}

fn render_done_step(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            "🎉 Account created!",
            Style::default()
                .fg(theme.success)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::default(),
        Line::from(Span::styled(
            "Sign in with your new credentials to begin the quest.",
            Style::default().fg(theme.foreground),
        ))
        .alignment(Alignment::Center),
    ];
    f.render_widget(Paragraph::new(lines), area);
}
