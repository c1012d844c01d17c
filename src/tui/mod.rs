// Terminal UI entry point and event loop
//
// Raw mode and the alternate screen are always restored before returning,
// including on error paths. The loop multiplexes three sources: crossterm
// key events (polled), the tick interval, and completion events from
// spawned API tasks.

pub mod app;
pub mod clipboard;
pub mod components;
pub mod input;
pub mod theme;
pub mod views;

use crate::api::Api;
use crate::auth::TokenProvider;
use crate::config::Config;
use crate::events::AppEvent;
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::{App, Modal, View};
use crossterm::{
    event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use theme::ThemeKind;
use tokio::sync::mpsc;

pub async fn run_tui(
    config: &Config,
    log_buffer: LogBuffer,
    api: Api,
    tokens: Arc<dyn TokenProvider>,
) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let (tx, rx) = mpsc::channel::<AppEvent>(64);
    let mut app = App::new(
        ThemeKind::from_name(&config.theme),
        config.demo_mode,
        log_buffer,
        api.clone(),
        tokens,
        tx,
    );

    let result = run_event_loop(&mut terminal, &mut app, rx).await;

    // Restore the terminal before doing anything else
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    // A session abandoned by quitting still gets its time recorded,
    // bounded so a dead backend can't hang shutdown
    if let Some(submission) = app.take_exit_submission() {
        let flush = tokio::time::timeout(Duration::from_secs(2), api.update_time(&submission));
        match flush.await {
            Ok(Ok(())) => eprintln!(
                "Recorded {}s on problem {}",
                submission.time_secs, submission.problem_id
            ),
            Ok(Err(e)) => eprintln!("Could not record session time: {}", e),
            Err(_) => eprintln!("Could not record session time: request timed out"),
        }
    }

    result
}

async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    mut rx: mpsc::Receiver<AppEvent>,
) -> Result<()> {
    let mut tick = tokio::time::interval(Duration::from_millis(200));
    tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw frame")?;

        tokio::select! {
            _ = tick.tick() => {
                app.tick();
            }
            event = rx.recv() => {
                if let Some(event) = event {
                    app.on_event(event);
                }
            }
            _ = tokio::time::sleep(Duration::from_millis(10)) => {
                // Drain every pending terminal event before redrawing
                while crossterm::event::poll(Duration::ZERO)
                    .context("Failed to poll terminal events")?
                {
                    if let Event::Key(key) = crossterm::event::read()
                        .context("Failed to read terminal event")?
                    {
                        handle_key(app, key);
                    }
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        app.input.handle_key_release(key.code);
        return;
    }

    // Global quit, works even mid-typing
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    // A modal captures all input while open
    if app.modal.is_some() {
        if app.input.handle_key_press(key.code) {
            handle_modal_key(app, key.code);
        }
        return;
    }

    match app.view {
        View::Login => handle_login_key(app, key.code),
        View::Register => handle_register_key(app, key.code),
        View::Dashboard => {
            if app.input.handle_key_press(key.code) {
                handle_dashboard_key(app, key.code);
            }
        }
        View::Profile => {
            if app.input.handle_key_press(key.code) {
                handle_profile_key(app, key.code);
            }
        }
    }
}

fn handle_modal_key(app: &mut App, code: KeyCode) {
    match app.modal.clone() {
        Some(Modal::Help) => {
            if matches!(code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::F(1)) {
                app.modal = None;
            }
        }
        Some(Modal::ConfirmSolve { problem_id, .. }) => match code {
            KeyCode::Enter | KeyCode::Char('y') => {
                app.modal = None;
                app.confirm_mark_solved(problem_id);
            }
            KeyCode::Esc | KeyCode::Char('n') => {
                app.modal = None;
            }
            _ => {}
        },
        None => {}
    }
}

fn handle_login_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Enter => app.submit_login(),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => app.login.next_focus(),
        KeyCode::F(1) => app.modal = Some(Modal::Help),
        KeyCode::F(2) => app.view = View::Register,
        KeyCode::Esc => app.should_quit = true,
        code => {
            app.login.focused_field().handle_key(code);
        }
    }
}

fn handle_register_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Enter => app.submit_register_step(),
        KeyCode::Tab => app.register.next_focus(),
        KeyCode::Esc => {
            // Step back through the flow, then out to login
            if !app.register.back() {
                app.view = View::Login;
            }
        }
        KeyCode::F(1) => app.modal = Some(Modal::Help),
        code => {
            app.register.focused_field().handle_key(code);
        }
    }
}

fn handle_dashboard_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('q') => app.should_quit = true,

        // Navigation
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::PageUp => app.move_selection(-10),
        KeyCode::PageDown => app.move_selection(10),
        KeyCode::Home => app.select_first(),
        KeyCode::End => app.select_last(),

        // Tracker
        KeyCode::Char(' ') => app.tracker.stopwatch.toggle(),
        KeyCode::Enter => app.select_current_problem(),
        KeyCode::Char('r') => app.reset_and_submit(),

        // Problem actions
        KeyCode::Char('m') => app.request_mark_solved(),
        KeyCode::Char('o') => app.open_selected_url(),
        KeyCode::Char('y') => app.copy_selected_url(),

        // Filters
        KeyCode::Char('d') => {
            app.store.cycle_difficulty();
            app.clamp_selection();
        }
        KeyCode::Char('f') => {
            app.store.cycle_status();
            app.clamp_selection();
        }
        KeyCode::Char('g') => {
            app.store.cycle_topic();
            app.clamp_selection();
        }
        KeyCode::Char('c') => {
            app.store.clear_filters();
            app.clamp_selection();
        }

        // Chrome
        KeyCode::F(5) => app.refresh_problems(),
        KeyCode::Char('p') => app.view = View::Profile,
        KeyCode::Char('t') => app.next_theme(),
        KeyCode::Char('?') | KeyCode::F(1) => app.modal = Some(Modal::Help),
        _ => {}
    }
}

fn handle_profile_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc | KeyCode::Char('p') => app.view = View::Dashboard,
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('t') => app.next_theme(),
        KeyCode::Char('?') | KeyCode::F(1) => app.modal = Some(Modal::Help),
        _ => {}
    }
}
