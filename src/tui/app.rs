// Application state
//
// One `App` owns every screen's state plus the tracker and problem
// store. Backend calls never block the draw loop: each one is spawned
// onto the runtime and reports back through the event channel, and
// `on_event` folds the outcome into state.

use crate::api::Api;
use crate::auth::TokenProvider;
use crate::events::AppEvent;
use crate::forms::{LoginForm, RegisterFlow, RegisterStep};
use crate::gate::{self, GateDecision};
use crate::logging::LogBuffer;
use crate::store::ProblemStore;
use crate::tracker::{Select, SessionTracker, TimeSubmission};
use crate::tui::components::toast::Toast;
use crate::tui::input::InputHandler;
use crate::tui::theme::{Theme, ThemeKind};
use crate::util::open_in_browser;
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Top-level screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Login,
    Register,
    Dashboard,
    Profile,
}

/// Blocking overlays; at most one is open at a time
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    Help,
    ConfirmSolve { problem_id: u64, title: String },
}

/// What we know about the signed-in user (client-side only)
#[derive(Debug, Default)]
pub struct ProfileInfo {
    pub email: Option<String>,
    pub username: Option<String>,
}

pub struct App {
    pub view: View,
    pub should_quit: bool,

    pub theme_kind: ThemeKind,
    pub theme: Theme,

    pub login: LoginForm,
    pub register: RegisterFlow,
    pub store: ProblemStore,
    pub tracker: SessionTracker,

    /// Selected row in the filtered problem table
    pub selected: usize,
    pub table_offset: usize,

    pub toast: Option<Toast>,
    pub modal: Option<Modal>,

    pub log_buffer: LogBuffer,
    pub profile: ProfileInfo,
    pub demo_mode: bool,
    pub input: InputHandler,

    /// Set when registration completes; drives the redirect back to login
    redirect_at: Option<Instant>,
    /// First dashboard entry triggers exactly one initial fetch
    fetch_started: bool,

    api: Api,
    tx: mpsc::Sender<AppEvent>,
    tokens: Arc<dyn TokenProvider>,
}

impl App {
    pub fn new(
        theme_kind: ThemeKind,
        demo_mode: bool,
        log_buffer: LogBuffer,
        api: Api,
        tokens: Arc<dyn TokenProvider>,
        tx: mpsc::Sender<AppEvent>,
    ) -> Self {
        // A stored token skips the login screen entirely
        let view = if tokens.token().is_some() {
            View::Dashboard
        } else {
            View::Login
        };

        Self {
            view,
            should_quit: false,
            theme_kind,
            theme: theme_kind.theme(),
            login: LoginForm::new(),
            register: RegisterFlow::new(),
            store: ProblemStore::new(),
            tracker: SessionTracker::new(),
            selected: 0,
            table_offset: 0,
            toast: None,
            modal: None,
            log_buffer,
            profile: ProfileInfo::default(),
            demo_mode,
            input: InputHandler::with_default_config(),
            redirect_at: None,
            fetch_started: false,
            api,
            tx,
            tokens,
        }
    }

    // ── chrome ──────────────────────────────────────────────────────────

    pub fn show_toast(&mut self, toast: Toast) {
        self.toast = Some(toast);
    }

    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }
    }

    pub fn next_theme(&mut self) {
        self.theme_kind = self.theme_kind.next();
        self.theme = self.theme_kind.theme();
        self.show_toast(Toast::info(format!("Theme: {}", self.theme.name)));
    }

    /// Periodic housekeeping, driven by the tick interval
    pub fn tick(&mut self) {
        self.clear_expired_toast();

        // Initial problem fetch once the dashboard is reachable
        if self.view == View::Dashboard && !self.fetch_started {
            self.fetch_started = true;
            self.refresh_problems();
        }

        // Post-registration redirect back to login
        if let Some(at) = self.redirect_at {
            if at.elapsed() >= Duration::from_secs(2) {
                self.redirect_at = None;
                self.register = RegisterFlow::new();
                self.view = View::Login;
            }
        }
    }

    // ── async plumbing ──────────────────────────────────────────────────

    /// Run a backend call on the runtime; its single completion event
    /// lands back in the event loop
    fn spawn<F>(&self, fut: F)
    where
        F: Future<Output = AppEvent> + Send + 'static,
    {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(fut.await).await;
        });
    }

    // ── auth flows ──────────────────────────────────────────────────────

    pub fn submit_login(&mut self) {
        if self.login.submitting || !self.login.validate() {
            return;
        }
        self.login.submitting = true;
        self.login.api_error = None;

        let api = self.api.clone();
        let tokens = self.tokens.clone();
        let email = self.login.email.value.trim().to_string();
        let password = self.login.password.value.clone();

        self.spawn(async move {
            match api.login(&email, &password).await {
                Ok(token) => {
                    if let Err(e) = tokens.store(&token) {
                        tracing::warn!("Failed to persist token: {}", e);
                    }
                    AppEvent::LoggedIn
                }
                Err(e) => AppEvent::LoginFailed {
                    message: e.to_string(),
                },
            }
        });
    }

    /// Submit whichever registration step is active
    pub fn submit_register_step(&mut self) {
        if self.register.submitting {
            return;
        }
        self.register.api_error = None;

        match self.register.step {
            RegisterStep::Email => {
                if !self.register.validate_email_step() {
                    return;
                }
                self.register.submitting = true;
                let api = self.api.clone();
                let email = self.register.email.value.trim().to_string();
                self.spawn(async move {
                    match api.register_start(&email).await {
                        Ok(()) => AppEvent::OtpSent,
                        Err(e) => AppEvent::OtpSendFailed {
                            message: e.to_string(),
                        },
                    }
                });
            }
            RegisterStep::Otp => {
                if !self.register.validate_otp_step() {
                    return;
                }
                self.register.submitting = true;
                let api = self.api.clone();
                let email = self.register.email.value.trim().to_string();
                let otp = self.register.otp.value.trim().to_string();
                self.spawn(async move {
                    match api.register_verify(&email, &otp).await {
                        Ok(()) => AppEvent::OtpVerified,
                        Err(e) => AppEvent::OtpRejected {
                            message: e.to_string(),
                        },
                    }
                });
            }
            RegisterStep::Complete => {
                if !self.register.validate_complete_step() {
                    return;
                }
                self.register.submitting = true;
                let api = self.api.clone();
                let email = self.register.email.value.trim().to_string();
                let username = self.register.username.value.trim().to_string();
                let password = self.register.password.value.clone();
                let confirm = self.register.confirm_password.value.clone();
                self.spawn(async move {
                    match api
                        .register_complete(&email, &username, &password, &confirm)
                        .await
                    {
                        Ok(()) => AppEvent::Registered,
                        Err(e) => AppEvent::RegisterFailed {
                            message: e.to_string(),
                        },
                    }
                });
            }
            RegisterStep::Done => {}
        }
    }

    // ── dashboard actions ───────────────────────────────────────────────

    pub fn refresh_problems(&mut self) {
        self.store.loading = true;
        let api = self.api.clone();
        self.spawn(async move {
            match api.problems().await {
                Ok(problems) => AppEvent::ProblemsLoaded(problems),
                Err(e) => AppEvent::ProblemsFailed {
                    message: e.to_string(),
                },
            }
        });
    }

    pub fn move_selection(&mut self, delta: i64) {
        let len = self.store.problems().len();
        if len == 0 {
            self.selected = 0;
            return;
        }
        let current = self.selected as i64;
        self.selected = (current + delta).clamp(0, len as i64 - 1) as usize;
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.store.problems().len().saturating_sub(1);
    }

    pub fn clamp_selection(&mut self) {
        let len = self.store.problems().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    fn selected_problem(&self) -> Option<&crate::models::Problem> {
        self.store.problems().get(self.selected)
    }

    /// Enter on a problem row: bind a session and open the page
    pub fn select_current_problem(&mut self) {
        let Some(problem) = self.selected_problem() else {
            return;
        };
        let (id, url, status, title) = (
            problem.id,
            problem.url.clone(),
            problem.status,
            problem.title.clone(),
        );

        let now_ms = chrono::Utc::now().timestamp_millis();
        match self.tracker.select_problem(id, &url, status, now_ms) {
            Select::TimerNotRunning => {
                self.show_toast(Toast::error(
                    "Timer is not running. Start it with Space first",
                ));
            }
            Select::ResetFirst => {
                self.show_toast(Toast::error(
                    "Reset the timer before starting a new problem (press r)",
                ));
            }
            Select::Bound { url } => {
                tracing::info!("Session started on problem {}", id);
                open_in_browser(&url);
                self.show_toast(Toast::info(format!("Tracking: {}", title)));
            }
        }
    }

    /// r: submit the bound session's elapsed time, then zero the stopwatch
    ///
    /// Without a bound session this is a plain stopwatch reset.
    pub fn reset_and_submit(&mut self) {
        let now_ms = chrono::Utc::now().timestamp_millis();
        match self.tracker.finish(now_ms) {
            Some(submission) => self.submit_time(submission),
            None => self.tracker.stopwatch.reset(),
        }
    }

    fn submit_time(&mut self, submission: TimeSubmission) {
        tracing::info!(
            "Submitting {}s for problem {}",
            submission.time_secs,
            submission.problem_id
        );
        let api = self.api.clone();
        self.spawn(async move {
            match api.update_time(&submission).await {
                Ok(()) => AppEvent::TimeRecorded,
                Err(e) => AppEvent::TimeRecordFailed {
                    message: e.to_string(),
                },
            }
        });
    }

    /// m: request mark-as-solved, mediated by the status gate
    pub fn request_mark_solved(&mut self) {
        let Some(problem) = self.selected_problem() else {
            return;
        };
        let (id, title) = (problem.id, problem.title.clone());

        match gate::evaluate(problem.status) {
            GateDecision::RequiresStart => {
                self.show_toast(Toast::info("Start this problem before solving it"));
            }
            GateDecision::AlreadySolved => {
                self.show_toast(Toast::info("Already conquered!"));
            }
            GateDecision::Confirm => {
                self.modal = Some(Modal::ConfirmSolve {
                    problem_id: id,
                    title,
                });
            }
        }
    }

    /// Confirmation accepted in the modal
    pub fn confirm_mark_solved(&mut self, problem_id: u64) {
        let api = self.api.clone();
        self.spawn(async move {
            match api.mark_solved(problem_id).await {
                Ok(()) => AppEvent::MarkedSolved,
                Err(e) => AppEvent::MarkSolvedFailed {
                    message: e.to_string(),
                },
            }
        });
    }

    /// y: copy the selected problem's URL
    pub fn copy_selected_url(&mut self) {
        let Some(problem) = self.selected_problem() else {
            return;
        };
        match crate::tui::clipboard::copy_to_clipboard(&problem.url) {
            Ok(()) => self.show_toast(Toast::success("URL copied to clipboard")),
            Err(e) => self.show_toast(Toast::error(format!("Copy failed: {}", e))),
        }
    }

    /// o: open the selected problem's page without binding a session
    pub fn open_selected_url(&mut self) {
        if let Some(problem) = self.selected_problem() {
            open_in_browser(&problem.url);
        }
    }

    // ── exit flush ──────────────────────────────────────────────────────

    /// On quit, an active session with a running stopwatch still gets its
    /// time submitted (bounded, after the terminal is restored)
    pub fn take_exit_submission(&mut self) -> Option<TimeSubmission> {
        if !self.tracker.stopwatch.is_running() || !self.tracker.is_active() {
            return None;
        }
        self.tracker.finish(chrono::Utc::now().timestamp_millis())
    }

    // ── event folding ───────────────────────────────────────────────────

    pub fn on_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::LoggedIn => {
                self.login.submitting = false;
                self.profile.email = Some(self.login.email.value.trim().to_string());
                self.login = LoginForm::new();
                self.view = View::Dashboard;
                tracing::info!("Signed in");
            }
            AppEvent::LoginFailed { message } => {
                self.login.submitting = false;
                self.login.api_error = Some(message.clone());
                tracing::warn!("Login failed: {}", message);
            }

            AppEvent::OtpSent => {
                self.register.submitting = false;
                self.register.step = RegisterStep::Otp;
                self.show_toast(Toast::info("OTP sent to your email"));
            }
            AppEvent::OtpSendFailed { message } => {
                self.register.submitting = false;
                self.register.email.error = Some(message);
            }

            AppEvent::OtpVerified => {
                self.register.submitting = false;
                self.register.step = RegisterStep::Complete;
            }
            AppEvent::OtpRejected { message } => {
                self.register.submitting = false;
                self.register.otp.error = Some(message);
            }

            AppEvent::Registered => {
                self.register.submitting = false;
                self.register.step = RegisterStep::Done;
                self.profile.username = Some(self.register.username.value.trim().to_string());
                self.redirect_at = Some(Instant::now());
                tracing::info!("Account created");
            }
            AppEvent::RegisterFailed { message } => {
                self.register.submitting = false;
                self.register.api_error = Some(message);
            }

            AppEvent::ProblemsLoaded(problems) => {
                tracing::debug!("Loaded {} problems", problems.len());
                self.store.set_problems(problems);
                self.clamp_selection();
            }
            AppEvent::ProblemsFailed { message } => {
                self.store.loading = false;
                self.store.error = Some(message.clone());
                tracing::warn!("Problem fetch failed: {}", message);
            }

            AppEvent::TimeRecorded => {
                self.show_toast(Toast::success("XP earned! Time recorded"));
                self.refresh_problems();
            }
            AppEvent::TimeRecordFailed { message } => {
                self.show_toast(Toast::error(format!("Time not recorded: {}", message)));
            }

            AppEvent::MarkedSolved => {
                self.show_toast(Toast::success("Problem conquered! +XP"));
                self.refresh_problems();
            }
            AppEvent::MarkSolvedFailed { message } => {
                self.show_toast(Toast::error(format!("Update failed: {}", message)));
            }
        }
    }
}
