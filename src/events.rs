// Events that flow from spawned API tasks back to the TUI
//
// Every backend call runs in its own tokio task and reports its outcome
// through one mpsc channel the event loop listens on. Requests are never
// cancelled or retried; a task always sends exactly one completion event.

use crate::models::Problem;

/// Completion events for in-flight backend requests
#[derive(Debug)]
pub enum AppEvent {
    /// Login succeeded; token has already been persisted by the task
    LoggedIn,
    LoginFailed { message: String },

    /// `auth/register/start` accepted the email; OTP is on its way
    OtpSent,
    OtpSendFailed { message: String },

    OtpVerified,
    OtpRejected { message: String },

    /// Account created; the flow redirects back to login
    Registered,
    RegisterFailed { message: String },

    ProblemsLoaded(Vec<Problem>),
    ProblemsFailed { message: String },

    /// Elapsed time recorded by `home/updateTime/{id}`
    TimeRecorded,
    TimeRecordFailed { message: String },

    /// Problem marked solved by `home/updateStatus/{id}`
    MarkedSolved,
    MarkSolvedFailed { message: String },
}
