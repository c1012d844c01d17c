// Problem session tracker
//
// Gates navigation to an external problem page behind a running stopwatch
// and enforces the single-active-problem invariant: at most one session is
// bound at a time, and it must be submitted (reset) before another problem
// can be selected.
//
// States: Idle (stopwatch stopped, no session) -> Armed (running, no
// session) -> Active (running, session bound) -> back to Armed/Idle on
// submit. Callers pass `now_ms` explicitly so the transitions are
// deterministic under test.

use crate::models::Status;
use std::time::{Duration, Instant};

/// Manual stopwatch advanced by wall-clock time while running
///
/// Owned by the tracker; pausing or resuming never touches a bound
/// session's recorded start time.
#[derive(Debug, Default)]
pub struct Stopwatch {
    running: bool,
    accumulated: Duration,
    resumed_at: Option<Instant>,
}

impl Stopwatch {
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn start(&mut self) {
        if !self.running {
            self.running = true;
            self.resumed_at = Some(Instant::now());
        }
    }

    pub fn pause(&mut self) {
        if self.running {
            if let Some(resumed) = self.resumed_at.take() {
                self.accumulated += resumed.elapsed();
            }
            self.running = false;
        }
    }

    pub fn toggle(&mut self) {
        if self.running {
            self.pause();
        } else {
            self.start();
        }
    }

    /// Zero the display and stop
    pub fn reset(&mut self) {
        self.running = false;
        self.accumulated = Duration::ZERO;
        self.resumed_at = None;
    }

    /// Elapsed time shown in the stopwatch widget
    pub fn elapsed(&self) -> Duration {
        let live = self
            .resumed_at
            .map(|t| t.elapsed())
            .unwrap_or(Duration::ZERO);
        self.accumulated + live
    }
}

/// The client-local record binding one problem to a start timestamp
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub problem_id: u64,
    pub url: String,
    pub started_at_ms: i64,
    pub status_at_start: Status,
}

/// Elapsed-time payload for `POST home/updateTime/{id}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSubmission {
    pub problem_id: u64,
    pub time_secs: i64,
    pub status: Status,
}

/// Outcome of a problem-row selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Select {
    /// Stopwatch is stopped; nothing is bound
    TimerNotRunning,
    /// A session is already bound (same or different problem)
    ResetFirst,
    /// Session bound; open this URL externally
    Bound { url: String },
}

/// Stopwatch plus the single-active-problem gate
#[derive(Debug, Default)]
pub struct SessionTracker {
    pub stopwatch: Stopwatch,
    session: Option<Session>,
}

impl SessionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// True while a problem is bound
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Attempt to bind a session to a problem row
    ///
    /// Rejections do not change any state. A successful selection binds
    /// the session at `now_ms`; the caller is responsible for opening the
    /// returned URL.
    pub fn select_problem(
        &mut self,
        problem_id: u64,
        url: &str,
        status: Status,
        now_ms: i64,
    ) -> Select {
        if !self.stopwatch.is_running() {
            return Select::TimerNotRunning;
        }
        if self.session.is_some() {
            // Covers same-id re-clicks as well: the session must be
            // submitted before any new selection.
            return Select::ResetFirst;
        }

        self.session = Some(Session {
            problem_id,
            url: url.to_string(),
            started_at_ms: now_ms,
            status_at_start: status,
        });
        Select::Bound {
            url: url.to_string(),
        }
    }

    /// Clear the session and produce its time submission, if one is bound
    ///
    /// The session is cleared synchronously here, before any request is
    /// issued, so the submission is at-most-once and the next selection
    /// can't race an in-flight one. Also zeroes the stopwatch display.
    pub fn finish(&mut self, now_ms: i64) -> Option<TimeSubmission> {
        let session = self.session.take()?;
        self.stopwatch.reset();

        let delta_ms = (now_ms - session.started_at_ms).max(0);
        Some(TimeSubmission {
            problem_id: session.problem_id,
            time_secs: (delta_ms + 500) / 1000, // round to nearest second
            status: session.status_at_start,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T0: i64 = 1_700_000_000_000;

    #[test]
    fn selection_rejected_while_timer_stopped() {
        let mut tracker = SessionTracker::new();

        let outcome = tracker.select_problem(1, "https://x/p/1", Status::NotStarted, T0);
        assert_eq!(outcome, Select::TimerNotRunning);
        assert!(tracker.session().is_none());
    }

    #[test]
    fn selection_binds_session_and_reports_url() {
        let mut tracker = SessionTracker::new();
        tracker.stopwatch.start();

        let outcome = tracker.select_problem(1, "https://x/p/1", Status::InProgress, T0);
        assert_eq!(
            outcome,
            Select::Bound {
                url: "https://x/p/1".to_string()
            }
        );

        let session = tracker.session().unwrap();
        assert_eq!(session.problem_id, 1);
        assert_eq!(session.started_at_ms, T0);
        assert_eq!(session.status_at_start, Status::InProgress);
    }

    #[test]
    fn second_selection_rejected_until_reset() {
        let mut tracker = SessionTracker::new();
        tracker.stopwatch.start();
        tracker.select_problem(1, "https://x/p/1", Status::InProgress, T0);

        // Different problem: rejected
        let other = tracker.select_problem(2, "https://x/p/2", Status::NotStarted, T0 + 100);
        assert_eq!(other, Select::ResetFirst);

        // Same problem re-click: also rejected, session unchanged
        let same = tracker.select_problem(1, "https://x/p/1", Status::InProgress, T0 + 200);
        assert_eq!(same, Select::ResetFirst);
        assert_eq!(tracker.session().unwrap().started_at_ms, T0);
    }

    #[test]
    fn finish_rounds_elapsed_and_clears_session() {
        let mut tracker = SessionTracker::new();
        tracker.stopwatch.start();
        tracker.select_problem(7, "https://x/p/7", Status::InProgress, T0);

        let submission = tracker.finish(T0 + 7_000).unwrap();
        assert_eq!(
            submission,
            TimeSubmission {
                problem_id: 7,
                time_secs: 7,
                status: Status::InProgress,
            }
        );

        // Session cleared; tracker back to Idle/Armed
        assert!(tracker.session().is_none());
        assert!(tracker.finish(T0 + 8_000).is_none());

        // A new selection is possible again once the stopwatch runs
        tracker.stopwatch.start();
        let outcome = tracker.select_problem(8, "https://x/p/8", Status::NotStarted, T0 + 9_000);
        assert!(matches!(outcome, Select::Bound { .. }));
    }

    #[test]
    fn finish_rounds_to_nearest_second() {
        let mut tracker = SessionTracker::new();
        tracker.stopwatch.start();

        tracker.select_problem(1, "u", Status::NotStarted, T0);
        assert_eq!(tracker.finish(T0 + 1_499).unwrap().time_secs, 1);

        tracker.stopwatch.start();
        tracker.select_problem(1, "u", Status::NotStarted, T0);
        assert_eq!(tracker.finish(T0 + 1_500).unwrap().time_secs, 2);
    }

    #[test]
    fn pausing_stopwatch_keeps_session_start() {
        let mut tracker = SessionTracker::new();
        tracker.stopwatch.start();
        tracker.select_problem(3, "u", Status::InProgress, T0);

        tracker.stopwatch.pause();
        tracker.stopwatch.start();

        // Recorded start time unaffected by stopwatch toggling
        assert_eq!(tracker.session().unwrap().started_at_ms, T0);
        assert_eq!(tracker.finish(T0 + 10_000).unwrap().time_secs, 10);
    }

    #[test]
    fn finish_without_session_is_none() {
        let mut tracker = SessionTracker::new();
        tracker.stopwatch.start();
        assert!(tracker.finish(T0).is_none());
    }
}
