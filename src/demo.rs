// Demo mode: an in-memory backend to showcase the TUI without a server
//
// Run with: DSAQUEST_DEMO=1 cargo run --release (or --demo)
//
// The seeded problem set mirrors the real backend's shape (topics,
// difficulties, a mix of statuses) so filters, counters, and the session
// tracker all behave as they would against the live API. Any credentials
// log in; the registration OTP is 12345.

use crate::api::ApiError;
use crate::models::{Difficulty, Problem, Status};
use crate::tracker::TimeSubmission;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

/// The OTP accepted by the demo verify endpoint
pub const DEMO_OTP: &str = "12345";

/// Simulated network latency so spinners and in-flight states are visible
const DEMO_LATENCY: Duration = Duration::from_millis(250);

/// In-memory stand-in for the DSA Quest backend
#[derive(Clone)]
pub struct DemoApi {
    problems: Arc<Mutex<Vec<Problem>>>,
}

impl DemoApi {
    pub fn new() -> Self {
        Self {
            problems: Arc::new(Mutex::new(seed_problems())),
        }
    }

    pub async fn login(&self, _email: &str, _password: &str) -> Result<String, ApiError> {
        sleep(DEMO_LATENCY).await;
        Ok("demo-token".to_string())
    }

    pub async fn register_start(&self, _email: &str) -> Result<(), ApiError> {
        sleep(DEMO_LATENCY).await;
        tracing::info!("Demo OTP is {}", DEMO_OTP);
        Ok(())
    }

    pub async fn register_verify(&self, _email: &str, otp: &str) -> Result<(), ApiError> {
        sleep(DEMO_LATENCY).await;
        if otp == DEMO_OTP {
            Ok(())
        } else {
            Err(ApiError::Status {
                status: 400,
                message: "Invalid OTP".to_string(),
            })
        }
    }

    pub async fn register_complete(&self, username: &str) -> Result<(), ApiError> {
        sleep(DEMO_LATENCY).await;
        tracing::info!("Demo account created for {}", username);
        Ok(())
    }

    pub async fn problems(&self) -> Result<Vec<Problem>, ApiError> {
        sleep(DEMO_LATENCY).await;
        Ok(self.lock().clone())
    }

    /// Record time; a Not Started problem transitions to In Progress
    pub async fn update_time(&self, submission: &TimeSubmission) -> Result<(), ApiError> {
        sleep(DEMO_LATENCY).await;
        let mut problems = self.lock();
        match problems.iter_mut().find(|p| p.id == submission.problem_id) {
            Some(problem) => {
                if problem.status == Status::NotStarted {
                    problem.status = Status::InProgress;
                }
                tracing::debug!(
                    "Recorded {}s on problem {}",
                    submission.time_secs,
                    submission.problem_id
                );
                Ok(())
            }
            None => Err(ApiError::Status {
                status: 404,
                message: "Problem not found".to_string(),
            }),
        }
    }

    pub async fn mark_solved(&self, problem_id: u64) -> Result<(), ApiError> {
        sleep(DEMO_LATENCY).await;
        let mut problems = self.lock();
        match problems.iter_mut().find(|p| p.id == problem_id) {
            Some(problem) => {
                problem.status = Status::Solved;
                Ok(())
            }
            None => Err(ApiError::Status {
                status: 404,
                message: "Problem not found".to_string(),
            }),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Problem>> {
        self.problems.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for DemoApi {
    fn default() -> Self {
        Self::new()
    }
}

/// Seeded problem list covering every topic/difficulty/status combination
/// the filters expose
fn seed_problems() -> Vec<Problem> {
    let mk = |id, title: &str, slug: &str, topic: &str, difficulty, status, xp| Problem {
        id,
        title: title.to_string(),
        url: format!("https://leetcode.com/problems/{}/", slug),
        topic: topic.to_string(),
        difficulty,
        status,
        xp_value: xp,
    };

    vec![
        mk(1, "Two Sum", "two-sum", "Array", Difficulty::Easy, Status::Solved, 100),
        mk(2, "Best Time to Buy and Sell Stock", "best-time-to-buy-and-sell-stock", "Array", Difficulty::Easy, Status::Solved, 100),
        mk(3, "Product of Array Except Self", "product-of-array-except-self", "Array", Difficulty::Medium, Status::InProgress, 250),
        mk(4, "Trapping Rain Water", "trapping-rain-water", "Array", Difficulty::Hard, Status::NotStarted, 500),
        mk(5, "Valid Anagram", "valid-anagram", "String", Difficulty::Easy, Status::Solved, 100),
        mk(6, "Longest Substring Without Repeating Characters", "longest-substring-without-repeating-characters", "String", Difficulty::Medium, Status::InProgress, 250),
        mk(7, "Minimum Window Substring", "minimum-window-substring", "String", Difficulty::Hard, Status::NotStarted, 500),
        mk(8, "Reverse Linked List", "reverse-linked-list", "Linked List", Difficulty::Easy, Status::Solved, 100),
        mk(9, "Merge Two Sorted Lists", "merge-two-sorted-lists", "Linked List", Difficulty::Easy, Status::InProgress, 100),
        mk(10, "LRU Cache", "lru-cache", "Linked List", Difficulty::Medium, Status::NotStarted, 250),
        mk(11, "Maximum Depth of Binary Tree", "maximum-depth-of-binary-tree", "Tree", Difficulty::Easy, Status::Solved, 100),
        mk(12, "Validate Binary Search Tree", "validate-binary-search-tree", "Tree", Difficulty::Medium, Status::NotStarted, 250),
        mk(13, "Binary Tree Maximum Path Sum", "binary-tree-maximum-path-sum", "Tree", Difficulty::Hard, Status::NotStarted, 500),
        mk(14, "Number of Islands", "number-of-islands", "Graph", Difficulty::Medium, Status::InProgress, 250),
        mk(15, "Course Schedule", "course-schedule", "Graph", Difficulty::Medium, Status::NotStarted, 250),
        mk(16, "Word Ladder", "word-ladder", "Graph", Difficulty::Hard, Status::NotStarted, 500),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn demo_login_always_succeeds() {
        let api = DemoApi::new();
        let token = api.login("anyone@example.com", "whatever").await.unwrap();
        assert_eq!(token, "demo-token");
    }

    #[tokio::test]
    async fn demo_otp_is_checked() {
        let api = DemoApi::new();
        assert!(api.register_verify("a@b.co", DEMO_OTP).await.is_ok());

        let err = api.register_verify("a@b.co", "00000").await.unwrap_err();
        assert!(err.to_string().contains("Invalid OTP"));
    }

    #[tokio::test]
    async fn update_time_starts_a_not_started_problem() {
        let api = DemoApi::new();
        let submission = TimeSubmission {
            problem_id: 4,
            time_secs: 90,
            status: Status::NotStarted,
        };
        api.update_time(&submission).await.unwrap();

        let problems = api.problems().await.unwrap();
        let p = problems.iter().find(|p| p.id == 4).unwrap();
        assert_eq!(p.status, Status::InProgress);
    }

    #[tokio::test]
    async fn mark_solved_transitions_and_unknown_id_is_404() {
        let api = DemoApi::new();
        api.mark_solved(3).await.unwrap();

        let problems = api.problems().await.unwrap();
        assert_eq!(
            problems.iter().find(|p| p.id == 3).unwrap().status,
            Status::Solved
        );

        assert!(api.mark_solved(999).await.is_err());
    }
}
