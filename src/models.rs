// Domain types shared between the API client, the store, and the TUI
//
// `Problem` is server-owned: the client never mutates its fields directly,
// it only asks the backend for transitions and refetches. The serde rename
// attributes pin the exact wire strings the backend emits ("Not Started",
// "In Progress", "Solved").

use serde::{Deserialize, Serialize};

/// Problem difficulty as reported by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All difficulties in filter-cycle order
    pub fn all() -> &'static [Difficulty] {
        &[Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Problem completion status as reported by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    Solved,
}

impl Status {
    /// All statuses in filter-cycle order
    pub fn all() -> &'static [Status] {
        &[Status::NotStarted, Status::InProgress, Status::Solved]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::NotStarted => "Not Started",
            Status::InProgress => "In Progress",
            Status::Solved => "Solved",
        }
    }
}

/// A coding practice problem, fetched from `GET home/problems/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Problem {
    pub id: u64,
    pub title: String,
    /// External page where the problem is actually solved
    pub url: String,
    pub topic: String,
    pub difficulty: Difficulty,
    pub status: Status,
    /// XP awarded once the problem is Solved
    #[serde(default)]
    pub xp_value: u32,
}

/// A single filter field: either unconstrained or an exact match
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter<T> {
    All,
    Only(T),
}

impl<T> Default for Filter<T> {
    fn default() -> Self {
        Filter::All
    }
}

impl<T: PartialEq> Filter<T> {
    /// `All` imposes no constraint; `Only` requires an exact match
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(v) => v == value,
        }
    }
}

/// Derived-view selector over the fetched problem list
///
/// Client-only. Fields combine with logical AND; none of them mutate the
/// source data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    pub difficulty: Filter<Difficulty>,
    pub topic: Filter<String>,
    pub status: Filter<Status>,
}

impl Filters {
    /// True if the problem passes all three predicates
    pub fn accepts(&self, problem: &Problem) -> bool {
        self.difficulty.matches(&problem.difficulty)
            && self.topic.matches(&problem.topic)
            && self.status.matches(&problem.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn problem(id: u64, topic: &str, difficulty: Difficulty, status: Status) -> Problem {
        Problem {
            id,
            title: format!("Problem {}", id),
            url: format!("https://example.com/problems/{}", id),
            topic: topic.to_string(),
            difficulty,
            status,
            xp_value: 100,
        }
    }

    #[test]
    fn status_wire_strings_round_trip() {
        let json = r#""Not Started""#;
        let status: Status = serde_json::from_str(json).unwrap();
        assert_eq!(status, Status::NotStarted);
        assert_eq!(serde_json::to_string(&status).unwrap(), json);

        let solved: Status = serde_json::from_str(r#""Solved""#).unwrap();
        assert_eq!(solved, Status::Solved);
    }

    #[test]
    fn problem_deserializes_without_xp_value() {
        let json = r#"{
            "id": 1,
            "title": "Two Sum",
            "url": "https://leetcode.com/problems/two-sum",
            "topic": "Array",
            "difficulty": "Easy",
            "status": "In Progress"
        }"#;
        let p: Problem = serde_json::from_str(json).unwrap();
        assert_eq!(p.xp_value, 0);
        assert_eq!(p.status, Status::InProgress);
    }

    #[test]
    fn all_filter_imposes_no_constraint() {
        let p = problem(1, "Array", Difficulty::Hard, Status::Solved);
        assert!(Filters::default().accepts(&p));
    }

    #[test]
    fn filters_combine_with_and() {
        let p = problem(1, "Array", Difficulty::Easy, Status::Solved);

        let mut filters = Filters {
            difficulty: Filter::Only(Difficulty::Easy),
            topic: Filter::Only("Array".to_string()),
            status: Filter::Only(Status::Solved),
        };
        assert!(filters.accepts(&p));

        // One failing predicate rejects the problem
        filters.status = Filter::Only(Status::NotStarted);
        assert!(!filters.accepts(&p));
    }
}
