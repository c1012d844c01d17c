// Status transition gate
//
// Mediates the user-initiated "mark as solved" action. Only an InProgress
// problem may be solved, and only after explicit confirmation; the other
// source states produce an explanatory notice and no request.

use crate::models::Status;

/// Decision for a mark-as-solved request on a problem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Not Started: cannot solve without starting
    RequiresStart,
    /// Solved: nothing to do
    AlreadySolved,
    /// In Progress: ask the user to confirm before submitting
    Confirm,
}

/// Evaluate the source status of a mark-as-solved action
pub fn evaluate(status: Status) -> GateDecision {
    match status {
        Status::NotStarted => GateDecision::RequiresStart,
        Status::Solved => GateDecision::AlreadySolved,
        Status::InProgress => GateDecision::Confirm,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_started_is_rejected() {
        assert_eq!(evaluate(Status::NotStarted), GateDecision::RequiresStart);
    }

    #[test]
    fn solved_is_a_no_op() {
        assert_eq!(evaluate(Status::Solved), GateDecision::AlreadySolved);
    }

    #[test]
    fn in_progress_requires_confirmation() {
        assert_eq!(evaluate(Status::InProgress), GateDecision::Confirm);
    }
}
