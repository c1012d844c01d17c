// Problem list store
//
// Holds the unfiltered source list fetched from the backend plus the
// derived filtered view and its aggregate counters. Filtering never
// mutates the source; a refetch replaces it wholesale.

use crate::models::{Difficulty, Filter, Filters, Problem, Status};

/// Aggregate counters over the current filtered view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    pub total_xp: u64,
    pub solved: usize,
    pub in_progress: usize,
    pub todo: usize,
}

impl Counters {
    /// Level badge shown next to the XP total
    pub fn level(&self) -> u64 {
        self.total_xp / 1000 + 1
    }
}

/// Fetched problems plus the derived filtered view
#[derive(Debug, Default)]
pub struct ProblemStore {
    source: Vec<Problem>,
    filtered: Vec<Problem>,
    filters: Filters,
    /// True between fetch start and the response arriving
    pub loading: bool,
    /// Last fetch error, shown in the dashboard until a fetch succeeds
    pub error: Option<String>,
}

impl ProblemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the source list (fresh fetch) and recompute the view
    pub fn set_problems(&mut self, problems: Vec<Problem>) {
        self.source = problems;
        self.loading = false;
        self.error = None;
        self.apply_filters();
    }

    /// Whether a fetch has ever completed
    pub fn is_loaded(&self) -> bool {
        !self.source.is_empty() || self.error.is_some()
    }

    /// The current filtered view
    pub fn problems(&self) -> &[Problem] {
        &self.filtered
    }

    /// Size of the unfiltered source list
    pub fn source_len(&self) -> usize {
        self.source.len()
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    /// Look up a problem by id in the source list
    pub fn get(&self, id: u64) -> Option<&Problem> {
        self.source.iter().find(|p| p.id == id)
    }

    /// Distinct topics present in the source list, sorted
    pub fn topics(&self) -> Vec<String> {
        let mut topics: Vec<String> = self.source.iter().map(|p| p.topic.clone()).collect();
        topics.sort();
        topics.dedup();
        topics
    }

    /// Cycle the difficulty filter: All -> Easy -> Medium -> Hard -> All
    pub fn cycle_difficulty(&mut self) {
        self.filters.difficulty = match self.filters.difficulty {
            Filter::All => Filter::Only(Difficulty::Easy),
            Filter::Only(current) => {
                let order = Difficulty::all();
                match order.iter().position(|d| *d == current) {
                    Some(i) if i + 1 < order.len() => Filter::Only(order[i + 1]),
                    _ => Filter::All,
                }
            }
        };
        self.apply_filters();
    }

    /// Cycle the status filter: All -> Not Started -> In Progress -> Solved -> All
    pub fn cycle_status(&mut self) {
        self.filters.status = match self.filters.status {
            Filter::All => Filter::Only(Status::NotStarted),
            Filter::Only(current) => {
                let order = Status::all();
                match order.iter().position(|s| *s == current) {
                    Some(i) if i + 1 < order.len() => Filter::Only(order[i + 1]),
                    _ => Filter::All,
                }
            }
        };
        self.apply_filters();
    }

    /// Cycle the topic filter through the topics present in the source list
    pub fn cycle_topic(&mut self) {
        let topics = self.topics();
        if topics.is_empty() {
            self.filters.topic = Filter::All;
            return;
        }

        self.filters.topic = match &self.filters.topic {
            Filter::All => Filter::Only(topics[0].clone()),
            Filter::Only(current) => match topics.iter().position(|t| t == current) {
                Some(i) if i + 1 < topics.len() => Filter::Only(topics[i + 1].clone()),
                _ => Filter::All,
            },
        };
        self.apply_filters();
    }

    /// Clear all three filter fields
    pub fn clear_filters(&mut self) {
        self.filters = Filters::default();
        self.apply_filters();
    }

    /// Recompute the filtered view from the source list
    ///
    /// Independent equality checks per field, combined with AND. `All`
    /// imposes no constraint.
    fn apply_filters(&mut self) {
        self.filtered = self
            .source
            .iter()
            .filter(|p| self.filters.accepts(p))
            .cloned()
            .collect();
    }

    /// Recompute aggregate counters from scratch over the filtered view
    pub fn counters(&self) -> Counters {
        let mut counters = Counters::default();
        for problem in &self.filtered {
            match problem.status {
                Status::Solved => {
                    counters.solved += 1;
                    counters.total_xp += problem.xp_value as u64;
                }
                Status::InProgress => counters.in_progress += 1,
                Status::NotStarted => counters.todo += 1,
            }
        }
        counters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Problem> {
        let mk = |id, topic: &str, difficulty, status, xp| Problem {
            id,
            title: format!("Problem {}", id),
            url: format!("https://example.com/p/{}", id),
            topic: topic.to_string(),
            difficulty,
            status,
            xp_value: xp,
        };
        vec![
            mk(1, "Array", Difficulty::Easy, Status::Solved, 100),
            mk(2, "Array", Difficulty::Medium, Status::InProgress, 200),
            mk(3, "Tree", Difficulty::Hard, Status::NotStarted, 300),
            mk(4, "Graph", Difficulty::Hard, Status::Solved, 400),
            mk(5, "Tree", Difficulty::Easy, Status::NotStarted, 100),
        ]
    }

    #[test]
    fn filtered_view_is_subset_satisfying_all_predicates() {
        let mut store = ProblemStore::new();
        store.set_problems(sample());

        store.cycle_difficulty(); // Easy
        store.cycle_status(); // Not Started

        for p in store.problems() {
            assert_eq!(p.difficulty, Difficulty::Easy);
            assert_eq!(p.status, Status::NotStarted);
            assert!(store.get(p.id).is_some());
        }
        assert_eq!(store.problems().len(), 1);
        assert_eq!(store.problems()[0].id, 5);
    }

    #[test]
    fn counters_sum_over_filtered_view_only() {
        let mut store = ProblemStore::new();
        store.set_problems(sample());

        // Unfiltered: both solved problems count
        let all = store.counters();
        assert_eq!(all.total_xp, 500);
        assert_eq!(all.solved, 2);
        assert_eq!(all.in_progress, 1);
        assert_eq!(all.todo, 2);

        // Topic filter narrows the aggregate
        store.cycle_topic(); // "Array" (sorted first)
        let arrays = store.counters();
        assert_eq!(arrays.total_xp, 100);
        assert_eq!(arrays.solved, 1);
        assert_eq!(arrays.in_progress, 1);
        assert_eq!(arrays.todo, 0);
    }

    #[test]
    fn counters_recomputation_is_idempotent() {
        let mut store = ProblemStore::new();
        store.set_problems(sample());
        store.cycle_status();

        assert_eq!(store.counters(), store.counters());
    }

    #[test]
    fn difficulty_cycle_wraps_back_to_all() {
        let mut store = ProblemStore::new();
        store.set_problems(sample());

        store.cycle_difficulty(); // Easy
        store.cycle_difficulty(); // Medium
        store.cycle_difficulty(); // Hard
        store.cycle_difficulty(); // All again
        assert_eq!(store.filters().difficulty, Filter::All);
        assert_eq!(store.problems().len(), 5);
    }

    #[test]
    fn topic_cycle_follows_sorted_source_topics() {
        let mut store = ProblemStore::new();
        store.set_problems(sample());

        assert_eq!(store.topics(), vec!["Array", "Graph", "Tree"]);

        store.cycle_topic();
        assert_eq!(
            store.filters().topic,
            Filter::Only("Array".to_string())
        );
        store.cycle_topic();
        assert_eq!(
            store.filters().topic,
            Filter::Only("Graph".to_string())
        );
        store.cycle_topic();
        store.cycle_topic();
        assert_eq!(store.filters().topic, Filter::All);
    }

    #[test]
    fn refetch_replaces_source_and_keeps_filters() {
        let mut store = ProblemStore::new();
        store.set_problems(sample());
        store.cycle_status(); // Not Started

        let mut updated = sample();
        updated[2].status = Status::InProgress; // problem 3 started
        store.set_problems(updated);

        // Filter still applied to the new source
        assert_eq!(store.problems().len(), 1);
        assert_eq!(store.problems()[0].id, 5);
    }

    #[test]
    fn level_is_one_plus_xp_thousands() {
        let counters = Counters {
            total_xp: 2350,
            ..Default::default()
        };
        assert_eq!(counters.level(), 3);
        assert_eq!(Counters::default().level(), 1);
    }
}
