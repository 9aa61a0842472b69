//! Built-in selection rules.
//!
//! | Rule | Key | Used by |
//! |------|-----|---------|
//! | `EarliestArrival` | arrival | FCFS, tie-breaking everywhere |
//! | `ShortestBurst` | burst | SJF |
//! | `ShortestRemaining` | remaining | SRTF |
//! | `HighestPriority` | priority | Priority |
//!
//! # Key Convention
//! All rules return lower keys for processes that should run first.

use super::{RuleKey, SelectionRule};
use crate::models::RuntimeProcessState;

/// Earliest arrival first.
#[derive(Debug, Clone, Copy)]
pub struct EarliestArrival;

impl SelectionRule for EarliestArrival {
    fn name(&self) -> &'static str {
        "EA"
    }

    fn key(&self, process: &RuntimeProcessState) -> RuleKey {
        process.arrival
    }

    fn description(&self) -> &'static str {
        "Earliest Arrival"
    }
}

/// Shortest total burst first.
///
/// Minimizes mean waiting time among non-preemptive policies.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on a single machine.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl SelectionRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SB"
    }

    fn key(&self, process: &RuntimeProcessState) -> RuleKey {
        process.burst
    }

    fn description(&self) -> &'static str {
        "Shortest Burst"
    }
}

/// Shortest remaining time first.
///
/// Same ranking as [`ShortestBurst`] for a process that has not run yet.
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl SelectionRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SR"
    }

    fn key(&self, process: &RuntimeProcessState) -> RuleKey {
        process.remaining
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time"
    }
}

/// Highest priority first (lower priority value wins).
///
/// No aging: a steady stream of urgent processes starves the rest.
#[derive(Debug, Clone, Copy)]
pub struct HighestPriority;

impl SelectionRule for HighestPriority {
    fn name(&self) -> &'static str {
        "PRI"
    }

    fn key(&self, process: &RuntimeProcessState) -> RuleKey {
        process.priority
    }

    fn description(&self) -> &'static str {
        "Highest Priority"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessDescriptor;

    fn state(id: &str, arrival: i64, burst: i64, priority: i64) -> RuntimeProcessState {
        let p = ProcessDescriptor::new(id, arrival, burst).with_priority(priority);
        RuntimeProcessState::from(&p)
    }

    #[test]
    fn test_earliest_arrival() {
        let early = state("a", 1, 9, 0);
        let late = state("b", 4, 1, 0);
        assert!(EarliestArrival.key(&early) < EarliestArrival.key(&late));
    }

    #[test]
    fn test_shortest_burst() {
        let short = state("a", 5, 2, 0);
        let long = state("b", 0, 7, 0);
        assert!(ShortestBurst.key(&short) < ShortestBurst.key(&long));
    }

    #[test]
    fn test_shortest_remaining_tracks_progress() {
        let mut a = state("a", 0, 8, 0);
        let b = state("b", 0, 5, 0);
        assert!(ShortestRemaining.key(&a) > ShortestRemaining.key(&b));
        a.remaining = 3;
        assert!(ShortestRemaining.key(&a) < ShortestRemaining.key(&b));
        // Burst is unaffected by progress
        assert_eq!(ShortestBurst.key(&a), 8);
    }

    #[test]
    fn test_highest_priority_lower_value_wins() {
        let urgent = state("a", 0, 10, 1);
        let lazy = state("b", 0, 1, 3);
        assert!(HighestPriority.key(&urgent) < HighestPriority.key(&lazy));
    }

    #[test]
    fn test_names() {
        assert_eq!(EarliestArrival.name(), "EA");
        assert_eq!(ShortestBurst.description(), "Shortest Burst");
        assert_eq!(ShortestRemaining.name(), "SR");
        assert_eq!(HighestPriority.description(), "Highest Priority");
    }
}
