//! Shortest-Remaining-Time-First scheduler (preemptive SJF).
//!
//! # Algorithm
//!
//! At every time unit, among arrived and unfinished processes, run the one
//! with the least remaining time (ties: arrival, then id). A newly arrived
//! process with less remaining time preempts the running one. Adjoining
//! units of the same process are merged into one segment.
//!
//! # Complexity
//! O(n · a) where a = number of distinct arrival instants.

use super::{preemptive, CpuScheduler};
use crate::dispatching::{rules, RuleChain};
use crate::models::{GanttSegment, ProcessDescriptor};

/// Preemptive shortest-remaining-time scheduler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Srtf;

impl Srtf {
    /// Creates the scheduler.
    pub fn new() -> Self {
        Self
    }

    pub(crate) fn chain() -> RuleChain {
        RuleChain::new()
            .with_rule(rules::ShortestRemaining)
            .with_rule(rules::EarliestArrival)
    }
}

impl CpuScheduler for Srtf {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn schedule(&self, processes: &[ProcessDescriptor]) -> Vec<GanttSegment> {
        preemptive::run(processes, &Self::chain())
    }
}
