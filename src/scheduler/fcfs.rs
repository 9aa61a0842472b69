//! First-Come-First-Served scheduler.
//!
//! # Algorithm
//!
//! 1. Order processes by arrival, ties by id.
//! 2. For each, advance the clock to `max(clock, arrival)` and run it to
//!    completion.
//!
//! # Complexity
//! O(n log n).

use tracing::trace;

use super::{runtime_states, CpuScheduler};
use crate::dispatching::{rules, RuleChain};
use crate::models::{GanttSegment, ProcessDescriptor, Timeline};

/// Non-preemptive arrival-order scheduler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl Fcfs {
    /// Creates the scheduler.
    pub fn new() -> Self {
        Self
    }
}

impl CpuScheduler for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn schedule(&self, processes: &[ProcessDescriptor]) -> Vec<GanttSegment> {
        let states = runtime_states(processes);
        let order = RuleChain::new()
            .with_rule(rules::EarliestArrival)
            .sort_indices(&states);

        let mut timeline = Timeline::new();
        let mut clock = 0;

        for idx in order {
            let p = &states[idx];
            if p.arrival > clock {
                trace!(from = clock, to = p.arrival, "cpu idle");
                clock = p.arrival;
            }
            timeline.record(&p.id, clock, clock + p.burst);
            clock += p.burst;
        }

        timeline.into_segments()
    }
}
