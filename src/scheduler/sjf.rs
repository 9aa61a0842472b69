//! Shortest-Job-First scheduler (non-preemptive).
//!
//! # Algorithm
//!
//! Repeatedly pick, among arrived and unfinished processes, the one with
//! the smallest burst (ties: arrival, then id) and run it to completion.
//! If nothing has arrived, jump the clock to the earliest pending arrival.
//!
//! # Complexity
//! O(n²) selection scans; n is small for this workload.

use tracing::trace;

use super::{next_arrival_after, runtime_states, CpuScheduler};
use crate::dispatching::{rules, RuleChain};
use crate::models::{GanttSegment, ProcessDescriptor, Timeline};

/// Non-preemptive shortest-burst scheduler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf;

impl Sjf {
    /// Creates the scheduler.
    pub fn new() -> Self {
        Self
    }

    fn chain() -> RuleChain {
        RuleChain::new()
            .with_rule(rules::ShortestBurst)
            .with_rule(rules::EarliestArrival)
    }
}

impl CpuScheduler for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn schedule(&self, processes: &[ProcessDescriptor]) -> Vec<GanttSegment> {
        let mut states = runtime_states(processes);
        let chain = Self::chain();
        let mut timeline = Timeline::new();
        let mut clock = 0;

        loop {
            let ready = (0..states.len()).filter(|&i| states[i].is_ready(clock));
            let Some(idx) = chain.select(&states, ready) else {
                match next_arrival_after(&states, clock) {
                    Some(next) => {
                        trace!(from = clock, to = next, "cpu idle");
                        clock = next;
                        continue;
                    }
                    None => break,
                }
            };

            let p = &mut states[idx];
            trace!(pid = %p.id, clock, burst = p.burst, "dispatch");
            timeline.record(&p.id, clock, clock + p.remaining);
            clock += p.remaining;
            p.remaining = 0;
        }

        timeline.into_segments()
    }
}
