//! Round-Robin scheduler.
//!
//! # Algorithm
//!
//! 1. Admit processes to a FIFO ready queue when the clock reaches their
//!    arrival (arrival order, ties by id).
//! 2. Dequeue the head and run it for `min(quantum, remaining)`.
//! 3. Admit everything that arrived during `(start, end]`.
//! 4. If the process still has work, re-queue it behind those arrivals.
//! 5. If the queue is empty, jump to the next arrival.
//!
//! # Complexity
//! O(n log n + B / q) where B = total burst, q = quantum.

use std::collections::VecDeque;

use tracing::trace;

use super::{runtime_states, CpuScheduler};
use crate::dispatching::{rules, RuleChain};
use crate::error::ConfigError;
use crate::models::{GanttSegment, ProcessDescriptor, RuntimeProcessState, Timeline};

/// Time-sliced FIFO scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRobin {
    quantum: i64,
}

impl RoundRobin {
    /// Creates the scheduler.
    ///
    /// # Errors
    /// [`ConfigError::InvalidQuantum`] if `quantum <= 0`.
    pub fn new(quantum: i64) -> Result<Self, ConfigError> {
        if quantum <= 0 {
            return Err(ConfigError::InvalidQuantum { quantum });
        }
        Ok(Self { quantum })
    }

    /// The time slice.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }
}

impl CpuScheduler for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn schedule(&self, processes: &[ProcessDescriptor]) -> Vec<GanttSegment> {
        let mut states = runtime_states(processes);
        let arrivals = RuleChain::new()
            .with_rule(rules::EarliestArrival)
            .sort_indices(&states);

        let mut queue: VecDeque<usize> = VecDeque::new();
        let mut timeline = Timeline::new();
        let mut admitted = 0;
        let mut clock = 0;

        admit(&arrivals, &states, clock, &mut admitted, &mut queue);

        loop {
            let Some(idx) = queue.pop_front() else {
                let Some(&next) = arrivals.get(admitted) else {
                    break;
                };
                let next_arrival = states[next].arrival;
                trace!(from = clock, to = next_arrival, "cpu idle");
                clock = clock.max(next_arrival);
                admit(&arrivals, &states, clock, &mut admitted, &mut queue);
                continue;
            };

            let p = &mut states[idx];
            if p.is_finished() {
                continue;
            }

            let start = clock;
            let run = self.quantum.min(p.remaining);
            trace!(pid = %p.id, clock, run, "dispatch");
            timeline.record(&p.id, start, start + run);
            clock += run;
            p.remaining -= run;
            let requeue = !p.is_finished();

            // Arrivals during the slice go ahead of the preempted process
            admit(&arrivals, &states, clock, &mut admitted, &mut queue);
            if requeue {
                queue.push_back(idx);
            }
        }

        timeline.into_segments()
    }
}

/// Queues every not-yet-admitted process with `arrival <= clock`.
fn admit(
    arrivals: &[usize],
    states: &[RuntimeProcessState],
    clock: i64,
    admitted: &mut usize,
    queue: &mut VecDeque<usize>,
) {
    while let Some(&idx) = arrivals.get(*admitted) {
        if states[idx].arrival > clock {
            break;
        }
        queue.push_back(idx);
        *admitted += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::test_support::{assert_well_formed, procs, seg};

    fn rr(quantum: i64) -> RoundRobin {
        RoundRobin::new(quantum).unwrap()
    }

    #[test]
    fn test_rr_textbook() {
        let ps = procs(&[("P1", 0, 5), ("P2", 1, 3), ("P3", 2, 8)]);
        let segs = rr(4).schedule(&ps);
        assert_eq!(
            segs,
            vec![
                seg("P1", 0, 4),
                seg("P2", 4, 7),
                seg("P3", 7, 11),
                seg("P1", 11, 12),
                seg("P3", 12, 16),
            ]
        );
    }

    #[test]
    fn test_rr_invalid_quantum() {
        assert_eq!(
            RoundRobin::new(0).unwrap_err(),
            ConfigError::InvalidQuantum { quantum: 0 }
        );
        assert!(RoundRobin::new(-3).is_err());
        assert_eq!(rr(1).quantum(), 1);
    }

    #[test]
    fn test_rr_arrival_at_slice_end_goes_first() {
        // B arrives exactly when A's slice ends: B is queued before A
        let ps = procs(&[("A", 0, 4), ("B", 2, 2)]);
        let segs = rr(2).schedule(&ps);
        assert_eq!(segs, vec![seg("A", 0, 2), seg("B", 2, 4), seg("A", 4, 6)]);
    }

    #[test]
    fn test_rr_single_process_merges() {
        // Consecutive slices of the only process coalesce
        let ps = procs(&[("A", 0, 7)]);
        assert_eq!(rr(2).schedule(&ps), vec![seg("A", 0, 7)]);
    }

    #[test]
    fn test_rr_idle_jump() {
        let ps = procs(&[("A", 0, 1), ("B", 5, 3)]);
        let segs = rr(2).schedule(&ps);
        assert_eq!(segs, vec![seg("A", 0, 1), seg("B", 5, 8)]);
    }

    #[test]
    fn test_rr_nothing_at_zero() {
        let ps = procs(&[("A", 3, 2), ("B", 3, 2)]);
        let segs = rr(1).schedule(&ps);
        assert_eq!(
            segs,
            vec![seg("A", 3, 4), seg("B", 4, 5), seg("A", 5, 6), seg("B", 6, 7)]
        );
    }

    #[test]
    fn test_rr_simultaneous_arrivals_by_id() {
        let ps = procs(&[("C", 0, 1), ("A", 0, 1), ("B", 0, 1)]);
        let order: Vec<String> = rr(5).schedule(&ps).into_iter().map(|s| s.pid).collect();
        assert_eq!(order, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_rr_zero_burst_skipped() {
        let ps = procs(&[("Z", 0, 0), ("A", 0, 3)]);
        let segs = rr(2).schedule(&ps);
        assert_eq!(segs, vec![seg("A", 0, 3)]);
        assert_well_formed(&ps, &segs);
    }

    #[test]
    fn test_rr_slices_bounded_by_quantum() {
        let ps = procs(&[("A", 0, 9), ("B", 1, 5), ("C", 2, 7), ("D", 12, 3)]);
        let q = 3;
        let segs = rr(q).schedule(&ps);
        assert_well_formed(&ps, &segs);
        // Any multi-slice segment would have to belong to a process running alone
        for pair in segs.windows(2) {
            assert_ne!(pair[0].pid, pair[1].pid);
        }
        assert!(segs.iter().all(|s| s.duration() <= q));
    }
}
