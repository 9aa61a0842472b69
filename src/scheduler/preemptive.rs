//! Shared driver for tick-preemptive schedulers (SRTF, Priority).
//!
//! Semantically the CPU is re-allocated every time unit. The selected
//! process keeps winning until either it finishes or a new process
//! arrives (its key only improves while it runs, other keys are fixed),
//! so the driver runs it straight to the next such decision point. The
//! merged output equals the per-tick output.

use tracing::trace;

use super::{next_arrival_after, runtime_states};
use crate::dispatching::RuleChain;
use crate::models::{GanttSegment, ProcessDescriptor, Timeline};

/// Runs the preemptive state machine with the given selection chain.
pub(super) fn run(processes: &[ProcessDescriptor], chain: &RuleChain) -> Vec<GanttSegment> {
    let mut states = runtime_states(processes);
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

        let horizon = next_arrival_after(&states, clock);
        let p = &mut states[idx];
        let run = match horizon {
            Some(next) => p.remaining.min(next - clock),
            None => p.remaining,
        };
        trace!(pid = %p.id, clock, run, "dispatch");

        timeline.record(&p.id, clock, clock + run);
        clock += run;
        p.remaining -= run;
    }

    timeline.into_segments()
}

#[cfg(test)]
pub(crate) mod reference {
    use crate::dispatching::RuleChain;
    use crate::models::{GanttSegment, ProcessDescriptor, RuntimeProcessState, Timeline};

    /// Literal one-tick-at-a-time simulation.
    pub fn run_by_ticks(processes: &[ProcessDescriptor], chain: &RuleChain) -> Vec<GanttSegment> {
        let mut states: Vec<RuntimeProcessState> =
            processes.iter().map(RuntimeProcessState::from).collect();
        let mut timeline = Timeline::new();
        let mut clock = 0;

        while states.iter().any(|p| !p.is_finished()) {
            let ready = (0..states.len()).filter(|&i| states[i].is_ready(clock));
            match chain.select(&states, ready) {
                Some(idx) => {
                    timeline.record(&states[idx].id, clock, clock + 1);
                    states[idx].remaining -= 1;
                    clock += 1;
                }
                None => {
                    clock = states
                        .iter()
                        .filter(|p| !p.is_finished())
                        .map(|p| p.arrival)
                        .min()
                        .unwrap();
                }
            }
        }

        timeline.into_segments()
    }
}
