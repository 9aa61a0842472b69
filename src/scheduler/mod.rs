//! CPU schedulers, metrics and KPI evaluation.
//!
//! Five single-CPU scheduling disciplines sharing one contract
//! ([`CpuScheduler`]): take a validated process list, return the ordered
//! Gantt segments.
//!
//! | Scheduler | Preemptive | Selection | Run length |
//! |-----------|-----------|-----------|------------|
//! | `Fcfs` | no | arrival, id | to completion |
//! | `Sjf` | no | burst, arrival, id | to completion |
//! | `Srtf` | yes | remaining, arrival, id | one tick |
//! | `RoundRobin` | yes | FIFO queue | one quantum |
//! | `PreemptivePriority` | yes | priority, arrival, id | one tick |
//!
//! Idle gaps (no process has arrived) advance the clock without producing
//! a segment. Zero-burst processes never produce a segment.
//!
//! # Metrics
//!
//! [`calculate_metrics`] derives the per-process table and averages;
//! [`ScheduleKpi`] derives timeline-level indicators.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod kpi;
mod metrics;
mod preemptive;
mod priority;
mod round_robin;
mod sjf;
mod srtf;

pub use fcfs::Fcfs;
pub use kpi::ScheduleKpi;
pub use metrics::calculate_metrics;
pub use priority::PreemptivePriority;
pub use round_robin::RoundRobin;
pub use sjf::Sjf;
pub use srtf::Srtf;

use std::fmt::Debug;

use crate::models::{GanttSegment, ProcessDescriptor, RuntimeProcessState};

/// A single-CPU scheduling discipline.
///
/// Implementations are pure: the same process list always yields the same
/// segments, and each call works on its own copy of the processes.
///
/// # Contract
/// - Segments are in non-decreasing `start` order and never overlap.
/// - Each process's segment durations sum to its `burst`.
/// - Zero-burst processes contribute no segment.
pub trait CpuScheduler: Send + Sync + Debug {
    /// Short policy name (e.g., "FCFS").
    fn name(&self) -> &'static str;

    /// Computes the schedule for validated processes.
    fn schedule(&self, processes: &[ProcessDescriptor]) -> Vec<GanttSegment>;
}

/// Fresh working copies for one scheduler invocation.
fn runtime_states(processes: &[ProcessDescriptor]) -> Vec<RuntimeProcessState> {
    processes.iter().map(RuntimeProcessState::from).collect()
}

/// Earliest arrival strictly after `clock` among unfinished processes.
fn next_arrival_after(states: &[RuntimeProcessState], clock: i64) -> Option<i64> {
    states
        .iter()
        .filter(|p| !p.is_finished() && p.arrival > clock)
        .map(|p| p.arrival)
        .min()
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::collections::HashMap;

    use crate::models::{GanttSegment, ProcessDescriptor};

    pub fn procs(specs: &[(&str, i64, i64)]) -> Vec<ProcessDescriptor> {
        specs
            .iter()
            .map(|&(id, arrival, burst)| ProcessDescriptor::new(id, arrival, burst))
            .collect()
    }

    pub fn procs_with_priority(specs: &[(&str, i64, i64, i64)]) -> Vec<ProcessDescriptor> {
        specs
            .iter()
            .map(|&(id, arrival, burst, priority)| {
                ProcessDescriptor::new(id, arrival, burst).with_priority(priority)
            })
            .collect()
    }

    pub fn seg(pid: &str, start: i64, end: i64) -> GanttSegment {
        GanttSegment::new(pid, start, end)
    }

    /// Checks the scheduler contract against `processes`.
    pub fn assert_well_formed(processes: &[ProcessDescriptor], segments: &[GanttSegment]) {
        for pair in segments.windows(2) {
            assert!(pair[0].start <= pair[1].start, "unsorted: {pair:?}");
            assert!(pair[0].end <= pair[1].start, "overlap: {pair:?}");
        }
        let mut ran: HashMap<&str, i64> = HashMap::new();
        for s in segments {
            assert!(s.end > s.start, "empty segment: {s:?}");
            *ran.entry(s.pid.as_str()).or_insert(0) += s.duration();
        }
        for p in processes {
            assert_eq!(ran.get(p.id.as_str()).copied().unwrap_or(0), p.burst, "{}", p.id);
            if let Some(first) = segments.iter().find(|s| s.pid == p.id) {
                assert!(first.start >= p.arrival, "{} ran before arriving", p.id);
            }
        }
    }
}
