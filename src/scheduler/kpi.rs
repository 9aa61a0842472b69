//! Timeline-level performance indicators (KPIs).
//!
//! Computes CPU-wide figures from a completed simulation.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Latest segment end |
//! | Busy Time | Sum of segment durations |
//! | Idle Time | makespan − busy time (measured from t=0) |
//! | CPU Utilization | busy / makespan |
//! | Throughput | processes / makespan |
//! | Context Switches | Adjacent segments with different pids |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

use crate::models::SimulationResult;

/// CPU-wide performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleKpi {
    /// Latest completion time.
    pub makespan: i64,
    /// Time the CPU spent running processes.
    pub busy_time: i64,
    /// Time in `[0, makespan)` with no process running.
    pub idle_time: i64,
    /// `busy_time / makespan`. `None` for an empty timeline.
    pub cpu_utilization: Option<f64>,
    /// Processes completed per time unit. `None` for an empty timeline.
    pub throughput: Option<f64>,
    /// Number of times the CPU switched from one process to another.
    pub context_switches: usize,
}

impl ScheduleKpi {
    /// Computes KPIs from a simulation result.
    pub fn calculate(result: &SimulationResult) -> Self {
        let makespan = result.makespan();
        let busy_time: i64 = result.segments.iter().map(|s| s.duration()).sum();
        let context_switches = result
            .segments
            .windows(2)
            .filter(|pair| pair[0].pid != pair[1].pid)
            .count();

        let (cpu_utilization, throughput) = if makespan > 0 {
            (
                Some(busy_time as f64 / makespan as f64),
                Some(result.metrics.len() as f64 / makespan as f64),
            )
        } else {
            (None, None)
        };

        Self {
            makespan,
            busy_time,
            idle_time: makespan - busy_time,
            cpu_utilization,
            throughput,
            context_switches,
        }
    }

    /// Whether the CPU was never idle before the last completion.
    pub fn is_work_conserving_from_zero(&self) -> bool {
        self.idle_time == 0
    }
}
