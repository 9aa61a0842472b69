//! Simulation result model.
//!
//! A simulation result pairs the Gantt timeline with the per-process
//! performance table and its averages. It is built fresh for every run
//! and never mutated afterwards.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use super::GanttSegment;

/// Performance figures for one process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    /// Process identifier.
    pub pid: String,
    /// Arrival time.
    pub arrival: i64,
    /// Burst time.
    pub burst: i64,
    /// Time the last unit of work finished.
    pub completion: i64,
    /// `completion - arrival`.
    pub turnaround: i64,
    /// `turnaround - burst`.
    pub waiting: i64,
    /// First start minus arrival.
    pub response: i64,
}

/// Arithmetic means over all processes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Averages {
    /// Mean waiting time.
    pub waiting: f64,
    /// Mean turnaround time.
    pub turnaround: f64,
    /// Mean response time.
    pub response: f64,
}

/// Output of one simulation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Execution intervals in non-decreasing start order.
    pub segments: Vec<GanttSegment>,
    /// One entry per input process, in input order.
    pub metrics: Vec<ProcessMetrics>,
    /// Means over `metrics`. `None` when there are no processes.
    pub averages: Option<Averages>,
}

impl SimulationResult {
    /// Creates an empty result (no processes).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether the run had no processes.
    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    /// Latest segment end, or 0 for an empty timeline.
    pub fn makespan(&self) -> i64 {
        self.segments.iter().map(|s| s.end).max().unwrap_or(0)
    }

    /// All segments of a process, in time order.
    pub fn segments_for(&self, pid: &str) -> Vec<&GanttSegment> {
        self.segments.iter().filter(|s| s.pid == pid).collect()
    }

    /// Metrics row for a process.
    pub fn metrics_for(&self, pid: &str) -> Option<&ProcessMetrics> {
        self.metrics.iter().find(|m| m.pid == pid)
    }

    /// Completion time of a process.
    pub fn completion_time(&self, pid: &str) -> Option<i64> {
        self.metrics_for(pid).map(|m| m.completion)
    }

    /// Order in which processes first got the CPU.
    pub fn dispatch_order(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for s in &self.segments {
            if !seen.contains(&s.pid.as_str()) {
                seen.push(&s.pid);
            }
        }
        seen
    }
}
