//! Preemptive priority scheduler (lower value = higher priority).
//!
//! Same tick-preemptive structure as SRTF with the selection key
//! swapped to the static priority (ties: arrival, then id).
//!
//! No aging is applied: a low-priority process starves for as long as
//! higher-priority work keeps arriving.

use super::{preemptive, CpuScheduler};
use crate::dispatching::{rules, RuleChain};
use crate::models::{GanttSegment, ProcessDescriptor};

/// Preemptive static-priority scheduler.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreemptivePriority;

impl PreemptivePriority {
    /// Creates the scheduler.
    pub fn new() -> Self {
        Self
    }

    pub(crate) fn chain() -> RuleChain {
        RuleChain::new()
            .with_rule(rules::HighestPriority)
            .with_rule(rules::EarliestArrival)
    }
}

impl CpuScheduler for PreemptivePriority {
    fn name(&self) -> &'static str {
        "Priority"
    }

    fn schedule(&self, processes: &[ProcessDescriptor]) -> Vec<GanttSegment> {
        preemptive::run(processes, &Self::chain())
    }
}
