//! Simulation entry point.
//!
//! # Pipeline
//!
//! 1. Build the scheduler for the requested policy (quantum checked for RR).
//! 2. Validate and normalize the process list.
//! 3. Run the scheduler.
//! 4. Derive metrics and averages from the segments.
//!
//! Each call is a pure, one-shot batch computation: it owns its working
//! copy of the input and returns a fresh result, so independent calls may
//! run concurrently.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, SimulationError};
use crate::models::{ProcessDescriptor, RawProcess, SimulationResult};
use crate::scheduler::{
    calculate_metrics, CpuScheduler, Fcfs, PreemptivePriority, RoundRobin, Sjf, Srtf,
};
use crate::validation::{normalize_processes, validate_processes, PriorityInput};

/// Default Round-Robin time slice.
pub const DEFAULT_QUANTUM: i64 = 2;

/// Scheduling discipline.
///
/// Serialized as its short name. Deserialization goes through
/// [`FromStr`], so JSON accepts the same spellings as `parse`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Policy {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest Job First (non-preemptive).
    Sjf,
    /// Shortest Remaining Time First (preemptive).
    Srtf,
    /// Round Robin with a fixed quantum.
    RoundRobin,
    /// Preemptive priority (lower value = higher priority).
    Priority,
}

impl Policy {
    /// Every supported policy.
    pub const ALL: [Policy; 5] = [
        Policy::Fcfs,
        Policy::Sjf,
        Policy::Srtf,
        Policy::RoundRobin,
        Policy::Priority,
    ];

    /// Short display name.
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fcfs => "FCFS",
            Policy::Sjf => "SJF",
            Policy::Srtf => "SRTF",
            Policy::RoundRobin => "RR",
            Policy::Priority => "Priority",
        }
    }

    /// Whether the policy ranks processes by priority.
    pub fn uses_priority(&self) -> bool {
        matches!(self, Policy::Priority)
    }

    /// Whether a running process can lose the CPU before finishing.
    pub fn is_preemptive(&self) -> bool {
        !matches!(self, Policy::Fcfs | Policy::Sjf)
    }

    /// Builds the scheduler. `quantum` is only checked for Round Robin.
    pub fn scheduler(&self, quantum: i64) -> Result<Box<dyn CpuScheduler>, ConfigError> {
        let scheduler: Box<dyn CpuScheduler> = match self {
            Policy::Fcfs => Box::new(Fcfs),
            Policy::Sjf => Box::new(Sjf),
            Policy::Srtf => Box::new(Srtf),
            Policy::RoundRobin => Box::new(RoundRobin::new(quantum)?),
            Policy::Priority => Box::new(PreemptivePriority),
        };
        Ok(scheduler)
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Policy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_uppercase();
        match key.as_str() {
            "FCFS" => Ok(Policy::Fcfs),
            "SJF" => Ok(Policy::Sjf),
            "SRTF" => Ok(Policy::Srtf),
            "RR" | "ROUNDROBIN" => Ok(Policy::RoundRobin),
            "PRIORITY" => Ok(Policy::Priority),
            _ => Err(ConfigError::UnknownPolicy {
                name: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Policy {
    type Error = ConfigError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

impl From<Policy> for String {
    fn from(policy: Policy) -> Self {
        policy.name().to_string()
    }
}

fn default_quantum() -> i64 {
    DEFAULT_QUANTUM
}

/// Input container for one simulation run.
///
/// Deserializable, so a front end can submit its process table as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Processes to schedule (validated on run).
    pub processes: Vec<RawProcess>,
    /// Scheduling discipline.
    pub policy: Policy,
    /// Round-Robin time slice. Ignored by other policies.
    #[serde(default = "default_quantum")]
    pub quantum: i64,
}

impl SimulationRequest {
    /// Creates a request from typed processes.
    pub fn new(processes: &[ProcessDescriptor], policy: Policy) -> Self {
        Self::from_raw(processes.iter().map(RawProcess::from).collect(), policy)
    }

    /// Creates a request from untyped processes.
    pub fn from_raw(processes: Vec<RawProcess>, policy: Policy) -> Self {
        Self {
            processes,
            policy,
            quantum: DEFAULT_QUANTUM,
        }
    }

    /// Sets the Round-Robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = quantum;
        self
    }

    /// Sets the policy.
    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }
}

/// Runs a simulation.
///
/// # Errors
/// - [`ConfigError::InvalidQuantum`] for Round Robin with `quantum <= 0`.
/// - [`ValidationError`](crate::validation::ValidationError) for bad
///   process input, including a missing priority under
///   [`Policy::Priority`].
///
/// An empty process list is not an error: the result has no segments,
/// no metrics and no averages.
///
/// # Example
///
/// ```
/// use u_cpusim::models::ProcessDescriptor;
/// use u_cpusim::simulation::{simulate, Policy, SimulationRequest};
///
/// let processes = vec![
///     ProcessDescriptor::new("P1", 0, 5),
///     ProcessDescriptor::new("P2", 1, 3),
///     ProcessDescriptor::new("P3", 2, 8),
/// ];
/// let request = SimulationRequest::new(&processes, Policy::RoundRobin).with_quantum(4);
///
/// let result = simulate(&request).unwrap();
/// assert_eq!(result.segments.len(), 5);
/// assert_eq!(result.completion_time("P3"), Some(16));
/// ```
pub fn simulate(request: &SimulationRequest) -> Result<SimulationResult, SimulationError> {
    let scheduler = request.policy.scheduler(request.quantum)?;
    let priority = if request.policy.uses_priority() {
        PriorityInput::Required
    } else {
        PriorityInput::Unused
    };
    let processes = normalize_processes(&request.processes, priority)?;
    Ok(run(scheduler.as_ref(), &processes))
}

/// Runs a simulation over typed processes.
///
/// Same checks and output as [`simulate`], without the untyped round trip.
pub fn simulate_processes(
    processes: &[ProcessDescriptor],
    policy: Policy,
    quantum: i64,
) -> Result<SimulationResult, SimulationError> {
    let scheduler = policy.scheduler(quantum)?;
    let processes = validate_processes(processes)?;
    Ok(run(scheduler.as_ref(), &processes))
}

/// Runs `scheduler` over already-validated processes.
pub fn run(scheduler: &dyn CpuScheduler, processes: &[ProcessDescriptor]) -> SimulationResult {
    if processes.is_empty() {
        debug!(policy = scheduler.name(), "no processes, empty result");
        return SimulationResult::empty();
    }

    debug!(
        policy = scheduler.name(),
        processes = processes.len(),
        "simulation started"
    );
    let segments = scheduler.schedule(processes);
    let (metrics, averages) = calculate_metrics(&segments, processes);
    let result = SimulationResult {
        segments,
        metrics,
        averages,
    };
    debug!(
        policy = scheduler.name(),
        segments = result.segments.len(),
        makespan = result.makespan(),
        "simulation finished"
    );
    result
}
