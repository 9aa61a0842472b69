//! Process model.
//!
//! A process is the unit of work competing for the single simulated CPU.
//! It becomes eligible at its arrival time and needs `burst` units of CPU
//! time to finish.
//!
//! # Time Representation
//! All times are integer time units relative to the simulation epoch (t=0).
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// A validated process descriptor.
///
/// Created by the caller (or by [`normalize_processes`](crate::validation::normalize_processes))
/// for a single simulation run and never mutated during it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProcessDescriptor {
    /// Unique process identifier.
    pub id: String,
    /// Time at which the process becomes eligible to run (≥ 0).
    pub arrival: i64,
    /// Total CPU time required (≥ 0).
    pub burst: i64,
    /// Scheduling priority (lower value = higher priority).
    ///
    /// Only consulted by the preemptive priority scheduler.
    pub priority: i64,
}

impl ProcessDescriptor {
    /// Creates a process with priority 0.
    pub fn new(id: impl Into<String>, arrival: i64, burst: i64) -> Self {
        Self {
            id: id.into(),
            arrival,
            burst,
            priority: 0,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    /// Whether the process needs no CPU time at all.
    #[inline]
    pub fn is_zero_burst(&self) -> bool {
        self.burst == 0
    }
}

/// A numeric field as supplied by an untyped front end.
///
/// Form inputs arrive as numbers or strings; the validator coerces them
/// to integers or rejects them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawField {
    /// Already an integer.
    Int(i64),
    /// A floating-point number (accepted only if integral).
    Float(f64),
    /// Text to be parsed.
    Text(String),
}

impl From<i64> for RawField {
    fn from(value: i64) -> Self {
        RawField::Int(value)
    }
}

impl From<i32> for RawField {
    fn from(value: i32) -> Self {
        RawField::Int(i64::from(value))
    }
}

impl From<f64> for RawField {
    fn from(value: f64) -> Self {
        RawField::Float(value)
    }
}

impl From<&str> for RawField {
    fn from(value: &str) -> Self {
        RawField::Text(value.to_string())
    }
}

impl std::fmt::Display for RawField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RawField::Int(v) => write!(f, "{v}"),
            RawField::Float(v) => write!(f, "{v}"),
            RawField::Text(s) => write!(f, "{s:?}"),
        }
    }
}

/// An unvalidated process descriptor.
///
/// Every field may be missing; see [`normalize_processes`](crate::validation::normalize_processes)
/// for how each one is resolved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawProcess {
    /// Process identifier. Missing or blank ids get a positional id.
    #[serde(default, alias = "pid")]
    pub id: Option<String>,
    /// Arrival time.
    #[serde(default)]
    pub arrival: Option<RawField>,
    /// Burst time.
    #[serde(default)]
    pub burst: Option<RawField>,
    /// Priority. Required only when the policy ranks by priority.
    #[serde(default)]
    pub priority: Option<RawField>,
}

impl RawProcess {
    /// Creates a raw process with the given id and no fields set.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Default::default()
        }
    }

    /// Creates a raw process without an id.
    pub fn unnamed() -> Self {
        Self::default()
    }

    /// Sets the arrival field.
    pub fn with_arrival(mut self, arrival: impl Into<RawField>) -> Self {
        self.arrival = Some(arrival.into());
        self
    }

    /// Sets the burst field.
    pub fn with_burst(mut self, burst: impl Into<RawField>) -> Self {
        self.burst = Some(burst.into());
        self
    }

    /// Sets the priority field.
    pub fn with_priority(mut self, priority: impl Into<RawField>) -> Self {
        self.priority = Some(priority.into());
        self
    }
}

impl From<&ProcessDescriptor> for RawProcess {
    fn from(p: &ProcessDescriptor) -> Self {
        Self {
            id: Some(p.id.clone()),
            arrival: Some(RawField::Int(p.arrival)),
            burst: Some(RawField::Int(p.burst)),
            priority: Some(RawField::Int(p.priority)),
        }
    }
}

/// Per-run working copy of a process.
///
/// Owned by a single scheduler invocation and discarded afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeProcessState {
    /// Identifier (copied from the descriptor).
    pub id: String,
    /// Arrival time.
    pub arrival: i64,
    /// Burst time as given.
    pub burst: i64,
    /// Priority (lower = more urgent).
    pub priority: i64,
    /// CPU time still required.
    pub remaining: i64,
}

impl RuntimeProcessState {
    /// Whether the process has arrived by `clock`.
    #[inline]
    pub fn has_arrived(&self, clock: i64) -> bool {
        self.arrival <= clock
    }

    /// Whether the process still needs CPU time.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.remaining <= 0
    }

    /// Whether the process can be selected at `clock`.
    #[inline]
    pub fn is_ready(&self, clock: i64) -> bool {
        self.has_arrived(clock) && !self.is_finished()
    }
}

impl From<&ProcessDescriptor> for RuntimeProcessState {
    fn from(p: &ProcessDescriptor) -> Self {
        Self {
            id: p.id.clone(),
            arrival: p.arrival,
            burst: p.burst,
            priority: p.priority,
            remaining: p.burst,
        }
    }
}
