//! Error types.
//!
//! All errors are deterministic functions of the input and are returned
//! before any scheduling happens. None of them is retryable.

use thiserror::Error;

use crate::validation::ValidationError;

/// Invalid scheduler configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Round Robin requires a strictly positive time quantum.
    #[error("invalid time quantum {quantum}: must be greater than 0")]
    InvalidQuantum { quantum: i64 },
    /// Policy name did not match any known scheduler.
    #[error("unknown scheduling policy: {name:?}")]
    UnknownPolicy { name: String },
}

/// Any failure of a simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// Process list failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Scheduler configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
