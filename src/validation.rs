//! Input validation for simulation runs.
//!
//! Normalizes process descriptors before scheduling:
//! - Blank ids are replaced by a positional id (`P1`, `P2`, ...)
//! - Duplicate ids are rejected
//! - Numeric fields are coerced to integers or rejected
//! - A missing priority is rejected when the policy ranks by priority
//! - Negative arrivals are rejected
//! - Negative bursts are clamped to 0 (treated as zero-length jobs)
//!
//! Validation is fail-fast: the first problem found, scanning the input
//! in order, is returned and nothing is scheduled.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::{ProcessDescriptor, RawField, RawProcess};

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Two processes share the same id after normalization.
    #[error("duplicate process id: {id:?}")]
    DuplicateId { id: String },
    /// A numeric field cannot be interpreted as required.
    #[error("process #{index}: invalid {field}: {reason}")]
    InvalidField {
        /// Position of the offending process in the input.
        index: usize,
        /// Field name (`arrival`, `burst` or `priority`).
        field: &'static str,
        /// What was wrong with it.
        reason: String,
    },
}

impl ValidationError {
    fn invalid_field(index: usize, field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            index,
            field,
            reason: reason.into(),
        }
    }
}

/// Validation result.
pub type ValidationResult = Result<Vec<ProcessDescriptor>, ValidationError>;

/// Whether raw input must carry a `priority` for every process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityInput {
    /// The policy ranks by priority; a missing value is an error.
    Required,
    /// The policy never reads priority; a missing value is stored as 0.
    Unused,
}

/// Id given to a process without one.
///
/// Derived from the 1-based input position so the same input always
/// produces the same ids.
pub fn positional_id(index: usize) -> String {
    format!("P{}", index + 1)
}

/// Normalizes untyped process input.
///
/// # Rules
/// 1. Missing/blank ids become [`positional_id`]; other ids are trimmed.
/// 2. `arrival` and `burst` are required. `priority` is required under
///    [`PriorityInput::Required`] and stored as 0 otherwise.
/// 3. Integers pass through, integral floats are converted, text is
///    parsed. Anything else is [`ValidationError::InvalidField`].
/// 4. `arrival < 0` is rejected; `burst < 0` is clamped to 0.
/// 5. A repeated id is [`ValidationError::DuplicateId`].
/// 6. The latest arrival plus the total burst must fit in an `i64`.
pub fn normalize_processes(raw: &[RawProcess], priority_input: PriorityInput) -> ValidationResult {
    let mut seen = HashSet::new();
    let mut horizon = Horizon::default();
    let mut processes = Vec::with_capacity(raw.len());

    for (index, r) in raw.iter().enumerate() {
        let id = resolve_id(index, r.id.as_deref());
        if !seen.insert(id.clone()) {
            return Err(ValidationError::DuplicateId { id });
        }

        let arrival = coerce(index, "arrival", r.arrival.as_ref())?;
        let burst = coerce(index, "burst", r.burst.as_ref())?;
        let priority = match (r.priority.as_ref(), priority_input) {
            (None, PriorityInput::Unused) => 0,
            (field, _) => coerce(index, "priority", field)?,
        };

        let process = check_ranges(index, id, arrival, burst, priority)?;
        horizon.extend(index, &process)?;
        processes.push(process);
    }

    Ok(processes)
}

/// Validates typed process input.
///
/// Applies the same id, range and horizon rules as [`normalize_processes`].
pub fn validate_processes(processes: &[ProcessDescriptor]) -> ValidationResult {
    let mut seen = HashSet::new();
    let mut horizon = Horizon::default();
    let mut normalized = Vec::with_capacity(processes.len());

    for (index, p) in processes.iter().enumerate() {
        let id = resolve_id(index, Some(&p.id));
        if !seen.insert(id.clone()) {
            return Err(ValidationError::DuplicateId { id });
        }
        let process = check_ranges(index, id, p.arrival, p.burst, p.priority)?;
        horizon.extend(index, &process)?;
        normalized.push(process);
    }

    Ok(normalized)
}

/// Upper bound on every clock value a scheduler can reach.
///
/// The CPU only idles until an arrival, so no schedule ends later than
/// the latest arrival plus the total burst.
#[derive(Debug, Default)]
struct Horizon {
    latest_arrival: i64,
    total_burst: i64,
}

impl Horizon {
    fn extend(&mut self, index: usize, p: &ProcessDescriptor) -> Result<(), ValidationError> {
        let overflow = || {
            ValidationError::invalid_field(index, "burst", "total schedule length overflows i64")
        };
        self.latest_arrival = self.latest_arrival.max(p.arrival);
        self.total_burst = self.total_burst.checked_add(p.burst).ok_or_else(overflow)?;
        self.latest_arrival
            .checked_add(self.total_burst)
            .map(|_| ())
            .ok_or_else(overflow)
    }
}

fn resolve_id(index: usize, id: Option<&str>) -> String {
    match id.map(str::trim) {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => positional_id(index),
    }
}

fn check_ranges(
    index: usize,
    id: String,
    arrival: i64,
    burst: i64,
    priority: i64,
) -> Result<ProcessDescriptor, ValidationError> {
    if arrival < 0 {
        return Err(ValidationError::invalid_field(
            index,
            "arrival",
            format!("must be non-negative, got {arrival}"),
        ));
    }
    Ok(ProcessDescriptor {
        id,
        arrival,
        burst: burst.max(0),
        priority,
    })
}

fn coerce(
    index: usize,
    field: &'static str,
    raw: Option<&RawField>,
) -> Result<i64, ValidationError> {
    let raw = raw.ok_or_else(|| ValidationError::invalid_field(index, field, "missing"))?;
    match raw {
        RawField::Int(v) => Ok(*v),
        RawField::Float(v) => float_to_int(*v).ok_or_else(|| {
            ValidationError::invalid_field(index, field, format!("not an integer: {raw}"))
        }),
        RawField::Text(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Err(ValidationError::invalid_field(index, field, "empty"));
            }
            trimmed
                .parse::<i64>()
                .ok()
                .or_else(|| trimmed.parse::<f64>().ok().and_then(float_to_int))
                .ok_or_else(|| {
                    ValidationError::invalid_field(index, field, format!("not an integer: {raw}"))
                })
        }
    }
}

fn float_to_int(v: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, hence the strict upper bound
    if v.is_finite() && v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 {
        Some(v as i64)
    } else {
        None
    }
}
