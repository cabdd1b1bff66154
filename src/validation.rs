//! Input validation for scheduling runs.
//!
//! Checks process descriptors and the Round Robin quantum before any
//! scheduler mutates a record. Detects:
//! - Duplicate process IDs
//! - Zero process IDs
//! - Negative arrival times
//! - Non-positive burst times
//! - Workloads whose clock would run past `i64::MAX`
//!
//! All problems are collected, not just the first one.

use std::collections::HashSet;

use thiserror::Error;

use crate::error::{SchedulingError, SchedulingResult};
use crate::models::ProcessRecord;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two processes share the same ID.
    DuplicateId,
    /// Process ID is zero.
    InvalidId,
    /// Process arrives before t=0.
    NegativeArrival,
    /// Process needs no CPU time, or a negative amount.
    NonPositiveBurst,
    /// Latest arrival plus total burst does not fit in `i64`.
    TimeOverflow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates process descriptors.
///
/// Checks:
/// 1. Every ID is positive
/// 2. No duplicate IDs
/// 3. Every arrival time is >= 0
/// 4. Every burst time is > 0
/// 5. The latest arrival plus the total burst fits in `i64`
///
/// No schedule of valid records can end later than check 5's bound, so
/// schedulers may add ticks without overflow once validation passes.
///
/// An empty slice is valid: schedulers treat it as a no-op.
pub fn validate_workload(processes: &[ProcessRecord]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for p in processes {
        if p.id == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidId,
                "Process ID must be positive, got 0",
            ));
        }

        if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Process {} has negative arrival time {}",
                    p.id, p.arrival_time
                ),
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process {} has non-positive burst time {}", p.id, p.burst_time),
            ));
        }
    }

    if errors.is_empty() && horizon(processes).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "Workload timings overflow: latest arrival plus total burst exceeds i64::MAX",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Upper bound on any completion time, `None` on overflow.
fn horizon(processes: &[ProcessRecord]) -> Option<i64> {
    let latest_arrival = processes.iter().map(|p| p.arrival_time).max().unwrap_or(0);
    processes
        .iter()
        .try_fold(latest_arrival, |acc, p| acc.checked_add(p.burst_time))
}

/// Validates a Round Robin time quantum.
pub fn validate_quantum(time_quantum: i64) -> SchedulingResult<()> {
    if time_quantum <= 0 {
        return Err(SchedulingError::InvalidQuantum(time_quantum));
    }
    Ok(())
}
