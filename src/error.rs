//! Error taxonomy for scheduling runs.
//!
//! Scheduling errors are input errors surfaced before any process record
//! is touched. The only other failure is rendering a finished report.
//! There is nothing transient to retry: the simulation is a pure,
//! deterministic in-memory computation.

use thiserror::Error;

use crate::models::ProcessId;
use crate::validation::ValidationError;

/// Result alias used across the scheduling engine.
pub type SchedulingResult<T> = Result<T, SchedulingError>;

/// Errors raised by schedulers, metrics and configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchedulingError {
    /// Round Robin was given a quantum that can never make progress.
    #[error("Invalid time quantum: {0} (must be positive)")]
    InvalidQuantum(i64),

    /// Metrics were requested over zero processes.
    #[error("Workload is empty")]
    EmptyWorkload,

    /// One or more process records failed validation.
    #[error("Malformed workload: {}", join_messages(.0))]
    MalformedWorkload(Vec<ValidationError>),

    /// Metrics were requested for a process no scheduler completed.
    #[error("Process {0} has not been scheduled")]
    UnscheduledProcess(ProcessId),

    /// Simulation or workload configuration is inconsistent.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A reporter could not format or serialize its output.
    #[error("Report rendering failed: {0}")]
    Report(String),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<Vec<ValidationError>> for SchedulingError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::MalformedWorkload(errors)
    }
}

impl From<std::fmt::Error> for SchedulingError {
    fn from(err: std::fmt::Error) -> Self {
        Self::Report(err.to_string())
    }
}

impl From<serde_json::Error> for SchedulingError {
    fn from(err: serde_json::Error) -> Self {
        Self::Report(err.to_string())
    }
}
