//! CPU schedulers and metrics.
//!
//! Every scheduler runs one simulated single-core pass over a slice of
//! process records, writing start / finish / waiting / turnaround times in
//! place and returning the CPU [`Timeline`] it produced.
//!
//! # Algorithms
//!
//! | Scheduler | Preemptive | Order |
//! |-----------|-----------|-------|
//! | `RoundRobinScheduler` | yes, per quantum | FIFO ready queue |
//! | `NonPreemptiveScheduler::fcfs` | no | arrival time |
//! | `NonPreemptiveScheduler::priority` | no | priority value, then arrival |
//!
//! # Contract
//!
//! - Input is validated before any record is touched; on error the slice
//!   is left exactly as passed in.
//! - Records are reset at the start of a pass, so running the same
//!   scheduler twice yields identical results.
//! - Records keep the caller's order; only the dispatch order changes.
//! - An empty slice is a no-op producing an empty timeline.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod metrics;
mod non_preemptive;
mod round_robin;

pub use metrics::{mean_times, ScheduleMetrics};
pub use non_preemptive::NonPreemptiveScheduler;
pub use round_robin::RoundRobinScheduler;

use std::fmt::Debug;

use crate::error::SchedulingResult;
use crate::models::{ProcessRecord, Timeline};

/// A single-core CPU scheduling policy.
pub trait CpuScheduler: Send + Sync + Debug {
    /// Policy name (e.g., "Round Robin").
    fn name(&self) -> &'static str;

    /// Runs one simulated pass, mutating `processes` in place.
    fn schedule(&self, processes: &mut [ProcessRecord]) -> SchedulingResult<Timeline>;

    /// Preemption quantum, for time-sliced policies.
    fn time_quantum(&self) -> Option<i64> {
        None
    }
}
