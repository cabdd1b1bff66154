//! Process record model.
//!
//! A process record carries the immutable descriptor produced by a workload
//! source (arrival, burst, priority) and the mutable timing state written by
//! one scheduling pass.
//!
//! # Time Representation
//! All times are integer ticks of a simulated clock starting at t=0.

use serde::{Deserialize, Serialize};

/// Simulated process identifier. Positive and unique within a workload.
pub type ProcessId = u32;

/// One simulated process and its computed timings.
///
/// `start_time` and `finish_time` are `None` until a scheduler dispatches
/// and completes the process. `waiting_time` and `turnaround_time` are
/// derived at completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRecord {
    /// Unique process identifier.
    pub id: ProcessId,
    /// Tick at which the process becomes eligible to run.
    pub arrival_time: i64,
    /// Total CPU ticks required.
    pub burst_time: i64,
    /// Static priority (lower value = more urgent).
    pub priority: i32,
    /// CPU ticks still owed. Only decremented by preemptive execution.
    pub remaining_time: i64,
    /// Tick of first dispatch.
    pub start_time: Option<i64>,
    /// Tick at which the last unit of work completed.
    pub finish_time: Option<i64>,
    /// Time spent ready but not running.
    pub waiting_time: i64,
    /// Time spent in the system (finish - arrival).
    pub turnaround_time: i64,
}

impl ProcessRecord {
    /// Creates a fresh record with priority 0.
    pub fn new(id: ProcessId, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            priority: 0,
            remaining_time: burst_time,
            start_time: None,
            finish_time: None,
            waiting_time: 0,
            turnaround_time: 0,
        }
    }

    /// Sets the static priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Clears all simulation state, keeping the descriptor.
    pub fn reset(&mut self) {
        self.remaining_time = self.burst_time;
        self.start_time = None;
        self.finish_time = None;
        self.waiting_time = 0;
        self.turnaround_time = 0;
    }

    /// Returns a reset copy of this record.
    pub fn fresh_copy(&self) -> Self {
        let mut copy = self.clone();
        copy.reset();
        copy
    }

    /// Records the first dispatch. Later calls are ignored.
    #[inline]
    pub fn mark_started(&mut self, time: i64) {
        if self.start_time.is_none() {
            self.start_time = Some(time);
        }
    }

    /// Records completion and derives turnaround and waiting time.
    pub fn mark_finished(&mut self, time: i64) {
        self.remaining_time = 0;
        self.finish_time = Some(time);
        self.turnaround_time = time - self.arrival_time;
        self.waiting_time = self.turnaround_time - self.burst_time;
    }

    /// Whether a scheduler has completed this process.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finish_time.is_some()
    }

    /// Response time (first dispatch - arrival), if dispatched.
    pub fn response_time(&self) -> Option<i64> {
        self.start_time.map(|s| s - self.arrival_time)
    }
}
