//! Execution timeline model.
//!
//! A timeline is the ordered list of CPU slices a scheduler handed out
//! during one pass. Gaps between slices are idle CPU time.

use serde::{Deserialize, Serialize};

use super::ProcessId;

/// Ordered CPU slices produced by one scheduling pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Slices in dispatch order.
    pub slices: Vec<Slice>,
}

/// A contiguous interval during which one process held the CPU.
///
/// Covers `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    /// Process that ran.
    pub process_id: ProcessId,
    /// Dispatch tick.
    pub start: i64,
    /// Preemption or completion tick.
    pub end: i64,
}

impl Slice {
    /// Creates a new slice.
    pub fn new(process_id: ProcessId, start: i64, end: i64) -> Self {
        Self {
            process_id,
            start,
            end,
        }
    }

    /// Slice length in ticks.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty timeline with room for `capacity` slices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slices: Vec::with_capacity(capacity),
        }
    }

    /// Appends a slice.
    pub fn push(&mut self, slice: Slice) {
        self.slices.push(slice);
    }

    /// Latest slice end, or 0 if nothing ran.
    pub fn makespan(&self) -> i64 {
        self.slices.iter().map(|s| s.end).max().unwrap_or(0)
    }

    /// Total ticks the CPU was busy.
    pub fn busy_time(&self) -> i64 {
        self.slices.iter().map(Slice::duration).sum()
    }

    /// Ticks in `[0, makespan)` with no process running.
    pub fn idle_time(&self) -> i64 {
        self.makespan() - self.busy_time()
    }

    /// All slices given to one process, in dispatch order.
    pub fn slices_for_process(&self, process_id: ProcessId) -> Vec<&Slice> {
        self.slices
            .iter()
            .filter(|s| s.process_id == process_id)
            .collect()
    }

    /// CPU ticks given to one process.
    pub fn cpu_time_for(&self, process_id: ProcessId) -> i64 {
        self.slices_for_process(process_id)
            .iter()
            .map(|s| s.duration())
            .sum()
    }

    /// Number of hand-overs between two different processes.
    pub fn context_switches(&self) -> usize {
        self.slices
            .windows(2)
            .filter(|w| w[0].process_id != w[1].process_id)
            .count()
    }

    /// Busy fraction of `[0, makespan)`. `None` for an empty timeline.
    pub fn utilization(&self) -> Option<f64> {
        let horizon = self.makespan();
        if horizon <= 0 {
            return None;
        }
        Some(self.busy_time() as f64 / horizon as f64)
    }

    /// Number of slices.
    pub fn slice_count(&self) -> usize {
        self.slices.len()
    }

    /// Whether nothing ran.
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}
