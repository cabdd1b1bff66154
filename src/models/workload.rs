//! Workload model.
//!
//! A workload is the caller-owned collection of process descriptors that
//! every algorithm run starts from. Runs never share records: each one
//! takes a [`Workload::fresh_copy`].

use serde::{Deserialize, Serialize};

use super::ProcessRecord;

/// An ordered collection of process records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workload {
    /// Process records in source order.
    pub processes: Vec<ProcessRecord>,
}

impl Workload {
    /// Creates a workload from records.
    pub fn new(processes: Vec<ProcessRecord>) -> Self {
        Self { processes }
    }

    /// Adds a process.
    pub fn with_process(mut self, process: ProcessRecord) -> Self {
        self.processes.push(process);
        self
    }

    /// Returns reset copies of all records, in source order.
    pub fn fresh_copy(&self) -> Vec<ProcessRecord> {
        self.processes.iter().map(ProcessRecord::fresh_copy).collect()
    }

    /// Sum of all burst times.
    pub fn total_burst(&self) -> i64 {
        self.processes.iter().map(|p| p.burst_time).sum()
    }

    /// Number of processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the workload has no processes.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }
}

impl From<Vec<ProcessRecord>> for Workload {
    fn from(processes: Vec<ProcessRecord>) -> Self {
        Self::new(processes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_copy_is_independent() {
        let workload = Workload::new(vec![ProcessRecord::new(1, 0, 5)])
            .with_process(ProcessRecord::new(2, 2, 3));

        let mut run = workload.fresh_copy();
        run[0].mark_started(0);
        run[0].mark_finished(5);

        assert!(!workload.processes[0].is_finished());
        assert_eq!(workload.fresh_copy()[0].finish_time, None);
    }

    #[test]
    fn test_fresh_copy_resets_dirty_records() {
        let mut dirty = ProcessRecord::new(1, 0, 5);
        dirty.remaining_time = 2;
        dirty.mark_started(0);
        let workload = Workload::new(vec![dirty]);

        let copy = workload.fresh_copy();
        assert_eq!(copy[0].remaining_time, 5);
        assert_eq!(copy[0].start_time, None);
    }

    #[test]
    fn test_totals() {
        let workload: Workload =
            vec![ProcessRecord::new(1, 0, 5), ProcessRecord::new(2, 2, 3)].into();
        assert_eq!(workload.len(), 2);
        assert_eq!(workload.total_burst(), 8);
        assert!(Workload::default().is_empty());
    }
}
