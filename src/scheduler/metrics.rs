//! Schedule quality metrics.
//!
//! Computes per-run performance indicators from scheduled process records
//! and the timeline that produced them.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting | mean(turnaround - burst) |
//! | Avg Turnaround | mean(finish - arrival) |
//! | Avg Response | mean(first dispatch - arrival) |
//! | Max Waiting | largest single waiting time |
//! | Makespan | latest finish time |
//! | CPU Utilization | total burst / makespan |
//! | Throughput | processes / makespan |
//! | Context Switches | hand-overs between distinct processes |

use serde::{Deserialize, Serialize};

use crate::error::{SchedulingError, SchedulingResult};
use crate::models::{ProcessRecord, Timeline};

/// Mean waiting time and mean turnaround time.
///
/// Fails on an empty slice or on a record no scheduler has completed.
pub fn mean_times(processes: &[ProcessRecord]) -> SchedulingResult<(f64, f64)> {
    if processes.is_empty() {
        return Err(SchedulingError::EmptyWorkload);
    }
    if let Some(p) = processes.iter().find(|p| !p.is_finished()) {
        return Err(SchedulingError::UnscheduledProcess(p.id));
    }

    // Per-record times fit in i64; their sum may not.
    let n = processes.len() as f64;
    let total_waiting: f64 = processes.iter().map(|p| p.waiting_time as f64).sum();
    let total_turnaround: f64 = processes.iter().map(|p| p.turnaround_time as f64).sum();
    Ok((total_waiting / n, total_turnaround / n))
}

/// Scheduling performance indicators for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleMetrics {
    /// Number of processes scheduled.
    pub process_count: usize,
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Mean response time (first dispatch - arrival).
    pub avg_response_time: f64,
    /// Largest waiting time of any process.
    pub max_waiting_time: i64,
    /// Latest finish time.
    pub makespan: i64,
    /// Sum of burst times.
    pub total_burst: i64,
    /// Busy fraction of `[0, makespan)` (0.0..=1.0).
    pub cpu_utilization: f64,
    /// Processes completed per tick.
    pub throughput: f64,
    /// Hand-overs between distinct processes.
    pub context_switches: usize,
}

impl ScheduleMetrics {
    /// Computes metrics from scheduled records and their timeline.
    ///
    /// # Errors
    /// `EmptyWorkload` for zero processes, `UnscheduledProcess` if any
    /// record lacks a finish time.
    pub fn calculate(processes: &[ProcessRecord], timeline: &Timeline) -> SchedulingResult<Self> {
        let (avg_waiting_time, avg_turnaround_time) = mean_times(processes)?;

        let n = processes.len() as f64;
        let total_response: f64 = processes
            .iter()
            .filter_map(|p| p.response_time())
            .map(|r| r as f64)
            .sum();
        let max_waiting_time = processes.iter().map(|p| p.waiting_time).max().unwrap_or(0);
        let makespan = processes
            .iter()
            .filter_map(|p| p.finish_time)
            .max()
            .unwrap_or(0);
        let total_burst: i64 = processes.iter().map(|p| p.burst_time).sum();

        // Finish times are > arrival >= 0, so makespan is positive here.
        let horizon = makespan as f64;

        Ok(Self {
            process_count: processes.len(),
            avg_waiting_time,
            avg_turnaround_time,
            avg_response_time: total_response / n,
            max_waiting_time,
            makespan,
            total_burst,
            cpu_utilization: total_burst as f64 / horizon,
            throughput: n / horizon,
            context_switches: timeline.context_switches(),
        })
    }
}
