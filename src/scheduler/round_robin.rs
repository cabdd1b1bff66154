//! Preemptive Round Robin scheduler.
//!
//! # Algorithm
//!
//! 1. Processes not yet arrived wait in a pending queue ordered by
//!    (arrival time, ID).
//! 2. At each dispatch point, every pending process with
//!    `arrival_time <= time` joins the tail of the FIFO ready queue.
//! 3. The head of the ready queue runs for `min(remaining, quantum)`.
//! 4. Processes that arrived during that slice are admitted first; then the
//!    preempted process (if unfinished) re-joins the tail.
//! 5. An empty ready queue idles the CPU until the next arrival.
//!
//! # Complexity
//! O(n log n + S) where S = number of slices (≤ Σ ceil(burst / quantum)).

use std::collections::VecDeque;

use tracing::{debug, trace};

use super::CpuScheduler;
use crate::dispatching::{rules, RuleEngine, TieBreaker};
use crate::error::SchedulingResult;
use crate::models::{ProcessRecord, Slice, Timeline};
use crate::validation::{validate_quantum, validate_workload};

/// Round Robin with a fixed time quantum.
///
/// # Example
///
/// ```
/// use u_procsched::models::ProcessRecord;
/// use u_procsched::scheduler::{CpuScheduler, RoundRobinScheduler};
///
/// let mut processes = vec![ProcessRecord::new(1, 0, 6), ProcessRecord::new(2, 1, 4)];
/// let timeline = RoundRobinScheduler::new(4).schedule(&mut processes).unwrap();
///
/// assert_eq!(processes[1].start_time, Some(4));
/// assert_eq!(processes[0].finish_time, Some(10));
/// assert_eq!(timeline.slice_count(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct RoundRobinScheduler {
    time_quantum: i64,
}

impl RoundRobinScheduler {
    /// Creates a scheduler. The quantum is checked when scheduling.
    pub fn new(time_quantum: i64) -> Self {
        Self { time_quantum }
    }

    /// Moves every pending process that has arrived by `time` to the ready
    /// queue, preserving pending order.
    fn admit(
        processes: &[ProcessRecord],
        pending: &mut VecDeque<usize>,
        ready: &mut VecDeque<usize>,
        time: i64,
    ) {
        while let Some(&next) = pending.front() {
            if processes[next].arrival_time > time {
                break;
            }
            trace!(process = processes[next].id, time, "admitted");
            pending.pop_front();
            ready.push_back(next);
        }
    }
}

impl CpuScheduler for RoundRobinScheduler {
    fn name(&self) -> &'static str {
        "Round Robin"
    }

    fn time_quantum(&self) -> Option<i64> {
        Some(self.time_quantum)
    }

    fn schedule(&self, processes: &mut [ProcessRecord]) -> SchedulingResult<Timeline> {
        validate_quantum(self.time_quantum)?;
        validate_workload(processes)?;
        processes.iter_mut().for_each(ProcessRecord::reset);

        // Simultaneous arrivals are admitted by ascending ID.
        let arrival_order = RuleEngine::new()
            .with_rule(rules::Fifo)
            .with_final_tie_breaker(TieBreaker::ById);
        let mut pending: VecDeque<usize> = arrival_order.sort_indices(processes).into();
        let mut ready: VecDeque<usize> = VecDeque::with_capacity(processes.len());
        let mut timeline = Timeline::new();
        let mut time: i64 = 0;

        loop {
            Self::admit(processes, &mut pending, &mut ready, time);

            let Some(current) = ready.pop_front() else {
                match pending.front() {
                    // CPU idles until the next arrival
                    Some(&next) => {
                        time = processes[next].arrival_time;
                        continue;
                    }
                    None => break,
                }
            };

            let process = &mut processes[current];
            process.mark_started(time);
            let run = process.remaining_time.min(self.time_quantum);
            process.remaining_time -= run;
            debug!(process = process.id, time, run, "dispatched");
            timeline.push(Slice::new(process.id, time, time + run));
            time += run;

            if process.remaining_time == 0 {
                process.mark_finished(time);
            } else {
                Self::admit(processes, &mut pending, &mut ready, time);
                ready.push_back(current);
            }
        }

        Ok(timeline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SchedulingError;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_preempted_process_queues_behind_new_arrival() {
        let mut processes = vec![ProcessRecord::new(1, 0, 6), ProcessRecord::new(2, 1, 4)];
        let timeline = RoundRobinScheduler::new(4)
            .schedule(&mut processes)
            .unwrap();

        // P1 [0,4) → P2 [4,8) → P1 [8,10)
        let p1 = &processes[0];
        assert_eq!(p1.start_time, Some(0));
        assert_eq!(p1.finish_time, Some(10));
        assert_eq!(p1.turnaround_time, 10);
        assert_eq!(p1.waiting_time, 4);

        let p2 = &processes[1];
        assert_eq!(p2.start_time, Some(4));
        assert_eq!(p2.finish_time, Some(8));
        assert_eq!(p2.turnaround_time, 7);
        assert_eq!(p2.waiting_time, 3);

        let order: Vec<(u32, i64, i64)> = timeline
            .slices
            .iter()
            .map(|s| (s.process_id, s.start, s.end))
            .collect();
        assert_eq!(order, vec![(1, 0, 4), (2, 4, 8), (1, 8, 10)]);
    }

    #[test]
    fn test_single_process_no_idle() {
        let mut processes = vec![ProcessRecord::new(1, 0, 10)];
        let timeline = RoundRobinScheduler::new(3)
            .schedule(&mut processes)
            .unwrap();

        assert_eq!(processes[0].finish_time, Some(10));
        assert_eq!(processes[0].waiting_time, 0);
        assert_eq!(timeline.slice_count(), 4); // 3 + 3 + 3 + 1
        assert_eq!(timeline.idle_time(), 0);
        assert_eq!(timeline.context_switches(), 0);
    }

    #[test]
    fn test_idle_until_first_arrival() {
        let mut processes = vec![ProcessRecord::new(1, 5, 2)];
        RoundRobinScheduler::new(4)
            .schedule(&mut processes)
            .unwrap();
        assert_eq!(processes[0].start_time, Some(5));
        assert_eq!(processes[0].finish_time, Some(7));
        assert_eq!(processes[0].waiting_time, 0);
    }

    #[test]
    fn test_idle_gap_between_processes() {
        let mut processes = vec![ProcessRecord::new(1, 0, 2), ProcessRecord::new(2, 10, 3)];
        let timeline = RoundRobinScheduler::new(4)
            .schedule(&mut processes)
            .unwrap();
        assert_eq!(processes[1].start_time, Some(10));
        assert_eq!(processes[1].finish_time, Some(13));
        assert_eq!(timeline.idle_time(), 8);
    }

    #[test]
    fn test_simultaneous_arrivals_by_id() {
        let mut processes = vec![
            ProcessRecord::new(3, 0, 2),
            ProcessRecord::new(1, 0, 2),
            ProcessRecord::new(2, 0, 2),
        ];
        let timeline = RoundRobinScheduler::new(4)
            .schedule(&mut processes)
            .unwrap();
        let order: Vec<u32> = timeline.slices.iter().map(|s| s.process_id).collect();
        assert_eq!(order, vec![1, 2, 3]);
    }

    #[test]
    fn test_quantum_one_interleaves() {
        let mut processes = vec![ProcessRecord::new(1, 0, 3), ProcessRecord::new(2, 0, 2)];
        let timeline = RoundRobinScheduler::new(1)
            .schedule(&mut processes)
            .unwrap();
        let order: Vec<u32> = timeline.slices.iter().map(|s| s.process_id).collect();
        assert_eq!(order, vec![1, 2, 1, 2, 1]);
        assert_eq!(processes[0].finish_time, Some(5));
        assert_eq!(processes[1].finish_time, Some(4));
    }

    #[test]
    fn test_large_quantum_degenerates_to_fcfs() {
        let mut processes = vec![ProcessRecord::new(1, 0, 5), ProcessRecord::new(2, 2, 3)];
        RoundRobinScheduler::new(100)
            .schedule(&mut processes)
            .unwrap();
        assert_eq!(processes[0].finish_time, Some(5));
        assert_eq!(processes[1].start_time, Some(5));
        assert_eq!(processes[1].finish_time, Some(8));
    }

    #[test]
    fn test_invalid_quantum_leaves_records_untouched() {
        for quantum in [0, -1] {
            let mut processes = vec![ProcessRecord::new(1, 0, 5)];
            processes[0].remaining_time = 2; // stale state must survive
            let err = RoundRobinScheduler::new(quantum)
                .schedule(&mut processes)
                .unwrap_err();
            assert_eq!(err, SchedulingError::InvalidQuantum(quantum));
            assert_eq!(processes[0].remaining_time, 2);
            assert_eq!(processes[0].start_time, None);
        }
    }

    #[test]
    fn test_reports_quantum() {
        let scheduler = RoundRobinScheduler::new(3);
        assert_eq!(scheduler.name(), "Round Robin");
        assert_eq!(scheduler.time_quantum(), Some(3));
    }

    #[test]
    fn test_large_arrivals_exact() {
        let mut processes = vec![
            ProcessRecord::new(1, (1 << 53) + 1, 1),
            ProcessRecord::new(2, 1 << 53, 1),
        ];
        let timeline = RoundRobinScheduler::new(4)
            .schedule(&mut processes)
            .unwrap();
        let order: Vec<u32> = timeline.slices.iter().map(|s| s.process_id).collect();
        assert_eq!(order, vec![2, 1]);
        assert_eq!(processes[1].start_time, Some(1 << 53));
        assert_eq!(processes[0].start_time, Some((1 << 53) + 1));
    }

    #[test]
    fn test_time_overflow_rejected() {
        let mut processes = vec![ProcessRecord::new(1, i64::MAX - 1, 5)];
        let err = RoundRobinScheduler::new(2)
            .schedule(&mut processes)
            .unwrap_err();
        match err {
            SchedulingError::MalformedWorkload(errors) => {
                assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow)
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(processes[0].remaining_time, 5);
        assert_eq!(processes[0].start_time, None);
    }

    #[test]
    fn test_runs_up_to_i64_max() {
        let mut processes = vec![ProcessRecord::new(1, i64::MAX - 3, 3)];
        RoundRobinScheduler::new(2)
            .schedule(&mut processes)
            .unwrap();
        assert_eq!(processes[0].finish_time, Some(i64::MAX));
    }

    #[test]
    fn test_malformed_workload_rejected() {
        let mut processes = vec![ProcessRecord::new(1, 0, 5), ProcessRecord::new(2, -3, 0)];
        let err = RoundRobinScheduler::new(2)
            .schedule(&mut processes)
            .unwrap_err();
        match err {
            SchedulingError::MalformedWorkload(errors) => assert_eq!(errors.len(), 2),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(processes.iter().all(|p| p.start_time.is_none()));
    }
}
