//! Non-preemptive sequential scheduler.
//!
//! # Algorithm
//!
//! 1. Order all processes once, up front, with a [`RuleEngine`].
//! 2. Walk that order: if the next process has not arrived, idle the CPU
//!    until it does; run it to completion.
//!
//! The order is never re-evaluated. A more urgent process that arrives
//! while the CPU idles waiting for an earlier-ranked one does not jump
//! ahead, and a ready low-priority process does not run while the CPU
//! waits for a higher-priority one to arrive.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the pass.

use tracing::debug;

use super::CpuScheduler;
use crate::dispatching::{rules, RuleEngine};
use crate::error::SchedulingResult;
use crate::models::{ProcessRecord, Slice, Timeline};
use crate::validation::validate_workload;

/// Run-to-completion scheduler driven by a fixed dispatch order.
///
/// # Example
///
/// ```
/// use u_procsched::models::ProcessRecord;
/// use u_procsched::scheduler::{CpuScheduler, NonPreemptiveScheduler};
///
/// let mut processes = vec![ProcessRecord::new(1, 0, 5), ProcessRecord::new(2, 2, 3)];
/// NonPreemptiveScheduler::fcfs().schedule(&mut processes).unwrap();
///
/// assert_eq!(processes[1].start_time, Some(5));
/// assert_eq!(processes[1].waiting_time, 3);
/// ```
#[derive(Debug, Clone)]
pub struct NonPreemptiveScheduler {
    name: &'static str,
    rule_engine: RuleEngine,
}

impl NonPreemptiveScheduler {
    /// Creates a scheduler with a custom dispatch order.
    pub fn new(name: &'static str, rule_engine: RuleEngine) -> Self {
        Self { name, rule_engine }
    }

    /// First-Come-First-Served: arrival order, ties keep input order.
    pub fn fcfs() -> Self {
        Self::new("FCFS", RuleEngine::new().with_rule(rules::Fifo))
    }

    /// Static priority: lowest value first, then earliest arrival, then
    /// input order.
    pub fn priority() -> Self {
        Self::new(
            "Priority",
            RuleEngine::new()
                .with_rule(rules::StaticPriority)
                .with_tie_breaker(rules::Fifo),
        )
    }

    /// The dispatch-order rule engine.
    pub fn rule_engine(&self) -> &RuleEngine {
        &self.rule_engine
    }
}

impl CpuScheduler for NonPreemptiveScheduler {
    fn name(&self) -> &'static str {
        self.name
    }

    fn schedule(&self, processes: &mut [ProcessRecord]) -> SchedulingResult<Timeline> {
        validate_workload(processes)?;
        processes.iter_mut().for_each(ProcessRecord::reset);

        let order = self.rule_engine.sort_indices(processes);
        let mut timeline = Timeline::with_capacity(order.len());
        let mut time: i64 = 0;

        for idx in order {
            let process = &mut processes[idx];
            time = time.max(process.arrival_time);
            process.mark_started(time);
            debug!(process = process.id, time, run = process.burst_time, "dispatched");
            timeline.push(Slice::new(process.id, time, time + process.burst_time));
            time += process.burst_time;
            process.mark_finished(time);
        }

        Ok(timeline)
    }
}
