//! Simulation runner.
//!
//! Runs each configured algorithm as an independent pass over its own reset
//! copy of one workload, then computes metrics for every pass.
//!
//! # Usage
//!
//! ```
//! use u_procsched::models::{ProcessRecord, Workload};
//! use u_procsched::simulation::{Algorithm, Simulation, SimulationConfig};
//!
//! let workload = Workload::new(vec![
//!     ProcessRecord::new(1, 0, 5).with_priority(2),
//!     ProcessRecord::new(2, 2, 3).with_priority(1),
//! ]);
//! let reports = Simulation::new(SimulationConfig::default()).run(&workload).unwrap();
//!
//! assert_eq!(reports.len(), 3);
//! assert_eq!(reports[1].algorithm, Algorithm::Fcfs);
//! assert!((reports[1].metrics.avg_waiting_time - 1.5).abs() < 1e-10);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{info, info_span};

use crate::error::{SchedulingError, SchedulingResult};
use crate::models::{ProcessRecord, Timeline, Workload};
use crate::scheduler::{
    CpuScheduler, NonPreemptiveScheduler, RoundRobinScheduler, ScheduleMetrics,
};
use crate::validation::validate_quantum;
use crate::workload::WorkloadConfig;

/// Scheduling algorithm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Preemptive Round Robin with the configured quantum.
    RoundRobin,
    /// First-Come-First-Served.
    Fcfs,
    /// Non-preemptive static priority.
    Priority,
}

impl Algorithm {
    /// Every algorithm, in the default run order.
    pub const ALL: [Algorithm; 3] = [
        Algorithm::RoundRobin,
        Algorithm::Fcfs,
        Algorithm::Priority,
    ];

    /// Builds the scheduler for this algorithm.
    pub fn scheduler(self, time_quantum: i64) -> Box<dyn CpuScheduler> {
        match self {
            Algorithm::RoundRobin => Box::new(RoundRobinScheduler::new(time_quantum)),
            Algorithm::Fcfs => Box::new(NonPreemptiveScheduler::fcfs()),
            Algorithm::Priority => Box::new(NonPreemptiveScheduler::priority()),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::RoundRobin => write!(f, "Round Robin"),
            Algorithm::Fcfs => write!(f, "FCFS"),
            Algorithm::Priority => write!(f, "Priority"),
        }
    }
}

/// Simulation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Round Robin quantum in ticks.
    pub time_quantum: i64,
    /// Algorithms to run, in order.
    pub algorithms: Vec<Algorithm>,
    /// Random workload shape (used by the CLI).
    pub workload: WorkloadConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            time_quantum: 4,
            algorithms: Algorithm::ALL.to_vec(),
            workload: WorkloadConfig::default(),
        }
    }
}

impl SimulationConfig {
    /// Parses a JSON config. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> SchedulingResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| SchedulingError::InvalidConfiguration(format!("bad config JSON: {e}")))
    }

    /// Sets the Round Robin quantum.
    pub fn with_time_quantum(mut self, time_quantum: i64) -> Self {
        self.time_quantum = time_quantum;
        self
    }

    /// Replaces the algorithm list.
    pub fn with_algorithms(mut self, algorithms: Vec<Algorithm>) -> Self {
        self.algorithms = algorithms;
        self
    }

    /// Checks the quantum (when Round Robin is selected), the algorithm
    /// list and the workload shape.
    pub fn validate(&self) -> SchedulingResult<()> {
        if self.algorithms.is_empty() {
            return Err(SchedulingError::InvalidConfiguration(
                "at least one algorithm must be selected".into(),
            ));
        }
        if self.algorithms.contains(&Algorithm::RoundRobin) {
            validate_quantum(self.time_quantum)?;
        }
        self.workload.validate()
    }
}

/// Outcome of one algorithm pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Algorithm that produced this report.
    pub algorithm: Algorithm,
    /// Quantum used, for Round Robin runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_quantum: Option<i64>,
    /// Scheduled records, in workload order.
    pub processes: Vec<ProcessRecord>,
    /// CPU slices in dispatch order.
    pub timeline: Timeline,
    /// Aggregate metrics.
    pub metrics: ScheduleMetrics,
}

impl SimulationReport {
    /// The report with the lowest mean waiting time. First wins on ties.
    pub fn best_by_waiting(reports: &[SimulationReport]) -> Option<&SimulationReport> {
        reports.iter().reduce(|best, r| {
            if r.metrics.avg_waiting_time < best.metrics.avg_waiting_time {
                r
            } else {
                best
            }
        })
    }
}

/// Runs configured algorithms over a workload.
#[derive(Debug, Clone, Default)]
pub struct Simulation {
    config: SimulationConfig,
}

impl Simulation {
    /// Creates a simulation.
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// The simulation settings.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Runs every configured algorithm on its own reset copy of `workload`.
    ///
    /// # Errors
    /// `EmptyWorkload` for an empty workload; otherwise the first scheduler
    /// or metrics error.
    pub fn run(&self, workload: &Workload) -> SchedulingResult<Vec<SimulationReport>> {
        if workload.is_empty() {
            return Err(SchedulingError::EmptyWorkload);
        }
        self.config
            .algorithms
            .iter()
            .map(|&algorithm| self.run_one(algorithm, workload))
            .collect()
    }

    /// Runs a single algorithm on a reset copy of `workload`.
    pub fn run_one(
        &self,
        algorithm: Algorithm,
        workload: &Workload,
    ) -> SchedulingResult<SimulationReport> {
        let _span = info_span!("simulate", %algorithm, processes = workload.len()).entered();

        let scheduler = algorithm.scheduler(self.config.time_quantum);
        let mut processes = workload.fresh_copy();
        let timeline = scheduler.schedule(&mut processes)?;
        let metrics = ScheduleMetrics::calculate(&processes, &timeline)?;

        info!(
            avg_waiting = metrics.avg_waiting_time,
            avg_turnaround = metrics.avg_turnaround_time,
            makespan = metrics.makespan,
            "run complete"
        );

        Ok(SimulationReport {
            algorithm,
            time_quantum: scheduler.time_quantum(),
            processes,
            timeline,
            metrics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_workload() -> Workload {
        Workload::new(vec![
            ProcessRecord::new(1, 0, 6).with_priority(3),
            ProcessRecord::new(2, 1, 4).with_priority(1),
            ProcessRecord::new(3, 2, 2).with_priority(2),
        ])
    }

    #[test]
    fn test_runs_all_algorithms_in_order() {
        let reports = Simulation::default().run(&sample_workload()).unwrap();
        let algos: Vec<Algorithm> = reports.iter().map(|r| r.algorithm).collect();
        assert_eq!(algos, Algorithm::ALL.to_vec());
        assert_eq!(reports[0].time_quantum, Some(4));
        assert_eq!(reports[1].time_quantum, None);
    }

    #[test]
    fn test_workload_is_not_mutated() {
        let workload = sample_workload();
        let before = workload.clone();
        Simulation::default().run(&workload).unwrap();
        assert_eq!(workload, before);
    }

    #[test]
    fn test_runs_are_independent_of_order() {
        let workload = sample_workload();
        let forward = Simulation::default().run(&workload).unwrap();

        let mut reversed_algos = Algorithm::ALL.to_vec();
        reversed_algos.reverse();
        let backward = Simulation::new(SimulationConfig::default().with_algorithms(reversed_algos))
            .run(&workload)
            .unwrap();

        for report in &forward {
            let twin = backward
                .iter()
                .find(|r| r.algorithm == report.algorithm)
                .unwrap();
            assert_eq!(report, twin);
        }
    }

    #[test]
    fn test_expected_metrics() {
        let reports = Simulation::default().run(&sample_workload()).unwrap();

        // FCFS: P1 [0,6) P2 [6,10) P3 [10,12) → waits 0, 5, 8
        let fcfs = &reports[1];
        assert!((fcfs.metrics.avg_waiting_time - 13.0 / 3.0).abs() < 1e-10);

        // Priority: static order P2, P3, P1, so the CPU idles until P2 arrives.
        // P2 [1,5) P3 [5,7) P1 [7,13)
        let prio = &reports[2];
        assert_eq!(prio.processes[1].start_time, Some(1));
        assert_eq!(prio.processes[2].start_time, Some(5));
        assert_eq!(prio.processes[0].finish_time, Some(13));
    }

    #[test]
    fn test_best_by_waiting() {
        let reports = Simulation::default().run(&sample_workload()).unwrap();
        let best = SimulationReport::best_by_waiting(&reports).unwrap();
        let min = reports
            .iter()
            .map(|r| r.metrics.avg_waiting_time)
            .fold(f64::INFINITY, f64::min);
        assert!((best.metrics.avg_waiting_time - min).abs() < 1e-10);
        assert!(SimulationReport::best_by_waiting(&[]).is_none());
    }

    #[test]
    fn test_empty_workload() {
        let err = Simulation::default().run(&Workload::default()).unwrap_err();
        assert_eq!(err, SchedulingError::EmptyWorkload);
    }

    #[test]
    fn test_invalid_quantum_surfaces() {
        let sim = Simulation::new(SimulationConfig::default().with_time_quantum(0));
        let err = sim.run(&sample_workload()).unwrap_err();
        assert_eq!(err, SchedulingError::InvalidQuantum(0));
        assert!(sim.config().validate().is_err());
    }

    #[test]
    fn test_config_validate() {
        assert!(SimulationConfig::default().validate().is_ok());
        // Quantum is irrelevant without Round Robin
        let no_rr = SimulationConfig::default()
            .with_time_quantum(0)
            .with_algorithms(vec![Algorithm::Fcfs]);
        assert!(no_rr.validate().is_ok());
        let none = SimulationConfig::default().with_algorithms(vec![]);
        assert!(matches!(
            none.validate(),
            Err(SchedulingError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_config_from_json() {
        let config = SimulationConfig::from_json_str(
            r#"{"time_quantum": 2, "algorithms": ["fcfs", "round_robin"]}"#,
        )
        .unwrap();
        assert_eq!(config.time_quantum, 2);
        assert_eq!(config.algorithms, vec![Algorithm::Fcfs, Algorithm::RoundRobin]);
        assert_eq!(config.workload, WorkloadConfig::default());

        assert!(SimulationConfig::from_json_str("{not json").is_err());
    }
}
