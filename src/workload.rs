//! Workload generation.
//!
//! Schedulers never draw random numbers themselves: they accept any
//! finite collection of process records. A [`WorkloadSource`] produces that
//! collection; [`RandomWorkload`] is the stock source, uniform over
//! configurable ranges and seedable for reproducible runs.
//!
//! # Usage
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use u_procsched::workload::{RandomWorkload, WorkloadConfig, WorkloadSource};
//!
//! let mut source = RandomWorkload::new(WorkloadConfig::default(), StdRng::seed_from_u64(7));
//! let workload = source.generate().unwrap();
//! assert_eq!(workload.len(), 5);
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::{SchedulingError, SchedulingResult};
use crate::models::{ProcessRecord, Workload};

/// Produces a finite workload of process descriptors.
pub trait WorkloadSource {
    /// Generates a workload. IDs are positive and unique.
    fn generate(&mut self) -> SchedulingResult<Workload>;
}

/// Inclusive `[min, max]` bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds<T> {
    pub min: T,
    pub max: T,
}

impl<T> Bounds<T> {
    /// Creates bounds. Not checked until the config is validated.
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

/// Shape of a randomly generated workload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkloadConfig {
    /// Number of processes.
    pub process_count: usize,
    /// Arrival tick range.
    pub arrival: Bounds<i64>,
    /// Burst length range.
    pub burst: Bounds<i64>,
    /// Priority value range.
    pub priority: Bounds<i32>,
    /// RNG seed. `None` = seeded from the OS.
    pub seed: Option<u64>,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            process_count: 5,
            arrival: Bounds::new(0, 10),
            burst: Bounds::new(1, 10),
            priority: Bounds::new(1, 5),
            seed: None,
        }
    }
}

impl WorkloadConfig {
    /// Sets the process count.
    pub fn with_process_count(mut self, process_count: usize) -> Self {
        self.process_count = process_count;
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks that every range is non-empty and yields valid records.
    pub fn validate(&self) -> SchedulingResult<()> {
        let invalid = |msg: String| Err(SchedulingError::InvalidConfiguration(msg));

        if self.process_count == 0 {
            return invalid("process_count must be at least 1".into());
        }
        if u32::try_from(self.process_count).is_err() {
            return invalid(format!("process_count {} is too large", self.process_count));
        }
        if self.arrival.min < 0 || self.arrival.min > self.arrival.max {
            return invalid(format!(
                "arrival range [{}, {}] must satisfy 0 <= min <= max",
                self.arrival.min, self.arrival.max
            ));
        }
        if self.burst.min <= 0 || self.burst.min > self.burst.max {
            return invalid(format!(
                "burst range [{}, {}] must satisfy 0 < min <= max",
                self.burst.min, self.burst.max
            ));
        }
        if self.priority.min > self.priority.max {
            return invalid(format!(
                "priority range [{}, {}] must satisfy min <= max",
                self.priority.min, self.priority.max
            ));
        }
        Ok(())
    }
}

/// Uniform random workload source.
#[derive(Debug, Clone)]
pub struct RandomWorkload<R: Rng = StdRng> {
    config: WorkloadConfig,
    rng: R,
}

impl<R: Rng> RandomWorkload<R> {
    /// Creates a source drawing from `rng`. `config.seed` is ignored.
    pub fn new(config: WorkloadConfig, rng: R) -> Self {
        Self { config, rng }
    }
}

impl RandomWorkload<StdRng> {
    /// Creates a source seeded from `config.seed`, or from the OS if unset.
    pub fn from_config(config: WorkloadConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::new(config, rng)
    }
}

impl<R: Rng> WorkloadSource for RandomWorkload<R> {
    fn generate(&mut self) -> SchedulingResult<Workload> {
        self.config.validate()?;

        let cfg = &self.config;
        let processes = (1..=cfg.process_count as u32)
            .map(|id| {
                let arrival = self.rng.random_range(cfg.arrival.min..=cfg.arrival.max);
                let burst = self.rng.random_range(cfg.burst.min..=cfg.burst.max);
                let priority = self.rng.random_range(cfg.priority.min..=cfg.priority.max);
                ProcessRecord::new(id, arrival, burst).with_priority(priority)
            })
            .collect();

        Ok(Workload::new(processes))
    }
}
