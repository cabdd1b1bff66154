//! CPU process scheduling simulator.
//!
//! Simulates single-core dispatching of a synthetic process workload under
//! Round Robin, First-Come-First-Served and static-Priority scheduling, and
//! reports per-process timings plus workload-wide averages. Time is an
//! integer simulated clock; nothing here touches real threads or a kernel.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ProcessRecord`, `Workload`, `Timeline`
//! - **`validation`**: Input integrity checks (IDs, arrival, burst, quantum)
//! - **`dispatching`**: Ordering rules and the `RuleEngine`
//! - **`scheduler`**: `CpuScheduler` implementations and `ScheduleMetrics`
//! - **`workload`**: `WorkloadSource` trait and seeded `RandomWorkload`
//! - **`simulation`**: Runs algorithms on independent reset copies
//! - **`report`**: Text and JSON reporters
//!
//! # Data Flow
//!
//! `WorkloadSource` → `Simulation` (one `CpuScheduler` per reset copy) →
//! `ScheduleMetrics` → `Reporter`
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod dispatching;
pub mod error;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod simulation;
pub mod validation;
pub mod workload;

pub use error::{SchedulingError, SchedulingResult};
