//! Process scheduling domain models.
//!
//! Provides the data types shared by every scheduling algorithm: the
//! per-process record, the caller-owned workload, and the execution
//! timeline a pass produces.
//!
//! # Lifecycle
//!
//! | Stage | Owner | State |
//! |-------|-------|-------|
//! | Generated | `WorkloadSource` | arrival / burst / priority only |
//! | Reset copy | `Workload::fresh_copy` | remaining = burst, timings cleared |
//! | Scheduled | `CpuScheduler` | start / finish / waiting / turnaround set |
//! | Reported | `Reporter` | read-only |

mod process;
mod timeline;
mod workload;

pub use process::{ProcessId, ProcessRecord};
pub use timeline::{Slice, Timeline};
pub use workload::Workload;
