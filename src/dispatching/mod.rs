//! Dispatching rules and rule engine for non-preemptive ordering.
//!
//! Provides ordering rules (FIFO, static priority) and a composable rule
//! engine that applies them in sequence, falling through to the next rule
//! only on ties.
//!
//! # Usage
//!
//! ```
//! use u_procsched::dispatching::{rules, RuleEngine};
//! use u_procsched::models::ProcessRecord;
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::StaticPriority)
//!     .with_tie_breaker(rules::Fifo);
//!
//! let processes = vec![
//!     ProcessRecord::new(1, 0, 4).with_priority(2),
//!     ProcessRecord::new(2, 0, 2).with_priority(1),
//! ];
//! assert_eq!(engine.sort_indices(&processes), vec![1, 0]);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

mod engine;
pub mod rules;

pub use engine::{RuleEngine, TieBreaker};

use crate::models::ProcessRecord;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = dispatched first. Integer ticks and priorities are
/// compared exactly.
pub type RuleScore = i64;

/// A dispatching rule that ranks processes.
///
/// # Score Convention
/// **Lower score = dispatched earlier.** Rules return smaller values for
/// processes that should run first.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "FIFO").
    fn name(&self) -> &'static str;

    /// Ranks a process. Lower = earlier.
    fn evaluate(&self, process: &ProcessRecord) -> RuleScore;
}
