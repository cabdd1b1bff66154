//! Built-in dispatching rules.
//!
//! - **FIFO**: earliest arrival first
//! - **PRIORITY**: lowest priority value first
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.

use super::{DispatchingRule, RuleScore};
use crate::models::ProcessRecord;

/// First In First Out.
///
/// Orders by arrival time. The ordering behind first-come-first-served.
#[derive(Debug, Clone, Copy)]
pub struct Fifo;

impl DispatchingRule for Fifo {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn evaluate(&self, process: &ProcessRecord) -> RuleScore {
        process.arrival_time
    }
}

/// Static priority.
///
/// Orders by priority value, lower value = more urgent. The value is read
/// once; nothing ages or boosts it.
#[derive(Debug, Clone, Copy)]
pub struct StaticPriority;

impl DispatchingRule for StaticPriority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, process: &ProcessRecord) -> RuleScore {
        i64::from(process.priority)
    }
}
