//! Rule engine for multi-criteria dispatching.
//!
//! Composes dispatching rules in sequence with a configurable final
//! tie-breaking strategy.

use std::cmp::Ordering;
use std::sync::Arc;

use super::DispatchingRule;
use crate::models::ProcessRecord;

/// How ties are broken after all rules are exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreaker {
    /// Keep input order (stable sort).
    #[default]
    InputOrder,
    /// Ascending process ID.
    ById,
}

/// A composable rule engine for process ordering.
///
/// Rules are applied in the order they were added; a later rule only
/// decides between processes every earlier rule scored equal.
///
/// # Example
/// ```
/// use u_procsched::dispatching::{rules, RuleEngine, TieBreaker};
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::Fifo)
///     .with_final_tie_breaker(TieBreaker::ById);
/// assert_eq!(engine.rule_names(), vec!["FIFO"]);
/// ```
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
    tie_breaker: TieBreaker,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            tie_breaker: TieBreaker::InputOrder,
        }
    }

    /// Adds a primary rule.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a rule consulted only when every earlier rule ties.
    pub fn with_tie_breaker<R: DispatchingRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Sets the final tie-breaking strategy.
    pub fn with_final_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Sorts processes by rule evaluation.
    ///
    /// Returns indices into `processes`; the slice itself is not reordered.
    pub fn sort_indices(&self, processes: &[ProcessRecord]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..processes.len()).collect();
        // `sort_by` is stable, so `InputOrder` falls out of `Ordering::Equal`.
        indices.sort_by(|&a, &b| self.compare(&processes[a], &processes[b]));
        indices
    }

    fn compare(&self, a: &ProcessRecord, b: &ProcessRecord) -> Ordering {
        for rule in &self.rules {
            match rule.evaluate(a).cmp(&rule.evaluate(b)) {
                Ordering::Equal => continue,
                decided => return decided,
            }
        }

        match self.tie_breaker {
            TieBreaker::InputOrder => Ordering::Equal,
            TieBreaker::ById => a.id.cmp(&b.id),
        }
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .field("tie_breaker", &self.tie_breaker)
            .finish()
    }
}
