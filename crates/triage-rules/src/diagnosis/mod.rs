//! Coverage scoring and ranking of conditions against observed symptoms.
//!
//! The engine is total: every call returns one [`MatchResult`] per condition in
//! the rule base, ranked by score with ties kept in declaration order. Codes the
//! catalog does not know contribute to no condition and are otherwise ignored.

mod observed;
pub mod report;

#[cfg(test)]
mod tests;

pub use observed::ObservedSymptoms;
pub use report::{DiagnosisReport, MatchResultView, PrimarySuspicion};

use crate::knowledge::{ConditionId, ConditionRule, RuleBase};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Stateless scorer over an injected rule base.
#[derive(Debug, Clone)]
pub struct DiagnosisEngine {
    rules: Arc<RuleBase>,
}

impl DiagnosisEngine {
    pub fn new(rules: Arc<RuleBase>) -> Self {
        Self { rules }
    }

    pub fn diagnose(&self, observed: &ObservedSymptoms) -> Vec<MatchResult> {
        let mut results: Vec<MatchResult> = self
            .rules
            .rules()
            .iter()
            .map(|rule| MatchResult::for_rule(rule, observed))
            .collect();

        // `sort_by` is stable, which keeps equal scores in rule-base order.
        results.sort_by(|left, right| right.score.total_cmp(&left.score));

        debug!(
            observed = observed.len(),
            conditions = results.len(),
            top = results.first().map(|result| result.condition_id.as_str()),
            "diagnosis ranked"
        );

        results
    }
}

/// Coverage of one condition by one observed set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub condition_id: ConditionId,
    pub score: f64,
    pub matched_count: usize,
    pub total_rule_size: usize,
}

impl MatchResult {
    fn for_rule(rule: &ConditionRule, observed: &ObservedSymptoms) -> Self {
        let matched_count = rule
            .symptoms
            .iter()
            .filter(|symptom| observed.contains(symptom.as_str()))
            .count();
        let total_rule_size = rule.symptoms.len();

        Self {
            condition_id: rule.id.clone(),
            score: matched_count as f64 / total_rule_size as f64,
            matched_count,
            total_rule_size,
        }
    }
}
