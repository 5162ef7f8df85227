use serde::Serialize;

use super::{MatchResult, ObservedSymptoms};
use crate::knowledge::{ConditionId, KnowledgeBase, LookupError, SymptomCode};

/// Presenter-facing view of a ranked diagnosis: the top suspicion with its
/// recommendation, the full table, and any codes the catalog ignored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosisReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<PrimarySuspicion>,
    pub results: Vec<MatchResultView>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ignored_symptoms: Vec<SymptomCode>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrimarySuspicion {
    pub condition_id: ConditionId,
    pub match_pct: f64,
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResultView {
    pub condition_id: ConditionId,
    pub score: f64,
    pub match_pct: f64,
    pub matched_count: usize,
    pub total_rule_size: usize,
    pub coverage_label: String,
}

impl From<&MatchResult> for MatchResultView {
    fn from(result: &MatchResult) -> Self {
        Self {
            condition_id: result.condition_id.clone(),
            score: result.score,
            match_pct: match_pct(result.score),
            matched_count: result.matched_count,
            total_rule_size: result.total_rule_size,
            coverage_label: format!("{}/{}", result.matched_count, result.total_rule_size),
        }
    }
}

impl DiagnosisReport {
    /// Joins ranked results with the recommendation of the leading condition.
    ///
    /// A leading condition with no matched symptoms is not reported as a
    /// suspicion. Fails only when the leading condition is missing from
    /// `knowledge`, i.e. the results were ranked against another rule base.
    pub fn compose(
        results: &[MatchResult],
        knowledge: &KnowledgeBase,
        observed: &ObservedSymptoms,
    ) -> Result<Self, LookupError> {
        let primary = match results.first() {
            Some(top) if top.matched_count > 0 => {
                let recommendation = knowledge
                    .rules()
                    .recommendation_for(top.condition_id.as_str())?;
                Some(PrimarySuspicion {
                    condition_id: top.condition_id.clone(),
                    match_pct: match_pct(top.score),
                    recommendation: recommendation.to_string(),
                })
            }
            _ => None,
        };

        Ok(Self {
            primary,
            results: results.iter().map(MatchResultView::from).collect(),
            ignored_symptoms: observed.unknown_to(knowledge.catalog()),
        })
    }
}

/// Score as a percentage rounded to one decimal place.
pub fn match_pct(score: f64) -> f64 {
    (score * 1000.0).round() / 10.0
}
