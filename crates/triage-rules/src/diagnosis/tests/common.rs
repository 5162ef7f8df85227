use crate::diagnosis::{DiagnosisEngine, MatchResult, ObservedSymptoms};
use crate::knowledge::{ConditionId, KnowledgeBase, SymptomCode, SymptomEntry};

pub(super) const SYMPTOMS: [&str; 6] = ["a", "b", "c", "d", "e", "f"];

pub(super) fn knowledge(conditions: &[(&str, &[&str])]) -> KnowledgeBase {
    let symptoms = SYMPTOMS.iter().map(|code| SymptomEntry {
        code: SymptomCode::from(*code),
        description: format!("symptom {code}"),
    });
    let rules = conditions.iter().map(|(id, symptoms)| {
        (
            ConditionId::from(*id),
            symptoms.iter().map(|code| SymptomCode::from(*code)).collect(),
        )
    });
    let recommendations = conditions
        .iter()
        .map(|(id, _)| (ConditionId::from(*id), format!("treat {id}")));

    KnowledgeBase::from_parts(symptoms, rules, recommendations).expect("fixture knowledge is valid")
}

/// `X = {a, b}` declared before `Y = {a}`.
pub(super) fn scenario_knowledge() -> KnowledgeBase {
    knowledge(&[("X", &["a", "b"]), ("Y", &["a"])])
}

pub(super) fn engine(conditions: &[(&str, &[&str])]) -> DiagnosisEngine {
    knowledge(conditions).engine()
}

pub(super) fn observed(codes: &[&str]) -> ObservedSymptoms {
    codes.iter().copied().collect()
}

pub(super) fn ranking(results: &[MatchResult]) -> Vec<(&str, f64, usize, usize)> {
    results
        .iter()
        .map(|result| {
            (
                result.condition_id.as_str(),
                result.score,
                result.matched_count,
                result.total_rule_size,
            )
        })
        .collect()
}
