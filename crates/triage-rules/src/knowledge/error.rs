use super::catalog::SymptomCode;
use super::rules::ConditionId;

/// Raised while building a catalog or rule base; a process must not start with one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid rule base: {0}")]
pub struct InvalidRuleBase(RuleBaseViolation);

impl InvalidRuleBase {
    pub fn violation(&self) -> &RuleBaseViolation {
        &self.0
    }
}

impl From<RuleBaseViolation> for InvalidRuleBase {
    fn from(value: RuleBaseViolation) -> Self {
        Self(value)
    }
}

/// The first broken invariant found during construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleBaseViolation {
    #[error("symptom code must not be empty")]
    EmptySymptomCode,
    #[error("symptom '{0}' has no description")]
    BlankDescription(SymptomCode),
    #[error("symptom '{0}' is declared more than once")]
    DuplicateSymptomCode(SymptomCode),
    #[error("condition id must not be empty")]
    EmptyConditionId,
    #[error("condition '{0}' is declared more than once")]
    DuplicateCondition(ConditionId),
    #[error("condition '{0}' has no symptoms")]
    EmptySymptomSet(ConditionId),
    #[error("condition '{condition}' lists symptom '{symptom}' more than once")]
    RepeatedSymptom {
        condition: ConditionId,
        symptom: SymptomCode,
    },
    #[error("condition '{condition}' references symptom '{symptom}' missing from the catalog")]
    UnknownSymptom {
        condition: ConditionId,
        symptom: SymptomCode,
    },
    #[error("condition '{0}' has no recommendation")]
    MissingRecommendation(ConditionId),
    #[error("condition '{0}' has more than one recommendation")]
    DuplicateRecommendation(ConditionId),
    #[error("recommendation given for undeclared condition '{0}'")]
    OrphanRecommendation(ConditionId),
    #[error("recommendation for condition '{0}' is blank")]
    BlankRecommendation(ConditionId),
}

/// Direct catalog or rule-base lookup for an id that is not present.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("unknown symptom code '{0}'")]
    UnknownSymptom(SymptomCode),
    #[error("unknown condition '{0}'")]
    UnknownCondition(ConditionId),
}
