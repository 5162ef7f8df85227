use std::borrow::Borrow;
use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use super::catalog::{SymptomCatalog, SymptomCode};
use super::error::{InvalidRuleBase, LookupError, RuleBaseViolation};

/// Identifier of a named disease or syndrome, e.g. `Campak (P01)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConditionId(pub String);

impl ConditionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConditionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ConditionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ConditionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ConditionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A condition together with its defining symptoms and recommended action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConditionRule {
    pub id: ConditionId,
    pub symptoms: Vec<SymptomCode>,
    pub recommendation: String,
}

/// Ordered rule base. Iteration order is declaration order and doubles as the
/// ranking tie-break, so rules are held in a `Vec` with a side index.
#[derive(Debug, Clone, Default)]
pub struct RuleBase {
    rules: Vec<ConditionRule>,
    index: HashMap<ConditionId, usize>,
}

impl RuleBase {
    /// Builds the rule base, checking every condition against `catalog`.
    ///
    /// Each declared condition needs a non-empty, duplicate-free symptom list
    /// drawn from the catalog and exactly one non-blank recommendation.
    /// Recommendations for undeclared conditions are rejected as well.
    pub fn new<C, R>(
        catalog: &SymptomCatalog,
        conditions: C,
        recommendations: R,
    ) -> Result<Self, InvalidRuleBase>
    where
        C: IntoIterator<Item = (ConditionId, Vec<SymptomCode>)>,
        R: IntoIterator<Item = (ConditionId, String)>,
    {
        let mut actions: HashMap<ConditionId, String> = HashMap::new();
        for (condition, action) in recommendations {
            if action.trim().is_empty() {
                return Err(RuleBaseViolation::BlankRecommendation(condition).into());
            }
            if actions.contains_key(&condition) {
                return Err(RuleBaseViolation::DuplicateRecommendation(condition).into());
            }
            actions.insert(condition, action);
        }

        let mut rule_base = Self::default();
        for (id, symptoms) in conditions {
            if id.as_str().trim().is_empty() {
                return Err(RuleBaseViolation::EmptyConditionId.into());
            }
            if rule_base.index.contains_key(&id) {
                return Err(RuleBaseViolation::DuplicateCondition(id).into());
            }
            if symptoms.is_empty() {
                return Err(RuleBaseViolation::EmptySymptomSet(id).into());
            }

            let mut seen = HashSet::with_capacity(symptoms.len());
            for symptom in &symptoms {
                if !catalog.contains(symptom.as_str()) {
                    return Err(RuleBaseViolation::UnknownSymptom {
                        condition: id,
                        symptom: symptom.clone(),
                    }
                    .into());
                }
                if !seen.insert(symptom) {
                    return Err(RuleBaseViolation::RepeatedSymptom {
                        condition: id,
                        symptom: symptom.clone(),
                    }
                    .into());
                }
            }

            let Some(recommendation) = actions.remove(&id) else {
                return Err(RuleBaseViolation::MissingRecommendation(id).into());
            };

            rule_base.index.insert(id.clone(), rule_base.rules.len());
            rule_base.rules.push(ConditionRule {
                id,
                symptoms,
                recommendation,
            });
        }

        if let Some(orphan) = actions.into_keys().min() {
            return Err(RuleBaseViolation::OrphanRecommendation(orphan).into());
        }

        Ok(rule_base)
    }

    pub fn rule(&self, condition: &str) -> Result<&ConditionRule, LookupError> {
        self.index
            .get(condition)
            .map(|position| &self.rules[*position])
            .ok_or_else(|| LookupError::UnknownCondition(ConditionId::from(condition)))
    }

    pub fn symptoms_for(&self, condition: &str) -> Result<&[SymptomCode], LookupError> {
        self.rule(condition).map(|rule| rule.symptoms.as_slice())
    }

    pub fn recommendation_for(&self, condition: &str) -> Result<&str, LookupError> {
        self.rule(condition).map(|rule| rule.recommendation.as_str())
    }

    pub fn all_conditions(&self) -> impl Iterator<Item = &ConditionId> + '_ {
        self.rules.iter().map(|rule| &rule.id)
    }

    pub fn rules(&self) -> &[ConditionRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
