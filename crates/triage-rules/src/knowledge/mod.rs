mod catalog;
mod document;
mod error;
mod rules;
mod standard;

pub use catalog::{SymptomCatalog, SymptomCode, SymptomEntry};
pub use document::{
    ConditionDefinition, DocumentError, KnowledgeDocument, KnowledgeLoader, RecommendationEntry,
};
pub use error::{InvalidRuleBase, LookupError, RuleBaseViolation};
pub use rules::{ConditionId, ConditionRule, RuleBase};

use crate::diagnosis::DiagnosisEngine;
use std::sync::Arc;

/// Catalog and rule base validated together. Immutable once built; share it
/// behind an `Arc` and swap whole snapshots to change it.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    catalog: SymptomCatalog,
    rules: Arc<RuleBase>,
}

impl KnowledgeBase {
    pub fn from_parts<S, C, R>(
        symptoms: S,
        conditions: C,
        recommendations: R,
    ) -> Result<Self, InvalidRuleBase>
    where
        S: IntoIterator<Item = SymptomEntry>,
        C: IntoIterator<Item = (ConditionId, Vec<SymptomCode>)>,
        R: IntoIterator<Item = (ConditionId, String)>,
    {
        let catalog = SymptomCatalog::new(symptoms)?;
        let rules = RuleBase::new(&catalog, conditions, recommendations)?;
        Ok(Self {
            catalog,
            rules: Arc::new(rules),
        })
    }

    /// The bundled toddler infectious-disease knowledge.
    pub fn standard() -> Self {
        let symptoms = standard::symptoms()
            .into_iter()
            .map(|(code, description)| SymptomEntry {
                code: SymptomCode::from(code),
                description: description.to_string(),
            });
        let conditions = standard::conditions().into_iter().map(|(id, symptoms)| {
            (
                ConditionId::from(id),
                symptoms.into_iter().map(SymptomCode::from).collect(),
            )
        });
        let recommendations = standard::recommendations()
            .into_iter()
            .map(|(id, action)| (ConditionId::from(id), action.to_string()));

        // Bundled tables are validated by the standard_knowledge tests.
        Self::from_parts(symptoms, conditions, recommendations)
            .unwrap_or_else(|err| panic!("bundled knowledge is invalid: {err}"))
    }

    pub fn catalog(&self) -> &SymptomCatalog {
        &self.catalog
    }

    pub fn rules(&self) -> &Arc<RuleBase> {
        &self.rules
    }

    pub fn engine(&self) -> DiagnosisEngine {
        DiagnosisEngine::new(Arc::clone(&self.rules))
    }
}
