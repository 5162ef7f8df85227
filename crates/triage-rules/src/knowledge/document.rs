use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::catalog::{SymptomCode, SymptomEntry};
use super::error::InvalidRuleBase;
use super::rules::ConditionId;
use super::KnowledgeBase;

/// Persisted form of a knowledge base. Arrays keep declaration order, which
/// the rule base relies on for ranking tie-breaks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KnowledgeDocument {
    pub symptoms: Vec<SymptomEntry>,
    pub conditions: Vec<ConditionDefinition>,
    pub recommendations: Vec<RecommendationEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConditionDefinition {
    pub id: ConditionId,
    pub symptoms: Vec<SymptomCode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecommendationEntry {
    pub condition: ConditionId,
    pub action: String,
}

impl KnowledgeDocument {
    pub fn into_knowledge_base(self) -> Result<KnowledgeBase, InvalidRuleBase> {
        KnowledgeBase::from_parts(
            self.symptoms,
            self.conditions
                .into_iter()
                .map(|definition| (definition.id, definition.symptoms)),
            self.recommendations
                .into_iter()
                .map(|entry| (entry.condition, entry.action)),
        )
    }
}

impl From<&KnowledgeBase> for KnowledgeDocument {
    fn from(knowledge: &KnowledgeBase) -> Self {
        let rules = knowledge.rules().rules();
        Self {
            symptoms: knowledge.catalog().entries().to_vec(),
            conditions: rules
                .iter()
                .map(|rule| ConditionDefinition {
                    id: rule.id.clone(),
                    symptoms: rule.symptoms.clone(),
                })
                .collect(),
            recommendations: rules
                .iter()
                .map(|rule| RecommendationEntry {
                    condition: rule.id.clone(),
                    action: rule.recommendation.clone(),
                })
                .collect(),
        }
    }
}

#[derive(Debug)]
pub enum DocumentError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Invalid(InvalidRuleBase),
}

impl std::fmt::Display for DocumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentError::Io(err) => write!(f, "failed to read knowledge document: {}", err),
            DocumentError::Json(err) => write!(f, "malformed knowledge document: {}", err),
            DocumentError::Invalid(err) => write!(f, "knowledge document rejected: {}", err),
        }
    }
}

impl std::error::Error for DocumentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DocumentError::Io(err) => Some(err),
            DocumentError::Json(err) => Some(err),
            DocumentError::Invalid(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for DocumentError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for DocumentError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<InvalidRuleBase> for DocumentError {
    fn from(err: InvalidRuleBase) -> Self {
        Self::Invalid(err)
    }
}

pub struct KnowledgeLoader;

impl KnowledgeLoader {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<KnowledgeBase, DocumentError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let knowledge = Self::from_reader(file)?;
        info!(
            path = %path.display(),
            symptoms = knowledge.catalog().len(),
            conditions = knowledge.rules().len(),
            "loaded knowledge document"
        );
        Ok(knowledge)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<KnowledgeBase, DocumentError> {
        let document: KnowledgeDocument = serde_json::from_reader(reader)?;
        Ok(document.into_knowledge_base()?)
    }
}
