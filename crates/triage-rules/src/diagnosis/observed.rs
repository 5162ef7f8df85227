use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::knowledge::{SymptomCatalog, SymptomCode};

/// Symptom codes supplied by a caller for one diagnosis. Duplicates collapse;
/// codes need not exist in any catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObservedSymptoms(BTreeSet<SymptomCode>);

impl ObservedSymptoms {
    pub fn insert(&mut self, code: impl Into<SymptomCode>) -> bool {
        self.0.insert(code.into())
    }

    pub fn contains(&self, code: &str) -> bool {
        self.0.contains(code)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SymptomCode> + '_ {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Codes the catalog does not define, in sorted order.
    pub fn unknown_to(&self, catalog: &SymptomCatalog) -> Vec<SymptomCode> {
        self.0
            .iter()
            .filter(|code| !catalog.contains(code.as_str()))
            .cloned()
            .collect()
    }
}

impl<T: Into<SymptomCode>> FromIterator<T> for ObservedSymptoms {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
