use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::{InvalidRuleBase, LookupError, RuleBaseViolation};

/// Identifier for an observable sign, e.g. `G01`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymptomCode(pub String);

impl SymptomCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SymptomCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for SymptomCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SymptomCode {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for SymptomCode {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// One catalog row: a symptom code and the text shown to the person selecting it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomEntry {
    pub code: SymptomCode,
    pub description: String,
}

/// The universe of valid symptom codes, kept in declaration order.
#[derive(Debug, Clone, Default)]
pub struct SymptomCatalog {
    entries: Vec<SymptomEntry>,
    index: HashMap<SymptomCode, usize>,
}

impl SymptomCatalog {
    pub fn new<I>(entries: I) -> Result<Self, InvalidRuleBase>
    where
        I: IntoIterator<Item = SymptomEntry>,
    {
        let mut catalog = Self::default();

        for entry in entries {
            if entry.code.as_str().trim().is_empty() {
                return Err(RuleBaseViolation::EmptySymptomCode.into());
            }
            if entry.description.trim().is_empty() {
                return Err(RuleBaseViolation::BlankDescription(entry.code).into());
            }
            if catalog.index.contains_key(&entry.code) {
                return Err(RuleBaseViolation::DuplicateSymptomCode(entry.code).into());
            }

            catalog
                .index
                .insert(entry.code.clone(), catalog.entries.len());
            catalog.entries.push(entry);
        }

        Ok(catalog)
    }

    pub fn lookup(&self, code: &str) -> Result<&str, LookupError> {
        self.index
            .get(code)
            .map(|position| self.entries[*position].description.as_str())
            .ok_or_else(|| LookupError::UnknownSymptom(SymptomCode::from(code)))
    }

    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    pub fn entries(&self) -> &[SymptomEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(code: &str, description: &str) -> SymptomEntry {
        SymptomEntry {
            code: SymptomCode::from(code),
            description: description.to_string(),
        }
    }

    #[test]
    fn lookup_returns_description_for_known_code() {
        let catalog = SymptomCatalog::new(vec![entry("G01", "Fever"), entry("G02", "Cough")])
            .expect("catalog builds");

        assert_eq!(catalog.lookup("G02"), Ok("Cough"));
        assert!(catalog.contains("G01"));
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn lookup_reports_unknown_code() {
        let catalog = SymptomCatalog::new(vec![entry("G01", "Fever")]).expect("catalog builds");

        assert_eq!(
            catalog.lookup("Z99"),
            Err(LookupError::UnknownSymptom(SymptomCode::from("Z99")))
        );
    }

    #[test]
    fn entries_keep_declaration_order() {
        let catalog = SymptomCatalog::new(vec![
            entry("G10", "Headache"),
            entry("G02", "Cough"),
            entry("G07", "Rash"),
        ])
        .expect("catalog builds");

        let codes: Vec<&str> = catalog
            .entries()
            .iter()
            .map(|entry| entry.code.as_str())
            .collect();
        assert_eq!(codes, vec!["G10", "G02", "G07"]);
    }

    #[test]
    fn rejects_duplicate_codes() {
        let err = SymptomCatalog::new(vec![entry("G01", "Fever"), entry("G01", "High fever")])
            .expect_err("duplicate rejected");

        assert_eq!(
            err.violation(),
            &RuleBaseViolation::DuplicateSymptomCode(SymptomCode::from("G01"))
        );
    }

    #[test]
    fn rejects_blank_codes_and_descriptions() {
        let err = SymptomCatalog::new(vec![entry("  ", "Fever")]).expect_err("blank code");
        assert_eq!(err.violation(), &RuleBaseViolation::EmptySymptomCode);

        let err = SymptomCatalog::new(vec![entry("G01", "")]).expect_err("blank description");
        assert_eq!(
            err.violation(),
            &RuleBaseViolation::BlankDescription(SymptomCode::from("G01"))
        );
    }
}
