//! Language - An in-world tongue
//!
//! Opaque identifier compared case-insensitively. The spelling it was
//! created with is kept for display.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use crate::domain::errors::DomainError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Language(String);

impl Language {
    /// Create a language from its name. Surrounding whitespace is trimmed;
    /// blank names are rejected.
    pub fn new(name: impl AsRef<str>) -> Result<Self, DomainError> {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidLanguage(name.as_ref().to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn key(&self) -> String {
        self.0.to_lowercase()
    }
}

impl PartialEq for Language {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Language {}

impl Hash for Language {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Language {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Language {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Language> for String {
    fn from(language: Language) -> Self {
        language.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_case_insensitive_equality() {
        let a = Language::new("French").unwrap();
        let b = Language::new("fRENCH").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "French");

        let set: HashSet<Language> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_blank_rejected() {
        assert!(matches!(
            Language::new("   "),
            Err(DomainError::InvalidLanguage(_))
        ));
        assert_eq!(Language::new(" Spanish ").unwrap().as_str(), "Spanish");
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Language = serde_json::from_str("\"Italian\"").unwrap();
        assert_eq!(ok.as_str(), "Italian");
        assert!(serde_json::from_str::<Language>("\"\"").is_err());
    }
}
