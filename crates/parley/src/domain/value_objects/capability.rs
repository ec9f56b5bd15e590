//! Capability tokens - Merits and exemptions held by an actor
//!
//! Tokens compare on a normalized key: lowercase with all whitespace
//! removed, so "Universal Language" and "universallanguage" are the same
//! token.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Merit granting comprehension of every language
pub const UNIVERSAL_LANGUAGE: &str = "Universal Language";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct CapabilityToken(String);

impl CapabilityToken {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn universal_language() -> Self {
        Self::new(UNIVERSAL_LANGUAGE)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn key(&self) -> String {
        self.0
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect()
    }
}

impl PartialEq for CapabilityToken {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for CapabilityToken {}

impl Hash for CapabilityToken {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl std::fmt::Display for CapabilityToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for CapabilityToken {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for CapabilityToken {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<CapabilityToken> for String {
    fn from(token: CapabilityToken) -> Self {
        token.0
    }
}

/// The tokens an actor holds. Insertion order is kept; duplicates (by
/// normalized key) are dropped.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "Vec<CapabilityToken>", into = "Vec<CapabilityToken>")]
pub struct CapabilitySet(Vec<CapabilityToken>);

impl CapabilitySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a token; returns false if an equivalent token was already held
    pub fn insert(&mut self, token: impl Into<CapabilityToken>) -> bool {
        let token = token.into();
        if self.contains(&token) {
            return false;
        }
        self.0.push(token);
        true
    }

    pub fn contains(&self, token: &CapabilityToken) -> bool {
        self.0.iter().any(|held| held == token)
    }

    pub fn contains_any<'a>(&self, tokens: impl IntoIterator<Item = &'a CapabilityToken>) -> bool {
        tokens.into_iter().any(|t| self.contains(t))
    }

    pub fn iter(&self) -> impl Iterator<Item = &CapabilityToken> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<CapabilityToken>> for CapabilitySet {
    fn from(tokens: Vec<CapabilityToken>) -> Self {
        tokens.into_iter().collect()
    }
}

impl From<CapabilitySet> for Vec<CapabilityToken> {
    fn from(set: CapabilitySet) -> Self {
        set.0
    }
}

impl<T: Into<CapabilityToken>> FromIterator<T> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        for token in iter {
            set.insert(token);
        }
        set
    }
}
