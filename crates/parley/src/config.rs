//! Speech configuration
//!
//! Tunables shared by the parser, renderer and capability resolver.
//! Hosts usually load this from their own config file; every field has a
//! default so partial files work.

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;
use crate::domain::value_objects::CapabilityToken;

/// A formatting escape typed by players and the token the display layer
/// understands in its place
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EscapeRule {
    pub token: String,
    pub replacement: String,
}

impl EscapeRule {
    pub fn new(token: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            replacement: replacement.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SpeechConfig {
    /// Glyph substituted for every letter and digit of speech a recipient
    /// does not understand
    pub placeholder: char,
    /// Capability tokens that grant comprehension of every language
    pub universal_tokens: Vec<CapabilityToken>,
    /// Escapes normalized before parsing, tried in order
    pub escapes: Vec<EscapeRule>,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            placeholder: '*',
            universal_tokens: vec![CapabilityToken::universal_language()],
            escapes: vec![EscapeRule::new("%r", "|/"), EscapeRule::new("%t", "|-")],
        }
    }
}

impl SpeechConfig {
    /// Reject settings that would break rendering guarantees
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.placeholder.is_alphanumeric() {
            return Err(DomainError::Validation(format!(
                "placeholder {:?} must not be a letter or digit",
                self.placeholder
            )));
        }
        if self.placeholder.is_whitespace() || matches!(self.placeholder, '"' | '~') {
            return Err(DomainError::Validation(format!(
                "placeholder {:?} would change word or quote structure",
                self.placeholder
            )));
        }
        if let Some(rule) = self.escapes.iter().find(|r| r.token.is_empty()) {
            return Err(DomainError::Validation(format!(
                "escape with replacement {:?} has an empty token",
                rule.replacement
            )));
        }
        if let Some(rule) = self
            .escapes
            .iter()
            .find(|r| r.replacement.chars().any(char::is_alphanumeric))
        {
            return Err(DomainError::Validation(format!(
                "escape {:?} replacement {:?} must not contain letters or digits",
                rule.token, rule.replacement
            )));
        }
        Ok(())
    }
}
