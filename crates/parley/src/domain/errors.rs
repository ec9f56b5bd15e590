//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

use super::value_objects::ActorId;

/// Domain layer errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Nothing to say: the message is empty")]
    EmptyMessage,

    #[error("You need to set a speaking language first with +language <language>")]
    MissingLanguage,

    #[error("Delivery to {recipient} failed: {reason}")]
    DeliveryFailure { recipient: ActorId, reason: String },

    #[error("You don't know the language: {0}")]
    UnknownLanguage(String),

    #[error("Invalid language name: {0:?}")]
    InvalidLanguage(String),

    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    #[error("Validation error: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn not_found<T: AsRef<str>, I: std::fmt::Display>(entity_type: T, id: I) -> Self {
        Self::NotFound {
            entity_type: entity_type.as_ref().to_string(),
            id: id.to_string(),
        }
    }

    pub fn delivery_failure(recipient: ActorId, reason: impl Into<String>) -> Self {
        Self::DeliveryFailure {
            recipient,
            reason: reason.into(),
        }
    }

    /// Whether the error aborts a broadcast before anything is delivered
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::EmptyMessage | Self::MissingLanguage)
    }
}
