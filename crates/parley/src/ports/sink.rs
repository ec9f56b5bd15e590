//! Message Sink Port
//!
//! Abstract interface for handing composed text to the transport layer.

use crate::domain::entities::Actor;
use crate::domain::errors::DomainError;

/// Delivers one composed message to one recipient
///
/// Each call receives the recipient's complete message; the pipeline never
/// sends partial text. An error only affects that recipient, the broadcast
/// carries on with the rest.
pub trait MessageSink: Send + Sync {
    fn deliver(&self, recipient: &Actor, text: &str) -> Result<(), DomainError>;
}
