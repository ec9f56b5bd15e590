//! Location Contents Port
//!
//! Abstract interface onto the world layer's rooms.

use crate::domain::entities::Actor;
use crate::domain::errors::DomainError;
use crate::domain::value_objects::LocationId;

/// Read access to what is currently in a location
///
/// Implementations return owned actor snapshots. The broadcast pipeline
/// filters and reads them but never writes back.
///
/// # Example
///
/// ```rust,ignore
/// use parley::ports::LocationContents;
///
/// struct RoomCache { /* ... */ }
///
/// impl LocationContents for RoomCache {
///     fn contents(&self, location: &LocationId) -> Result<Vec<Actor>, DomainError> {
///         // Look up the room and clone its occupants
///     }
/// }
/// ```
pub trait LocationContents: Send + Sync {
    /// Everything in the location, in the world layer's order.
    /// Non-account entities are included; `Actor::has_account` tells them
    /// apart.
    fn contents(&self, location: &LocationId) -> Result<Vec<Actor>, DomainError>;

    /// Whether the location is out-of-character. Speech there is never
    /// language-gated and needs no speaking language.
    fn is_out_of_character(&self, _location: &LocationId) -> bool {
        false
    }
}
