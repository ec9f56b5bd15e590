//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Actor: A speaker or recipient
//! - Utterance: Raw input of one speech action
//! - Segment: A parsed span of an utterance
//! - DeliveryPlan: Per-recipient composed text

mod actor;
mod delivery;
mod segment;
mod utterance;

pub use actor::*;
pub use delivery::*;
pub use segment::*;
pub use utterance::*;
