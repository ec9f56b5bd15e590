//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod capability;
mod ids;
mod language;
mod plane;
mod speech_style;
mod verdict;

pub use capability::*;
pub use ids::*;
pub use language::*;
pub use plane::*;
pub use speech_style::*;
pub use verdict::*;
