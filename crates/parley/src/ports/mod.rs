//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the domain layer
//! interacts with the world, transport and transcript layers.
//!
//! Implementations of these traits live with the host.

mod location;
mod pose_break;
mod sink;

pub use location::*;
pub use pose_break::*;
pub use sink::*;
