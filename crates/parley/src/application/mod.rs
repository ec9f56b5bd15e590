//! Application Layer (Use Cases)
//!
//! Orchestrates domain services and coordinates between
//! the world, transport and transcript ports.

mod broadcast;

pub use broadcast::BroadcastCoordinator;
