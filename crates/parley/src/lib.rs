//! Parley Domain Library
//!
//! Speech and emote distribution for multiplayer text games. One utterance
//! from one actor is rendered separately for every actor who can perceive
//! it, gated on plane membership and language comprehension.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure entities and logic
//!   - `entities/`: Actor, Utterance, Segment, DeliveryPlan
//!   - `value_objects/`: Plane, Language, CapabilityToken, Verdict
//!   - `services/`: Parser, capability resolver, renderer, recipient filter
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits) onto the host's
//!   world, transport and transcript layers
//!
//! - **Application** (`application/`): The broadcast use case
//!
//! # Usage
//!
//! ```rust,ignore
//! use parley::{BroadcastCoordinator, Utterance};
//!
//! let coordinator = BroadcastCoordinator::new(world, sink, pose_break);
//! let utterance = Utterance::emit(r#""~Bonjour!" A voice calls out."#);
//! let report = coordinator.broadcast(&utterance, &speaker, &speaker.location)?;
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use application::BroadcastCoordinator;
pub use config::{EscapeRule, SpeechConfig};
pub use domain::{
    Actor, ActorId, BroadcastReport, CapabilityResolver, CapabilitySet, CapabilityToken,
    Delivery, DeliveryPlan, DomainError, FormatNormalizer, Framing, Garbler, Language,
    LocationId, Plane, RecipientFilter, Segment, SegmentParser, SpeechRenderer, SpeechStyle,
    Utterance, Verdict, UNIVERSAL_LANGUAGE,
};
pub use ports::{LocationContents, MessageSink, NoPoseBreak, PoseBreakHook};
