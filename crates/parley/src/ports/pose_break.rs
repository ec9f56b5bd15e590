//! Pose Break Port
//!
//! Notification that a new spoken/emoted event is starting, for transcript
//! formatting collaborators.

use crate::domain::entities::Actor;
use crate::domain::value_objects::LocationId;

pub trait PoseBreakHook: Send + Sync {
    /// Called once per broadcast, after validation and before any message
    /// is composed
    fn pose_break(&self, speaker: &Actor, location: &LocationId);
}

/// Hook for hosts without transcript formatting
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPoseBreak;

impl PoseBreakHook for NoPoseBreak {
    fn pose_break(&self, _speaker: &Actor, _location: &LocationId) {}
}
