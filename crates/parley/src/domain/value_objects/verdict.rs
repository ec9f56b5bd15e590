//! Verdict - Comprehension outcome for one (recipient, segment) pair

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// The recipient is the speaker
    Speaker,
    /// The recipient holds a universal-comprehension exemption
    Exempt,
    /// Plain text, or the recipient knows the language
    Understands,
    DoesNotUnderstand,
}

impl Verdict {
    /// Whether the recipient gets the intelligible rendering
    pub fn understands(&self) -> bool {
        !matches!(self, Verdict::DoesNotUnderstand)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Speaker => write!(f, "speaker"),
            Verdict::Exempt => write!(f, "exempt"),
            Verdict::Understands => write!(f, "understands"),
            Verdict::DoesNotUnderstand => write!(f, "does_not_understand"),
        }
    }
}
