//! SpeechStyle - How a composed utterance is framed for delivery

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SpeechStyle {
    /// Narration without the speaker's name attached
    #[default]
    Emit,
    /// `You say, "..."` for the speaker, `<Name> says, "..."` for others
    Say,
}

impl std::fmt::Display for SpeechStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpeechStyle::Emit => write!(f, "emit"),
            SpeechStyle::Say => write!(f, "say"),
        }
    }
}

impl std::str::FromStr for SpeechStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "emit" => Ok(SpeechStyle::Emit),
            "say" => Ok(SpeechStyle::Say),
            _ => Err(format!("Unknown speech style: {}", s)),
        }
    }
}
