//! Segment - One span of a parsed utterance

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Language;

/// Opening delimiter of a tagged span in mixed content
pub const TAG_OPEN: &str = "\"~";
/// Closing delimiter of a tagged span in mixed content
pub const TAG_CLOSE: &str = "\"";

/// How a tagged span is framed when rendered
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Framing {
    /// Wrapped in double quotes (mixed content)
    Quoted,
    /// Standalone (whole utterance in one language)
    Bare,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Segment {
    /// Renders identically for every recipient
    Plain { text: String },
    /// Speech gated on knowing `language`
    Tagged {
        text: String,
        language: Language,
        framing: Framing,
    },
}

impl Segment {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::Plain { text: text.into() }
    }

    pub fn tagged(text: impl Into<String>, language: Language, framing: Framing) -> Self {
        Self::Tagged {
            text: text.into(),
            language,
            framing,
        }
    }

    /// Text without any delimiters
    pub fn text(&self) -> &str {
        match self {
            Self::Plain { text } | Self::Tagged { text, .. } => text,
        }
    }

    /// Language gating this segment, `None` for plain text
    pub fn language(&self) -> Option<&Language> {
        match self {
            Self::Plain { .. } => None,
            Self::Tagged { language, .. } => Some(language),
        }
    }

    pub fn is_tagged(&self) -> bool {
        matches!(self, Self::Tagged { .. })
    }

    /// The span as it appeared in the input, delimiters included
    pub fn source_text(&self) -> String {
        match self {
            Self::Plain { text } => text.clone(),
            Self::Tagged {
                text,
                framing: Framing::Quoted,
                ..
            } => format!("{TAG_OPEN}{text}{TAG_CLOSE}"),
            Self::Tagged {
                text,
                framing: Framing::Bare,
                ..
            } => text.clone(),
        }
    }
}
