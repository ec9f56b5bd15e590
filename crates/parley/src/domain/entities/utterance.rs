//! Utterance - Raw input from one speaker action

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::SpeechStyle;

/// Marker that puts a whole `say` into the speaking language
pub const SAY_LANGUAGE_MARKER: char = '~';

/// Deserialized utterances go through the same `~` handling as `say()`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "UtteranceRecord")]
pub struct Utterance {
    pub text: String,
    /// The whole utterance is in the speaker's active language
    #[serde(default)]
    pub forced_language: bool,
    #[serde(default)]
    pub style: SpeechStyle,
}

#[derive(Deserialize)]
struct UtteranceRecord {
    text: String,
    #[serde(default)]
    forced_language: bool,
    #[serde(default)]
    style: SpeechStyle,
}

impl From<UtteranceRecord> for Utterance {
    fn from(record: UtteranceRecord) -> Self {
        match record.style {
            SpeechStyle::Say if !record.forced_language => Utterance::say(record.text),
            style => Self {
                text: record.text,
                forced_language: record.forced_language,
                style,
            },
        }
    }
}

impl Utterance {
    /// An emit with mixed plain and tagged content
    pub fn emit(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            forced_language: false,
            style: SpeechStyle::Emit,
        }
    }

    /// A say. A leading `~` is stripped and puts the whole message in the
    /// speaking language.
    pub fn say(text: impl Into<String>) -> Self {
        let text = text.into();
        match text.strip_prefix(SAY_LANGUAGE_MARKER) {
            Some(rest) => Self {
                text: rest.to_string(),
                forced_language: true,
                style: SpeechStyle::Say,
            },
            None => Self {
                text,
                forced_language: false,
                style: SpeechStyle::Say,
            },
        }
    }

    pub fn with_forced_language(mut self, forced: bool) -> Self {
        self.forced_language = forced;
        self
    }

    /// True when there is nothing but whitespace to deliver
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_say_marker_forces_language() {
        let u = Utterance::say("~Bonjour");
        assert_eq!(u.text, "Bonjour");
        assert!(u.forced_language);
        assert_eq!(u.style, SpeechStyle::Say);

        let plain = Utterance::say("Hello ~there");
        assert_eq!(plain.text, "Hello ~there");
        assert!(!plain.forced_language);
    }

    #[test]
    fn test_deserialized_say_applies_marker() {
        let u: Utterance = serde_json::from_str(r#"{"text":"~Hi","style":"say"}"#).unwrap();
        assert_eq!(u, Utterance::say("~Hi"));
        assert!(u.forced_language);

        let emit: Utterance = serde_json::from_str(r#"{"text":"~Hi"}"#).unwrap();
        assert_eq!(emit.text, "~Hi");
        assert!(!emit.forced_language);

        // Already forced: the text is taken as is
        let forced = Utterance::say("~~tilde");
        let json = serde_json::to_string(&forced).unwrap();
        assert_eq!(serde_json::from_str::<Utterance>(&json).unwrap(), forced);
    }

    #[test]
    fn test_blank() {
        assert!(Utterance::emit("  \t").is_blank());
        assert!(Utterance::say("~").is_blank());
        assert!(!Utterance::emit("x").is_blank());
    }
}
