//! Segment Parser
//!
//! Splits normalized utterance text into plain and tagged segments.
//! Malformed delimiters never fail; they stay in the plain text.

use regex::Regex;
use std::sync::OnceLock;

use crate::domain::entities::{Framing, Segment};
use crate::domain::errors::DomainError;
use crate::domain::value_objects::Language;

/// `"~`, one or more non-quote characters, closing `"`
static TAGGED_SPAN: OnceLock<Regex> = OnceLock::new();

fn tagged_span() -> &'static Regex {
    TAGGED_SPAN.get_or_init(|| Regex::new(r#""~([^"]+)""#).expect("tagged span pattern compiles"))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SegmentParser;

impl SegmentParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse `text` into ordered segments.
    ///
    /// With `forced_language` the whole text is one bare tagged segment.
    /// Otherwise every `"~..."` span becomes a quoted tagged segment and
    /// the text around them becomes plain segments. Either way a tagged
    /// segment needs `active`, else `MissingLanguage`.
    pub fn parse(
        &self,
        text: &str,
        forced_language: bool,
        active: Option<&Language>,
    ) -> Result<Vec<Segment>, DomainError> {
        if forced_language {
            let language = active.ok_or(DomainError::MissingLanguage)?;
            return Ok(vec![Segment::tagged(text, language.clone(), Framing::Bare)]);
        }

        let mut segments = Vec::new();
        let mut cursor = 0;

        for caps in tagged_span().captures_iter(text) {
            let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let language = active.ok_or(DomainError::MissingLanguage)?;

            if whole.start() > cursor {
                segments.push(Segment::plain(&text[cursor..whole.start()]));
            }
            segments.push(Segment::tagged(
                inner.as_str(),
                language.clone(),
                Framing::Quoted,
            ));
            cursor = whole.end();
        }

        if cursor < text.len() {
            segments.push(Segment::plain(&text[cursor..]));
        }

        tracing::debug!(
            segments = segments.len(),
            tagged = segments.iter().filter(|s| s.is_tagged()).count(),
            "Parsed utterance"
        );

        Ok(segments)
    }

    /// Parse for a location where speech is never language-gated.
    ///
    /// Tag markers are dropped and quoted spans keep their quotes, so the
    /// result is a single plain segment. No speaking language is needed.
    pub fn parse_ungated(&self, text: &str, forced_language: bool) -> Vec<Segment> {
        let text = if forced_language {
            text.to_string()
        } else {
            tagged_span().replace_all(text, "\"${1}\"").into_owned()
        };

        if text.is_empty() {
            Vec::new()
        } else {
            vec![Segment::plain(text)]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn french() -> Language {
        Language::new("French").unwrap()
    }

    fn rebuild(segments: &[Segment]) -> String {
        segments.iter().map(Segment::source_text).collect()
    }

    #[test]
    fn test_plain_only_needs_no_language() {
        let text = "A cool breeze blows through the room.";
        let segments = SegmentParser::new().parse(text, false, None).unwrap();
        assert_eq!(segments, vec![Segment::plain(text)]);
    }

    #[test]
    fn test_mixed_content() {
        let text = r#""~Bonjour, mes amis!" A voice calls out in French."#;
        let segments = SegmentParser::new()
            .parse(text, false, Some(&french()))
            .unwrap();

        assert_eq!(
            segments,
            vec![
                Segment::tagged("Bonjour, mes amis!", french(), Framing::Quoted),
                Segment::plain(" A voice calls out in French."),
            ]
        );
        assert_eq!(rebuild(&segments), text);
    }

    #[test]
    fn test_multiple_spans_partition_input() {
        let text = r#"She leans in. "~Un," she says, "~deux, trois." Then silence.|/"#;
        let segments = SegmentParser::new()
            .parse(text, false, Some(&french()))
            .unwrap();

        assert_eq!(segments.iter().filter(|s| s.is_tagged()).count(), 2);
        assert_eq!(segments[1].text(), "Un,");
        assert_eq!(segments[3].text(), "deux, trois.");
        assert_eq!(rebuild(&segments), text);
    }

    #[test]
    fn test_tagged_span_without_language_fails() {
        let err = SegmentParser::new()
            .parse(r#"He says "~Bonjour""#, false, None)
            .unwrap_err();
        assert_eq!(err, DomainError::MissingLanguage);
    }

    #[test]
    fn test_forced_language() {
        let segments = SegmentParser::new()
            .parse("The entire message.", true, Some(&french()))
            .unwrap();
        assert_eq!(
            segments,
            vec![Segment::tagged("The entire message.", french(), Framing::Bare)]
        );

        let err = SegmentParser::new().parse("~Bonjour", true, None).unwrap_err();
        assert_eq!(err, DomainError::MissingLanguage);
    }

    #[test]
    fn test_malformed_delimiters_stay_plain() {
        let parser = SegmentParser::new();
        for text in [
            r#"An unterminated "~Bonjour mes amis"#,
            r#"Empty "~" span"#,
            "A bare ~tilde and a \"quote\"",
            "~Bonjour",
        ] {
            let segments = parser.parse(text, false, None).unwrap();
            assert_eq!(segments, vec![Segment::plain(text)], "input: {text}");
        }
    }

    #[test]
    fn test_adjacent_spans() {
        let text = r#""~Un""~Deux""#;
        let segments = SegmentParser::new()
            .parse(text, false, Some(&french()))
            .unwrap();
        assert_eq!(segments.len(), 2);
        assert!(segments.iter().all(Segment::is_tagged));
        assert_eq!(rebuild(&segments), text);
    }

    #[test]
    fn test_ungated_drops_markers_without_language() {
        let parser = SegmentParser::new();
        let segments = parser.parse_ungated(r#""~Un," she says, "~deux." An "~" stays."#, false);
        assert_eq!(
            segments,
            vec![Segment::plain(r#""Un," she says, "deux." An "~" stays."#)]
        );

        let forced = parser.parse_ungated("Bonjour", true);
        assert_eq!(forced, vec![Segment::plain("Bonjour")]);
        assert!(forced.iter().all(|s| s.language().is_none()));
    }
}
