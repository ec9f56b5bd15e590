//! Speech Renderer
//!
//! Turns segments into the text one recipient sees.

use crate::domain::entities::{Framing, Segment};
use crate::domain::value_objects::{SpeechStyle, Verdict};

use super::garble::Garbler;

#[derive(Debug, Clone, Default)]
pub struct SpeechRenderer {
    garbler: Garbler,
}

impl SpeechRenderer {
    pub fn new(garbler: Garbler) -> Self {
        Self { garbler }
    }

    /// Render one segment for one verdict
    pub fn render(&self, segment: &Segment, verdict: Verdict) -> String {
        match segment {
            Segment::Plain { text } => text.clone(),
            Segment::Tagged { text, framing, .. } => {
                let body = if verdict.understands() {
                    text.clone()
                } else {
                    self.garbler.garble(text)
                };
                match framing {
                    Framing::Quoted => format!("\"{body}\""),
                    Framing::Bare => body,
                }
            }
        }
    }

    /// Concatenate rendered segments in order
    pub fn compose<'a, I>(&self, parts: I) -> String
    where
        I: IntoIterator<Item = (&'a Segment, Verdict)>,
    {
        parts
            .into_iter()
            .map(|(segment, verdict)| self.render(segment, verdict))
            .collect()
    }

    /// Wrap a composed body for delivery
    pub fn frame(&self, style: SpeechStyle, speaker_name: &str, for_speaker: bool, body: &str) -> String {
        match style {
            SpeechStyle::Emit => body.to_string(),
            SpeechStyle::Say if for_speaker => format!("You say, \"{body}\""),
            SpeechStyle::Say => format!("{speaker_name} says, \"{body}\""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::Language;

    fn french() -> Language {
        Language::new("French").unwrap()
    }

    const ALL_VERDICTS: [Verdict; 4] = [
        Verdict::Speaker,
        Verdict::Exempt,
        Verdict::Understands,
        Verdict::DoesNotUnderstand,
    ];

    #[test]
    fn test_plain_ignores_verdict() {
        let renderer = SpeechRenderer::default();
        let segment = Segment::plain("A voice calls out.|/");
        for verdict in ALL_VERDICTS {
            assert_eq!(renderer.render(&segment, verdict), "A voice calls out.|/");
        }
    }

    #[test]
    fn test_understood_keeps_inner_text() {
        let renderer = SpeechRenderer::default();
        let quoted = Segment::tagged("Bonjour, mes amis!", french(), Framing::Quoted);
        let bare = Segment::tagged("Bonjour", french(), Framing::Bare);

        for verdict in [Verdict::Speaker, Verdict::Exempt, Verdict::Understands] {
            assert_eq!(renderer.render(&quoted, verdict), "\"Bonjour, mes amis!\"");
            assert_eq!(renderer.render(&bare, verdict), "Bonjour");
        }
    }

    #[test]
    fn test_not_understood_is_garbled_in_same_framing() {
        let renderer = SpeechRenderer::default();
        let quoted = Segment::tagged("Bonjour, mes amis!", french(), Framing::Quoted);
        let bare = Segment::tagged("Bonjour", french(), Framing::Bare);

        assert_eq!(
            renderer.render(&quoted, Verdict::DoesNotUnderstand),
            "\"*******, *** ****!\""
        );
        assert_eq!(renderer.render(&bare, Verdict::DoesNotUnderstand), "*******");
    }

    #[test]
    fn test_compose_mixes_verdicts_per_segment() {
        let renderer = SpeechRenderer::default();
        let segments = [
            Segment::tagged("Oui", french(), Framing::Quoted),
            Segment::plain(" she says, "),
            Segment::tagged("Ja", Language::new("German").unwrap(), Framing::Quoted),
        ];
        let composed = renderer.compose([
            (&segments[0], Verdict::Understands),
            (&segments[1], Verdict::Understands),
            (&segments[2], Verdict::DoesNotUnderstand),
        ]);
        assert_eq!(composed, "\"Oui\" she says, \"**\"");
    }

    #[test]
    fn test_say_framing() {
        let renderer = SpeechRenderer::default();
        assert_eq!(
            renderer.frame(SpeechStyle::Say, "Ada", true, "Hello"),
            "You say, \"Hello\""
        );
        assert_eq!(
            renderer.frame(SpeechStyle::Say, "Ada", false, "Hello"),
            "Ada says, \"Hello\""
        );
        assert_eq!(renderer.frame(SpeechStyle::Emit, "Ada", false, "Hello"), "Hello");
    }
}
