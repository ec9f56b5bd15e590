//! Capability Resolver
//!
//! Decides how a recipient perceives one segment spoken by a speaker.
//! Plane membership is not checked here; cross-plane actors never reach the
//! resolver because the recipient filter drops them.

use crate::domain::entities::Actor;
use crate::domain::value_objects::{CapabilityToken, Language, Verdict};

#[derive(Debug, Clone)]
pub struct CapabilityResolver {
    /// Tokens that grant comprehension of every language
    exemptions: Vec<CapabilityToken>,
}

impl CapabilityResolver {
    pub fn new(exemptions: Vec<CapabilityToken>) -> Self {
        Self { exemptions }
    }

    /// Resolve a verdict. `language` is `None` for plain segments.
    ///
    /// First match wins: speaker, exemption, ungated text, known language.
    pub fn resolve(&self, recipient: &Actor, speaker: &Actor, language: Option<&Language>) -> Verdict {
        if recipient.id == speaker.id {
            return Verdict::Speaker;
        }

        if recipient.capabilities.contains_any(&self.exemptions) {
            return Verdict::Exempt;
        }

        match language {
            None => Verdict::Understands,
            Some(language) if recipient.knows(language) => Verdict::Understands,
            Some(_) => Verdict::DoesNotUnderstand,
        }
    }
}

impl Default for CapabilityResolver {
    fn default() -> Self {
        Self::new(vec![CapabilityToken::universal_language()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{LocationId, Plane};

    fn lang(name: &str) -> Language {
        Language::new(name).unwrap()
    }

    fn mock_actor(name: &str) -> Actor {
        Actor::new(name, LocationId::new("#1"))
    }

    #[test]
    fn test_speaker_always_understands() {
        let resolver = CapabilityResolver::default();
        let speaker = mock_actor("Ada").speaking(lang("French"));
        assert_eq!(
            resolver.resolve(&speaker, &speaker, Some(&lang("French"))),
            Verdict::Speaker
        );
    }

    #[test]
    fn test_exemption_beats_language() {
        let resolver = CapabilityResolver::default();
        let speaker = mock_actor("Ada");
        let sage = mock_actor("Sage").with_capability("universal language");
        assert_eq!(
            resolver.resolve(&sage, &speaker, Some(&lang("Sumerian"))),
            Verdict::Exempt
        );
        assert_eq!(resolver.resolve(&sage, &speaker, None), Verdict::Exempt);
    }

    #[test]
    fn test_plain_text_understood_by_anyone() {
        let resolver = CapabilityResolver::default();
        let speaker = mock_actor("Ada");
        let nobody = mock_actor("Bo");
        assert!(nobody.languages.is_empty());
        assert_eq!(resolver.resolve(&nobody, &speaker, None), Verdict::Understands);
    }

    #[test]
    fn test_known_language_case_insensitive() {
        let resolver = CapabilityResolver::default();
        let speaker = mock_actor("Ada");
        let listener = mock_actor("Bo").with_language(lang("french"));
        assert_eq!(
            resolver.resolve(&listener, &speaker, Some(&lang("FRENCH"))),
            Verdict::Understands
        );
        assert_eq!(
            resolver.resolve(&listener, &speaker, Some(&lang("German"))),
            Verdict::DoesNotUnderstand
        );
    }

    #[test]
    fn test_no_exemptions_configured() {
        let resolver = CapabilityResolver::new(Vec::new());
        let speaker = mock_actor("Ada");
        let sage = mock_actor("Sage").with_capability("Universal Language");
        assert_eq!(
            resolver.resolve(&sage, &speaker, Some(&lang("French"))),
            Verdict::DoesNotUnderstand
        );
    }

    #[test]
    fn test_plane_not_consulted() {
        let resolver = CapabilityResolver::default();
        let speaker = mock_actor("Ada").with_plane(Plane::Shadow);
        let listener = mock_actor("Bo").with_language(lang("French"));
        assert_eq!(
            resolver.resolve(&listener, &speaker, Some(&lang("French"))),
            Verdict::Understands
        );
    }
}
