//! Formatting escape normalization
//!
//! Runs once per utterance, before segmentation.

use crate::config::EscapeRule;

#[derive(Debug, Clone)]
pub struct FormatNormalizer {
    escapes: Vec<EscapeRule>,
}

impl FormatNormalizer {
    pub fn new(escapes: Vec<EscapeRule>) -> Self {
        Self { escapes }
    }

    /// Replace every escape token with its display-layer equivalent.
    ///
    /// Single left-to-right pass: output of one rule is never rescanned,
    /// and the first matching rule at a position wins.
    pub fn normalize(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut rest = text;

        'scan: while !rest.is_empty() {
            for rule in &self.escapes {
                if !rule.token.is_empty() && rest.starts_with(rule.token.as_str()) {
                    out.push_str(&rule.replacement);
                    rest = &rest[rule.token.len()..];
                    continue 'scan;
                }
            }

            let mut chars = rest.chars();
            if let Some(ch) = chars.next() {
                out.push(ch);
            }
            rest = chars.as_str();
        }

        out
    }

    /// Display-layer tokens this normalizer can produce
    pub fn replacements(&self) -> impl Iterator<Item = &str> {
        self.escapes.iter().map(|r| r.replacement.as_str())
    }
}

impl Default for FormatNormalizer {
    fn default() -> Self {
        Self::new(crate::config::SpeechConfig::default().escapes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_and_tab() {
        let n = FormatNormalizer::default();
        assert_eq!(n.normalize("One.%rTwo.%tThree."), "One.|/Two.|-Three.");
    }

    #[test]
    fn test_untouched_without_escapes() {
        let n = FormatNormalizer::default();
        let text = "100% sure, \"~Oui\" she says. Ünïcode too.";
        assert_eq!(n.normalize(text), text);
    }

    #[test]
    fn test_replacement_not_rescanned() {
        let n = FormatNormalizer::new(vec![
            EscapeRule::new("%a", "%b"),
            EscapeRule::new("%b", "B"),
        ]);
        assert_eq!(n.normalize("%a%b"), "%bB");
    }
}
