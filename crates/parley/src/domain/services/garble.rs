//! Garbler - Obfuscates speech for recipients who don't know the language
//!
//! Every letter and digit becomes the placeholder glyph. Whitespace,
//! punctuation and display-layer escape tokens are kept, so the shape of
//! the sentence survives but none of its words do. Emit and say share this
//! one algorithm.

#[derive(Debug, Clone)]
pub struct Garbler {
    placeholder: char,
    /// Escape tokens copied through verbatim
    preserved: Vec<String>,
}

impl Garbler {
    pub fn new(placeholder: char) -> Self {
        Self {
            placeholder,
            preserved: Vec::new(),
        }
    }

    pub fn with_preserved<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preserved
            .extend(tokens.into_iter().map(Into::into).filter(|t| !t.is_empty()));
        self
    }

    pub fn garble(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut rest = text;

        'scan: while !rest.is_empty() {
            for token in &self.preserved {
                if rest.starts_with(token.as_str()) {
                    out.push_str(token);
                    rest = &rest[token.len()..];
                    continue 'scan;
                }
            }

            let mut chars = rest.chars();
            if let Some(ch) = chars.next() {
                out.push(if ch.is_alphanumeric() { self.placeholder } else { ch });
            }
            rest = chars.as_str();
        }

        out
    }
}

impl Default for Garbler {
    fn default() -> Self {
        Self::new('*')
    }
}
