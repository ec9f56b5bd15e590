//! Domain Services
//!
//! Pure, side-effect-free logic over domain entities.

mod capability;
mod format;
mod garble;
mod parser;
mod recipients;
mod renderer;

pub use capability::CapabilityResolver;
pub use format::FormatNormalizer;
pub use garble::Garbler;
pub use parser::SegmentParser;
pub use recipients::RecipientFilter;
pub use renderer::SpeechRenderer;
