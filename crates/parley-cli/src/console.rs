//! Terminal adapters for the broadcast ports

use colored::Colorize;
use parley::{Actor, DomainError, LocationId, MessageSink, PoseBreakHook};
use std::io::{self, Write};

/// Paragraph and tab tokens as the terminal shows them
const DISPLAY_TOKENS: [(&str, &str); 2] = [("|/", "\n"), ("|-", "\t")];

/// Translate display-layer tokens for the terminal
pub fn to_terminal(text: &str) -> String {
    DISPLAY_TOKENS
        .iter()
        .fold(text.to_string(), |acc, &(token, shown)| acc.replace(token, shown))
}

/// Prints each delivery as `<recipient> │ <text>`
pub struct ConsoleSink {
    raw: bool,
}

impl ConsoleSink {
    pub fn new(raw: bool) -> Self {
        Self { raw }
    }
}

impl MessageSink for ConsoleSink {
    fn deliver(&self, recipient: &Actor, text: &str) -> Result<(), DomainError> {
        let shown = if self.raw {
            text.to_string()
        } else {
            to_terminal(text)
        };

        let mut out = io::stdout().lock();
        writeln!(
            out,
            "{} {} {}",
            format!("{:>14}", recipient.name).cyan(),
            "│".dimmed(),
            shown
        )
        .map_err(|e| DomainError::delivery_failure(recipient.id, e.to_string()))
    }
}

/// Prints a separator before each broadcast
pub struct ConsolePoseBreak;

impl PoseBreakHook for ConsolePoseBreak {
    fn pose_break(&self, speaker: &Actor, location: &LocationId) {
        let line = format!("── {} @ {} ──", speaker.name, location);
        // Nothing to report to if the terminal is gone.
        let _ = writeln!(io::stdout().lock(), "{}", line.dimmed());
    }
}
