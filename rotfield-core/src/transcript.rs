//! The terminal transcript.
//!
//! An append-only log of echoed input and system output. Lines are never
//! edited or removed individually; `clear` replaces the whole sequence.

use crate::VERSION;

/// Whether a transcript line is an echoed command or system output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Input,
    Output,
}

/// A single transcript line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptLine {
    pub kind: LineKind,
    pub text: String,
}

/// Ordered session log of terminal input and output.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    lines: Vec<TranscriptLine>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// A transcript seeded with the terminal greeting.
    pub fn with_banner() -> Self {
        let mut transcript = Self::new();
        transcript.push_output(format!("FLOAT.Rotfield v{VERSION} - Terminal Ready"));
        transcript.push_output("Type 'help' for available commands");
        transcript
    }

    /// Append an echoed input line. The `> ` prefix is presentation; the
    /// transcript stores the raw text tagged by kind.
    pub fn push_input(&mut self, text: impl Into<String>) {
        self.lines.push(TranscriptLine {
            kind: LineKind::Input,
            text: text.into(),
        });
    }

    /// Append a system output line.
    pub fn push_output(&mut self, text: impl Into<String>) {
        self.lines.push(TranscriptLine {
            kind: LineKind::Output,
            text: text.into(),
        });
    }

    /// Replace the transcript with an empty sequence.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[TranscriptLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_greets_with_version() {
        let transcript = Transcript::with_banner();
        assert_eq!(transcript.len(), 2);
        assert_eq!(
            transcript.lines()[0].text,
            "FLOAT.Rotfield v0.3.4 - Terminal Ready"
        );
        assert_eq!(transcript.lines()[1].kind, LineKind::Output);
    }

    #[test]
    fn lines_append_in_order() {
        let mut transcript = Transcript::new();
        transcript.push_input("visit gardens");
        transcript.push_output("Navigating to Knowledge Gardens...");

        assert_eq!(transcript.lines()[0].kind, LineKind::Input);
        assert_eq!(transcript.lines()[1].kind, LineKind::Output);
    }

    #[test]
    fn clear_empties_and_is_idempotent() {
        let mut transcript = Transcript::with_banner();
        transcript.push_input("help");
        transcript.clear();
        assert!(transcript.is_empty());

        transcript.clear();
        assert!(transcript.is_empty());
    }
}
