//! Formatter State
//!
//! Carries the last formatted value between edit events.

use super::rules::{FormatOutcome, format_edit};

/// Lifecycle of a formatter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No edit has been seen yet
    Empty,
    /// At least one edit has been formatted
    Populated,
}

/// Per-dialog formatter state
#[derive(Debug, Clone, Default)]
pub struct FormatterState {
    previous_text: String,
    edits: u64,
}

impl FormatterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Format an edit against the stored previous text and remember the result
    pub fn apply(&mut self, current_raw_text: &str, cursor_at_end: bool) -> FormatOutcome {
        let outcome = format_edit(current_raw_text, cursor_at_end, &self.previous_text);
        self.previous_text.clone_from(&outcome.text);
        self.edits += 1;
        outcome
    }

    pub fn previous_text(&self) -> &str {
        &self.previous_text
    }

    /// Number of edit events formatted so far
    pub fn edits(&self) -> u64 {
        self.edits
    }

    pub fn phase(&self) -> Phase {
        if self.edits == 0 {
            Phase::Empty
        } else {
            Phase::Populated
        }
    }
}
