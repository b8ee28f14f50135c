//! In-memory line field
//!
//! Behaves like a host line-edit widget: user edits keep the cursor where
//! the edit happened, programmatic writes move it to the end.

use super::hints::InputHints;
use super::widget::LineField;

#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    text: String,
    /// Cursor offset in characters
    cursor: usize,
    hints: InputHints,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: &str) -> Self {
        let mut buffer = Self::new();
        buffer.set_text(text);
        buffer
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn input_hints(&self) -> InputHints {
        self.hints
    }

    /// Insert a character at the cursor and advance past it
    pub fn insert_char(&mut self, ch: char) {
        let at = self.byte_offset(self.cursor);
        self.text.insert(at, ch);
        self.cursor += 1;
    }

    /// Remove the character before the cursor. Returns whether anything changed.
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let at = self.byte_offset(self.cursor);
        self.text.remove(at);
        true
    }

    /// Remove the character under the cursor. Returns whether anything changed.
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.len() {
            return false;
        }
        let at = self.byte_offset(self.cursor);
        self.text.remove(at);
        true
    }

    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.len());
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.len();
    }

    /// Replace everything as a user edit (select all, then paste)
    pub fn replace_all(&mut self, text: &str) {
        self.text = text.to_string();
        self.cursor = self.len();
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map_or(self.text.len(), |(idx, _)| idx)
    }
}

impl LineField for TextBuffer {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn cursor_position(&self) -> usize {
        self.cursor
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.cursor = self.len();
    }

    fn set_input_hints(&mut self, hints: InputHints) {
        self.hints = hints;
    }
}
