//! Host widget seam.

use super::hints::InputHints;

/// A single-line text widget as seen by the dialog adapter.
///
/// Positions and lengths are counted in characters. Implementations must move
/// the cursor to the end of the new content on [`LineField::set_text`]; the
/// dialog relies on this when it decides where separators may be inserted.
pub trait LineField {
    /// Current full content
    fn text(&self) -> String;

    /// Cursor offset in characters
    fn cursor_position(&self) -> usize;

    /// Replace the content programmatically, cursor to the end
    fn set_text(&mut self, text: &str);

    /// Ask the host input method for the given behavior
    fn set_input_hints(&mut self, _hints: InputHints) {}

    /// Whether the cursor sits after the last character
    fn cursor_at_end(&self) -> bool {
        self.cursor_position() == self.text().chars().count()
    }
}
