//! Dash-Group Rules
//!
//! The reformatting rule applied after every edit: strip surrounding
//! whitespace, then close a complete group with a separator when the user
//! is appending at the end of the field.

/// Characters per group
pub const GROUP_LEN: usize = 5;

/// Groups that receive an automatic separator
pub const MAX_GROUPS: usize = 8;

/// Separator inserted between groups
pub const SEPARATOR: char = '-';

/// Once the text reaches this many characters no further separators are added.
///
/// Eight groups of five plus a separator, then one more character:
///
/// ```text
/// kidil-sovib-dufob-hivol-nutab-linuj-kivad-nozov-t
///     ^     ^     ^                               ^
///     5    11    17                              49
/// ```
///
/// Lengths here are Unicode scalar values (`char`s), not UTF-16 code units,
/// so a character outside the Basic Multilingual Plane such as an emoji
/// counts once.
pub const MAX_FORMATTED_LEN: usize = MAX_GROUPS * (GROUP_LEN + 1) + 1;

/// Result of formatting one edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOutcome {
    /// The corrected text the field should show
    pub text: String,
    /// Leading or trailing whitespace was removed
    pub trimmed: bool,
    /// A separator was appended to close a group
    pub dash_appended: bool,
}

/// Format freshly edited field text.
///
/// `previous_text` is the last value this rule produced. A separator is only
/// appended when the cursor sits at the end of the field and the trimmed text
/// still starts with `previous_text`; anything else (mid-string edits,
/// deletions) passes through with whitespace trimmed.
///
/// Group and length counts are in `char`s; see [`MAX_FORMATTED_LEN`].
pub fn format_edit(
    current_raw_text: &str,
    cursor_at_end: bool,
    previous_text: &str,
) -> FormatOutcome {
    let trimmed = current_raw_text.trim();
    let mut text = trimmed.to_string();
    let mut dash_appended = false;

    if cursor_at_end && text.starts_with(previous_text) && closes_group(&text) {
        text.push(SEPARATOR);
        dash_appended = true;
    }

    FormatOutcome {
        trimmed: trimmed.len() != current_raw_text.len(),
        dash_appended,
        text,
    }
}

/// Format an edit and return `(new_text, updated_previous_text)`.
///
/// The stored previous text always becomes the new text, even when nothing
/// changed.
pub fn format(
    current_raw_text: &str,
    cursor_at_end: bool,
    previous_text: &str,
) -> (String, String) {
    let outcome = format_edit(current_raw_text, cursor_at_end, previous_text);
    let updated = outcome.text.clone();
    (outcome.text, updated)
}

/// Number of characters typed since the last separator (or since the start).
pub fn open_group_len(text: &str) -> usize {
    text.rsplit(SEPARATOR)
        .next()
        .map_or(0, |group| group.chars().count())
}

fn closes_group(text: &str) -> bool {
    text.chars().count() < MAX_FORMATTED_LEN && open_group_len(text) == GROUP_LEN
}
