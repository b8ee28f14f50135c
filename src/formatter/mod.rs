//! Dash-Group Formatter
//!
//! Pure formatting rule plus the small amount of state it carries between
//! edits. Knows nothing about widgets or input methods.

pub mod rules;
pub mod state;

pub use rules::{
    FormatOutcome, GROUP_LEN, MAX_FORMATTED_LEN, MAX_GROUPS, SEPARATOR, format, format_edit,
    open_group_len,
};
pub use state::{FormatterState, Phase};
