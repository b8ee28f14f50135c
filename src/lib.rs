//! Dash-Group Input
//!
//! A single-line input field that groups typed characters into blocks of
//! five separated by dashes (`kidil-sovib-...`), as used for entering long
//! codes on an on-screen keyboard.
//!
//! This library provides:
//! - The formatting rule and its carried state
//! - A widget seam with an in-memory field and input-method echo filter
//! - The dialog adapter that reacts to edit events
//! - A keystroke-script session driver and its configuration

pub mod config;
pub mod dialog;
pub mod field;
pub mod formatter;
pub mod session;

// Re-exports for clean public API
pub use config::Config;
pub use dialog::{DashGroupDialog, EditReport, HandleInputMethod, HandleTextEdited};
pub use field::{ImeStrategy, LineField, TextBuffer};
pub use formatter::{FormatOutcome, FormatterState, format, format_edit};
