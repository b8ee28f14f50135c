//! Dialog Adapter
//!
//! Glue between a host line field and the formatter. Owns the formatter
//! state and the input-method filter for exactly one open dialog.

pub mod adapter;
pub mod handlers;

pub use adapter::{DashGroupDialog, EditReport};
pub use handlers::{HandleInputMethod, HandleTextEdited};
