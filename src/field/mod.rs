//! Line Field
//!
//! The widget side of the dialog: the trait the adapter talks to, an
//! in-memory implementation, input hints and the input-method echo filter.

pub mod buffer;
pub mod hints;
pub mod ime;
pub mod widget;

pub use buffer::TextBuffer;
pub use hints::InputHints;
pub use ime::{ImeDisposition, ImeFilter, ImeStrategy, InputMethodEvent};
pub use widget::LineField;
