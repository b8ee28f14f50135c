use crate::dialog::adapter::{DashGroupDialog, EditReport};
use crate::field::{ImeDisposition, InputMethodEvent, LineField};

/// Trait for handling text-edited notifications
pub trait HandleTextEdited {
    fn handle_text_edited(&mut self) -> EditReport;
}

/// Trait for handling input-method events
pub trait HandleInputMethod {
    fn handle_input_method(&mut self, event: &InputMethodEvent) -> ImeDisposition;
}

impl<F: LineField> HandleTextEdited for DashGroupDialog<F> {
    fn handle_text_edited(&mut self) -> EditReport {
        let initial_text = self.field.text();
        let cursor_at_end = self.field.cursor_at_end();

        let outcome = self.state.apply(&initial_text, cursor_at_end);

        // Writing moves the cursor to the end, so only write when needed
        let rewritten = outcome.text != initial_text;
        if rewritten {
            log::debug!("Rewriting field {:?} -> {:?}", initial_text, outcome.text);
            self.ime.arm();
            self.field.set_text(&outcome.text);
        }

        EditReport {
            text: outcome.text,
            rewritten,
            dash_appended: outcome.dash_appended,
        }
    }
}

impl<F: LineField> HandleInputMethod for DashGroupDialog<F> {
    fn handle_input_method(&mut self, event: &InputMethodEvent) -> ImeDisposition {
        self.ime.filter(event)
    }
}
