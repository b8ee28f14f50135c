use crate::field::{ImeFilter, ImeStrategy, InputHints, LineField};
use crate::formatter::FormatterState;

/// One open dash-group dialog: a field plus the state that formats it
#[derive(Debug)]
pub struct DashGroupDialog<F: LineField> {
    pub(crate) field: F,
    pub(crate) state: FormatterState,
    pub(crate) ime: ImeFilter,
}

/// What happened on a text-edited event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditReport {
    pub text: String,
    /// The field content was replaced programmatically
    pub rewritten: bool,
    pub dash_appended: bool,
}

impl<F: LineField> DashGroupDialog<F> {
    pub fn new(mut field: F, strategy: ImeStrategy) -> Self {
        field.set_input_hints(InputHints::dash_group());
        log::info!("Opened dash-group dialog (ime strategy: {:?})", strategy);

        Self {
            field,
            state: FormatterState::new(),
            ime: ImeFilter::new(strategy),
        }
    }

    pub fn field(&self) -> &F {
        &self.field
    }

    /// The host widget, for delivering user edits
    pub fn field_mut(&mut self) -> &mut F {
        &mut self.field
    }

    pub fn state(&self) -> &FormatterState {
        &self.state
    }

    pub fn ime(&self) -> &ImeFilter {
        &self.ime
    }

    /// Close the dialog and open a fresh one on the same field.
    ///
    /// The field is cleared and its hints re-applied; formatter state and the
    /// echo filter start over with the same strategy.
    pub fn reopen(&mut self) {
        let strategy = self.ime.strategy();
        log::debug!("Reopening dash-group dialog");

        self.field.set_text("");
        self.field.set_input_hints(InputHints::dash_group());
        self.state = FormatterState::new();
        self.ime = ImeFilter::new(strategy);
    }
}
