use anyhow::Result;
use serde::Serialize;

use crate::dialog::{DashGroupDialog, HandleInputMethod, HandleTextEdited};
use crate::field::{ImeDisposition, ImeStrategy, InputMethodEvent, LineField, TextBuffer};
use crate::session::script::{KeyAction, ScriptParser};

/// Field state after one script line
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub text: String,
    pub cursor: usize,
    /// Text-edited events raised by this line
    pub edits: usize,
    /// Programmatic writes made by the dialog
    pub rewrites: usize,
    pub dashes_appended: usize,
    pub ime_swallowed: usize,
}

/// A dialog over an in-memory field, driven by keystroke scripts
#[derive(Debug)]
pub struct Session {
    dialog: DashGroupDialog<TextBuffer>,
    parser: ScriptParser,
}

impl Session {
    pub fn new(strategy: ImeStrategy) -> Result<Self> {
        Ok(Self {
            dialog: DashGroupDialog::new(TextBuffer::new(), strategy),
            parser: ScriptParser::new()?,
        })
    }

    pub fn dialog(&self) -> &DashGroupDialog<TextBuffer> {
        &self.dialog
    }

    /// Parse and replay one script line
    pub fn run_line(&mut self, line: &str) -> Result<Snapshot> {
        let actions = self.parser.parse(line)?;
        let mut snapshot = Snapshot::default();

        for action in actions {
            self.apply(action, &mut snapshot);
        }

        snapshot.text = self.dialog.field.as_str().to_string();
        snapshot.cursor = self.dialog.field.cursor_position();
        Ok(snapshot)
    }

    fn apply(&mut self, action: KeyAction, snapshot: &mut Snapshot) {
        let edited = match action {
            KeyAction::Type(ch) => {
                self.dialog.field.insert_char(ch);
                true
            }
            KeyAction::Backspace => self.dialog.field.backspace(),
            KeyAction::Delete => self.dialog.field.delete(),
            KeyAction::Paste(text) => {
                self.dialog.field.replace_all(&text);
                true
            }
            KeyAction::Left => {
                self.dialog.field.cursor_left();
                false
            }
            KeyAction::Right => {
                self.dialog.field.cursor_right();
                false
            }
            KeyAction::Home => {
                self.dialog.field.cursor_home();
                false
            }
            KeyAction::End => {
                self.dialog.field.cursor_end();
                false
            }
            KeyAction::InputMethod => {
                let disposition = self.dialog.handle_input_method(&InputMethodEvent::default());
                if disposition == ImeDisposition::Swallow {
                    snapshot.ime_swallowed += 1;
                }
                false
            }
            KeyAction::Reset => {
                self.dialog.reopen();
                false
            }
        };

        if edited {
            let report = self.dialog.handle_text_edited();
            snapshot.edits += 1;
            snapshot.rewrites += usize::from(report.rewritten);
            snapshot.dashes_appended += usize::from(report.dash_appended);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::InputHints;
    use crate::formatter::Phase;

    fn new_session(strategy: ImeStrategy) -> Session {
        Session::new(strategy).expect("create session")
    }

    #[test]
    fn test_two_groups() {
        let mut session = new_session(ImeStrategy::Desktop);
        let snapshot = session.run_line("kidilsovib").expect("run line");
        assert_eq!(snapshot.text, "kidil-sovib-");
        assert_eq!(snapshot.edits, 10);
        assert_eq!(snapshot.rewrites, 2);
        assert_eq!(snapshot.dashes_appended, 2);
        assert_eq!(snapshot.cursor, 12);
    }

    #[test]
    fn test_state_carries_across_lines() {
        let mut session = new_session(ImeStrategy::Desktop);
        assert_eq!(session.run_line("kid").expect("run line").text, "kid");
        assert_eq!(session.run_line("il").expect("run line").text, "kidil-");
        assert_eq!(session.dialog().state().previous_text(), "kidil-");
    }

    #[test]
    fn test_spaces_typed_are_dropped() {
        let mut session = new_session(ImeStrategy::Desktop);
        let snapshot = session.run_line("ki dil").expect("run line");
        assert_eq!(snapshot.text, "kidil-");
    }

    #[test]
    fn test_backspace_over_dash() {
        let mut session = new_session(ImeStrategy::Desktop);
        session.run_line("kidil").expect("run line");
        let snapshot = session.run_line("<bs>").expect("run line");
        assert_eq!(snapshot.text, "kidil");
        assert_eq!(snapshot.dashes_appended, 0);
    }

    #[test]
    fn test_echo_suppression() {
        let mut session = new_session(ImeStrategy::SuppressEcho);
        let snapshot = session.run_line("kidil<ime><ime>").expect("run line");
        assert_eq!(snapshot.ime_swallowed, 1);

        let mut session = new_session(ImeStrategy::Desktop);
        let snapshot = session.run_line("kidil<ime>").expect("run line");
        assert_eq!(snapshot.ime_swallowed, 0);
    }

    #[test]
    fn test_reset_starts_over() {
        let mut session = new_session(ImeStrategy::Desktop);
        session.run_line("kidil").expect("run line");
        let snapshot = session.run_line("<reset>ab").expect("run line");
        assert_eq!(snapshot.text, "ab");
        assert_eq!(session.dialog().state().edits(), 2);
    }

    #[test]
    fn test_reset_keeps_strategy_and_hints() {
        let mut session = new_session(ImeStrategy::SuppressEcho);
        let snapshot = session.run_line("kidil<reset>").expect("run line");
        assert_eq!(snapshot.text, "");
        assert_eq!(snapshot.cursor, 0);

        let dialog = session.dialog();
        assert_eq!(dialog.ime().strategy(), ImeStrategy::SuppressEcho);
        assert!(!dialog.ime().is_armed());
        assert_eq!(dialog.field().input_hints(), InputHints::dash_group());
        assert_eq!(dialog.state().phase(), Phase::Empty);
    }

    #[test]
    fn test_paste_then_edit_at_both_ends() {
        let mut session = new_session(ImeStrategy::Desktop);

        let snapshot = session.run_line("<paste: kidil >").expect("run line");
        assert_eq!(snapshot.text, "kidil-");
        assert_eq!(snapshot.edits, 1);
        assert_eq!(snapshot.rewrites, 1);

        let snapshot = session.run_line("<home><del>").expect("run line");
        assert_eq!(snapshot.text, "idil-");
        assert_eq!(snapshot.rewrites, 0);
        assert_eq!(snapshot.cursor, 0);

        let snapshot = session.run_line("<end>x").expect("run line");
        assert_eq!(snapshot.text, "idil-x");
        assert_eq!(snapshot.dashes_appended, 0);
    }

    #[test]
    fn test_delete_at_end_is_not_an_edit() {
        let mut session = new_session(ImeStrategy::Desktop);
        session.run_line("kid").expect("run line");
        let snapshot = session.run_line("<del>").expect("run line");
        assert_eq!(snapshot.text, "kid");
        assert_eq!(snapshot.edits, 0);
    }

    #[test]
    fn test_cursor_back_to_end_resumes_grouping() {
        let mut session = new_session(ImeStrategy::Desktop);
        let snapshot = session
            .run_line("kid<left><left><right><right>il")
            .expect("run line");
        assert_eq!(snapshot.text, "kidil-");
        assert_eq!(snapshot.dashes_appended, 1);
    }

    #[test]
    fn test_typed_dash_restarts_group() {
        let mut session = new_session(ImeStrategy::Desktop);
        let snapshot = session.run_line("ab-cdefg").expect("run line");
        assert_eq!(snapshot.text, "ab-cdefg-");
        assert_eq!(snapshot.dashes_appended, 1);
    }

    #[test]
    fn test_typed_group_past_cap_is_not_closed() {
        let mut session = new_session(ImeStrategy::Desktop);
        let snapshot = session.run_line(&"a".repeat(48)).expect("run line");
        assert_eq!(snapshot.dashes_appended, 8);
        assert!(snapshot.text.ends_with("aaaaaaaa"));

        let snapshot = session.run_line("-abcde").expect("run line");
        assert!(snapshot.text.ends_with("aaaaaaaa-abcde"));
        assert_eq!(snapshot.dashes_appended, 0);
        assert_eq!(snapshot.rewrites, 0);
    }

    #[test]
    fn test_bad_script_leaves_field_untouched() {
        let mut session = new_session(ImeStrategy::Desktop);
        session.run_line("kid").expect("run line");
        assert!(session.run_line("i<nope>").is_err());
        assert_eq!(session.dialog().field().as_str(), "kid");
    }
}
