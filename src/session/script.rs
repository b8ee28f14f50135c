//! Keystroke scripts
//!
//! One line of input describes a burst of keystrokes. Plain characters are
//! typed one by one; `<tag>` tokens stand for special keys:
//!
//! ```text
//! kidil<bs><bs>sovib<left><ime><paste:abc de><reset><lt>
//! ```

use anyhow::{Result, bail};
use regex::Regex;

/// A single simulated user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Type(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    /// Synthetic input-method event
    InputMethod,
    /// Replace the whole field in one edit
    Paste(String),
    /// Close the dialog and open a fresh one
    Reset,
}

#[derive(Debug, Clone)]
pub struct ScriptParser {
    tag_re: Regex,
}

impl ScriptParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            tag_re: Regex::new(r"<([a-z]+)(?::([^>]*))?>")?,
        })
    }

    /// Parse one script line into actions
    pub fn parse(&self, line: &str) -> Result<Vec<KeyAction>> {
        let mut actions = Vec::new();
        let mut last = 0;

        for captures in self.tag_re.captures_iter(line) {
            let Some(whole) = captures.get(0) else {
                continue;
            };
            actions.extend(line[last..whole.start()].chars().map(KeyAction::Type));
            last = whole.end();

            let name = captures.get(1).map_or("", |m| m.as_str());
            let arg = captures.get(2).map(|m| m.as_str());
            actions.push(Self::tag_action(name, arg)?);
        }

        actions.extend(line[last..].chars().map(KeyAction::Type));
        Ok(actions)
    }

    fn tag_action(name: &str, arg: Option<&str>) -> Result<KeyAction> {
        let action = match (name, arg) {
            ("paste", Some(text)) => KeyAction::Paste(text.to_string()),
            ("paste", None) => KeyAction::Paste(String::new()),
            (_, Some(_)) => bail!("Tag <{}> takes no argument", name),
            ("bs", None) => KeyAction::Backspace,
            ("del", None) => KeyAction::Delete,
            ("left", None) => KeyAction::Left,
            ("right", None) => KeyAction::Right,
            ("home", None) => KeyAction::Home,
            ("end", None) => KeyAction::End,
            ("ime", None) => KeyAction::InputMethod,
            ("reset", None) => KeyAction::Reset,
            ("lt", None) => KeyAction::Type('<'),
            _ => bail!("Unknown key tag <{}>", name),
        };
        Ok(action)
    }
}
