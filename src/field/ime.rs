//! Input method echo filter
//!
//! Some on-screen keyboards react to a programmatic text replacement by
//! sending back an input-method event of their own, which would re-enter the
//! field and undo the correction. Under [`ImeStrategy::SuppressEcho`] the
//! event immediately following a programmatic write is swallowed.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How the dialog treats input-method events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImeStrategy {
    /// Hardware keyboard: every event is delivered
    #[default]
    Desktop,
    /// On-screen keyboard that echoes programmatic writes
    SuppressEcho,
}

/// An input-method event as reported by the host
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputMethodEvent {
    pub commit_string: String,
    pub preedit_string: String,
}

impl InputMethodEvent {
    pub fn commit(text: impl Into<String>) -> Self {
        Self {
            commit_string: text.into(),
            preedit_string: String::new(),
        }
    }
}

/// What the host should do with an input-method event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImeDisposition {
    /// Let the field process the event
    Deliver,
    /// Drop the event
    Swallow,
}

/// One-shot suppression flag owned by a single dialog
#[derive(Debug, Clone, Default)]
pub struct ImeFilter {
    strategy: ImeStrategy,
    suppress_next: bool,
}

impl ImeFilter {
    pub fn new(strategy: ImeStrategy) -> Self {
        Self {
            strategy,
            suppress_next: false,
        }
    }

    pub fn strategy(&self) -> ImeStrategy {
        self.strategy
    }

    /// Whether the next input-method event will be swallowed
    pub fn is_armed(&self) -> bool {
        self.suppress_next
    }

    /// Call right before writing text into the field
    pub fn arm(&mut self) {
        if self.strategy == ImeStrategy::SuppressEcho {
            self.suppress_next = true;
        }
    }

    /// Decide the fate of an incoming event, consuming the flag if set
    pub fn filter(&mut self, event: &InputMethodEvent) -> ImeDisposition {
        if std::mem::take(&mut self.suppress_next) {
            log::debug!(
                "Swallowing input method echo (commit={:?}, preedit={:?})",
                event.commit_string,
                event.preedit_string
            );
            ImeDisposition::Swallow
        } else {
            ImeDisposition::Deliver
        }
    }
}
