//! Input method hints
//!
//! Flags a field passes to the on-screen keyboard. The dash-group dialog
//! wants the raw characters the user pressed.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputHints {
    pub sensitive_data: bool,
    pub no_auto_uppercase: bool,
    pub no_predictive_text: bool,
}

impl InputHints {
    /// Hints requested by the dash-group dialog
    pub const fn dash_group() -> Self {
        Self {
            sensitive_data: true,
            no_auto_uppercase: true,
            no_predictive_text: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
