use crate::ui::mvi::Intent;

use super::state::ThemeMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeIntent {
    /// Startup: adopt the persisted mode.
    Restore { mode: ThemeMode },
    Toggle,
}

impl Intent for ThemeIntent {}
