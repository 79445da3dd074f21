use std::sync::Arc;

use tracing::{debug, warn};

use crate::preference::PreferenceStore;
use crate::ui::mvi::dispatch_mvi;

use super::intent::ThemeIntent;
use super::reducer::ThemeReducer;
use super::state::{ThemeMode, ThemeState};

/// Preference-store key holding the theme mode.
pub const THEME_KEY: &str = "theme";

/// Visual mode with write-through persistence.
///
/// Store failures never reach the caller: reads fall back to light mode and
/// failed writes leave the in-memory toggle in effect.
pub struct ThemePreference {
    state: ThemeState,
    store: Arc<dyn PreferenceStore>,
}

impl ThemePreference {
    /// Starts in light mode; call [`initialize`](Self::initialize) to load
    /// the persisted value.
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self {
            state: ThemeState::default(),
            store,
        }
    }

    pub fn state(&self) -> &ThemeState {
        &self.state
    }

    pub fn mode(&self) -> ThemeMode {
        self.state.mode
    }

    pub fn initialize(&mut self) {
        let mode = match self.store.get(THEME_KEY) {
            Ok(Some(value)) => ThemeMode::parse(&value).unwrap_or_else(|| {
                debug!(value = %value, "unknown stored theme, using default");
                ThemeMode::default()
            }),
            Ok(None) => ThemeMode::default(),
            Err(err) => {
                warn!("Failed to read theme preference: {}", err);
                ThemeMode::default()
            }
        };
        dispatch_mvi!(self, state, ThemeReducer, ThemeIntent::Restore { mode });
    }

    pub fn toggle(&mut self) {
        dispatch_mvi!(self, state, ThemeReducer, ThemeIntent::Toggle);
        let mode = self.state.mode;
        if let Err(err) = self.store.set(THEME_KEY, mode.as_str()) {
            warn!(mode = mode.as_str(), "Failed to persist theme preference: {}", err);
        }
    }
}
