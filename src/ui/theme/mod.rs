//! Light/dark visual mode mirrored to the preference store.

mod intent;
mod preference;
mod reducer;
mod state;

pub use intent::ThemeIntent;
pub use preference::{ThemePreference, THEME_KEY};
pub use reducer::ThemeReducer;
pub use state::{ThemeMode, ThemeState};
