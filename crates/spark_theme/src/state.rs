//! Global theme state singleton
//!
//! The bundle and mode are chosen once at startup. Everything else in the
//! crate takes a mode explicitly; this is only the process-wide default.

use crate::theme::{Theme, ThemeBundle, ThemeMode};
use crate::themes::SparkTheme;
use std::sync::OnceLock;

/// Global theme state instance
static THEME_STATE: OnceLock<ThemeState> = OnceLock::new();

#[derive(Debug)]
pub struct ThemeState {
    bundle: ThemeBundle,
    mode: ThemeMode,
}

impl ThemeState {
    /// Initialize the global theme state (call once at startup).
    ///
    /// Returns `false` when the state was already set; the first value is kept.
    pub fn init(bundle: ThemeBundle, mode: ThemeMode) -> bool {
        let name = bundle.name.clone();
        match THEME_STATE.set(ThemeState { bundle, mode }) {
            Ok(()) => {
                tracing::debug!(bundle = %name, %mode, "theme state initialized");
                true
            }
            Err(_) => {
                tracing::warn!(
                    bundle = %name,
                    %mode,
                    "theme state already initialized, ignoring"
                );
                false
            }
        }
    }

    /// Initialize with the built-in Spark bundle in light mode
    pub fn init_default() -> bool {
        Self::init(SparkTheme::bundle(), ThemeMode::Light)
    }

    pub fn try_get() -> Option<&'static ThemeState> {
        THEME_STATE.get()
    }

    /// Selected mode, `Light` when never initialized
    pub fn mode() -> ThemeMode {
        Self::try_get().map(|state| state.mode).unwrap_or_default()
    }

    pub fn bundle(&self) -> &ThemeBundle {
        &self.bundle
    }

    pub fn current_mode(&self) -> ThemeMode {
        self.mode
    }

    /// Theme for the selected mode
    pub fn theme(&self) -> &Theme {
        self.bundle.for_mode(self.mode)
    }
}
