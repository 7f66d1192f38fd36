//! Global theme state
//!
//! Components resolve against the process-wide theme snapshot held here.
//! Call [`ThemeState::init`] (or [`ThemeState::init_default`]) once at
//! startup; use [`ThemeState::set_theme`] to swap themes at runtime.
//!
//! ```
//! use tessel_theme::ThemeState;
//!
//! ThemeState::init_default();
//! let theme = ThemeState::get().theme();
//! assert_eq!(theme.spacing(1.0), 8.0);
//! ```

use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use crate::theme::Theme;

static THEME_STATE: OnceLock<ThemeState> = OnceLock::new();

/// Holder of the current theme snapshot
#[derive(Debug)]
pub struct ThemeState {
    theme: RwLock<Arc<Theme>>,
}

impl ThemeState {
    /// Initialize the global theme
    ///
    /// A second call keeps the existing theme; use `set_theme` to replace it.
    pub fn init(theme: Theme) {
        let state = ThemeState {
            theme: RwLock::new(Arc::new(theme)),
        };
        if THEME_STATE.set(state).is_err() {
            tracing::warn!("ThemeState already initialized; use set_theme to replace the theme");
        } else {
            tracing::debug!("ThemeState initialized");
        }
    }

    /// Initialize the global theme with `Theme::default()`
    pub fn init_default() {
        if !Self::is_initialized() {
            Self::init(Theme::default());
        }
    }

    /// Get the singleton instance
    ///
    /// # Panics
    ///
    /// Panics if `init()` has not been called.
    pub fn get() -> &'static ThemeState {
        THEME_STATE
            .get()
            .expect("ThemeState not initialized. Call ThemeState::init() at app startup.")
    }

    /// Try to get the singleton (returns None if not initialized)
    pub fn try_get() -> Option<&'static ThemeState> {
        THEME_STATE.get()
    }

    /// Check if the theme has been initialized
    pub fn is_initialized() -> bool {
        THEME_STATE.get().is_some()
    }

    /// Current theme snapshot
    pub fn theme(&self) -> Arc<Theme> {
        self.theme
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the current theme
    ///
    /// Snapshots already handed out stay valid and unchanged.
    pub fn set_theme(&self, theme: Theme) {
        *self.theme.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(theme);
        tracing::debug!("Theme replaced");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init_theme() -> &'static ThemeState {
        ThemeState::try_get().unwrap_or_else(|| {
            ThemeState::init_default();
            ThemeState::get()
        })
    }

    #[test]
    fn test_init_is_idempotent() {
        let state = init_theme();
        ThemeState::init_default();
        assert!(ThemeState::is_initialized());
        assert!(std::ptr::eq(state, ThemeState::get()));
    }

    #[test]
    fn test_snapshot_survives_replacement() {
        let state = init_theme();
        let before = state.theme();

        state.set_theme((*before).clone());

        let after = state.theme();
        assert!(!Arc::ptr_eq(&before, &after));
        assert_eq!(*before, *after);
    }
}
