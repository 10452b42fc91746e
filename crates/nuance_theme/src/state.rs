//! Global theme state singleton
//!
//! Tokens never change after [`ThemeState::init`]; only the active color
//! scheme can flip. Widgets read tokens during render without locking the
//! token data itself.

use std::sync::{Arc, Mutex, OnceLock, RwLock};

use tracing::debug;

use crate::theme::{ColorScheme, ThemeBundle};
use crate::tokens::TokenStore;

/// Global theme state instance
static THEME_STATE: OnceLock<ThemeState> = OnceLock::new();

/// Global redraw callback - set by the app layer to trigger UI updates
static REDRAW_CALLBACK: Mutex<Option<fn()>> = Mutex::new(None);

/// Set the redraw callback function
///
/// The app layer registers a function that requests a re-render when the
/// color scheme changes.
pub fn set_redraw_callback(callback: fn()) {
    if let Ok(mut slot) = REDRAW_CALLBACK.lock() {
        *slot = Some(callback);
    }
}

fn trigger_redraw() {
    let callback = REDRAW_CALLBACK.lock().ok().and_then(|slot| *slot);
    if let Some(callback) = callback {
        callback();
    }
}

/// Process-wide theme state
pub struct ThemeState {
    bundle: ThemeBundle,
    scheme: RwLock<ColorScheme>,
}

impl ThemeState {
    /// Initialize the global theme state (call once at app startup)
    ///
    /// Safe to call multiple times; the first call wins.
    pub fn init(bundle: ThemeBundle, scheme: ColorScheme) {
        let name = bundle.name().to_string();
        if THEME_STATE.set(ThemeState::new(bundle, scheme)).is_ok() {
            debug!("ThemeState::init - theme `{}`, scheme {:?}", name, scheme);
        }
    }

    /// Build a standalone state (tests, previews, multiple windows)
    pub fn new(bundle: ThemeBundle, scheme: ColorScheme) -> Self {
        Self {
            bundle,
            scheme: RwLock::new(scheme),
        }
    }

    /// Get the global theme state instance
    pub fn get() -> &'static ThemeState {
        THEME_STATE
            .get()
            .expect("ThemeState not initialized. Call ThemeState::init() at app startup.")
    }

    /// Try to get the global theme state (returns None if not initialized)
    pub fn try_get() -> Option<&'static ThemeState> {
        THEME_STATE.get()
    }

    pub fn bundle(&self) -> &ThemeBundle {
        &self.bundle
    }

    /// Get the current color scheme
    pub fn scheme(&self) -> ColorScheme {
        self.scheme
            .read()
            .map(|scheme| *scheme)
            .unwrap_or_else(|poisoned| *poisoned.into_inner())
    }

    /// Set the color scheme, requesting a redraw when it changes
    pub fn set_scheme(&self, scheme: ColorScheme) {
        let changed = {
            let mut current = self
                .scheme
                .write()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            if *current == scheme {
                false
            } else {
                debug!(
                    "ThemeState::set_scheme - switching from {:?} to {:?}",
                    *current, scheme
                );
                *current = scheme;
                true
            }
        };

        if changed {
            trigger_redraw();
        }
    }

    /// Toggle between light and dark mode
    pub fn toggle_scheme(&self) {
        self.set_scheme(self.scheme().toggle());
    }

    /// Tokens for the active scheme
    pub fn tokens(&self) -> Arc<TokenStore> {
        Arc::clone(self.bundle.for_scheme(self.scheme()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets;
    use std::cell::Cell;

    #[test]
    fn tokens_follow_scheme() {
        let state = ThemeState::new(presets::default_bundle(), ColorScheme::Light);
        let light = state.tokens();
        state.set_scheme(ColorScheme::Dark);
        let dark = state.tokens();

        assert_eq!(state.scheme(), ColorScheme::Dark);
        assert!(!Arc::ptr_eq(&light, &dark));
        assert!(Arc::ptr_eq(&dark, state.bundle().dark()));
    }

    #[test]
    fn tokens_are_shared_between_reads() {
        let state = ThemeState::new(presets::default_bundle(), ColorScheme::Light);
        assert!(Arc::ptr_eq(&state.tokens(), &state.tokens()));
    }

    thread_local! {
        static REDRAWS: Cell<usize> = const { Cell::new(0) };
    }

    fn count_redraw() {
        REDRAWS.with(|count| count.set(count.get() + 1));
    }

    #[test]
    fn redraw_fires_only_on_scheme_change() {
        set_redraw_callback(count_redraw);
        let state = ThemeState::new(presets::default_bundle(), ColorScheme::Light);

        state.set_scheme(ColorScheme::Light);
        assert_eq!(REDRAWS.with(Cell::get), 0);

        state.set_scheme(ColorScheme::Dark);
        assert_eq!(REDRAWS.with(Cell::get), 1);

        state.set_scheme(ColorScheme::Dark);
        state.toggle_scheme();
        assert_eq!(REDRAWS.with(Cell::get), 2);
    }

    #[test]
    fn first_init_wins() {
        ThemeState::init(presets::default_bundle(), ColorScheme::Dark);
        ThemeState::init(
            ThemeBundle::new("second", TokenStore::new(), TokenStore::new()),
            ColorScheme::Light,
        );

        let state = ThemeState::get();
        assert_eq!(state.bundle().name(), presets::DEFAULT_THEME_NAME);
        assert!(ThemeState::try_get().is_some());
    }

    #[test]
    fn toggle_scheme_round_trips() {
        let state = ThemeState::new(presets::default_bundle(), ColorScheme::Dark);
        state.toggle_scheme();
        assert_eq!(state.scheme(), ColorScheme::Light);
    }
}
