//! Light/dark theme preference.
//!
//! The preference lives in memory and is mirrored to one storage key. It is
//! read once at startup and overwritten on every toggle.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::consts::THEME_STORAGE_KEY;
use crate::util::storage::KeyValueStore;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value stored in `localStorage` and written to `data-theme`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon on the toggle button: a moon offers dark mode, a sun offers light.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => "fas fa-moon",
            Self::Dark => "fas fa-sun",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub theme: Theme,
}

impl ThemeState {
    /// Read the persisted theme, falling back to light when absent or invalid.
    pub fn load(store: &impl KeyValueStore) -> Self {
        let theme = store
            .get(THEME_STORAGE_KEY)
            .and_then(|raw| Theme::parse(&raw))
            .unwrap_or_default();
        Self { theme }
    }

    /// Flip the theme and persist the new value. Returns the new theme.
    pub fn toggle(&mut self, store: &mut impl KeyValueStore) -> Theme {
        self.theme = self.theme.toggled();
        store.set(THEME_STORAGE_KEY, self.theme.as_str());
        self.theme
    }
}
