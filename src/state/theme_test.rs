use std::collections::HashMap;

use super::*;
#[cfg(not(feature = "csr"))]
use crate::util::storage::BrowserStorage;

#[derive(Default)]
struct MemoryStore(HashMap<String, String>);

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.0.insert(key.to_owned(), value.to_owned());
    }
}

fn store_with(value: &str) -> MemoryStore {
    let mut store = MemoryStore::default();
    store.set(THEME_STORAGE_KEY, value);
    store
}

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_round_trips_through_storage_string() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::parse(theme.as_str()), Some(theme));
    }
    assert_eq!(Theme::parse("solarized"), None);
    assert_eq!(Theme::parse("Dark"), None);
}

#[test]
fn icon_offers_the_other_theme() {
    assert_eq!(Theme::Light.icon_class(), "fas fa-moon");
    assert_eq!(Theme::Dark.icon_class(), "fas fa-sun");
}

// =============================================================
// ThemeState
// =============================================================

#[test]
fn load_defaults_to_light_when_absent() {
    assert_eq!(ThemeState::load(&MemoryStore::default()).theme, Theme::Light);
}

#[test]
fn load_defaults_to_light_when_unrecognised() {
    assert_eq!(ThemeState::load(&store_with("purple")).theme, Theme::Light);
}

#[test]
fn load_reads_persisted_dark() {
    assert_eq!(ThemeState::load(&store_with("dark")).theme, Theme::Dark);
}

#[test]
fn toggle_twice_returns_to_original() {
    let mut store = MemoryStore::default();
    let mut state = ThemeState::load(&store);
    let original = state.theme;
    state.toggle(&mut store);
    state.toggle(&mut store);
    assert_eq!(state.theme, original);
}

#[test]
fn persisted_flag_tracks_last_applied_theme() {
    let mut store = MemoryStore::default();
    let mut state = ThemeState::default();
    for _ in 0..5 {
        let applied = state.toggle(&mut store);
        assert_eq!(store.get(THEME_STORAGE_KEY).as_deref(), Some(applied.as_str()));
        assert_eq!(ThemeState::load(&store).theme, applied);
    }
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_storage_is_inert_outside_the_browser() {
    let mut store = BrowserStorage;
    store.set(THEME_STORAGE_KEY, "dark");
    assert_eq!(store.get(THEME_STORAGE_KEY), None);
    assert_eq!(ThemeState::load(&store).theme, Theme::Light);
}
