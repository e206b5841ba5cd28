//! Mobile menu and scroll-spy state.
//!
//! DESIGN
//! ======
//! The scroll handler measures sections and hands the bounds here; the
//! decision of which link is active is pure so it can be tested with
//! synthetic layouts.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::consts::{NAV_LINK_CLASS, SCROLL_SPY_OFFSET_PX};

/// Vertical extent of one `section[id]`, in document coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    /// Half-open containment: `top <= pos < top + height`.
    #[must_use]
    pub fn contains(&self, pos: f64) -> bool {
        pos >= self.top && pos < self.top + self.height
    }
}

/// The section that counts as current for a given scroll offset.
///
/// Overlapping sections resolve to the last match in document order, so a
/// nested or overlapping later section takes precedence.
#[must_use]
pub fn section_at(sections: &[SectionBounds], scroll_y: f64) -> Option<&str> {
    let pos = scroll_y + SCROLL_SPY_OFFSET_PX;
    sections.iter().rev().find(|s| s.contains(pos)).map(|s| s.id.as_str())
}

/// Section id referenced by an in-page link (`"#contact"` → `"contact"`).
#[must_use]
pub fn section_id_from_href(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Section the page-level click fallback should scroll to for an anchor with
/// this `href` and class list. Navbar links are excluded.
#[must_use]
pub fn fallback_scroll_target<'a>(href: &'a str, class_name: &str) -> Option<&'a str> {
    if class_name.split_whitespace().any(|c| c == NAV_LINK_CLASS) {
        return None;
    }
    section_id_from_href(href)
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub menu_open: bool,
    pub active: Option<String>,
}

impl NavState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Mark exactly one link active.
    pub fn set_active(&mut self, section_id: &str) {
        self.active = Some(section_id.to_owned());
    }

    #[must_use]
    pub fn is_active(&self, section_id: &str) -> bool {
        self.active.as_deref() == Some(section_id)
    }

    /// Result of a nav link click once the scroll has been attempted.
    ///
    /// A link whose section is missing changes nothing.
    pub fn handle_nav_click(&mut self, section_id: &str, scrolled: bool) {
        if !scrolled {
            return;
        }
        self.close_menu();
        self.set_active(section_id);
    }

    /// Recompute the active link from the current scroll position.
    ///
    /// Clears the active link when no section contains the position.
    /// Returns `true` when the active link changed.
    pub fn update_active_link(&mut self, sections: &[SectionBounds], scroll_y: f64) -> bool {
        let next = section_at(sections, scroll_y).map(str::to_owned);
        if next == self.active {
            return false;
        }
        self.active = next;
        true
    }
}
