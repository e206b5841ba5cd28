//! Direct document mutations that sit outside any one component's view.
//!
//! These touch `<html>`, `<body>` and page sections the Leptos tree does not
//! own reactively. Every function is a no-op (or returns nothing) on
//! non-browser builds so state tests never need a DOM.

use crate::state::nav::SectionBounds;
use crate::state::theme::Theme;

#[cfg(feature = "csr")]
use wasm_bindgen::JsCast;

#[cfg(feature = "csr")]
fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Set `data-theme` on the `<html>` element.
pub fn apply_theme(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        let Some(root) = document().and_then(|d| d.document_element()) else {
            log::warn!("no document element; theme not applied");
            return;
        };
        if let Err(err) = root.set_attribute("data-theme", theme.as_str()) {
            log::warn!("failed to set data-theme: {err:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

/// Suspend (`overflow: hidden`) or restore (`overflow: auto`) page scrolling.
pub fn set_page_scroll_locked(locked: bool) {
    #[cfg(feature = "csr")]
    {
        let Some(body) = document().and_then(|d| d.body()) else {
            return;
        };
        let value = if locked { "hidden" } else { "auto" };
        if let Err(err) = body.style().set_property("overflow", value) {
            log::warn!("failed to set body overflow: {err:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = locked;
    }
}

/// Smooth-scroll the element with `id` into view.
///
/// Returns `false` when no such element exists.
pub fn scroll_to_section(id: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        let Some(target) = document().and_then(|d| d.get_element_by_id(id)) else {
            log::debug!("scroll target #{id} not found");
            return false;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        target.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
        false
    }
}

/// Vertical scroll offset of the window in CSS pixels.
pub fn scroll_y() -> f64 {
    #[cfg(feature = "csr")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }
    #[cfg(not(feature = "csr"))]
    {
        0.0
    }
}

/// Offsets of every `section[id]` in document order.
pub fn section_bounds() -> Vec<SectionBounds> {
    #[cfg(feature = "csr")]
    {
        let Some(nodes) = document().and_then(|d| d.query_selector_all("section[id]").ok()) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
            .map(|el| SectionBounds {
                id: el.id(),
                top: f64::from(el.offset_top()),
                height: f64::from(el.offset_height()),
            })
            .collect()
    }
    #[cfg(not(feature = "csr"))]
    {
        Vec::new()
    }
}

/// Resolved value of a CSS custom property on `<html>`, trimmed.
pub fn css_variable(name: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let window = web_sys::window()?;
        let root = window.document()?.document_element()?;
        let style = window.get_computed_style(&root).ok().flatten()?;
        let value = style.get_property_value(name).ok()?;
        let value = value.trim();
        (!value.is_empty()).then(|| value.to_owned())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = name;
        None
    }
}
