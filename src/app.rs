//! Root application component: state construction and page-level listeners.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::{
    chart_host::ChartHost, contact_form::ContactForm, features::Features, footer::Footer, gallery::Gallery,
    hero::Hero, navbar::Navbar, toast::Toast,
};
use crate::consts::CTA_TARGET_SECTION;
use crate::data::FEATURES;
use crate::state::{
    form::FormState, gallery::GalleryState, nav::NavState, reveal::RevealState, search::SearchState,
    theme::ThemeState, toast::ToastState,
};
use crate::util::dom;
use crate::util::storage::BrowserStorage;

#[cfg(feature = "csr")]
use wasm_bindgen::JsCast;

/// Bumped on every window resize; the chart host redraws when it changes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewportState {
    pub resize_seq: u64,
}

/// Section targeted by the closest in-page anchor around the click target,
/// unless that anchor is a navbar link.
#[cfg(feature = "csr")]
fn anchor_target(ev: &leptos::ev::MouseEvent) -> Option<String> {
    let target = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    let anchor = target.closest("a[href^=\"#\"]").ok()??;
    let href = anchor.get_attribute("href")?;
    crate::state::nav::fallback_scroll_target(&href, &anchor.class_name()).map(str::to_owned)
}

/// Root application component.
///
/// Creates every piece of page state exactly once, in dependency order, and
/// provides it to the components that own each region.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = RwSignal::new(ThemeState::load(&BrowserStorage));
    let nav = RwSignal::new(NavState::default());
    let search = RwSignal::new(SearchState::default());
    let gallery = RwSignal::new(GalleryState::default());
    let viewport = RwSignal::new(ViewportState::default());
    let form = RwSignal::new(FormState::default());
    let toast = RwSignal::new(ToastState::default());
    let reveal = RwSignal::new(RevealState::new(FEATURES.len()));

    provide_context(theme);
    provide_context(nav);
    provide_context(search);
    provide_context(gallery);
    provide_context(viewport);
    provide_context(form);
    provide_context(toast);
    provide_context(reveal);

    // Applies the persisted theme on load and every toggle after.
    Effect::new(move || dom::apply_theme(theme.with(|t| t.theme)));

    let on_theme_toggle = Callback::new(move |()| {
        theme.update(|t| {
            t.toggle(&mut BrowserStorage);
        });
    });

    let on_cta = Callback::new(move |()| {
        dom::scroll_to_section(CTA_TARGET_SECTION);
    });

    let resize_listener = window_event_listener(leptos::ev::resize, move |_| {
        viewport.update(|v| v.resize_seq += 1);
    });

    // Fallback smooth scroll for in-page links outside the navbar, which
    // scrolls through its own handlers.
    let anchor_listener = window_event_listener(leptos::ev::click, move |ev| {
        if ev.default_prevented() {
            return;
        }
        #[cfg(feature = "csr")]
        if let Some(id) = anchor_target(&ev) {
            ev.prevent_default();
            dom::scroll_to_section(&id);
        }
    });

    on_cleanup(move || {
        resize_listener.remove();
        anchor_listener.remove();
    });

    view! {
        <Title text="Landing"/>
        <Navbar on_theme_toggle/>
        <main>
            <Hero on_cta/>
            <Features/>
            <Gallery/>
            <ChartHost/>
            <ContactForm/>
        </main>
        <Footer/>
        <Toast/>
    }
}

/// Mount [`App`] once the document has finished parsing.
#[cfg(feature = "csr")]
pub fn mount() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("no document; page not mounted");
        return;
    };
    if document.ready_state() != "loading" {
        leptos::mount::mount_to_body(App);
        return;
    }
    let on_ready = wasm_bindgen::closure::Closure::once_into_js(|| leptos::mount::mount_to_body(App));
    if let Err(err) = document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref()) {
        log::warn!("failed to defer mount: {err:?}");
    }
}
