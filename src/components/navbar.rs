//! Fixed navigation bar: links with scroll-spy, mobile menu, theme toggle.

use leptos::prelude::*;

use crate::components::search_box::SearchBox;
use crate::consts::NAV_LINK_CLASS;
use crate::data::NAV_ITEMS;
use crate::state::nav::NavState;
use crate::state::theme::ThemeState;
use crate::util::dom;

#[cfg(feature = "csr")]
use wasm_bindgen::JsCast;

#[component]
pub fn Navbar(on_theme_toggle: Callback<()>) -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();
    let theme = expect_context::<RwSignal<ThemeState>>();
    let toggle_ref = NodeRef::<leptos::html::Div>::new();
    let menu_ref = NodeRef::<leptos::html::Ul>::new();

    // Scroll-spy runs synchronously on every scroll event.
    let scroll_listener = window_event_listener(leptos::ev::scroll, move |_| {
        let sections = dom::section_bounds();
        let scroll_y = dom::scroll_y();
        nav.maybe_update(|n| n.update_active_link(&sections, scroll_y));
    });

    let outside_listener = window_event_listener(leptos::ev::click, move |ev| {
        if !nav.with_untracked(|n| n.menu_open) {
            return;
        }
        #[cfg(feature = "csr")]
        {
            let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok()) else {
                return;
            };
            let inside_toggle = toggle_ref.get_untracked().is_some_and(|el| el.contains(Some(&target)));
            let inside_menu = menu_ref.get_untracked().is_some_and(|el| el.contains(Some(&target)));
            if !inside_toggle && !inside_menu {
                nav.update(NavState::close_menu);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = ev;
        }
    });

    on_cleanup(move || {
        scroll_listener.remove();
        outside_listener.remove();
    });

    let links = NAV_ITEMS
        .iter()
        .map(|item| {
            let id = item.section_id;
            let on_click = move |ev: leptos::ev::MouseEvent| {
                ev.prevent_default();
                let scrolled = dom::scroll_to_section(id);
                nav.update(|n| n.handle_nav_click(id, scrolled));
            };
            view! {
                <li class="nav-item">
                    <a
                        href=format!("#{id}")
                        class=NAV_LINK_CLASS
                        class:active=move || nav.with(|n| n.is_active(id))
                        on:click=on_click
                    >
                        {item.label}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <nav class="navbar">
            <div class="nav-container">
                <a href="#home" class="nav-logo">"Landing"</a>
                <ul id="nav-menu" class="nav-menu" class:active=move || nav.with(|n| n.menu_open) node_ref=menu_ref>
                    {links}
                </ul>
                <div class="nav-actions">
                    <SearchBox/>
                    <button
                        id="theme-toggle"
                        class="theme-toggle"
                        title="Toggle theme"
                        on:click=move |_| on_theme_toggle.run(())
                    >
                        <i class=move || theme.with(|t| t.theme.icon_class())></i>
                    </button>
                    <div
                        id="nav-toggle"
                        class="nav-toggle"
                        class:active=move || nav.with(|n| n.menu_open)
                        node_ref=toggle_ref
                        on:click=move |_| nav.update(NavState::toggle_menu)
                    >
                        <span class="bar"></span>
                        <span class="bar"></span>
                        <span class="bar"></span>
                    </div>
                </div>
            </div>
        </nav>
    }
}
