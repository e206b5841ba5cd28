//! Search input with a dropdown of highlighted matches.

use leptos::prelude::*;

use crate::state::search::{NO_RESULTS_TEXT, SearchResults, SearchState};

#[cfg(feature = "csr")]
use wasm_bindgen::JsCast;

#[component]
pub fn SearchBox() -> impl IntoView {
    let search = expect_context::<RwSignal<SearchState>>();
    let wrapper_ref = NodeRef::<leptos::html::Div>::new();

    // The input and the panel share one wrapper; clicks anywhere else dismiss.
    let outside_listener = window_event_listener(leptos::ev::click, move |ev| {
        if !search.with_untracked(|s| s.open) {
            return;
        }
        #[cfg(feature = "csr")]
        {
            let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok()) else {
                return;
            };
            if !wrapper_ref.get_untracked().is_some_and(|el| el.contains(Some(&target))) {
                search.update(SearchState::dismiss);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = ev;
        }
    });
    on_cleanup(move || outside_listener.remove());

    let results = move || match search.with(SearchState::results) {
        SearchResults::Hidden => ().into_any(),
        SearchResults::NoMatches => view! { <div class="search-result-item">{NO_RESULTS_TEXT}</div> }.into_any(),
        SearchResults::Matches(items) => items
            .into_iter()
            .map(|h| {
                view! {
                    <div class="search-result-item">
                        {h.before}
                        <strong>{h.matched}</strong>
                        {h.after}
                    </div>
                }
            })
            .collect_view()
            .into_any(),
    };

    view! {
        <div class="search-container" node_ref=wrapper_ref>
            <input
                id="search-input"
                class="search-input"
                type="text"
                placeholder="Search..."
                autocomplete="off"
                prop:value=move || search.with(|s| s.query.clone())
                on:input=move |ev| search.update(|s| s.handle_search(&event_target_value(&ev)))
                on:focus=move |_| search.update(SearchState::focus)
            />
            <div
                id="search-results"
                class="search-results"
                style:display=move || if search.with(SearchState::is_visible) { "block" } else { "none" }
            >
                {results}
            </div>
        </div>
    }
}
