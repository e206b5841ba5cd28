//! Feature cards that fade in the first time they scroll into view.
//!
//! An `IntersectionObserver` reports visibility; [`RevealState`] records it
//! one way and each revealed card is unobserved so it is never reconsidered.

use leptos::prelude::*;

use crate::consts::REVEAL_CLASS;
use crate::data::FEATURES;
use crate::state::reveal::RevealState;

#[cfg(feature = "csr")]
use crate::consts::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
#[cfg(feature = "csr")]
use crate::state::reveal::Intersection;
#[cfg(feature = "csr")]
use wasm_bindgen::{JsCast, JsValue, closure::Closure};

#[cfg(feature = "csr")]
fn card_index(el: &web_sys::Element) -> Option<usize> {
    el.get_attribute("data-index")?.parse().ok()
}

/// Start observing every `.feature-card` under `grid`.
#[cfg(feature = "csr")]
fn observe_cards(grid: &web_sys::Element, reveal: RwSignal<RevealState>) -> Result<(), JsValue> {
    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            let entries = entries
                .iter()
                .filter_map(|e| e.dyn_into::<web_sys::IntersectionObserverEntry>().ok())
                .collect::<Vec<_>>();
            let reports = entries
                .iter()
                .filter_map(|entry| {
                    let index = card_index(&entry.target())?;
                    Some(Intersection { index, is_intersecting: entry.is_intersecting() })
                })
                .collect::<Vec<_>>();

            let mut newly = Vec::new();
            reveal.update(|r| newly = r.apply(&reports));
            for entry in &entries {
                let target = entry.target();
                if card_index(&target).is_some_and(|i| newly.contains(&i)) {
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer = web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

    let cards = grid.query_selector_all(".feature-card")?;
    for i in 0..cards.length() {
        if let Some(card) = cards.get(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) {
            observer.observe(&card);
        }
    }
    // The observer lives as long as the page.
    callback.forget();
    Ok(())
}

#[component]
pub fn Features() -> impl IntoView {
    let reveal = expect_context::<RwSignal<RevealState>>();
    let grid_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "csr")]
    Effect::new(move || {
        let Some(grid) = grid_ref.get() else {
            return;
        };
        if let Err(err) = observe_cards(&grid, reveal) {
            log::warn!("scroll reveal disabled: {err:?}");
        }
    });

    let cards = FEATURES
        .iter()
        .enumerate()
        .map(|(index, feature)| {
            let class = move || {
                if reveal.with(|r| r.is_revealed(index)) {
                    format!("feature-card {REVEAL_CLASS}")
                } else {
                    "feature-card".to_owned()
                }
            };
            view! {
                <div class=class data-index=index.to_string()>
                    <div class="feature-icon">
                        <i class=feature.icon></i>
                    </div>
                    <h3>{feature.title}</h3>
                    <p>{feature.desc}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="features" class="features">
            <h2 class="section-title">"Features"</h2>
            <div class="features-grid" node_ref=grid_ref>
                {cards}
            </div>
        </section>
    }
}
