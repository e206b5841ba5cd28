//! Image grid and full-screen viewer.

use leptos::prelude::*;

use crate::state::gallery::GalleryState;
use crate::util::dom;

#[component]
pub fn Gallery() -> impl IntoView {
    let gallery = expect_context::<RwSignal<GalleryState>>();

    // Page scroll is suspended while the viewer is open.
    Effect::new(move || dom::set_page_scroll_locked(gallery.with(GalleryState::is_open)));

    let key_listener = window_event_listener(leptos::ev::keydown, move |ev| {
        if !gallery.with_untracked(GalleryState::is_open) {
            return;
        }
        let key = ev.key();
        gallery.maybe_update(|g| g.handle_key(&key));
    });
    on_cleanup(move || key_listener.remove());

    let items = gallery
        .with_untracked(GalleryState::images)
        .iter()
        .enumerate()
        .map(|(index, url)| {
            view! {
                <div
                    class="gallery-item"
                    data-index=index.to_string()
                    on:click=move |_| {
                        gallery.update(|g| {
                            g.open_modal(index);
                        });
                    }
                >
                    <img src=*url alt=format!("Gallery Image {}", index + 1) loading="lazy"/>
                    <div class="gallery-overlay">
                        <i class="fas fa-search-plus"></i>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="gallery" class="gallery">
            <h2 class="section-title">"Gallery"</h2>
            <div id="gallery-grid" class="gallery-grid">
                {items}
            </div>
            <div
                id="gallery-modal"
                class="modal"
                style:display=move || if gallery.with(GalleryState::is_open) { "block" } else { "none" }
                on:click=move |_| gallery.update(GalleryState::close_modal)
            >
                <span
                    id="modal-close"
                    class="modal-close"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        gallery.update(GalleryState::close_modal);
                    }
                >
                    "×"
                </span>
                <img
                    id="modal-image"
                    class="modal-content"
                    alt="Gallery Image"
                    src=move || gallery.with(|g| g.current_image().unwrap_or_default())
                    on:click=move |ev| ev.stop_propagation()
                />
                <button
                    id="prev-btn"
                    class="modal-nav modal-prev"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        gallery.update(GalleryState::previous_image);
                    }
                >
                    <i class="fas fa-chevron-left"></i>
                </button>
                <button
                    id="next-btn"
                    class="modal-nav modal-next"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        gallery.update(GalleryState::next_image);
                    }
                >
                    <i class="fas fa-chevron-right"></i>
                </button>
            </div>
        </section>
    }
}
