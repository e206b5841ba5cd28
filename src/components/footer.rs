use leptos::prelude::*;

use crate::data::NAV_ITEMS;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <ul class="footer-links">
                {NAV_ITEMS
                    .iter()
                    .map(|item| view! { <li><a href=format!("#{}", item.section_id)>{item.label}</a></li> })
                    .collect_view()}
            </ul>
            <p class="footer-note">"Built with Rust and WebAssembly."</p>
        </footer>
    }
}
