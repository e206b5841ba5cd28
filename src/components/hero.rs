use leptos::prelude::*;

#[component]
pub fn Hero(on_cta: Callback<()>) -> impl IntoView {
    view! {
        <section id="home" class="hero">
            <div class="hero-content">
                <h1 class="hero-title">"Build pages people enjoy using"</h1>
                <p class="hero-subtitle">
                    "Responsive layouts, a remembered theme, instant search and smooth motion."
                </p>
                <button id="cta-button" class="cta-button" on:click=move |_| on_cta.run(())>
                    "Explore Features"
                </button>
            </div>
        </section>
    }
}
