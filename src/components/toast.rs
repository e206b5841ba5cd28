//! Toast banner and the helper that shows it for a fixed time.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

/// Show a toast and hide it again after `TOAST_DURATION_MS`.
pub fn show_toast(toast: RwSignal<ToastState>, message: &str, kind: ToastKind) {
    let mut seq = 0;
    toast.update(|t| seq = t.show(message, kind));
    #[cfg(feature = "csr")]
    {
        let timeout = gloo_timers::callback::Timeout::new(crate::consts::TOAST_DURATION_MS, move || {
            toast.maybe_update(|t| t.hide(seq));
        });
        timeout.forget();
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = seq;
    }
}

#[component]
pub fn Toast() -> impl IntoView {
    let toast = expect_context::<RwSignal<ToastState>>();

    view! {
        <div id="toast" class=move || toast.with(ToastState::class_name)>
            <i class="fas fa-check-circle"></i>
            <span id="toast-message">{move || toast.with(|t| t.message.clone())}</span>
        </div>
    }
}
