//! Contact form with inline validation and a simulated send.

use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::components::toast::show_toast;
use crate::consts::ERROR_BORDER_COLOR;
use crate::state::form::{Field, FormState};
#[cfg(feature = "csr")]
use crate::state::toast::ToastKind;
use crate::state::toast::ToastState;

#[cfg(feature = "csr")]
const SUCCESS_MESSAGE: &str = "Message sent successfully!";

/// One labelled input (or textarea) wired to validate on blur and clear on input.
#[component]
fn FormField(field: Field, label: &'static str, #[prop(optional)] multiline: bool) -> impl IntoView {
    let form = expect_context::<RwSignal<FormState>>();

    let value = move || form.with(|f| f.values.value(field).to_owned());
    let error = move || form.with(|f| f.error(field).map(|e| e.to_string()).unwrap_or_default());
    let border = move || if form.with(|f| f.error(field).is_some()) { ERROR_BORDER_COLOR } else { "" };
    let on_input = move |ev: leptos::ev::Event| form.update(|f| f.input(field, event_target_value(&ev)));
    let on_blur = move |_: leptos::ev::FocusEvent| {
        form.update(|f| {
            f.validate_field(field);
        });
    };

    let control = if multiline {
        view! {
            <textarea
                id=field.name()
                name=field.name()
                rows="5"
                style:border-color=border
                prop:value=value
                on:input=on_input
                on:blur=on_blur
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                id=field.name()
                name=field.name()
                type=if field == Field::Email { "email" } else { "text" }
                style:border-color=border
                prop:value=value
                on:input=on_input
                on:blur=on_blur
            />
        }
        .into_any()
    };

    view! {
        <div class="form-group">
            <label for=field.name()>{label}</label>
            {control}
            <span id=field.error_id() class="error-message">{error}</span>
        </div>
    }
}

#[component]
pub fn ContactForm() -> impl IntoView {
    let form = expect_context::<RwSignal<FormState>>();
    let toast = expect_context::<RwSignal<ToastState>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut start = false;
        form.update(|f| start = f.try_submit());
        if !start {
            return;
        }

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(crate::consts::SUBMIT_DELAY_MS).await;
            form.update(FormState::finish_submission);
            show_toast(toast, SUCCESS_MESSAGE, ToastKind::Success);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = toast;
        }
    };

    view! {
        <section id="contact" class="contact">
            <h2 class="section-title">"Get in Touch"</h2>
            <form id="contact-form" class="contact-form" novalidate=true on:submit=on_submit>
                <FormField field=Field::Name label="Name"/>
                <FormField field=Field::Email label="Email"/>
                <FormField field=Field::Message label="Message" multiline=true/>
                <button type="submit" class="submit-button" disabled=move || form.with(FormState::is_sending)>
                    <Show when=move || form.with(FormState::is_sending)>
                        <span class="loading"></span>
                        " "
                    </Show>
                    {move || form.with(FormState::submit_label)}
                </button>
            </form>
        </section>
    }
}
