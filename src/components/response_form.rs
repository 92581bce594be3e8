//! Response Form Component
//!
//! Shared input for answers and comments. The parent owns the buffer so it
//! can clear it only after the server confirms the submission.

use leptos::prelude::*;

#[component]
pub fn ResponseForm(
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
    #[prop(into)] placeholder: String,
    #[prop(into)] submit_label: String,
    #[prop(into)] submitting: Signal<bool>,
    #[prop(into)] on_submit: Callback<()>,
) -> impl IntoView {
    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if value.get().trim().is_empty() || submitting.get() {
            return;
        }
        on_submit.run(());
    };

    view! {
        <form class="response-form" on:submit=submit>
            <textarea
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
            ></textarea>
            <button type="submit" disabled=move || submitting.get()>
                {submit_label}
            </button>
        </form>
    }
}
