//! Delete Confirm Button Component
//!
//! Two-step inline delete: the first click arms the button, the second
//! confirms. Arming is local state only; nothing is issued until confirm.

use leptos::prelude::*;

#[component]
pub fn DeleteConfirmButton(
    /// CSS class for the unarmed button
    #[prop(into)] button_class: String,
    /// Prompt shown while armed
    #[prop(into, default = "Delete?".to_string())] confirm_label: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (armed, set_armed) = signal(false);

    view! {
        <Show
            when=move || armed.get()
            fallback=move || {
                let class = button_class.clone();
                view! {
                    <button
                        class=class
                        on:click=move |ev: web_sys::MouseEvent| {
                            ev.stop_propagation();
                            set_armed.set(true);
                        }
                    >
                        "×"
                    </button>
                }
            }
        >
            <span class="delete-confirm">
                <span class="delete-confirm-text">{confirm_label.clone()}</span>
                <button
                    class="confirm-btn"
                    on:click=move |ev: web_sys::MouseEvent| {
                        ev.stop_propagation();
                        set_armed.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev: web_sys::MouseEvent| {
                        ev.stop_propagation();
                        set_armed.set(false);
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
