//! Summary Panel Component
//!
//! Renders the AI summary by phase: a generate button while idle, a spinner
//! while processing, the summary once ready, and an error with a retry
//! button on failure.

use leptos::prelude::*;

use crate::models::Summary;

#[component]
pub fn SummaryPanel(
    #[prop(into)] summary: Signal<Summary>,
    #[prop(into)] on_generate: Callback<()>,
) -> impl IntoView {
    view! {
        <section class="summary-panel">
            {move || match summary.get() {
                Summary::Idle => view! {
                    <button class="summary-generate-btn" on:click=move |_| on_generate.run(())>
                        "Generate AI Summary"
                    </button>
                }
                .into_any(),
                Summary::Processing => view! {
                    <div class="summary-processing">
                        <span class="spinner"></span>
                        <span>"Generating summary..."</span>
                        <button class="summary-generate-btn" disabled=true>
                            "Generate AI Summary"
                        </button>
                    </div>
                }
                .into_any(),
                Summary::Ready { tldr, key_points, model, generated_at } => view! {
                    <div class="summary-ready">
                        <h3>"TL;DR"</h3>
                        <p class="summary-tldr">{tldr}</p>
                        <ul class="summary-points">
                            {key_points
                                .into_iter()
                                .map(|point| view! { <li>{point}</li> })
                                .collect_view()}
                        </ul>
                        <p class="summary-meta">
                            {model.map(|m| format!("{} · ", m)).unwrap_or_default()}
                            {generated_at.format("%Y-%m-%d %H:%M").to_string()}
                        </p>
                        <button class="summary-generate-btn" on:click=move |_| on_generate.run(())>
                            "Regenerate"
                        </button>
                    </div>
                }
                .into_any(),
                Summary::Error { message } => view! {
                    <div class="summary-error">
                        <p class="error-message">{message}</p>
                        <button class="summary-retry-btn" on:click=move |_| on_generate.run(())>
                            "Try Again"
                        </button>
                    </div>
                }
                .into_any(),
            }}
        </section>
    }
}
