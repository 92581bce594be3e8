//! Answer List Component
//!
//! Answers under a question, with voting and (for the question's author)
//! accept buttons.

use leptos::prelude::*;

use crate::markdown::render_markdown;
use crate::models::{Answer, VoteDirection};

#[component]
pub fn AnswerList(
    #[prop(into)] answers: Signal<Vec<Answer>>,
    /// Only the question's author may accept
    #[prop(into)] can_accept: Signal<bool>,
    #[prop(into)] on_accept: Callback<String>,
    #[prop(into)] on_vote: Callback<(String, VoteDirection)>,
) -> impl IntoView {
    view! {
        <section class="answer-list">
            <h2>{move || format!("{} Answers", answers.get().len())}</h2>
            {move || {
                answers
                    .get()
                    .into_iter()
                    .map(|answer| {
                        let id_up = answer.id.clone();
                        let id_down = answer.id.clone();
                        let id_accept = answer.id.clone();
                        let accepted = answer.is_accepted;
                        view! {
                            <article class=move || {
                                if accepted { "answer accepted" } else { "answer" }
                            }>
                                <div class="answer-votes">
                                    <button
                                        class="vote-btn up"
                                        on:click=move |_| on_vote.run((id_up.clone(), VoteDirection::Up))
                                    >
                                        "▲"
                                    </button>
                                    <span class="answer-score">{answer.score()}</span>
                                    <button
                                        class="vote-btn down"
                                        on:click=move |_| on_vote.run((id_down.clone(), VoteDirection::Down))
                                    >
                                        "▼"
                                    </button>
                                </div>
                                <div class="answer-body" inner_html=render_markdown(&answer.body)></div>
                                <div class="answer-meta">
                                    <span class="answer-author">{answer.author.name.clone()}</span>
                                    <span class="answer-date">
                                        {answer.created_at.format("%Y-%m-%d %H:%M").to_string()}
                                    </span>
                                    <Show when=move || accepted>
                                        <span class="accepted-badge">"✓ Accepted"</span>
                                    </Show>
                                    <Show when=move || can_accept.get() && !accepted>
                                        <button
                                            class="accept-btn"
                                            on:click={
                                                let id_accept = id_accept.clone();
                                                move |_| on_accept.run(id_accept.clone())
                                            }
                                        >
                                            "Accept"
                                        </button>
                                    </Show>
                                </div>
                            </article>
                        }
                    })
                    .collect_view()
            }}
        </section>
    }
}
