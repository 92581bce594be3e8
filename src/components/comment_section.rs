//! Comment Section Component
//!
//! Read-only comment list; comments have no edit or delete here.

use leptos::prelude::*;

use crate::models::Comment;

#[component]
pub fn CommentSection(#[prop(into)] comments: Signal<Vec<Comment>>) -> impl IntoView {
    view! {
        <section class="comment-section">
            <h2>{move || format!("{} Comments", comments.get().len())}</h2>
            {move || {
                comments
                    .get()
                    .into_iter()
                    .map(|comment| {
                        view! {
                            <div class="comment">
                                <span class="comment-author">{comment.author.name.clone()}</span>
                                <span class="comment-date">
                                    {comment.created_at.format("%Y-%m-%d %H:%M").to_string()}
                                </span>
                                <p class="comment-text">{comment.text.clone()}</p>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </section>
    }
}
