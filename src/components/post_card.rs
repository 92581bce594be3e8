//! Post Card Component
//!
//! Listing card used by the bookmarks view.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::models::Post;
use super::DeleteConfirmButton;

#[component]
pub fn PostCard(
    post: Post,
    #[prop(into)] on_like: Callback<String>,
    /// Structural change: the parent drops the card and re-fetches
    #[prop(into)] on_remove_bookmark: Callback<String>,
) -> impl IntoView {
    let id_like = post.id.clone();
    let id_remove = post.id.clone();
    let like_count = post.likes.len();

    view! {
        <article class="post-card">
            <div class="post-card-header">
                <span class=format!("type-badge {}", post.post_type.as_str())>
                    {post.post_type.as_str()}
                </span>
                <A attr:class="post-card-title" href=format!("/posts/{}", post.id)>
                    {post.title.clone()}
                </A>
                <DeleteConfirmButton
                    button_class="bookmark-remove-btn"
                    confirm_label="Remove?"
                    on_confirm=move |_: ()| on_remove_bookmark.run(id_remove.clone())
                />
            </div>
            <div class="post-card-meta">
                <span class="post-card-author">{post.author.name.clone()}</span>
                <span class="post-card-date">
                    {post.created_at.format("%Y-%m-%d").to_string()}
                </span>
                <span class="post-card-views">{post.views} " views"</span>
            </div>
            <div class="post-card-tags">
                {post
                    .tags
                    .iter()
                    .map(|tag| view! { <span class="tag">{tag.clone()}</span> })
                    .collect_view()}
            </div>
            <div class="post-card-actions">
                <button class="like-btn" on:click=move |_| on_like.run(id_like.clone())>
                    "♥ " {like_count}
                </button>
            </div>
        </article>
    }
}
