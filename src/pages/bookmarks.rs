//! Bookmarks Page
//!
//! Collection list view with a cache-first first paint: the session-scoped
//! 5-minute cache is consulted before the first network call completes,
//! then unconditionally overwritten by the response.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::components::PostCard;
use crate::lists::{self, ListSort};
use crate::models::Post;
use crate::session::{self, use_session, Gate, SessionStateStoreFields};
use crate::storage;

#[component]
pub fn Bookmarks() -> impl IntoView {
    let session = use_session();

    let (posts, set_posts) = signal(Vec::<Post>::new());
    // set once the first network response has landed; the cache is never
    // consulted again after that
    let (loaded, set_loaded) = signal(false);
    let (sort, set_sort) = signal(ListSort::Recent);
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    // The bookmarks endpoint is per-user; send visitors to the login view
    {
        let navigate = use_navigate();
        Effect::new(move |_| {
            if let Gate::RedirectToLogin = session::gate(session::current_user_id(&session)) {
                navigate("/login", Default::default());
            }
        });
    }

    Effect::new(move |_| {
        let _ = reload_trigger.get();
        if session.user().get().is_none() {
            return;
        }
        if !loaded.get_untracked() {
            if let Some(cached) = storage::read_bookmarks_cache() {
                set_posts.set(cached);
            }
        }
        spawn_local(async move {
            match api::list_bookmarks().await {
                Ok(fresh) => {
                    storage::write_bookmarks_cache(&fresh);
                    set_posts.set(fresh);
                    set_loaded.set(true);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[BOOKMARKS] load failed: {}", e).into());
                }
            }
        });
    });

    // Pure client-side sort; never round-trips
    let visible = Memo::new(move |_| posts.with(|ps| lists::sorted(ps, sort.get())));

    let on_like = Callback::new(move |post_id: String| {
        spawn_local(async move {
            match api::like_post(&post_id).await {
                Ok(resp) => set_posts.update(|ps| lists::update_likes(ps, &post_id, resp.likes)),
                Err(e) => {
                    web_sys::console::error_1(&format!("[BOOKMARKS] like failed: {}", e).into());
                }
            }
        });
    });

    // Structural change: drop the card locally so it disappears right away,
    // then re-fetch so the array matches the server again.
    let on_remove_bookmark = Callback::new(move |post_id: String| {
        spawn_local(async move {
            match api::bookmark_post(&post_id).await {
                Ok(resp) => {
                    if !resp.bookmarked {
                        set_posts.update(|ps| lists::remove_by_id(ps, &post_id));
                        set_reload_trigger.update(|v| *v += 1);
                    }
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[BOOKMARKS] remove failed: {}", e).into());
                    if let Some(window) = web_sys::window() {
                        let _ = window.alert_with_message("Could not remove the bookmark.");
                    }
                }
            }
        });
    });

    view! {
        <div class="bookmarks-page">
            <header class="page-header">
                <h1>"Bookmarks"</h1>
                <select
                    class="sort-select"
                    on:change=move |ev| {
                        set_sort.set(ListSort::from_str(&event_target_value(&ev)));
                    }
                >
                    <option value="recent">"Most recent"</option>
                    <option value="liked">"Most liked"</option>
                    <option value="type">"By type"</option>
                </select>
            </header>
            <Show when=move || visible.get().is_empty()>
                <p class="empty-state">"Nothing bookmarked yet."</p>
            </Show>
            <div class="post-card-grid">
                {move || {
                    visible
                        .get()
                        .into_iter()
                        .map(|post| {
                            view! {
                                <PostCard
                                    post=post
                                    on_like=on_like
                                    on_remove_bookmark=on_remove_bookmark
                                />
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
