//! Post Detail Page
//!
//! Loads one post aggregate and serializes every user-initiated mutation
//! against it. Merge semantics live in `crate::detail`; this component owns
//! the signals and the network calls.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::api;
use crate::components::{
    AnswerList, CommentSection, DeleteConfirmButton, ResponseForm, SummaryPanel, TocSidebar,
};
use crate::detail;
use crate::markdown::{extract_toc, render_markdown};
use crate::models::{Collection, Post, PostType, Summary, VoteDirection};
use crate::pdf;
use crate::session::{self, use_session, Gate, SessionStateStoreFields};

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[component]
pub fn PostDetail() -> impl IntoView {
    let params = use_params_map();
    let post_id = Memo::new(move |_| params.with(|p| p.get("id").unwrap_or_default()));
    let session = use_session();
    let navigate = use_navigate();

    let (post, set_post) = signal::<Option<Post>>(None);
    let (not_found, set_not_found) = signal(false);
    let (response_text, set_response_text) = signal(String::new());
    let (submitting, set_submitting) = signal(false);
    let (collections, set_collections) = signal(Vec::<Collection>::new());
    let (show_collections, set_show_collections) = signal(false);
    let (editing, set_editing) = signal(false);
    let (edit_title, set_edit_title) = signal(String::new());
    let (edit_body, set_edit_body) = signal(String::new());
    // Bumped after structural changes that need server-computed fields
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    // Load the aggregate on mount, on id change and on reload
    Effect::new(move |_| {
        let _ = reload_trigger.get();
        let id = post_id.get();
        if id.is_empty() {
            return;
        }
        spawn_local(async move {
            match api::get_post(&id).await {
                Ok(loaded) => {
                    set_post.set(Some(loaded));
                    set_not_found.set(false);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[DETAIL] load failed: {}", e).into());
                    // keep prior state; flag not-found only when there is none
                    if post.get_untracked().is_none() {
                        set_not_found.set(true);
                    }
                }
            }
        });
    });

    // Collections are only meaningful for a logged-in user
    let logged_in = Memo::new(move |_| session.user().with(|u| u.is_some()));
    Effect::new(move |_| {
        if !logged_in.get() {
            set_collections.set(Vec::new());
            return;
        }
        spawn_local(async move {
            if let Ok(loaded) = api::list_collections().await {
                set_collections.set(loaded);
            }
        });
    });

    let is_author = Memo::new(move |_| {
        let uid = session::current_user_id(&session);
        post.with(|p| matches!((p, uid), (Some(p), Some(uid)) if p.author.id == uid))
    });
    let is_question =
        Memo::new(move |_| post.with(|p| matches!(p, Some(p) if p.post_type == PostType::Question)));
    let is_bookmarked = Memo::new(move |_| {
        let uid = session::current_user_id(&session);
        post.with(|p| matches!((p, uid), (Some(p), Some(uid)) if p.bookmarked_by.contains(&uid)))
    });
    let is_following = Memo::new(move |_| {
        let author = post.with(|p| p.as_ref().map(|p| p.author.id.clone()));
        match (session.user().get(), author) {
            (Some(user), Some(author)) => user.following.contains(&author),
            _ => false,
        }
    });

    let like = {
        let navigate = navigate.clone();
        Callback::new(move |_: ()| {
            let Gate::Proceed { .. } = session::gate(session::current_user_id(&session)) else {
                navigate("/login", Default::default());
                return;
            };
            let id = post_id.get_untracked();
            spawn_local(async move {
                match api::like_post(&id).await {
                    Ok(resp) => set_post.update(|p| {
                        if let Some(p) = p {
                            detail::replace_likes(p, resp.likes);
                        }
                    }),
                    Err(e) => {
                        web_sys::console::error_1(&format!("[DETAIL] like failed: {}", e).into());
                        alert("Could not like this post.");
                    }
                }
            });
        })
    };

    let bookmark = {
        let navigate = navigate.clone();
        Callback::new(move |_: ()| {
            let Gate::Proceed { .. } = session::gate(session::current_user_id(&session)) else {
                navigate("/login", Default::default());
                return;
            };
            let id = post_id.get_untracked();
            spawn_local(async move {
                match api::bookmark_post(&id).await {
                    Ok(resp) => set_post.update(|p| {
                        if let Some(p) = p {
                            detail::replace_bookmarks(p, resp.bookmarked_by);
                        }
                    }),
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("[DETAIL] bookmark failed: {}", e).into(),
                        );
                        alert("Could not bookmark this post.");
                    }
                }
            });
        })
    };

    // Routes to create-answer for questions, create-comment otherwise; the
    // input buffer is cleared only on success, and a full re-fetch picks up
    // the server-computed fields instead of an optimistic insert.
    let submit_response = {
        let navigate = navigate.clone();
        Callback::new(move |_: ()| {
            let Gate::Proceed { .. } = session::gate(session::current_user_id(&session)) else {
                navigate("/login", Default::default());
                return;
            };
            let Some(post_type) = post.with_untracked(|p| p.as_ref().map(|p| p.post_type)) else {
                return;
            };
            let id = post_id.get_untracked();
            let text = response_text.get_untracked();
            set_submitting.set(true);
            spawn_local(async move {
                let result = match detail::response_channel(post_type) {
                    detail::ResponseChannel::Answer => {
                        api::create_answer(&id, &text).await.map(|_| ())
                    }
                    detail::ResponseChannel::Comment => {
                        api::create_comment(&id, &text).await.map(|_| ())
                    }
                };
                match result {
                    Ok(()) => {
                        set_response_text.set(String::new());
                        set_reload_trigger.update(|v| *v += 1);
                    }
                    Err(e) => {
                        web_sys::console::error_1(&format!("[DETAIL] submit failed: {}", e).into());
                        alert("Could not submit your response.");
                    }
                }
                set_submitting.set(false);
            });
        })
    };

    let accept_answer = Callback::new(move |answer_id: String| {
        let id = post_id.get_untracked();
        spawn_local(async move {
            match api::accept_answer(&id, &answer_id).await {
                Ok(answers) => set_post.update(|p| {
                    if let Some(p) = p {
                        detail::replace_answers(p, answers);
                    }
                }),
                Err(e) => {
                    web_sys::console::error_1(&format!("[DETAIL] accept failed: {}", e).into());
                    alert("Could not accept this answer.");
                }
            }
        });
    });

    let vote_answer = {
        let navigate = navigate.clone();
        Callback::new(move |(answer_id, direction): (String, VoteDirection)| {
            let Gate::Proceed { .. } = session::gate(session::current_user_id(&session)) else {
                navigate("/login", Default::default());
                return;
            };
            let id = post_id.get_untracked();
            spawn_local(async move {
                match api::vote_answer(&id, &answer_id, direction).await {
                    Ok(updated) => set_post.update(|p| {
                        if let Some(p) = p {
                            detail::patch_answer(p, updated);
                        }
                    }),
                    Err(e) => {
                        web_sys::console::error_1(&format!("[DETAIL] vote failed: {}", e).into());
                        alert("Could not record your vote.");
                    }
                }
            });
        })
    };

    // Optimistic `Processing` before the call resolves; the state itself
    // disables the button, so a second generation cannot start while one is
    // in flight.
    let generate_summary = Callback::new(move |_: ()| {
        let id = post_id.get_untracked();
        let mut started = false;
        set_post.update(|p| {
            if let Some(p) = p {
                started = detail::begin_summary(&mut p.summary);
            }
        });
        if !started {
            return;
        }
        spawn_local(async move {
            let result = api::generate_summary(&id).await;
            if let Err(e) = &result {
                web_sys::console::error_1(&format!("[DETAIL] summary failed: {}", e).into());
                alert("Summary generation failed.");
            }
            set_post.update(|p| {
                if let Some(p) = p {
                    detail::finish_summary(&mut p.summary, result.map_err(|e| e.to_string()));
                }
            });
        });
    });

    let toggle_collection = {
        let navigate = navigate.clone();
        Callback::new(move |collection_id: String| {
            let Gate::Proceed { .. } = session::gate(session::current_user_id(&session)) else {
                navigate("/login", Default::default());
                return;
            };
            let id = post_id.get_untracked();
            let Some(action) = collections.with_untracked(|cs| {
                cs.iter()
                    .find(|c| c.id == collection_id)
                    .map(|c| detail::collection_toggle_action(c, &id))
            }) else {
                return;
            };
            spawn_local(async move {
                let result = match action {
                    detail::CollectionAction::Add => {
                        api::add_to_collection(&collection_id, &id).await
                    }
                    detail::CollectionAction::Remove => {
                        api::remove_from_collection(&collection_id, &id).await
                    }
                };
                match result {
                    // only the one returned collection is patched; on
                    // concurrent toggles the last response wins
                    Ok(updated) => {
                        set_collections.update(|cs| detail::patch_collection(cs, updated))
                    }
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("[DETAIL] collection failed: {}", e).into(),
                        );
                        alert("Could not update the collection.");
                    }
                }
            });
        })
    };

    let follow_author = {
        let navigate = navigate.clone();
        Callback::new(move |_: ()| {
            let Gate::Proceed { .. } = session::gate(session::current_user_id(&session)) else {
                navigate("/login", Default::default());
                return;
            };
            let Some(author_id) = post.with_untracked(|p| p.as_ref().map(|p| p.author.id.clone()))
            else {
                return;
            };
            spawn_local(async move {
                match api::follow_user(&author_id).await {
                    Ok(resp) => {
                        session.user().update(|u| {
                            if let Some(u) = u {
                                u.following = resp.following;
                            }
                        });
                        if let Some(user) = session.user().get_untracked() {
                            crate::storage::store_user(&user);
                        }
                    }
                    Err(e) => {
                        web_sys::console::error_1(&format!("[DETAIL] follow failed: {}", e).into());
                        alert("Could not follow this author.");
                    }
                }
            });
        })
    };

    let report = {
        let navigate = navigate.clone();
        Callback::new(move |_: ()| {
            let Gate::Proceed { .. } = session::gate(session::current_user_id(&session)) else {
                navigate("/login", Default::default());
                return;
            };
            let Some(window) = web_sys::window() else {
                return;
            };
            let Ok(Some(reason)) = window.prompt_with_message("Why are you reporting this post?")
            else {
                return;
            };
            if reason.trim().is_empty() {
                return;
            }
            let id = post_id.get_untracked();
            spawn_local(async move {
                match api::report_post(&id, &reason).await {
                    Ok(resp) => alert(&resp.message),
                    Err(e) => {
                        web_sys::console::error_1(&format!("[DETAIL] report failed: {}", e).into());
                        alert("Could not submit the report.");
                    }
                }
            });
        })
    };

    let start_edit = Callback::new(move |_: ()| {
        if let Some(p) = post.get_untracked() {
            set_edit_title.set(p.title);
            set_edit_body.set(p.body);
            set_editing.set(true);
        }
    });

    // Full-document replace on success; the server computes and appends the
    // edit-history entry.
    let save_edit = Callback::new(move |_: ()| {
        let id = post_id.get_untracked();
        let title = edit_title.get_untracked();
        let body = edit_body.get_untracked();
        if title.trim().is_empty() || body.trim().is_empty() {
            return;
        }
        spawn_local(async move {
            let update = api::PostUpdate {
                title: &title,
                body: &body,
                tags: None,
                category: None,
                difficulty: None,
                visibility: None,
            };
            match api::update_post(&id, &update).await {
                Ok(updated) => {
                    set_post.set(Some(updated));
                    set_editing.set(false);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[DETAIL] edit failed: {}", e).into());
                    alert("Could not save your changes.");
                }
            }
        });
    });

    let delete_post = {
        let navigate = navigate.clone();
        Callback::new(move |_: ()| {
            let id = post_id.get_untracked();
            let navigate = navigate.clone();
            spawn_local(async move {
                match api::delete_post(&id).await {
                    Ok(()) => navigate("/", Default::default()),
                    Err(e) => {
                        web_sys::console::error_1(&format!("[DETAIL] delete failed: {}", e).into());
                        alert("Could not delete this post.");
                    }
                }
            });
        })
    };

    let export_pdf = Callback::new(move |_: ()| {
        let title = post
            .with_untracked(|p| p.as_ref().map(|p| p.title.clone()))
            .unwrap_or_else(|| "post".to_string());
        pdf::export_node_to_pdf("#post-content", &title);
    });

    let toc = Signal::derive(move || {
        post.with(|p| p.as_ref().map(|p| extract_toc(&p.body)).unwrap_or_default())
    });
    let answers = Signal::derive(move || {
        post.with(|p| p.as_ref().map(|p| p.answers.clone()).unwrap_or_default())
    });
    let comments = Signal::derive(move || {
        post.with(|p| p.as_ref().map(|p| p.comments.clone()).unwrap_or_default())
    });
    let summary = Signal::derive(move || {
        post.with(|p| p.as_ref().map(|p| p.summary.clone()).unwrap_or_else(|| Summary::Idle))
    });

    view! {
        <div class="post-detail-layout">
            <TocSidebar entries=toc />

            <Show when=move || not_found.get() && post.get().is_none()>
                <div class="not-found">
                    <h1>"Post not found"</h1>
                    <p>"It may have been deleted or made private."</p>
                </div>
            </Show>

            {move || {
                post.get()
                    .map(|p| {
                        let like_count = p.likes.len();
                        let response_placeholder = match detail::response_channel(p.post_type) {
                            detail::ResponseChannel::Answer => "Write your answer...",
                            detail::ResponseChannel::Comment => "Write a comment...",
                        };
                        let submit_label = match detail::response_channel(p.post_type) {
                            detail::ResponseChannel::Answer => "Post answer",
                            detail::ResponseChannel::Comment => "Post comment",
                        };
                        let edit_history = (!p.edit_history.is_empty()).then(|| {
                            view! {
                                <details class="edit-history">
                                    <summary>
                                        {format!("Edited {} times", p.edit_history.len())}
                                    </summary>
                                    <ul>
                                        {p.edit_history.iter().map(|entry| view! {
                                            <li>
                                                {entry.editor.name.clone()}
                                                " · "
                                                {entry.edited_at.format("%Y-%m-%d %H:%M").to_string()}
                                                {entry.note.clone().map(|n| format!(" · {}", n))}
                                            </li>
                                        }).collect_view()}
                                    </ul>
                                </details>
                            }
                        });
                        let content = {
                            let p = p.clone();
                            move || view! {
                                <div id="post-content">
                                    <header class="post-header">
                                        <span class=format!("type-badge {}", p.post_type.as_str())>
                                            {p.post_type.as_str()}
                                        </span>
                                        {detail::accepted_answer(&p).map(|_| view! {
                                            <span class="solved-badge">"Solved"</span>
                                        })}
                                        <h1>{p.title.clone()}</h1>
                                        <div class="post-meta">
                                            <span class="post-author">{p.author.name.clone()}</span>
                                            <span class="post-date">
                                                {p.created_at.format("%Y-%m-%d").to_string()}
                                            </span>
                                            <span class="post-views">{p.views} " views"</span>
                                            {p.category.clone().map(|c| view! {
                                                <span class="post-category">{c}</span>
                                            })}
                                            {p.difficulty.clone().map(|d| view! {
                                                <span class="post-difficulty">{d}</span>
                                            })}
                                        </div>
                                        <div class="post-tags">
                                            {p.tags.iter().map(|tag| view! {
                                                <span class="tag">{tag.clone()}</span>
                                            }).collect_view()}
                                        </div>
                                    </header>
                                    <div class="post-body" inner_html=render_markdown(&p.body)></div>
                                    {(!p.attachments.is_empty()).then(|| view! {
                                        <section class="attachments">
                                            <h3>"Attachments"</h3>
                                            {p.attachments.iter().map(|a| view! {
                                                <a class="attachment" href=a.url.clone() download=a.name.clone()>
                                                    {a.name.clone()}
                                                    <span class="attachment-size">{format_size(a.size)}</span>
                                                </a>
                                            }).collect_view()}
                                        </section>
                                    })}
                                </div>
                            }
                        };

                        view! {
                            <article class="post-detail">
                                {move || (!editing.get()).then(&content)}
                                {move || editing.get().then(|| view! {
                                    <form
                                        class="edit-form"
                                        on:submit=move |ev: web_sys::SubmitEvent| {
                                            ev.prevent_default();
                                            save_edit.run(());
                                        }
                                    >
                                        <input
                                            type="text"
                                            prop:value=move || edit_title.get()
                                            on:input=move |ev| set_edit_title.set(event_target_value(&ev))
                                        />
                                        <textarea
                                            prop:value=move || edit_body.get()
                                            on:input=move |ev| set_edit_body.set(event_target_value(&ev))
                                        ></textarea>
                                        <button type="submit">"Save"</button>
                                        <button type="button" on:click=move |_| set_editing.set(false)>
                                            "Cancel"
                                        </button>
                                    </form>
                                })}

                                <div class="post-actions">
                                    <button class="like-btn" on:click=move |_| like.run(())>
                                        "♥ " {like_count}
                                    </button>
                                    <button
                                        class=move || {
                                            if is_bookmarked.get() { "bookmark-btn active" } else { "bookmark-btn" }
                                        }
                                        on:click=move |_| bookmark.run(())
                                    >
                                        {move || if is_bookmarked.get() { "Bookmarked" } else { "Bookmark" }}
                                    </button>
                                    <button
                                        class=move || {
                                            if is_following.get() { "follow-btn active" } else { "follow-btn" }
                                        }
                                        on:click=move |_| follow_author.run(())
                                    >
                                        {move || if is_following.get() { "Following" } else { "Follow author" }}
                                    </button>
                                    <Show when=move || !collections.get().is_empty()>
                                        <div class="collection-menu">
                                            <button on:click=move |_| set_show_collections.update(|v| *v = !*v)>
                                                "Save to collection"
                                            </button>
                                            <Show when=move || show_collections.get()>
                                                <ul class="collection-list">
                                                    {move || {
                                                        let current = post_id.get();
                                                        collections.get().into_iter().map(|c| {
                                                            let in_collection =
                                                                c.post_ids.iter().any(|id| *id == current);
                                                            let cid = c.id.clone();
                                                            view! {
                                                                <li>
                                                                    <button on:click=move |_| {
                                                                        toggle_collection.run(cid.clone())
                                                                    }>
                                                                        {if in_collection { "✓ " } else { "" }}
                                                                        {c.name.clone()}
                                                                    </button>
                                                                </li>
                                                            }
                                                        }).collect_view()
                                                    }}
                                                </ul>
                                            </Show>
                                        </div>
                                    </Show>
                                    <button class="pdf-btn" on:click=move |_| export_pdf.run(())>
                                        "Export PDF"
                                    </button>
                                    <button class="report-btn" on:click=move |_| report.run(())>
                                        "Report"
                                    </button>
                                    <Show when=move || is_author.get()>
                                        <button class="edit-btn" on:click=move |_| start_edit.run(())>
                                            "Edit"
                                        </button>
                                        <DeleteConfirmButton
                                            button_class="post-delete-btn"
                                            on_confirm=delete_post
                                        />
                                    </Show>
                                </div>

                                <SummaryPanel summary=summary on_generate=generate_summary />

                                {edit_history}

                                <Show when=move || is_question.get()>
                                    <AnswerList
                                        answers=answers
                                        can_accept=is_author
                                        on_accept=accept_answer
                                        on_vote=vote_answer
                                    />
                                </Show>
                                <Show when=move || !is_question.get()>
                                    <CommentSection comments=comments />
                                </Show>

                                <ResponseForm
                                    value=response_text
                                    set_value=set_response_text
                                    placeholder=response_placeholder
                                    submit_label=submit_label
                                    submitting=submitting
                                    on_submit=submit_response
                                />
                            </article>
                        }
                    })
            }}
        </div>
    }
}

fn format_size(bytes: u64) -> String {
    if bytes >= 1_048_576 {
        format!("{:.1} MB", bytes as f64 / 1_048_576.0)
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::format_size;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(3_145_728), "3.0 MB");
    }
}
