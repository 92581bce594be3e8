//! Project Gallery Detail Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::api;
use crate::components::{CommentSection, ResponseForm};
use crate::markdown::render_markdown;
use crate::models::Project;
use crate::session::{self, use_session, Gate};

#[component]
pub fn ProjectDetail() -> impl IntoView {
    let params = use_params_map();
    let project_id = Memo::new(move |_| params.with(|p| p.get("id").unwrap_or_default()));
    let session = use_session();
    let navigate = use_navigate();

    let (project, set_project) = signal::<Option<Project>>(None);
    let (not_found, set_not_found) = signal(false);
    let (comment_text, set_comment_text) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    Effect::new(move |_| {
        let id = project_id.get();
        if id.is_empty() {
            return;
        }
        spawn_local(async move {
            match api::get_project(&id).await {
                Ok(loaded) => {
                    set_project.set(Some(loaded));
                    set_not_found.set(false);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[PROJECT] load failed: {}", e).into());
                    if project.get_untracked().is_none() {
                        set_not_found.set(true);
                    }
                }
            }
        });
    });

    let like = {
        let navigate = navigate.clone();
        Callback::new(move |_: ()| {
            let Gate::Proceed { .. } = session::gate(session::current_user_id(&session)) else {
                navigate("/login", Default::default());
                return;
            };
            let id = project_id.get_untracked();
            spawn_local(async move {
                match api::like_project(&id).await {
                    Ok(resp) => set_project.update(|p| {
                        if let Some(p) = p {
                            p.likes = resp.likes;
                        }
                    }),
                    Err(e) => {
                        web_sys::console::error_1(&format!("[PROJECT] like failed: {}", e).into());
                    }
                }
            });
        })
    };

    let submit_comment = {
        let navigate = navigate.clone();
        Callback::new(move |_: ()| {
            let Gate::Proceed { .. } = session::gate(session::current_user_id(&session)) else {
                navigate("/login", Default::default());
                return;
            };
            let id = project_id.get_untracked();
            let text = comment_text.get_untracked();
            set_submitting.set(true);
            spawn_local(async move {
                match api::create_project_comment(&id, &text).await {
                    Ok(_) => {
                        set_comment_text.set(String::new());
                        // pick up server-computed fields
                        if let Ok(fresh) = api::list_project_comments(&id).await {
                            set_project.update(|p| {
                                if let Some(p) = p {
                                    p.comments = fresh;
                                }
                            });
                        }
                    }
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("[PROJECT] comment failed: {}", e).into(),
                        );
                        if let Some(window) = web_sys::window() {
                            let _ = window.alert_with_message("Could not post your comment.");
                        }
                    }
                }
                set_submitting.set(false);
            });
        })
    };

    let comments = Signal::derive(move || {
        project.with(|p| p.as_ref().map(|p| p.comments.clone()).unwrap_or_default())
    });

    view! {
        <div class="project-detail">
            <Show when=move || not_found.get() && project.get().is_none()>
                <div class="not-found">
                    <h1>"Project not found"</h1>
                </div>
            </Show>

            {move || {
                project
                    .get()
                    .map(|p| {
                        let like_count = p.likes.len();
                        view! {
                            <article class="project">
                                <h1>{p.title.clone()}</h1>
                                <span class="project-author">{p.author.name.clone()}</span>
                                <div class="project-screenshots">
                                    {p.screenshots.iter().map(|url| view! {
                                        <img class="screenshot" src=url.clone() />
                                    }).collect_view()}
                                </div>
                                <div class="project-tech">
                                    {p.tech_stack.iter().map(|tech| view! {
                                        <span class="tech-tag">{tech.clone()}</span>
                                    }).collect_view()}
                                </div>
                                <div
                                    class="project-description"
                                    inner_html=render_markdown(&p.description)
                                ></div>
                                <button class="like-btn" on:click=move |_| like.run(())>
                                    "♥ " {like_count}
                                </button>
                            </article>
                        }
                    })
            }}

            <CommentSection comments=comments />
            <ResponseForm
                value=comment_text
                set_value=set_comment_text
                placeholder="Leave feedback..."
                submit_label="Post comment"
                submitting=submitting
                on_submit=submit_comment
            />
        </div>
    }
}
