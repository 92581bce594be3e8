//! Poll Widget Component
//!
//! Renders vote shares and accepts exactly one vote per user per poll.

use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::models::Poll;
use crate::poll::{has_ambiguous_vote, is_expired, percentage, total_votes, user_vote};
use crate::session::{self, use_session, Gate};

#[component]
pub fn PollWidget(poll: Poll, #[prop(into)] on_updated: Callback<Poll>) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let (voting, set_voting) = signal(false);

    let user_id = session::current_user_id(&session);
    let voted_for = user_id.as_deref().and_then(|uid| user_vote(&poll, uid));
    if let Some(uid) = user_id.as_deref() {
        if has_ambiguous_vote(&poll, uid) {
            web_sys::console::warn_1(
                &format!("[POLL] user appears in multiple voter sets of poll {}", poll.id).into(),
            );
        }
    }
    let expired = is_expired(&poll, Utc::now());
    // Shares are shown once the user has voted, or once the poll is closed
    let show_shares = voted_for.is_some() || expired;
    let total = total_votes(&poll);

    let options = poll
        .options
        .iter()
        .enumerate()
        .map(|(index, option)| {
            let share = percentage(&poll, index);
            let is_mine = voted_for == Some(index);
            let text = option.text.clone();
            let poll_id = poll.id.clone();
            let navigate = navigate.clone();

            let cast_vote = move |_| {
                if voting.get() {
                    return;
                }
                match session::gate(session::current_user_id(&session)) {
                    Gate::RedirectToLogin => {
                        navigate("/login", Default::default());
                    }
                    Gate::Proceed { .. } => {
                        let poll_id = poll_id.clone();
                        set_voting.set(true);
                        spawn_local(async move {
                            match api::vote_poll(&poll_id, index).await {
                                Ok(updated) => on_updated.run(updated),
                                Err(e) => {
                                    web_sys::console::error_1(
                                        &format!("[POLL] vote failed: {}", e).into(),
                                    );
                                    if let Some(window) = web_sys::window() {
                                        let _ = window
                                            .alert_with_message("Could not record your vote.");
                                    }
                                }
                            }
                            set_voting.set(false);
                        });
                    }
                }
            };

            view! {
                <div class=move || if is_mine { "poll-option mine" } else { "poll-option" }>
                    <span class="poll-option-text">{text}</span>
                    <Show when=move || show_shares>
                        <div class="poll-bar">
                            <div class="poll-bar-fill" style=format!("width: {}%", share)></div>
                        </div>
                        <span class="poll-share">{share} "%"</span>
                    </Show>
                    <Show when=move || !show_shares>
                        <button class="poll-vote-btn" disabled=move || voting.get() on:click=cast_vote.clone()>
                            "Vote"
                        </button>
                    </Show>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="poll-widget">
            <h3 class="poll-question">{poll.question.clone()}</h3>
            {options}
            <p class="poll-total">{total} " votes"</p>
        </div>
    }
}
