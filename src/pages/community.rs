//! Community Page
//!
//! Rooms and polls. Rooms refresh on a polling interval; polls update in
//! place when the server returns the post-vote state.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{PollWidget, RoomCard};
use crate::models::{Poll, Room};

const ROOM_REFRESH_MS: u32 = 30_000;

#[component]
pub fn Community() -> impl IntoView {
    let (rooms, set_rooms) = signal(Vec::<Room>::new());
    let (polls, set_polls) = signal(Vec::<Poll>::new());

    spawn_local(async move {
        match api::list_rooms().await {
            Ok(loaded) => set_rooms.set(loaded),
            Err(e) => {
                web_sys::console::error_1(&format!("[COMMUNITY] rooms failed: {}", e).into())
            }
        }
        match api::list_polls().await {
            Ok(loaded) => set_polls.set(loaded),
            Err(e) => {
                web_sys::console::error_1(&format!("[COMMUNITY] polls failed: {}", e).into())
            }
        }
    });

    // Poll the room listing; stop once the page is gone and the signal is
    // disposed.
    spawn_local(async move {
        loop {
            TimeoutFuture::new(ROOM_REFRESH_MS).await;
            match api::list_rooms().await {
                Ok(fresh) => {
                    if set_rooms.try_set(fresh).is_some() {
                        break;
                    }
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[COMMUNITY] room refresh failed: {}", e).into(),
                    );
                    if set_rooms.try_update(|_| ()).is_none() {
                        break;
                    }
                }
            }
        }
    });

    let on_poll_updated = Callback::new(move |updated: Poll| {
        set_polls.update(|ps| {
            if let Some(p) = ps.iter_mut().find(|p| p.id == updated.id) {
                *p = updated;
            }
        });
    });

    view! {
        <div class="community-page">
            <section class="rooms">
                <h1>"Rooms"</h1>
                <Show when=move || rooms.get().is_empty()>
                    <p class="empty-state">"No rooms yet."</p>
                </Show>
                <div class="room-grid">
                    {move || {
                        rooms
                            .get()
                            .into_iter()
                            .map(|room| view! { <RoomCard room=room /> })
                            .collect_view()
                    }}
                </div>
            </section>
            <section class="polls">
                <h1>"Polls"</h1>
                {move || {
                    polls
                        .get()
                        .into_iter()
                        .map(|poll| view! { <PollWidget poll=poll on_updated=on_poll_updated /> })
                        .collect_view()
                }}
            </section>
        </div>
    }
}
