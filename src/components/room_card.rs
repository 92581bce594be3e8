//! Room Card Component
//!
//! Listing card for a chat room; member count only, no message transport.

use leptos::prelude::*;

use crate::models::Room;

#[component]
pub fn RoomCard(room: Room) -> impl IntoView {
    view! {
        <article class="room-card">
            <h3 class="room-name">{room.name.clone()}</h3>
            <p class="room-description">{room.description.clone()}</p>
            <div class="room-topics">
                {room
                    .topics
                    .iter()
                    .map(|topic| view! { <span class="topic-tag">{topic.clone()}</span> })
                    .collect_view()}
            </div>
            <span class="room-members">{room.member_count} " members"</span>
        </article>
    }
}
