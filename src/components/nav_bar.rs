//! Navigation Bar Component

use leptos::prelude::*;
use leptos_router::components::A;

use crate::session::{self, use_session, SessionStateStoreFields};

#[component]
pub fn NavBar() -> impl IntoView {
    let session = use_session();

    view! {
        <header class="nav-bar">
            <A attr:class="nav-brand" href="/">
                "Knowledge Portal"
            </A>
            <nav class="nav-links">
                <A href="/community">"Community"</A>
                <A href="/bookmarks">"Bookmarks"</A>
            </nav>
            <div class="nav-session">
                {move || match session.user().get() {
                    Some(user) => view! {
                        <span class="nav-user">
                            <A href="/profile">{user.name.clone()}</A>
                            <span class="nav-points">{user.points} " pts"</span>
                        </span>
                        <button class="logout-btn" on:click=move |_| session::logout(&session)>
                            "Log out"
                        </button>
                    }
                    .into_any(),
                    None => view! {
                        <A attr:class="login-link" href="/login">
                            "Log in"
                        </A>
                    }
                    .into_any(),
                }}
            </div>
        </header>
    }
}
