//! Knowledge Portal App
//!
//! Router shell; provides the session store to the whole tree.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;

use crate::components::NavBar;
use crate::pages::{Bookmarks, Community, Login, PostDetail, Profile, ProjectDetail};
use crate::session::SessionState;

#[component]
pub fn App() -> impl IntoView {
    // Hydrated synchronously from durable storage before first paint
    provide_context(Store::new(SessionState::hydrate()));

    view! {
        <Router>
            <NavBar />
            <main class="main-content">
                <Routes fallback=|| view! { <p class="not-found">"Page not found"</p> }>
                    <Route path=path!("/") view=Community />
                    <Route path=path!("/community") view=Community />
                    <Route path=path!("/posts/:id") view=PostDetail />
                    <Route path=path!("/bookmarks") view=Bookmarks />
                    <Route path=path!("/projects/:id") view=ProjectDetail />
                    <Route path=path!("/login") view=Login />
                    <Route path=path!("/profile") view=Profile />
                </Routes>
            </main>
        </Router>
    }
}
