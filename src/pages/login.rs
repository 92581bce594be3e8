//! Login Page
//!
//! Credential login plus the Google OAuth return leg: the provider
//! redirects back with an access token in the query string, and the
//! `action` parameter decides whether an unknown identity is an error or
//! an account-creation trigger.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::api::{self, GoogleAction};
use crate::session::{self, use_session};

#[component]
pub fn Login() -> impl IntoView {
    let session = use_session();
    let query = use_query_map();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (busy, set_busy) = signal(false);

    // Google OAuth return leg
    {
        let navigate = use_navigate();
        Effect::new(move |_| {
            let Some(token) = query.with(|q| q.get("google_token")) else {
                return;
            };
            let action = match query.with(|q| q.get("action")).as_deref() {
                Some("signup") => GoogleAction::Signup,
                _ => GoogleAction::Login,
            };
            let navigate = navigate.clone();
            set_busy.set(true);
            spawn_local(async move {
                match api::google_auth(&token, action).await {
                    Ok(resp) => {
                        session::login(&session, resp.user, resp.token);
                        navigate("/", Default::default());
                    }
                    Err(e) => {
                        set_error.set(Some(e.to_string()));
                        set_busy.set(false);
                    }
                }
            });
        });
    }

    let navigate = use_navigate();
    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email = email.get();
        let password = password.get();
        if email.trim().is_empty() || password.is_empty() {
            set_error.set(Some("Email and password are required.".to_string()));
            return;
        }
        let navigate = navigate.clone();
        set_busy.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::login(&email, &password).await {
                Ok(resp) => {
                    session::login(&session, resp.user, resp.token);
                    navigate("/", Default::default());
                }
                Err(e) => {
                    set_error.set(Some(e.to_string()));
                    set_busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <h1>"Log in"</h1>
            {move || error.get().map(|msg| view! { <p class="error-message">{msg}</p> })}
            <form class="login-form" on:submit=submit>
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Signing in..." } else { "Log in" }}
                </button>
            </form>
            <a class="google-login" href="/auth/google/start">
                "Continue with Google"
            </a>
        </div>
    }
}
