//! Profile Page
//!
//! View and edit the current user's profile; points and badges are
//! read-only gamification fields. Avatar upload is the one multipart call.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use wasm_bindgen::JsCast;

use crate::api;
use crate::models::SocialLinks;
use crate::session::{self, use_session, Gate, SessionStateStoreFields};

#[component]
pub fn Profile() -> impl IntoView {
    let session = use_session();

    let (name, set_name) = signal(String::new());
    let (bio, set_bio) = signal(String::new());
    let (location, set_location) = signal(String::new());
    let (skills, set_skills) = signal(String::new());
    let (github, set_github) = signal(String::new());
    let (website, set_website) = signal(String::new());
    let (twitter, set_twitter) = signal(String::new());
    let (saving, set_saving) = signal(false);
    let (notice, set_notice) = signal::<Option<String>>(None);

    {
        let navigate = use_navigate();
        Effect::new(move |_| {
            if let Gate::RedirectToLogin = session::gate(session::current_user_id(&session)) {
                navigate("/login", Default::default());
            }
        });
    }

    // Depends on logged-in-ness only, so the replace_user below does not
    // retrigger the fetch
    let logged_in = Memo::new(move |_| session.user().with(|u| u.is_some()));

    // Fresh fetch rather than trusting the stored copy
    Effect::new(move |_| {
        if !logged_in.get() {
            return;
        }
        spawn_local(async move {
            match api::get_profile().await {
                Ok(profile) => {
                    set_name.set(profile.name.clone());
                    set_bio.set(profile.bio.clone().unwrap_or_default());
                    set_location.set(profile.location.clone().unwrap_or_default());
                    set_skills.set(profile.skills.join(", "));
                    set_github.set(profile.social_links.github.clone().unwrap_or_default());
                    set_website.set(profile.social_links.website.clone().unwrap_or_default());
                    set_twitter.set(profile.social_links.twitter.clone().unwrap_or_default());
                    session::replace_user(&session, profile);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[PROFILE] load failed: {}", e).into());
                }
            }
        });
    });

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving.get() {
            return;
        }
        let name = name.get();
        if name.trim().is_empty() {
            set_notice.set(Some("Name cannot be empty.".to_string()));
            return;
        }
        let bio = bio.get();
        let location = location.get();
        let skills: Vec<String> = skills
            .get()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let links = SocialLinks {
            github: Some(github.get()).filter(|s| !s.is_empty()),
            website: Some(website.get()).filter(|s| !s.is_empty()),
            twitter: Some(twitter.get()).filter(|s| !s.is_empty()),
        };
        set_saving.set(true);
        set_notice.set(None);
        spawn_local(async move {
            let update = api::ProfileUpdate {
                name: &name,
                bio: Some(bio.as_str()).filter(|b| !b.is_empty()),
                location: Some(location.as_str()).filter(|l| !l.is_empty()),
                skills: Some(skills.as_slice()),
                social_links: Some(&links),
            };
            match api::update_profile(&update).await {
                Ok(updated) => {
                    session::replace_user(&session, updated);
                    set_notice.set(Some("Profile saved.".to_string()));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[PROFILE] save failed: {}", e).into());
                    set_notice.set(Some(e.to_string()));
                }
            }
            set_saving.set(false);
        });
    };

    let upload_avatar = move |ev: web_sys::Event| {
        let Some(target) = ev.target() else { return };
        let Some(input) = target.dyn_ref::<web_sys::HtmlInputElement>().cloned() else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        spawn_local(async move {
            match api::upload_avatar(&file).await {
                Ok(updated) => session::replace_user(&session, updated),
                Err(e) => {
                    web_sys::console::error_1(&format!("[PROFILE] avatar failed: {}", e).into());
                    if let Some(window) = web_sys::window() {
                        let _ = window.alert_with_message("Avatar upload failed.");
                    }
                }
            }
        });
    };

    view! {
        <div class="profile-page">
            <h1>"Your profile"</h1>

            {move || {
                session.user().get().map(|user| {
                    view! {
                        <div class="profile-summary">
                            {user.avatar.clone().map(|url| view! {
                                <img class="avatar" src=url />
                            })}
                            <span class="profile-points">{user.points} " points"</span>
                            <div class="profile-badges">
                                {user.badges.iter().map(|badge| view! {
                                    <span class="badge">{badge.clone()}</span>
                                }).collect_view()}
                            </div>
                        </div>
                    }
                })
            }}

            <label class="avatar-upload">
                "Change avatar"
                <input type="file" accept="image/*" on:change=upload_avatar />
            </label>

            {move || notice.get().map(|msg| view! { <p class="notice">{msg}</p> })}

            <form class="profile-form" on:submit=save>
                <label>
                    "Name"
                    <input
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Bio"
                    <textarea
                        prop:value=move || bio.get()
                        on:input=move |ev| set_bio.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <label>
                    "Location"
                    <input
                        type="text"
                        prop:value=move || location.get()
                        on:input=move |ev| set_location.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Skills (comma separated)"
                    <input
                        type="text"
                        prop:value=move || skills.get()
                        on:input=move |ev| set_skills.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "GitHub"
                    <input
                        type="text"
                        prop:value=move || github.get()
                        on:input=move |ev| set_github.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Website"
                    <input
                        type="text"
                        prop:value=move || website.get()
                        on:input=move |ev| set_website.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Twitter"
                    <input
                        type="text"
                        prop:value=move || twitter.get()
                        on:input=move |ev| set_twitter.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit" disabled=move || saving.get()>
                    {move || if saving.get() { "Saving..." } else { "Save profile" }}
                </button>
            </form>
        </div>
    }
}
