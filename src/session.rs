//! Auth Session
//!
//! Global current-user state provided via Leptos context, backed by
//! localStorage. Mutated only through the explicit login/logout entry
//! points; every component reads it through `use_session()`.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::User;
use crate::storage;

#[derive(Clone, Debug, Default, Store)]
pub struct SessionState {
    pub user: Option<User>,
    pub token: Option<String>,
}

impl SessionState {
    /// Synchronous hydration from durable storage at startup
    pub fn hydrate() -> Self {
        Self {
            user: storage::load_user(),
            token: storage::load_token(),
        }
    }
}

pub type SessionStore = Store<SessionState>;

pub fn use_session() -> SessionStore {
    expect_context::<SessionStore>()
}

/// Record a successful login: write through to storage, then update signals
pub fn login(session: &SessionStore, user: User, token: String) {
    storage::store_credentials(&user, &token);
    session.user().set(Some(user));
    session.token().set(Some(token));
}

pub fn logout(session: &SessionStore) {
    storage::clear_credentials();
    session.user().set(None);
    session.token().set(None);
}

/// Refresh the stored user after a profile round trip
pub fn replace_user(session: &SessionStore, user: User) {
    storage::store_user(&user);
    session.user().set(Some(user));
}

pub fn current_user_id(session: &SessionStore) -> Option<String> {
    session.user().with(|u| u.as_ref().map(|u| u.id.clone()))
}

/// Outcome of the login gate every mutating action consults before
/// dispatching. `RedirectToLogin` means no network call is issued.
#[derive(Debug, Clone, PartialEq)]
pub enum Gate {
    Proceed { user_id: String },
    RedirectToLogin,
}

pub fn gate(user_id: Option<String>) -> Gate {
    match user_id {
        Some(user_id) => Gate::Proceed { user_id },
        None => Gate::RedirectToLogin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_redirects_when_logged_out() {
        assert_eq!(gate(None), Gate::RedirectToLogin);
    }

    #[test]
    fn test_gate_proceeds_with_user_id() {
        assert_eq!(
            gate(Some("u1".to_string())),
            Gate::Proceed { user_id: "u1".to_string() }
        );
    }
}
