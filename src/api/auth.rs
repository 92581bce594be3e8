//! Auth Endpoints
//!
//! Credential login and the Google OAuth token exchange. The `action`
//! discriminator tells the backend whether an unknown identity is an error
//! (`login`) or an account-creation trigger (`signup`).

use serde::{Deserialize, Serialize};

use crate::models::User;
use super::{post_json, ApiError};

#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GoogleAction {
    Login,
    Signup,
}

#[derive(Serialize)]
struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct GoogleBody<'a> {
    access_token: &'a str,
    action: GoogleAction,
}

pub async fn login(email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    post_json("/auth/login", &LoginBody { email, password }).await
}

pub async fn google_auth(access_token: &str, action: GoogleAction) -> Result<AuthResponse, ApiError> {
    post_json("/auth/google", &GoogleBody { access_token, action }).await
}
