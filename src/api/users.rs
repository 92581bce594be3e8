//! User Endpoints
//!
//! Profile, avatar upload, bookmarks, collections and follows.

use serde::{Deserialize, Serialize};

use crate::models::{Collection, Post, SocialLinks, User};
use super::{delete_json, get_json, post_empty, post_form, post_json, put_json, seg, ApiError};

#[derive(Debug, Clone, Serialize)]
pub struct ProfileUpdate<'a> {
    pub name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_links: Option<&'a SocialLinks>,
}

/// Updated following set of the current user
#[derive(Debug, Clone, Deserialize)]
pub struct FollowResponse {
    pub following: Vec<String>,
}

#[derive(Serialize)]
struct PostIdBody<'a> {
    post_id: &'a str,
}

pub async fn get_profile() -> Result<User, ApiError> {
    get_json("/users/profile").await
}

pub async fn update_profile(update: &ProfileUpdate<'_>) -> Result<User, ApiError> {
    put_json("/users/profile", update).await
}

/// Multipart upload; the one non-JSON payload in the API
pub async fn upload_avatar(file: &web_sys::File) -> Result<User, ApiError> {
    let form = web_sys::FormData::new()
        .map_err(|_| ApiError::Network("could not build form data".to_string()))?;
    form.append_with_blob("avatar", file)
        .map_err(|_| ApiError::Network("could not attach file".to_string()))?;
    post_form("/users/avatar", form).await
}

pub async fn list_bookmarks() -> Result<Vec<Post>, ApiError> {
    get_json("/users/bookmarks").await
}

pub async fn list_collections() -> Result<Vec<Collection>, ApiError> {
    get_json("/users/collections").await
}

/// Returns the updated collection
pub async fn add_to_collection(collection_id: &str, post_id: &str) -> Result<Collection, ApiError> {
    post_json(
        &format!("/users/collections/{}/posts", seg(collection_id)),
        &PostIdBody { post_id },
    )
    .await
}

/// Returns the updated collection
pub async fn remove_from_collection(
    collection_id: &str,
    post_id: &str,
) -> Result<Collection, ApiError> {
    delete_json(&format!(
        "/users/collections/{}/posts/{}",
        seg(collection_id),
        seg(post_id)
    ))
    .await
}

pub async fn follow_user(user_id: &str) -> Result<FollowResponse, ApiError> {
    post_empty(&format!("/users/{}/follow", seg(user_id))).await
}
