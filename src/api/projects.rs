//! Project Gallery Endpoints

use serde::Serialize;

use crate::models::{Comment, Project};
use super::{get_json, post_empty, post_json, seg, ApiError, LikeResponse};

#[derive(Serialize)]
struct TextBody<'a> {
    text: &'a str,
}

pub async fn get_project(id: &str) -> Result<Project, ApiError> {
    get_json(&format!("/projects/{}", seg(id))).await
}

pub async fn like_project(id: &str) -> Result<LikeResponse, ApiError> {
    post_empty(&format!("/projects/{}/like", seg(id))).await
}

pub async fn list_project_comments(id: &str) -> Result<Vec<Comment>, ApiError> {
    get_json(&format!("/projects/{}/comments", seg(id))).await
}

pub async fn create_project_comment(id: &str, text: &str) -> Result<Comment, ApiError> {
    post_json(&format!("/projects/{}/comments", seg(id)), &TextBody { text }).await
}
