//! Post Endpoints
//!
//! Detail fetch plus every mutating action against a single post aggregate.

use serde::{Deserialize, Serialize};

use crate::models::{Answer, Comment, Post, Summary, VoteDirection};
use super::{delete_ok, get_json, post_empty, post_json, put_json, seg, ApiError};

/// Server-computed like set after a like toggle
#[derive(Debug, Clone, Deserialize)]
pub struct LikeResponse {
    pub likes: Vec<String>,
}

/// Server-computed bookmark state after a bookmark toggle
#[derive(Debug, Clone, Deserialize)]
pub struct BookmarkResponse {
    pub bookmarked_by: Vec<String>,
    /// Whether the toggle ended with the caller bookmarked
    pub bookmarked: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportResponse {
    pub message: String,
}

/// Editable fields for a post update; the server appends the edit-history
/// entry itself.
#[derive(Debug, Clone, Serialize)]
pub struct PostUpdate<'a> {
    pub title: &'a str,
    pub body: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<&'a str>,
}

#[derive(Serialize)]
struct TextBody<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct AnswerBody<'a> {
    body: &'a str,
}

#[derive(Serialize)]
struct VoteBody {
    direction: VoteDirection,
}

#[derive(Serialize)]
struct ReportBody<'a> {
    reason: &'a str,
}

pub async fn get_post(id: &str) -> Result<Post, ApiError> {
    get_json(&format!("/posts/{}", seg(id))).await
}

pub async fn update_post(id: &str, update: &PostUpdate<'_>) -> Result<Post, ApiError> {
    put_json(&format!("/posts/{}", seg(id)), update).await
}

pub async fn delete_post(id: &str) -> Result<(), ApiError> {
    delete_ok(&format!("/posts/{}", seg(id))).await
}

pub async fn like_post(id: &str) -> Result<LikeResponse, ApiError> {
    post_empty(&format!("/posts/{}/like", seg(id))).await
}

pub async fn bookmark_post(id: &str) -> Result<BookmarkResponse, ApiError> {
    post_empty(&format!("/posts/{}/bookmark", seg(id))).await
}

pub async fn create_comment(post_id: &str, text: &str) -> Result<Comment, ApiError> {
    post_json(&format!("/posts/{}/comment", seg(post_id)), &TextBody { text }).await
}

pub async fn create_answer(post_id: &str, body: &str) -> Result<Answer, ApiError> {
    post_json(&format!("/posts/{}/answers", seg(post_id)), &AnswerBody { body }).await
}

/// Returns the full answers collection; the server is the source of truth
/// for which single answer now carries the acceptance flag.
pub async fn accept_answer(post_id: &str, answer_id: &str) -> Result<Vec<Answer>, ApiError> {
    post_empty(&format!(
        "/posts/{}/answers/{}/accept",
        seg(post_id),
        seg(answer_id)
    ))
    .await
}

pub async fn vote_answer(
    post_id: &str,
    answer_id: &str,
    direction: VoteDirection,
) -> Result<Answer, ApiError> {
    post_json(
        &format!("/posts/{}/answers/{}/vote", seg(post_id), seg(answer_id)),
        &VoteBody { direction },
    )
    .await
}

pub async fn generate_summary(post_id: &str) -> Result<Summary, ApiError> {
    post_empty(&format!("/posts/{}/summary", seg(post_id))).await
}

pub async fn report_post(post_id: &str, reason: &str) -> Result<ReportResponse, ApiError> {
    post_json(&format!("/posts/{}/report", seg(post_id)), &ReportBody { reason }).await
}
