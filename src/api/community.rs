//! Community Endpoints
//!
//! Rooms and polls. Rooms are a polled listing; there is no message
//! transport here.

use serde::Serialize;

use crate::models::{Poll, Room};
use super::{get_json, post_json, seg, ApiError};

#[derive(Serialize)]
struct PollVoteBody {
    option: usize,
}

pub async fn list_rooms() -> Result<Vec<Room>, ApiError> {
    get_json("/community/rooms").await
}

pub async fn list_polls() -> Result<Vec<Poll>, ApiError> {
    get_json("/community/polls").await
}

/// Returns the updated poll with the caller recorded in one voter set
pub async fn vote_poll(poll_id: &str, option_index: usize) -> Result<Poll, ApiError> {
    post_json(
        &format!("/community/polls/{}/vote", seg(poll_id)),
        &PollVoteBody { option: option_index },
    )
    .await
}
