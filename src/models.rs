//! Frontend Models
//!
//! Client-side projections of the backend's JSON entities. The server owns
//! every one of these; the client holds a read-mostly copy that is stale
//! until the next fetch.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Full user record (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub social_links: SocialLinks,
    #[serde(default)]
    pub points: u32,
    #[serde(default)]
    pub badges: Vec<String>,
    /// Ids of authors this user follows
    #[serde(default)]
    pub following: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
}

/// Embedded author summary carried on posts, answers and comments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostType {
    Question,
    Article,
    Resource,
}

impl PostType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostType::Question => "question",
            PostType::Article => "article",
            PostType::Resource => "resource",
        }
    }
}

/// Post aggregate: one post plus its nested collections, fetched and held
/// as a single object by the detail view.
///
/// Questions take `answers` as the primary response channel, articles and
/// resources take `comments`; both arrays always exist on the shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    /// Markdown source
    pub body: String,
    pub post_type: PostType,
    pub author: Author,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default = "default_visibility")]
    pub visibility: String,
    #[serde(default)]
    pub views: u32,
    /// Ids of users who liked this post
    #[serde(default)]
    pub likes: Vec<String>,
    /// Ids of users who bookmarked this post
    #[serde(default)]
    pub bookmarked_by: Vec<String>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    #[serde(default)]
    pub answers: Vec<Answer>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub edit_history: Vec<EditEntry>,
    #[serde(default)]
    pub summary: Summary,
}

fn default_visibility() -> String {
    "public".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub id: String,
    /// Markdown source
    pub body: String,
    pub author: Author,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub upvotes: Vec<String>,
    #[serde(default)]
    pub downvotes: Vec<String>,
    #[serde(default)]
    pub is_accepted: bool,
}

impl Answer {
    /// Net score shown next to the vote buttons
    pub fn score(&self) -> i64 {
        self.upvotes.len() as i64 - self.downvotes.len() as i64
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub text: String,
    pub author: Author,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub name: String,
    pub url: String,
    pub mime_type: String,
    pub size: u64,
}

/// One entry of the server-computed edit history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditEntry {
    pub editor: Author,
    pub edited_at: DateTime<Utc>,
    #[serde(default)]
    pub note: Option<String>,
}

/// AI summary of a post, formalized as a tagged union so each phase
/// carries only the fields that exist in that phase.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Summary {
    #[default]
    Idle,
    Processing,
    Ready {
        tldr: String,
        #[serde(default)]
        key_points: Vec<String>,
        #[serde(default)]
        model: Option<String>,
        generated_at: DateTime<Utc>,
    },
    Error {
        message: String,
    },
}

impl Summary {
    pub fn is_processing(&self) -> bool {
        matches!(self, Summary::Processing)
    }

    /// A new generation may start from any phase except an in-flight one.
    pub fn can_start_generation(&self) -> bool {
        !self.is_processing()
    }
}

/// User-owned named list of post ids, distinct from the bookmark set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub id: String,
    pub name: String,
    pub owner_id: String,
    #[serde(default)]
    pub post_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poll {
    pub id: String,
    pub question: String,
    pub options: Vec<PollOption>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollOption {
    pub text: String,
    /// Ids of users who voted for this option
    #[serde(default)]
    pub votes: Vec<String>,
}

/// Chat room listing entry. Member count only; message transport is out of
/// scope and rooms are refreshed by polling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub member_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    /// Markdown source
    pub description: String,
    pub author: Author,
    #[serde(default)]
    pub screenshots: Vec<String>,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub likes: Vec<String>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteDirection {
    Up,
    Down,
}
