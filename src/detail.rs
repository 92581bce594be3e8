//! Detail Aggregate Merges
//!
//! Pure reconciliation logic for the post detail view. The page component
//! owns the signals and the network calls; everything that decides how a
//! server response lands in the local aggregate lives here.

use crate::models::{Answer, Collection, Post, PostType, Summary};

/// Replace the like set with the server-returned value. Never merged, so a
/// server-side toggle cannot be double-counted locally.
pub fn replace_likes(post: &mut Post, likes: Vec<String>) {
    post.likes = likes;
}

pub fn replace_bookmarks(post: &mut Post, bookmarked_by: Vec<String>) {
    post.bookmarked_by = bookmarked_by;
}

/// Wholesale replacement after accept-answer; the server decides which
/// single answer carries the acceptance flag.
pub fn replace_answers(post: &mut Post, answers: Vec<Answer>) {
    post.answers = answers;
}

/// Replace one answer record by identity match, leaving the rest untouched
pub fn patch_answer(post: &mut Post, updated: Answer) {
    if let Some(answer) = post.answers.iter_mut().find(|a| a.id == updated.id) {
        *answer = updated;
    }
}

pub fn accepted_answer(post: &Post) -> Option<&Answer> {
    post.answers.iter().find(|a| a.is_accepted)
}

/// Where a submitted response goes for a given post type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseChannel {
    Answer,
    Comment,
}

pub fn response_channel(post_type: PostType) -> ResponseChannel {
    match post_type {
        PostType::Question => ResponseChannel::Answer,
        PostType::Article | PostType::Resource => ResponseChannel::Comment,
    }
}

/// Which call a collection toggle issues, decided by a local membership scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionAction {
    Add,
    Remove,
}

pub fn collection_toggle_action(collection: &Collection, post_id: &str) -> CollectionAction {
    if collection.post_ids.iter().any(|id| id == post_id) {
        CollectionAction::Remove
    } else {
        CollectionAction::Add
    }
}

/// Patch exactly the one collection the server returned; on concurrent
/// toggles the last response wins.
pub fn patch_collection(collections: &mut [Collection], updated: Collection) {
    if let Some(collection) = collections.iter_mut().find(|c| c.id == updated.id) {
        *collection = updated;
    }
}

/// `Idle | Ready | Error -> Processing`. Returns false (and leaves the
/// state alone) when a generation is already in flight.
pub fn begin_summary(summary: &mut Summary) -> bool {
    if !summary.can_start_generation() {
        return false;
    }
    *summary = Summary::Processing;
    true
}

/// `Processing -> Ready | Error`. A completion arriving in any other phase
/// is dropped.
pub fn finish_summary(summary: &mut Summary, result: Result<Summary, String>) {
    if !summary.is_processing() {
        return;
    }
    *summary = match result {
        Ok(fresh) => fresh,
        Err(message) => Summary::Error { message },
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Author;
    use chrono::{TimeZone, Utc};

    fn author(id: &str) -> Author {
        Author { id: id.to_string(), name: format!("User {}", id), avatar: None }
    }

    fn make_answer(id: &str, accepted: bool) -> Answer {
        Answer {
            id: id.to_string(),
            body: format!("answer {}", id),
            author: author("u1"),
            created_at: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
            upvotes: vec![],
            downvotes: vec![],
            is_accepted: accepted,
        }
    }

    fn make_post(post_type: PostType) -> Post {
        Post {
            id: "p1".to_string(),
            title: "Title".to_string(),
            body: "Body".to_string(),
            post_type,
            author: author("u1"),
            created_at: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
            updated_at: None,
            tags: vec![],
            category: None,
            difficulty: None,
            visibility: "public".to_string(),
            views: 0,
            likes: vec![],
            bookmarked_by: vec![],
            attachments: vec![],
            answers: vec![],
            comments: vec![],
            edit_history: vec![],
            summary: Summary::Idle,
        }
    }

    fn make_collection(id: &str, post_ids: &[&str]) -> Collection {
        Collection {
            id: id.to_string(),
            name: format!("Collection {}", id),
            owner_id: "u1".to_string(),
            post_ids: post_ids.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_likes_replaced_not_merged() {
        let mut post = make_post(PostType::Article);
        post.likes = vec!["u1".to_string(), "u2".to_string()];
        replace_likes(&mut post, vec!["u2".to_string()]);
        assert_eq!(post.likes, vec!["u2".to_string()]);
    }

    #[test]
    fn test_accept_leaves_exactly_one_accepted() {
        let mut post = make_post(PostType::Question);
        post.answers = vec![make_answer("a1", true), make_answer("a2", false)];
        // server response after accepting a2
        replace_answers(&mut post, vec![make_answer("a1", false), make_answer("a2", true)]);
        let accepted: Vec<_> = post.answers.iter().filter(|a| a.is_accepted).collect();
        assert_eq!(accepted.len(), 1);
        assert_eq!(accepted[0].id, "a2");
        assert_eq!(accepted_answer(&post).unwrap().id, "a2");
    }

    #[test]
    fn test_patch_answer_only_touches_match() {
        let mut post = make_post(PostType::Question);
        post.answers = vec![make_answer("a1", false), make_answer("a2", false)];
        let mut voted = make_answer("a2", false);
        voted.upvotes = vec!["u9".to_string()];
        patch_answer(&mut post, voted);
        assert!(post.answers[0].upvotes.is_empty());
        assert_eq!(post.answers[1].upvotes, vec!["u9".to_string()]);
    }

    #[test]
    fn test_response_channel_by_post_type() {
        assert_eq!(response_channel(PostType::Question), ResponseChannel::Answer);
        assert_eq!(response_channel(PostType::Article), ResponseChannel::Comment);
        assert_eq!(response_channel(PostType::Resource), ResponseChannel::Comment);
    }

    #[test]
    fn test_collection_toggle_scans_membership() {
        let member = make_collection("c1", &["p1", "p2"]);
        let non_member = make_collection("c2", &["p9"]);
        assert_eq!(collection_toggle_action(&member, "p1"), CollectionAction::Remove);
        assert_eq!(collection_toggle_action(&non_member, "p1"), CollectionAction::Add);
    }

    #[test]
    fn test_patch_collection_touches_only_one() {
        let mut collections = vec![make_collection("c1", &["p1"]), make_collection("c2", &["p2"])];
        patch_collection(&mut collections, make_collection("c1", &[]));
        assert!(collections[0].post_ids.is_empty());
        assert_eq!(collections[1].post_ids, vec!["p2".to_string()]);
    }

    #[test]
    fn test_summary_idle_to_processing_is_synchronous() {
        let mut summary = Summary::Idle;
        assert!(begin_summary(&mut summary));
        assert!(summary.is_processing());
    }

    #[test]
    fn test_summary_processing_rejects_second_start() {
        let mut summary = Summary::Processing;
        assert!(!begin_summary(&mut summary));
        assert!(summary.is_processing());
    }

    #[test]
    fn test_summary_success_lands_ready_with_tldr() {
        let mut summary = Summary::Processing;
        let fresh = Summary::Ready {
            tldr: "Short version.".to_string(),
            key_points: vec!["one".to_string()],
            model: None,
            generated_at: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
        };
        finish_summary(&mut summary, Ok(fresh.clone()));
        assert_eq!(summary, fresh);
        match summary {
            Summary::Ready { tldr, .. } => assert!(!tldr.is_empty()),
            other => panic!("expected ready, got {:?}", other),
        }
    }

    #[test]
    fn test_summary_failure_lands_error_and_retry_is_allowed() {
        let mut summary = Summary::Processing;
        finish_summary(&mut summary, Err("model unavailable".to_string()));
        assert_eq!(summary, Summary::Error { message: "model unavailable".to_string() });
        // "Try Again" goes back through Processing
        assert!(begin_summary(&mut summary));
        assert!(summary.is_processing());
    }

    #[test]
    fn test_summary_completion_outside_processing_is_dropped() {
        let mut summary = Summary::Idle;
        finish_summary(&mut summary, Err("late".to_string()));
        assert_eq!(summary, Summary::Idle);
    }

    #[test]
    fn test_summary_ready_left_only_by_fresh_generation() {
        let mut summary = Summary::Ready {
            tldr: "v1".to_string(),
            key_points: vec![],
            model: None,
            generated_at: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
        };
        finish_summary(&mut summary, Err("stray".to_string()));
        assert!(matches!(summary, Summary::Ready { .. }));
        assert!(begin_summary(&mut summary));
        assert!(summary.is_processing());
    }
}
