//! List View Helpers
//!
//! Client-side sorting and single-item reconciliation for the list views.
//! Sorting never round-trips to the server.

use crate::models::Post;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListSort {
    /// Reverse insertion order
    Recent,
    /// Descending like count, stable
    Liked,
    /// Lexicographic on post type
    Type,
}

impl ListSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListSort::Recent => "recent",
            ListSort::Liked => "liked",
            ListSort::Type => "type",
        }
    }

    pub fn from_str(value: &str) -> Self {
        match value {
            "liked" => ListSort::Liked,
            "type" => ListSort::Type,
            _ => ListSort::Recent,
        }
    }
}

/// Pure sort over the in-memory array
pub fn sorted(posts: &[Post], sort: ListSort) -> Vec<Post> {
    match sort {
        ListSort::Recent => posts.iter().rev().cloned().collect(),
        ListSort::Liked => {
            let mut out = posts.to_vec();
            // sort_by is stable, so equal like-counts keep insertion order
            out.sort_by(|a, b| b.likes.len().cmp(&a.likes.len()));
            out
        }
        ListSort::Type => {
            let mut out = posts.to_vec();
            out.sort_by(|a, b| a.post_type.as_str().cmp(b.post_type.as_str()));
            out
        }
    }
}

/// Overwrite one post's like set by identity match
pub fn update_likes(posts: &mut [Post], post_id: &str, likes: Vec<String>) {
    if let Some(post) = posts.iter_mut().find(|p| p.id == post_id) {
        post.likes = likes;
    }
}

/// Drop one post from the array by identity match
pub fn remove_by_id(posts: &mut Vec<Post>, id: &str) {
    posts.retain(|p| p.id != id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Author, PostType, Summary};
    use chrono::{TimeZone, Utc};

    fn make_post(id: &str, post_type: PostType, like_count: usize) -> Post {
        Post {
            id: id.to_string(),
            title: format!("Post {}", id),
            body: String::new(),
            post_type,
            author: Author { id: "u1".to_string(), name: "U1".to_string(), avatar: None },
            created_at: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
            updated_at: None,
            tags: vec![],
            category: None,
            difficulty: None,
            visibility: "public".to_string(),
            views: 0,
            likes: (0..like_count).map(|i| format!("u{}", i)).collect(),
            bookmarked_by: vec![],
            attachments: vec![],
            answers: vec![],
            comments: vec![],
            edit_history: vec![],
            summary: Summary::Idle,
        }
    }

    #[test]
    fn test_recent_is_reverse_insertion_order() {
        let posts = vec![
            make_post("p1", PostType::Article, 0),
            make_post("p2", PostType::Article, 0),
            make_post("p3", PostType::Article, 0),
        ];
        let out = sorted(&posts, ListSort::Recent);
        let ids: Vec<_> = out.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["p3", "p2", "p1"]);
    }

    #[test]
    fn test_liked_is_non_increasing_and_stable() {
        let posts = vec![
            make_post("p1", PostType::Article, 2),
            make_post("p2", PostType::Article, 5),
            make_post("p3", PostType::Article, 2),
            make_post("p4", PostType::Article, 0),
        ];
        let out = sorted(&posts, ListSort::Liked);
        for pair in out.windows(2) {
            assert!(pair[0].likes.len() >= pair[1].likes.len());
        }
        // p1 and p3 tie on 2 likes; insertion order preserved
        let ids: Vec<_> = out.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["p2", "p1", "p3", "p4"]);
    }

    #[test]
    fn test_type_is_lexicographic() {
        let posts = vec![
            make_post("p1", PostType::Resource, 0),
            make_post("p2", PostType::Article, 0),
            make_post("p3", PostType::Question, 0),
        ];
        let out = sorted(&posts, ListSort::Type);
        let types: Vec<_> = out.iter().map(|p| p.post_type.as_str()).collect();
        assert_eq!(types, ["article", "question", "resource"]);
    }

    #[test]
    fn test_remove_by_id_drops_without_reload() {
        let mut posts = vec![
            make_post("p1", PostType::Article, 0),
            make_post("p2", PostType::Article, 0),
        ];
        remove_by_id(&mut posts, "p1");
        assert!(posts.iter().all(|p| p.id != "p1"));
        assert_eq!(posts.len(), 1);
    }

    #[test]
    fn test_update_likes_touches_match_only() {
        let mut posts = vec![
            make_post("p1", PostType::Article, 0),
            make_post("p2", PostType::Article, 0),
        ];
        update_likes(&mut posts, "p2", vec!["u1".to_string(), "u2".to_string(), "u3".to_string()]);
        assert_eq!(posts[0].likes.len(), 0);
        assert_eq!(posts[1].likes.len(), 3);
    }

    #[test]
    fn test_sort_round_trips_names() {
        for sort in [ListSort::Recent, ListSort::Liked, ListSort::Type] {
            assert_eq!(ListSort::from_str(sort.as_str()), sort);
        }
        assert_eq!(ListSort::from_str("garbage"), ListSort::Recent);
    }
}
