//! Browser Storage
//!
//! Durable session keys in localStorage and a short-TTL bookmarks cache in
//! sessionStorage. Parse failures are swallowed; callers fall back to a
//! network fetch.

use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;
use web_sys::Storage;

use crate::models::{Post, User};

pub const TOKEN_KEY: &str = "kp_token";
pub const USER_KEY: &str = "kp_user";
/// Versioned so a shape change invalidates old entries instead of failing to parse forever
pub const BOOKMARKS_CACHE_KEY: &str = "kp_bookmarks_cache_v1";
pub const BOOKMARKS_CACHE_TTL_MS: f64 = 5.0 * 60.0 * 1000.0;

fn local() -> Option<Storage> {
    web_sys::window()?.local_storage().ok()?
}

fn session() -> Option<Storage> {
    web_sys::window()?.session_storage().ok()?
}

pub fn load_token() -> Option<String> {
    local()?.get_item(TOKEN_KEY).ok()?
}

pub fn load_user() -> Option<User> {
    let raw = local()?.get_item(USER_KEY).ok()??;
    serde_json::from_str(&raw).ok()
}

pub fn store_credentials(user: &User, token: &str) {
    if let Some(storage) = local() {
        let _ = storage.set_item(TOKEN_KEY, token);
        if let Ok(json) = serde_json::to_string(user) {
            let _ = storage.set_item(USER_KEY, &json);
        }
    }
}

pub fn store_user(user: &User) {
    if let Some(storage) = local() {
        if let Ok(json) = serde_json::to_string(user) {
            let _ = storage.set_item(USER_KEY, &json);
        }
    }
}

pub fn clear_credentials() {
    if let Some(storage) = local() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
}

/// A cached value paired with its write time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry<T> {
    pub saved_at_ms: f64,
    pub data: T,
}

impl<T> CacheEntry<T> {
    /// Fresh while less than `ttl_ms` has elapsed since the write
    pub fn is_fresh(&self, now_ms: f64, ttl_ms: f64) -> bool {
        now_ms - self.saved_at_ms < ttl_ms
    }
}

fn read_cached<T: DeserializeOwned>(key: &str, ttl_ms: f64) -> Option<T> {
    let raw = session()?.get_item(key).ok()??;
    let entry: CacheEntry<T> = serde_json::from_str(&raw).ok()?;
    if entry.is_fresh(js_sys::Date::now(), ttl_ms) {
        Some(entry.data)
    } else {
        None
    }
}

fn write_cached<T: Serialize>(key: &str, data: &T) {
    if let Some(storage) = session() {
        let entry = CacheEntry { saved_at_ms: js_sys::Date::now(), data };
        if let Ok(json) = serde_json::to_string(&entry) {
            let _ = storage.set_item(key, &json);
        }
    }
}

/// Stale-but-fast first paint for the bookmarks list; `None` means absent,
/// expired or unparseable, and the caller awaits the network instead.
pub fn read_bookmarks_cache() -> Option<Vec<Post>> {
    read_cached(BOOKMARKS_CACHE_KEY, BOOKMARKS_CACHE_TTL_MS)
}

/// Unconditionally overwritten by every successful fetch
pub fn write_bookmarks_cache(posts: &[Post]) {
    write_cached(BOOKMARKS_CACHE_KEY, &posts);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_within_ttl() {
        let entry = CacheEntry { saved_at_ms: 1_000.0, data: () };
        // 4:59 after write
        assert!(entry.is_fresh(1_000.0 + BOOKMARKS_CACHE_TTL_MS - 1_000.0, BOOKMARKS_CACHE_TTL_MS));
    }

    #[test]
    fn test_stale_at_and_after_ttl() {
        let entry = CacheEntry { saved_at_ms: 1_000.0, data: () };
        assert!(!entry.is_fresh(1_000.0 + BOOKMARKS_CACHE_TTL_MS, BOOKMARKS_CACHE_TTL_MS));
        assert!(!entry.is_fresh(1_000.0 + BOOKMARKS_CACHE_TTL_MS + 1.0, BOOKMARKS_CACHE_TTL_MS));
    }

    #[test]
    fn test_entry_round_trips_through_json() {
        let entry = CacheEntry { saved_at_ms: 42.0, data: vec!["p1".to_string()] };
        let json = serde_json::to_string(&entry).unwrap();
        let back: CacheEntry<Vec<String>> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
