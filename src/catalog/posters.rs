// SPDX-License-Identifier: MPL-2.0
//! Bounded cache of card artwork.
//!
//! Cards ask for their image URL; the cache reports which URLs still need a
//! download, keeps decoded handles for the ones that arrived, and remembers
//! failures so the view can show the placeholder without retrying.

use super::ApiError;
use iced::widget::image::Handle;
use lru::LruCache;
use std::num::NonZeroUsize;

/// Default number of images kept in memory.
pub const DEFAULT_POSTER_CACHE_CAPACITY: usize = 128;

/// Load state of one image URL.
#[derive(Debug, Clone)]
pub enum PosterState {
    Loading,
    Ready(Handle),
    Failed,
}

#[derive(Debug)]
pub struct PosterCache {
    entries: LruCache<String, PosterState>,
}

impl Default for PosterCache {
    fn default() -> Self {
        Self::new(DEFAULT_POSTER_CACHE_CAPACITY)
    }
}

impl PosterCache {
    /// Creates a cache holding at most `capacity` entries (minimum 1).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
        }
    }

    /// Marks unknown URLs as loading and returns them, deduplicated, in order.
    ///
    /// URLs already loading, loaded or failed are skipped but refreshed in
    /// the LRU order so the visible page is not evicted by its own requests.
    pub fn request<I, S>(&mut self, urls: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut pending = Vec::new();
        for url in urls {
            let url = url.into();
            if self.entries.get(&url).is_some() {
                continue;
            }
            self.entries.put(url.clone(), PosterState::Loading);
            pending.push(url);
        }
        pending
    }

    /// Stores the outcome of a download.
    pub fn complete(&mut self, url: String, result: Result<Vec<u8>, ApiError>) {
        let state = match result {
            Ok(bytes) if !bytes.is_empty() => PosterState::Ready(Handle::from_bytes(bytes)),
            Ok(_) => PosterState::Failed,
            Err(err) => {
                tracing::warn!(%url, error = %err, "image download failed");
                PosterState::Failed
            }
        };
        self.entries.put(url, state);
    }

    /// Looks up a URL without touching the LRU order (usable from `view`).
    #[must_use]
    pub fn get(&self, url: &str) -> Option<&PosterState> {
        self.entries.peek(url)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_returns_only_unknown_urls() {
        let mut cache = PosterCache::new(8);
        let first = cache.request(["a", "b", "a"]);
        assert_eq!(first, vec!["a".to_string(), "b".to_string()]);

        let second = cache.request(["a", "c"]);
        assert_eq!(second, vec!["c".to_string()]);
        assert!(matches!(cache.get("a"), Some(PosterState::Loading)));
    }

    #[test]
    fn failures_are_remembered_and_not_retried() {
        let mut cache = PosterCache::new(8);
        cache.request(["x"]);
        cache.complete("x".into(), Err(ApiError::Status(404)));
        assert!(matches!(cache.get("x"), Some(PosterState::Failed)));
        assert!(cache.request(["x"]).is_empty());
    }

    #[test]
    fn empty_body_is_a_failure() {
        let mut cache = PosterCache::new(8);
        cache.complete("x".into(), Ok(Vec::new()));
        assert!(matches!(cache.get("x"), Some(PosterState::Failed)));
    }

    #[test]
    fn capacity_bounds_entries() {
        let mut cache = PosterCache::new(2);
        cache.request(["a", "b", "c"]);
        assert_eq!(cache.len(), 2);
        assert!(cache.get("a").is_none());
    }

    #[test]
    fn zero_capacity_is_clamped() {
        let mut cache = PosterCache::new(0);
        cache.request(["a"]);
        assert_eq!(cache.len(), 1);
    }
}
