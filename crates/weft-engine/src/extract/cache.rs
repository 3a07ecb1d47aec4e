//! In-process extraction memoization.
//!
//! Keyed by content hash: identical bytes always produce identical
//! candidates, so a file seen twice (or two identical files) is tokenized
//! once.

use std::sync::Arc;

use moka::sync::Cache;

/// Memoized candidate sets, keyed by xxh3 content hash.
pub struct ExtractionCache {
    inner: Cache<u64, Arc<Vec<String>>>,
}

impl ExtractionCache {
    /// Create a cache holding up to `capacity` candidate sets.
    pub fn new(capacity: u64) -> Self {
        Self {
            inner: Cache::new(capacity),
        }
    }

    /// Look up the candidates for a content hash, computing them on a miss.
    pub fn get_or_extract<F>(&self, content_hash: u64, extract: F) -> Arc<Vec<String>>
    where
        F: FnOnce() -> Vec<String>,
    {
        self.inner
            .get_with(content_hash, || Arc::new(extract()))
    }

    /// Whether a hash is already cached (for stats).
    pub fn contains(&self, content_hash: u64) -> bool {
        self.inner.contains_key(&content_hash)
    }

    /// Number of cached entries.
    pub fn len(&self) -> u64 {
        self.inner.entry_count()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.entry_count() == 0
    }
}

impl Default for ExtractionCache {
    fn default() -> Self {
        // Plenty for a large template tree; eviction is LRU-ish beyond this.
        Self::new(16_384)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn computes_once_per_hash() {
        let cache = ExtractionCache::new(16);
        let mut calls = 0;

        let a = cache.get_or_extract(1, || {
            calls += 1;
            vec!["bg-brand".to_string()]
        });
        assert_eq!(calls, 1);
        assert_eq!(a.as_slice(), ["bg-brand".to_string()]);

        let b = cache.get_or_extract(1, || {
            calls += 1;
            Vec::new()
        });
        assert_eq!(calls, 1, "second lookup must hit the cache");
        assert_eq!(b.as_slice(), ["bg-brand".to_string()]);
    }

    #[test]
    fn distinct_hashes_are_distinct_entries() {
        let cache = ExtractionCache::new(16);
        cache.get_or_extract(1, || vec!["p-2".to_string()]);
        cache.get_or_extract(2, || vec!["m-2".to_string()]);
        assert_eq!(cache.get_or_extract(2, Vec::new).as_slice(), ["m-2".to_string()]);
    }
}
