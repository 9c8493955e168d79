//! Unbounded link-code cache backed by `DashMap`.

use std::sync::Arc;

use bytes::Bytes;
use dashmap::DashMap;
use tracing::{debug, warn};

use labinv_core::traits::{LinkCodeCache, LinkEncoder};

/// Link-code cache that keeps every entry for its whole lifetime.
#[derive(Debug, Clone)]
pub struct MemoryLinkCodeCache {
    /// Encoded images keyed by exact content string.
    entries: Arc<DashMap<String, Bytes>>,
    /// Encoder used on a miss.
    encoder: Arc<dyn LinkEncoder>,
}

impl MemoryLinkCodeCache {
    /// Create an empty cache around `encoder`.
    pub fn new(encoder: Arc<dyn LinkEncoder>) -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
            encoder,
        }
    }
}

impl LinkCodeCache for MemoryLinkCodeCache {
    fn get_or_create(&self, content: &str) -> Option<Bytes> {
        if let Some(hit) = self.entries.get(content) {
            debug!(content, "Link code cache hit");
            return Some(hit.value().clone());
        }

        debug!(content, "Link code cache miss");
        match self.encoder.encode(content) {
            Ok(png) => {
                let stored = self
                    .entries
                    .entry(content.to_string())
                    .or_insert(png)
                    .value()
                    .clone();
                Some(stored)
            }
            Err(e) => {
                warn!(content, error = %e, "Failed to encode link code");
                None
            }
        }
    }

    fn contains(&self, content: &str) -> bool {
        self.entries.contains_key(content)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::testing::CountingEncoder;

    fn make_cache() -> (Arc<CountingEncoder>, MemoryLinkCodeCache) {
        let encoder = Arc::new(CountingEncoder::default());
        let cache = MemoryLinkCodeCache::new(encoder.clone());
        (encoder, cache)
    }

    #[test]
    fn test_hit_does_not_re_encode() {
        let (encoder, cache) = make_cache();
        let first = cache.get_or_create("http://lab/").unwrap();
        let second = cache.get_or_create("http://lab/").unwrap();
        assert_eq!(first, second);
        assert_eq!(encoder.calls(), 1);
    }

    #[test]
    fn test_distinct_urls_are_independent() {
        let (encoder, cache) = make_cache();
        let a = cache.get_or_create("http://lab/?storage=a").unwrap();
        let b = cache.get_or_create("http://lab/?storage=b").unwrap();
        assert_ne!(a, b);
        assert_eq!(cache.len(), 2);
        assert_eq!(encoder.calls(), 2);
    }

    #[test]
    fn test_failure_is_not_cached() {
        let (encoder, cache) = make_cache();
        assert!(cache.get_or_create("fail").is_none());
        assert!(cache.get_or_create("fail").is_none());
        assert!(!cache.contains("fail"));
        assert!(cache.is_empty());
        assert_eq!(encoder.calls(), 2);
    }

    #[test]
    fn test_keys_match_exactly() {
        let (encoder, cache) = make_cache();
        cache.get_or_create("http://lab/").unwrap();
        cache.get_or_create("http://lab").unwrap();
        assert_eq!(encoder.calls(), 2);
    }
}
