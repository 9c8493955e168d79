//! Bounded link-code cache using moka.

use std::sync::Arc;

use bytes::Bytes;
use moka::sync::Cache;
use tracing::{debug, warn};

use labinv_core::config::LinkCodeCacheConfig;
use labinv_core::traits::{LinkCodeCache, LinkEncoder};

/// Link-code cache holding at most `max_capacity` entries.
///
/// Least recently used entries are evicted first; an evicted code is simply
/// re-encoded on its next request.
#[derive(Debug, Clone)]
pub struct BoundedLinkCodeCache {
    /// The underlying moka cache.
    cache: Cache<String, Bytes>,
    /// Encoder used on a miss.
    encoder: Arc<dyn LinkEncoder>,
}

impl BoundedLinkCodeCache {
    /// Create a new bounded cache from configuration.
    pub fn new(config: &LinkCodeCacheConfig, encoder: Arc<dyn LinkEncoder>) -> Self {
        let cache = Cache::builder().max_capacity(config.max_capacity).build();
        Self { cache, encoder }
    }
}

impl LinkCodeCache for BoundedLinkCodeCache {
    fn get_or_create(&self, content: &str) -> Option<Bytes> {
        if let Some(hit) = self.cache.get(content) {
            debug!(content, "Link code cache hit");
            return Some(hit);
        }

        debug!(content, "Link code cache miss");
        let encoder = &self.encoder;
        match self
            .cache
            .try_get_with(content.to_string(), || encoder.encode(content))
        {
            Ok(png) => Some(png),
            Err(e) => {
                warn!(content, error = %e, "Failed to encode link code");
                None
            }
        }
    }

    fn contains(&self, content: &str) -> bool {
        self.cache.contains_key(content)
    }

    fn len(&self) -> usize {
        self.cache.run_pending_tasks();
        usize::try_from(self.cache.entry_count()).unwrap_or(usize::MAX)
    }
}
