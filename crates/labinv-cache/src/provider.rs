//! Link-code cache manager that dispatches to the configured provider.

use std::sync::Arc;

use bytes::Bytes;
use tracing::info;

use labinv_core::config::LinkCodeCacheConfig;
use labinv_core::error::AppError;
use labinv_core::result::AppResult;
use labinv_core::traits::{LinkCodeCache, LinkEncoder};

/// Link-code cache that wraps the configured provider.
///
/// The provider is selected at construction time based on configuration.
#[derive(Debug, Clone)]
pub struct LinkCodeCacheManager {
    /// The inner cache provider.
    inner: Arc<dyn LinkCodeCache>,
}

impl LinkCodeCacheManager {
    /// Create a new cache manager from configuration.
    pub fn new(config: &LinkCodeCacheConfig, encoder: Arc<dyn LinkEncoder>) -> AppResult<Self> {
        let inner: Arc<dyn LinkCodeCache> = match config.provider.as_str() {
            "unbounded" => Arc::new(crate::memory::MemoryLinkCodeCache::new(encoder)),
            "bounded" => {
                info!(
                    max_capacity = config.max_capacity,
                    "Initializing bounded link code cache"
                );
                Arc::new(crate::memory::BoundedLinkCodeCache::new(config, encoder))
            }
            other => {
                return Err(AppError::configuration(format!(
                    "Unknown link code cache provider: '{other}'. Supported: unbounded, bounded"
                )));
            }
        };

        Ok(Self { inner })
    }
}

impl LinkCodeCache for LinkCodeCacheManager {
    fn get_or_create(&self, content: &str) -> Option<Bytes> {
        self.inner.get_or_create(content)
    }

    fn contains(&self, content: &str) -> bool {
        self.inner.contains(content)
    }

    fn len(&self) -> usize {
        self.inner.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::testing::CountingEncoder;

    #[test]
    fn test_dispatches_known_providers() {
        for provider in ["unbounded", "bounded"] {
            let config = LinkCodeCacheConfig {
                provider: provider.into(),
                max_capacity: 8,
            };
            let manager =
                LinkCodeCacheManager::new(&config, Arc::new(CountingEncoder::default())).unwrap();
            assert!(manager.get_or_create("http://lab/").is_some());
            assert!(manager.contains("http://lab/"));
        }
    }

    #[test]
    fn test_rejects_unknown_provider() {
        let config = LinkCodeCacheConfig {
            provider: "redis".into(),
            max_capacity: 8,
        };
        let err = LinkCodeCacheManager::new(&config, Arc::new(CountingEncoder::default()))
            .unwrap_err();
        assert_eq!(err.kind, labinv_core::error::ErrorKind::Configuration);
    }
}
