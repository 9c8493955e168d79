//! Concurrent registry of live sessions.

use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use tracing::{debug, info, warn};

use labinv_cache::LinkCodeCacheManager;
use labinv_core::config::LinkCodeCacheConfig;
use labinv_core::result::AppResult;
use labinv_core::traits::LinkEncoder;
use labinv_core::types::SessionId;
use labinv_service::Workspace;
use labinv_store::{InventoryStore, StoreManager};

use super::entry::{Session, SessionEntry};

/// Live sessions keyed by id, backed by the snapshot store.
#[derive(Debug)]
pub struct SessionRegistry {
    /// Live sessions.
    sessions: DashMap<SessionId, Arc<SessionEntry>>,
    /// Snapshot persistence.
    store: Arc<StoreManager>,
    /// Shared encoder behind every session's link-code cache.
    encoder: Arc<dyn LinkEncoder>,
    /// Provider settings for new link-code caches.
    cache_config: LinkCodeCacheConfig,
}

impl SessionRegistry {
    /// Create an empty registry. Fails if the cache provider is unknown.
    pub fn new(
        store: Arc<StoreManager>,
        encoder: Arc<dyn LinkEncoder>,
        cache_config: LinkCodeCacheConfig,
    ) -> AppResult<Self> {
        LinkCodeCacheManager::new(&cache_config, Arc::clone(&encoder))?;
        Ok(Self {
            sessions: DashMap::new(),
            store,
            encoder,
            cache_config,
        })
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether no session is live.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Resume the session named by the client, restore it from its
    /// snapshot, or start a new one.
    pub async fn open(&self, requested: Option<SessionId>) -> AppResult<Arc<SessionEntry>> {
        if let Some(id) = requested {
            let live = self.sessions.get(&id).map(|e| Arc::clone(e.value()));
            if let Some(entry) = live {
                entry.touch();
                return Ok(entry);
            }

            match self.store.load(id).await {
                Ok(Some(snapshot)) => {
                    info!(session_id = %id, storages = snapshot.inventory.len(), "Restored session");
                    return self.register(id, Workspace::with_inventory(snapshot.inventory));
                }
                Ok(None) => debug!(session_id = %id, "Unknown session, starting a new one"),
                Err(e) => warn!(session_id = %id, error = %e, "Failed to restore session"),
            }
        }

        let id = SessionId::new();
        debug!(session_id = %id, "Starting session");
        self.register(id, Workspace::new())
    }

    /// Save the inventory of `session`. Failures are logged, not returned:
    /// the in-memory state stays authoritative.
    pub async fn persist(&self, session: &Session) {
        if let Err(e) = self
            .store
            .save(session.id, &session.workspace.inventory)
            .await
        {
            warn!(session_id = %session.id, error = %e, "Failed to persist inventory");
        }
    }

    /// Drop sessions idle for at least `max_idle`. Returns how many went.
    ///
    /// A non-durable store would otherwise hold the snapshot of every
    /// session ever opened, so their snapshots are deleted with them.
    pub async fn reap_idle(&self, max_idle: Duration) -> usize {
        let mut reaped = Vec::new();
        self.sessions.retain(|id, entry| {
            let keep = entry.idle_for() < max_idle;
            if !keep {
                reaped.push(*id);
            }
            keep
        });

        if !self.store.is_durable() {
            for id in &reaped {
                if let Err(e) = self.store.delete(*id).await {
                    warn!(session_id = %id, error = %e, "Failed to drop snapshot of reaped session");
                }
            }
        }

        if !reaped.is_empty() {
            info!(reaped = reaped.len(), remaining = self.sessions.len(), "Reaped idle sessions");
        }
        reaped.len()
    }

    fn register(&self, id: SessionId, workspace: Workspace) -> AppResult<Arc<SessionEntry>> {
        let codes = LinkCodeCacheManager::new(&self.cache_config, Arc::clone(&self.encoder))?;
        let entry = Arc::new(SessionEntry::new(Session {
            id,
            workspace,
            codes,
        }));
        Ok(Arc::clone(self.sessions.entry(id).or_insert(entry).value()))
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use labinv_core::config::PersistenceConfig;
    use labinv_core::error::AppError;

    use super::*;

    #[derive(Debug)]
    struct NoopEncoder;

    impl LinkEncoder for NoopEncoder {
        fn encode(&self, content: &str) -> AppResult<Bytes> {
            if content.is_empty() {
                return Err(AppError::encoding("empty"));
            }
            Ok(Bytes::from_static(b"png"))
        }
    }

    async fn registry() -> SessionRegistry {
        registry_with(PersistenceConfig::default()).await
    }

    async fn registry_with(config: PersistenceConfig) -> SessionRegistry {
        let store = StoreManager::new(&config).await.unwrap();
        SessionRegistry::new(
            Arc::new(store),
            Arc::new(NoopEncoder),
            LinkCodeCacheConfig::default(),
        )
        .unwrap()
    }

    async fn persisted_session(registry: &SessionRegistry) -> SessionId {
        let entry = registry.open(None).await.unwrap();
        let session = entry.lock().await;
        registry.persist(&session).await;
        session.id
    }

    #[tokio::test]
    async fn test_open_resumes_live_session() {
        let registry = registry().await;
        let first = registry.open(None).await.unwrap();
        let again = registry.open(Some(first.id())).await.unwrap();
        assert!(Arc::ptr_eq(&first, &again));
        assert_eq!(registry.len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_id_gets_fresh_session() {
        let registry = registry().await;
        let stranger = SessionId::new();
        let entry = registry.open(Some(stranger)).await.unwrap();
        assert_ne!(entry.id(), stranger);
    }

    #[tokio::test]
    async fn test_reaped_session_is_restored_from_file_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let registry = registry_with(PersistenceConfig {
            provider: "file".into(),
            directory: dir.path().display().to_string(),
        })
        .await;
        let id = persisted_session(&registry).await;

        assert_eq!(registry.reap_idle(Duration::ZERO).await, 1);
        assert!(registry.is_empty());
        assert!(registry.store.load(id).await.unwrap().is_some());

        let restored = registry.open(Some(id)).await.unwrap();
        assert_eq!(restored.id(), id);
    }

    #[tokio::test]
    async fn test_reaping_drops_memory_snapshot() {
        let registry = registry().await;
        let id = persisted_session(&registry).await;
        assert!(registry.store.load(id).await.unwrap().is_some());

        assert_eq!(registry.reap_idle(Duration::ZERO).await, 1);
        assert!(registry.store.load(id).await.unwrap().is_none());

        let fresh = registry.open(Some(id)).await.unwrap();
        assert_ne!(fresh.id(), id);
    }

    #[tokio::test]
    async fn test_recent_sessions_survive_reaping() {
        let registry = registry().await;
        let id = persisted_session(&registry).await;
        assert_eq!(registry.reap_idle(Duration::from_secs(3600)).await, 0);
        assert_eq!(registry.len(), 1);
        assert!(registry.store.load(id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_unknown_cache_provider_is_rejected() {
        let store = StoreManager::new(&PersistenceConfig::default()).await.unwrap();
        let config = LinkCodeCacheConfig {
            provider: "disk".into(),
            max_capacity: 1,
        };
        assert!(SessionRegistry::new(Arc::new(store), Arc::new(NoopEncoder), config).is_err());
    }
}
