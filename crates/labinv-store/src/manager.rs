//! Store manager that dispatches to the configured persistence provider.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use labinv_core::config::PersistenceConfig;
use labinv_core::error::AppError;
use labinv_core::result::AppResult;
use labinv_core::types::SessionId;
use labinv_entity::Inventory;

use crate::InventoryStore;
use crate::snapshot::{Snapshot, SnapshotInfo};

/// Snapshot store that wraps the configured provider.
#[derive(Debug, Clone)]
pub struct StoreManager {
    /// The inner provider.
    inner: Arc<dyn InventoryStore>,
    /// Whether snapshots outlive the process.
    durable: bool,
}

impl StoreManager {
    /// Create a new store manager from configuration.
    pub async fn new(config: &PersistenceConfig) -> AppResult<Self> {
        let (inner, durable): (Arc<dyn InventoryStore>, bool) = match config.provider.as_str() {
            "memory" => {
                info!("Initializing in-memory inventory store");
                (Arc::new(crate::memory::MemoryInventoryStore::new()), false)
            }
            "file" => {
                info!(directory = %config.directory, "Initializing JSON file inventory store");
                (
                    Arc::new(crate::file::JsonFileStore::new(&config.directory).await?),
                    true,
                )
            }
            other => {
                return Err(AppError::configuration(format!(
                    "Unknown persistence provider: '{other}'. Supported: memory, file"
                )));
            }
        };

        Ok(Self { inner, durable })
    }

    /// Whether snapshots survive a restart. Memory snapshots do not.
    pub fn is_durable(&self) -> bool {
        self.durable
    }
}

#[async_trait]
impl InventoryStore for StoreManager {
    async fn load(&self, session: SessionId) -> AppResult<Option<Snapshot>> {
        self.inner.load(session).await
    }

    async fn save(&self, session: SessionId, inventory: &Inventory) -> AppResult<()> {
        self.inner.save(session, inventory).await
    }

    async fn delete(&self, session: SessionId) -> AppResult<()> {
        self.inner.delete(session).await
    }

    async fn list(&self) -> AppResult<Vec<SnapshotInfo>> {
        self.inner.list().await
    }
}
