//! In-process snapshot store.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;

use labinv_core::result::AppResult;
use labinv_core::types::SessionId;
use labinv_entity::Inventory;

use crate::InventoryStore;
use crate::snapshot::{Snapshot, SnapshotInfo, newest_first};

/// Snapshot store that keeps everything in memory. Nothing survives a restart.
#[derive(Debug, Clone, Default)]
pub struct MemoryInventoryStore {
    snapshots: Arc<DashMap<SessionId, Snapshot>>,
}

impl MemoryInventoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl InventoryStore for MemoryInventoryStore {
    async fn load(&self, session: SessionId) -> AppResult<Option<Snapshot>> {
        Ok(self.snapshots.get(&session).map(|s| s.value().clone()))
    }

    async fn save(&self, session: SessionId, inventory: &Inventory) -> AppResult<()> {
        self.snapshots
            .insert(session, Snapshot::capture(session, inventory));
        Ok(())
    }

    async fn delete(&self, session: SessionId) -> AppResult<()> {
        self.snapshots.remove(&session);
        Ok(())
    }

    async fn list(&self) -> AppResult<Vec<SnapshotInfo>> {
        let mut infos: Vec<_> = self.snapshots.iter().map(|s| s.value().info()).collect();
        newest_first(&mut infos);
        Ok(infos)
    }
}
