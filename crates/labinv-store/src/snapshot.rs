//! Persisted snapshot document.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use labinv_core::types::SessionId;
use labinv_entity::Inventory;

/// The saved inventory of one session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Owning session.
    pub session_id: SessionId,
    /// When the snapshot was written.
    pub saved_at: DateTime<Utc>,
    /// The inventory itself.
    pub inventory: Inventory,
}

impl Snapshot {
    /// Capture `inventory` for `session_id` now.
    pub fn capture(session_id: SessionId, inventory: &Inventory) -> Self {
        Self {
            session_id,
            saved_at: Utc::now(),
            inventory: inventory.clone(),
        }
    }

    /// Listing summary of this snapshot.
    pub fn info(&self) -> SnapshotInfo {
        SnapshotInfo {
            session_id: self.session_id,
            saved_at: self.saved_at,
            storages: self.inventory.len(),
            items: self.inventory.total_items(),
        }
    }
}

/// Listing summary of a snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotInfo {
    /// Owning session.
    pub session_id: SessionId,
    /// When the snapshot was written.
    pub saved_at: DateTime<Utc>,
    /// Number of storages.
    pub storages: usize,
    /// Number of items across all storages.
    pub items: usize,
}

/// Sort summaries newest first.
pub(crate) fn newest_first(infos: &mut [SnapshotInfo]) {
    infos.sort_by(|a, b| b.saved_at.cmp(&a.saved_at));
}
