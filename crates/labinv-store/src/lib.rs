//! # labinv-store
//!
//! Persistence of per-session inventory snapshots. Two providers implement
//! [`InventoryStore`]:
//!
//! - **memory**: snapshots live only as long as the process
//! - **file**: one JSON document per session under a directory, written
//!   atomically and restored after a restart
//!
//! The provider is selected at runtime based on configuration.

pub mod file;
pub mod manager;
pub mod memory;
pub mod snapshot;

use async_trait::async_trait;

use labinv_core::result::AppResult;
use labinv_core::types::SessionId;
use labinv_entity::Inventory;

pub use file::JsonFileStore;
pub use manager::StoreManager;
pub use memory::MemoryInventoryStore;
pub use snapshot::{Snapshot, SnapshotInfo};

/// Saves and restores the inventory of a session.
#[async_trait]
pub trait InventoryStore: Send + Sync + std::fmt::Debug + 'static {
    /// Load the snapshot of `session`, if one was saved.
    async fn load(&self, session: SessionId) -> AppResult<Option<Snapshot>>;

    /// Replace the snapshot of `session` with `inventory`.
    async fn save(&self, session: SessionId, inventory: &Inventory) -> AppResult<()>;

    /// Forget the snapshot of `session`. Missing snapshots are not an error.
    async fn delete(&self, session: SessionId) -> AppResult<()>;

    /// Summaries of every saved snapshot, newest first.
    async fn list(&self) -> AppResult<Vec<SnapshotInfo>>;
}
