//! The ordered collection of storages held by one session.

use serde::{Deserialize, Serialize};

use labinv_core::{AppError, AppResult};

use crate::item::{Item, ItemStatus, StatusCount, count_by_status};
use crate::storage::{Storage, StorageId};

/// Every storage of a session, in creation order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    /// Storages in creation order.
    #[serde(default)]
    pub storages: Vec<Storage>,
}

impl Inventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of storages.
    pub fn len(&self) -> usize {
        self.storages.len()
    }

    /// Whether the inventory holds no storages.
    pub fn is_empty(&self) -> bool {
        self.storages.is_empty()
    }

    /// Whether a storage with `id` exists.
    pub fn contains(&self, id: &StorageId) -> bool {
        self.get(id).is_some()
    }

    /// Look up a storage.
    pub fn get(&self, id: &StorageId) -> Option<&Storage> {
        self.storages.iter().find(|s| &s.id == id)
    }

    /// Look up a storage for mutation.
    pub fn get_mut(&mut self, id: &StorageId) -> Option<&mut Storage> {
        self.storages.iter_mut().find(|s| &s.id == id)
    }

    /// Look up a storage or fail with a not-found error.
    pub fn require(&self, id: &StorageId) -> AppResult<&Storage> {
        self.get(id)
            .ok_or_else(|| AppError::not_found(format!("Storage '{id}' not found")))
    }

    /// Mutable variant of [`Inventory::require`].
    pub fn require_mut(&mut self, id: &StorageId) -> AppResult<&mut Storage> {
        self.get_mut(id)
            .ok_or_else(|| AppError::not_found(format!("Storage '{id}' not found")))
    }

    /// Append a storage. Fails if the id is already taken.
    pub fn insert(&mut self, storage: Storage) -> AppResult<()> {
        if self.contains(&storage.id) {
            return Err(AppError::conflict(format!(
                "Storage '{}' already exists",
                storage.id
            )));
        }
        self.storages.push(storage);
        Ok(())
    }

    /// Remove a storage together with its items.
    pub fn remove(&mut self, id: &StorageId) -> AppResult<Storage> {
        let pos = self
            .storages
            .iter()
            .position(|s| &s.id == id)
            .ok_or_else(|| AppError::not_found(format!("Storage '{id}' not found")))?;
        Ok(self.storages.remove(pos))
    }

    /// Iterate storages in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Storage> {
        self.storages.iter()
    }

    /// Iterate every item of every storage, paired with its owner.
    pub fn items(&self) -> impl Iterator<Item = (&Storage, &Item)> {
        self.storages
            .iter()
            .flat_map(|s| s.items.iter().map(move |item| (s, item)))
    }

    /// Total number of items across all storages.
    pub fn total_items(&self) -> usize {
        self.storages.iter().map(|s| s.items.len()).sum()
    }

    /// Number of items with `status` across all storages.
    pub fn count_with_status(&self, status: ItemStatus) -> usize {
        self.items().filter(|(_, item)| item.status == status).count()
    }

    /// Per-status tally across all storages, zero counts included.
    pub fn status_counts(&self) -> Vec<StatusCount> {
        count_by_status(self.items().map(|(_, item)| item))
    }

    /// Turn `candidate` into an id not yet used by any storage by
    /// appending `_2`, `_3`, ... as needed.
    pub fn unique_id(&self, candidate: StorageId) -> StorageId {
        if !self.contains(&candidate) {
            return candidate;
        }
        let mut n = 2;
        loop {
            let id = candidate.with_suffix(n);
            if !self.contains(&id) {
                return id;
            }
            n += 1;
        }
    }
}
