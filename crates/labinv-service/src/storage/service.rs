//! Storage CRUD operations.

use std::sync::Arc;

use tracing::info;
use validator::Validate;

use labinv_core::error::AppError;
use labinv_core::result::AppResult;
use labinv_core::traits::Clock;
use labinv_core::types::Notice;
use labinv_entity::{Storage, StorageDraft, StorageId};

use crate::workspace::Workspace;

/// Message returned when a storage form is incomplete.
pub const STORAGE_REQUIRED_FIELDS: &str = "Please fill in all required fields (Name, Type, Location)";

/// Manages storage CRUD operations.
#[derive(Debug, Clone)]
pub struct StorageService {
    /// Time source for identities and timestamps.
    clock: Arc<dyn Clock>,
}

impl StorageService {
    /// Creates a new storage service.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Creates a storage and leaves the add-storage screen.
    pub fn create_storage(&self, ws: &mut Workspace, draft: StorageDraft) -> AppResult<StorageId> {
        draft
            .validate()
            .map_err(|_| AppError::validation(STORAGE_REQUIRED_FIELDS))?;

        let now = self.clock.now();
        let id = ws
            .inventory
            .unique_id(StorageId::derive(draft.kind, &draft.name, now));
        let storage = Storage::new(id.clone(), draft, now);
        let name = storage.name.clone();
        ws.inventory.insert(storage)?;

        if ws.ui.screen == crate::ui::Screen::AddStorage {
            ws.ui.dismiss();
        }
        ws.notify(Notice::success(format!("Storage '{name}' added successfully!")));
        info!(storage_id = %id, name = %name, "Storage created");
        Ok(id)
    }

    /// Replaces the editable fields of a storage. The id never changes.
    pub fn update_storage(
        &self,
        ws: &mut Workspace,
        id: &StorageId,
        draft: StorageDraft,
    ) -> AppResult<()> {
        draft
            .validate()
            .map_err(|_| AppError::validation(STORAGE_REQUIRED_FIELDS))?;

        let now = self.clock.now();
        let storage = ws.inventory.require_mut(id)?;
        storage.apply(draft, now);
        let name = storage.name.clone();

        if ws.ui.screen.storage_id() == Some(id) {
            ws.ui.dismiss();
        }
        ws.notify(Notice::success(format!("Storage '{name}' updated successfully!")));
        info!(storage_id = %id, "Storage updated");
        Ok(())
    }

    /// Deletes a storage with all of its items and drops UI references to it.
    pub fn delete_storage(&self, ws: &mut Workspace, id: &StorageId) -> AppResult<Storage> {
        let removed = ws.inventory.remove(id)?;
        ws.ui.forget_storage(id);
        ws.notify(Notice::success(format!(
            "Storage '{}' deleted successfully!",
            removed.name
        )));
        info!(storage_id = %id, items = removed.items.len(), "Storage deleted");
        Ok(removed)
    }
}
