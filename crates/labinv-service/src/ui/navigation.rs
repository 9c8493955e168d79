//! Navigation requests that move a session between screens.

use tracing::debug;

use labinv_core::error::AppError;
use labinv_core::result::AppResult;
use labinv_entity::StorageId;

use crate::workspace::Workspace;

/// Applies navigation requests to a workspace.
///
/// Targets are checked before the UI state changes, so a request naming a
/// missing storage or item leaves the session where it was.
#[derive(Debug, Clone, Default)]
pub struct NavigationService;

impl NavigationService {
    /// Creates a new navigation service.
    pub fn new() -> Self {
        Self
    }

    /// Return to the dashboard.
    pub fn dashboard(&self, ws: &mut Workspace) {
        ws.ui.back_to_dashboard();
    }

    /// Open the detail view of a storage.
    pub fn open_storage(&self, ws: &mut Workspace, id: &StorageId) -> AppResult<()> {
        ws.inventory.require(id)?;
        debug!(storage_id = %id, "Opening storage");
        ws.ui.open_storage(id.clone());
        Ok(())
    }

    /// Open the add-storage form.
    pub fn add_storage(&self, ws: &mut Workspace) {
        ws.ui.begin_add_storage();
    }

    /// Open the edit form of a storage.
    pub fn edit_storage(&self, ws: &mut Workspace, id: &StorageId) -> AppResult<()> {
        ws.inventory.require(id)?;
        ws.ui.begin_edit_storage(id.clone());
        Ok(())
    }

    /// Ask for confirmation before deleting a storage.
    pub fn confirm_delete(&self, ws: &mut Workspace, id: &StorageId) -> AppResult<()> {
        ws.inventory.require(id)?;
        ws.ui.request_delete(id.clone());
        Ok(())
    }

    /// Open the edit form of an item.
    pub fn edit_item(&self, ws: &mut Workspace, id: &StorageId, index: usize) -> AppResult<()> {
        let storage = ws.inventory.require(id)?;
        if storage.item(index).is_none() {
            return Err(AppError::not_found(format!(
                "Item {index} not found in storage '{id}'"
            )));
        }
        ws.ui.begin_edit_item(id.clone(), index);
        Ok(())
    }

    /// Leave the secondary screen.
    pub fn cancel(&self, ws: &mut Workspace) {
        ws.ui.dismiss();
    }
}
