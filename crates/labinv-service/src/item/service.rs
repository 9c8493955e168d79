//! Item CRUD operations within a storage.

use std::sync::Arc;

use tracing::info;
use validator::Validate;

use labinv_core::error::AppError;
use labinv_core::result::AppResult;
use labinv_core::traits::Clock;
use labinv_core::types::Notice;
use labinv_entity::{Item, ItemDraft, ItemId, Storage, StorageId};

use crate::ui::Screen;
use crate::workspace::Workspace;

/// Message returned when an item form is incomplete.
pub const ITEM_REQUIRED_FIELDS: &str = "Please fill in all required fields (Name, Quantity, Status)";

/// Manages the items of a storage.
#[derive(Debug, Clone)]
pub struct ItemService {
    /// Time source for the owner's last-updated stamp.
    clock: Arc<dyn Clock>,
}

impl ItemService {
    /// Creates a new item service.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Appends an item with a fresh id.
    pub fn add_item(
        &self,
        ws: &mut Workspace,
        storage_id: &StorageId,
        draft: ItemDraft,
    ) -> AppResult<ItemId> {
        draft
            .validate()
            .map_err(|_| AppError::validation(ITEM_REQUIRED_FIELDS))?;

        let now = self.clock.now();
        let storage = ws.inventory.require_mut(storage_id)?;
        let id = storage.next_item_id();
        let item = Item::new(id.clone(), draft);
        let name = item.name.clone();
        storage.items.push(item);
        storage.touch(now);

        ws.notify(Notice::success(format!("Item '{name}' added successfully!")));
        info!(storage_id = %storage_id, item_id = %id, "Item added");
        Ok(id)
    }

    /// Replaces the fields of the item at `index`, keeping its id.
    pub fn update_item(
        &self,
        ws: &mut Workspace,
        storage_id: &StorageId,
        index: usize,
        draft: ItemDraft,
    ) -> AppResult<()> {
        draft
            .validate()
            .map_err(|_| AppError::validation(ITEM_REQUIRED_FIELDS))?;

        let now = self.clock.now();
        let storage = ws.inventory.require_mut(storage_id)?;
        let item = item_at(storage, index)?;
        item.apply(draft);
        let name = item.name.clone();
        storage.touch(now);

        if matches!(&ws.ui.screen, Screen::EditItem { storage_id: s, .. } if s == storage_id) {
            ws.ui.dismiss();
        }
        ws.notify(Notice::success(format!("Item '{name}' updated successfully!")));
        info!(storage_id = %storage_id, index, "Item updated");
        Ok(())
    }

    /// Removes the item at `index`; later items shift down by one.
    pub fn delete_item(
        &self,
        ws: &mut Workspace,
        storage_id: &StorageId,
        index: usize,
    ) -> AppResult<Item> {
        let now = self.clock.now();
        let storage = ws.inventory.require_mut(storage_id)?;
        item_at(storage, index)?;
        let removed = storage.items.remove(index);
        storage.touch(now);

        // Positions after `index` moved, so an open edit form may point elsewhere.
        if matches!(&ws.ui.screen, Screen::EditItem { storage_id: s, .. } if s == storage_id) {
            ws.ui.dismiss();
        }
        ws.notify(Notice::success(format!(
            "Item '{}' deleted successfully!",
            removed.name
        )));
        info!(storage_id = %storage_id, item_id = %removed.id, "Item deleted");
        Ok(removed)
    }
}

fn item_at(storage: &mut Storage, index: usize) -> AppResult<&mut Item> {
    let id = storage.id.clone();
    storage
        .items
        .get_mut(index)
        .ok_or_else(|| AppError::not_found(format!("Item {index} not found in storage '{id}'")))
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use std::sync::Mutex;

    use labinv_core::error::ErrorKind;
    use labinv_entity::{ItemStatus, StorageDraft, StorageKind};

    use super::*;
    use crate::storage::StorageService;

    #[derive(Debug)]
    struct StepClock(Mutex<DateTime<Utc>>);

    impl Clock for StepClock {
        fn now(&self) -> DateTime<Utc> {
            let mut now = self.0.lock().unwrap();
            *now += Duration::seconds(1);
            *now
        }
    }

    fn setup() -> (ItemService, Workspace, StorageId) {
        let clock: Arc<dyn Clock> = Arc::new(StepClock(Mutex::new(
            Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap(),
        )));
        let mut ws = Workspace::new();
        let id = StorageService::new(clock.clone())
            .create_storage(
                &mut ws,
                StorageDraft {
                    name: "Drawer A1".into(),
                    kind: StorageKind::Drawer,
                    location: "Room 101".into(),
                    description: None,
                },
            )
            .unwrap();
        ws.take_notices();
        (ItemService::new(clock), ws, id)
    }

    #[test]
    fn test_add_item_bumps_owner_timestamp() {
        let (svc, mut ws, id) = setup();
        let before = ws.inventory.require(&id).unwrap().last_updated;
        let item_id = svc
            .add_item(&mut ws, &id, ItemDraft::new("NaCl", "500g", ItemStatus::Free))
            .unwrap();
        let storage = ws.inventory.require(&id).unwrap();
        assert_eq!(item_id.as_str(), "item_001");
        assert_eq!(storage.items.len(), 1);
        assert!(storage.last_updated > before);
        assert_eq!(ws.notices[0].message, "Item 'NaCl' added successfully!");
    }

    #[test]
    fn test_delete_middle_item_keeps_order() {
        let (svc, mut ws, id) = setup();
        for name in ["first", "second", "third"] {
            svc.add_item(&mut ws, &id, ItemDraft::new(name, "1", ItemStatus::Free))
                .unwrap();
        }
        let before = ws.inventory.require(&id).unwrap().last_updated;

        let removed = svc.delete_item(&mut ws, &id, 1).unwrap();
        assert_eq!(removed.name, "second");
        let storage = ws.inventory.require(&id).unwrap();
        let names: Vec<_> = storage.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["first", "third"]);
        assert!(storage.last_updated > before);
    }

    #[test]
    fn test_item_ids_not_reused_after_delete() {
        let (svc, mut ws, id) = setup();
        svc.add_item(&mut ws, &id, ItemDraft::new("a", "1", ItemStatus::Free))
            .unwrap();
        svc.add_item(&mut ws, &id, ItemDraft::new("b", "1", ItemStatus::Free))
            .unwrap();
        svc.delete_item(&mut ws, &id, 0).unwrap();
        let fresh = svc
            .add_item(&mut ws, &id, ItemDraft::new("c", "1", ItemStatus::Free))
            .unwrap();
        assert_eq!(fresh.as_str(), "item_003");
        let storage = ws.inventory.require(&id).unwrap();
        assert_ne!(storage.items[0].id, storage.items[1].id);
    }

    #[test]
    fn test_update_item_preserves_id() {
        let (svc, mut ws, id) = setup();
        svc.add_item(&mut ws, &id, ItemDraft::new("NaCl", "500g", ItemStatus::Free))
            .unwrap();
        ws.ui.begin_edit_item(id.clone(), 0);

        svc.update_item(
            &mut ws,
            &id,
            0,
            ItemDraft::new("NaCl", "250g", ItemStatus::Occupied),
        )
        .unwrap();
        let item = &ws.inventory.require(&id).unwrap().items[0];
        assert_eq!(item.id.as_str(), "item_001");
        assert_eq!(item.quantity, "250g");
        assert_eq!(ws.ui.screen, Screen::Browse);
    }

    #[test]
    fn test_blank_quantity_is_rejected() {
        let (svc, mut ws, id) = setup();
        let err = svc
            .add_item(&mut ws, &id, ItemDraft::new("NaCl", " ", ItemStatus::Free))
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.message, ITEM_REQUIRED_FIELDS);
        assert!(ws.inventory.require(&id).unwrap().items.is_empty());
    }

    #[test]
    fn test_out_of_range_index_is_not_found() {
        let (svc, mut ws, id) = setup();
        assert!(svc.delete_item(&mut ws, &id, 0).unwrap_err().is_not_found());
        let err = svc
            .update_item(&mut ws, &id, 3, ItemDraft::new("x", "1", ItemStatus::Free))
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
