//! JSON export of a session's inventory.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use labinv_core::result::AppResult;
use labinv_core::traits::Clock;
use labinv_entity::{Category, Inventory, ItemStatus, Storage, StorageKind};

/// The exported document.
#[derive(Debug, Clone, Serialize)]
pub struct InventoryExport<'a> {
    /// When the export was produced.
    pub exported_at: DateTime<Utc>,
    /// Every storage with its items.
    pub storages: &'a [Storage],
    /// Selectable item categories.
    pub categories: [Category; 8],
    /// Selectable item statuses.
    pub status_options: [ItemStatus; 5],
    /// Selectable storage types.
    pub storage_types: [StorageKind; 8],
}

/// A rendered export ready to download.
#[derive(Debug, Clone)]
pub struct ExportFile {
    /// Download file name (`lab_inventory_YYYYmmdd_HHMMSS.json`).
    pub file_name: String,
    /// Pretty-printed UTF-8 JSON.
    pub body: Vec<u8>,
}

/// Produces JSON exports.
#[derive(Debug, Clone)]
pub struct ExportService {
    /// Time source for the export stamp.
    clock: Arc<dyn Clock>,
}

impl ExportService {
    /// Creates a new export service.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Serialize `inventory` into a downloadable document.
    pub fn export(&self, inventory: &Inventory) -> AppResult<ExportFile> {
        let now = self.clock.now();
        let doc = InventoryExport {
            exported_at: now,
            storages: &inventory.storages,
            categories: Category::ALL,
            status_options: ItemStatus::ALL,
            storage_types: StorageKind::ALL,
        };
        Ok(ExportFile {
            file_name: format!("lab_inventory_{}.json", now.format("%Y%m%d_%H%M%S")),
            body: serde_json::to_vec_pretty(&doc)?,
        })
    }
}
