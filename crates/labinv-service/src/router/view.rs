//! View models returned by the router.

use chrono::{DateTime, Utc};
use serde::Serialize;

use labinv_entity::{
    Category, Inventory, Item, ItemId, ItemStatus, StatusCount, Storage, StorageId, StorageKind,
};

use super::link_code::LinkCodeView;

/// Number of items listed under each storage on the dashboard.
pub const PREVIEW_ITEMS: usize = 5;

/// Exactly one of these is rendered per request cycle.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum View {
    /// Overview of every storage.
    Dashboard(DashboardView),
    /// One storage with its items.
    StorageDetail(StorageDetailView),
    /// Confirmation before deleting a storage.
    ConfirmDelete(ConfirmDeleteView),
    /// Form for a new storage.
    AddStorage(StorageFormView),
    /// Form for an existing storage.
    EditStorage(StorageFormView),
    /// Form for an existing item.
    EditItem(EditItemView),
}

impl View {
    /// Snake-case name of the view, as serialized in `screen`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Dashboard(_) => "dashboard",
            Self::StorageDetail(_) => "storage_detail",
            Self::ConfirmDelete(_) => "confirm_delete",
            Self::AddStorage(_) => "add_storage",
            Self::EditStorage(_) => "edit_storage",
            Self::EditItem(_) => "edit_item",
        }
    }
}

/// Headline numbers of the dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardStats {
    /// Number of storages.
    pub total_storages: usize,
    /// Number of items across all storages.
    pub total_items: usize,
    /// Number of items currently occupied.
    pub occupied_items: usize,
    /// Per-status counts; statuses with no items are left out.
    pub by_status: Vec<StatusCount>,
}

impl DashboardStats {
    pub(crate) fn of(inventory: &Inventory) -> Self {
        Self {
            total_storages: inventory.len(),
            total_items: inventory.total_items(),
            occupied_items: inventory.count_with_status(ItemStatus::Occupied),
            by_status: non_zero(inventory.status_counts()),
        }
    }
}

/// The dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    /// Headline numbers.
    pub stats: DashboardStats,
    /// Link code pointing at the dashboard itself.
    pub link_code: LinkCodeView,
    /// One entry per storage, in creation order.
    pub storages: Vec<StorageSummary>,
}

/// A storage as listed on the dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct StorageSummary {
    /// Storage id.
    pub id: StorageId,
    /// Display name.
    pub name: String,
    /// Storage type.
    #[serde(rename = "type")]
    pub kind: StorageKind,
    /// Title-cased type.
    pub type_label: &'static str,
    /// Type icon.
    pub icon: &'static str,
    /// Location.
    pub location: String,
    /// Optional description.
    pub description: Option<String>,
    /// Number of items.
    pub item_count: usize,
    /// Last modification.
    pub last_updated: DateTime<Utc>,
    /// The first few items.
    pub preview: Vec<ItemPreview>,
    /// Items beyond the preview.
    pub more_items: usize,
    /// Link code of the storage.
    pub link_code: LinkCodeView,
}

impl StorageSummary {
    pub(crate) fn of(storage: &Storage, link_code: LinkCodeView) -> Self {
        Self {
            id: storage.id.clone(),
            name: storage.name.clone(),
            kind: storage.kind,
            type_label: storage.kind.label(),
            icon: storage.kind.icon(),
            location: storage.location.clone(),
            description: storage.description.clone(),
            item_count: storage.items.len(),
            last_updated: storage.last_updated,
            preview: storage
                .items
                .iter()
                .take(PREVIEW_ITEMS)
                .enumerate()
                .map(|(index, item)| ItemPreview::of(index, item))
                .collect(),
            more_items: storage.items.len().saturating_sub(PREVIEW_ITEMS),
            link_code,
        }
    }
}

/// Short form of an item.
#[derive(Debug, Clone, Serialize)]
pub struct ItemPreview {
    /// Position within the storage.
    pub index: usize,
    /// Item id.
    pub id: ItemId,
    /// Item name.
    pub name: String,
    /// Quantity.
    pub quantity: String,
    /// Status.
    pub status: ItemStatus,
    /// Status icon.
    pub status_icon: &'static str,
}

impl ItemPreview {
    fn of(index: usize, item: &Item) -> Self {
        Self {
            index,
            id: item.id.clone(),
            name: item.name.clone(),
            quantity: item.quantity.clone(),
            status: item.status,
            status_icon: item.status.icon(),
        }
    }
}

/// One storage with all of its items and the add-item form options.
#[derive(Debug, Clone, Serialize)]
pub struct StorageDetailView {
    /// The storage, items included.
    pub storage: Storage,
    /// Title-cased type.
    pub type_label: &'static str,
    /// Type icon.
    pub icon: &'static str,
    /// Link code of the storage.
    pub link_code: LinkCodeView,
    /// Per-status counts; statuses with no items are left out.
    pub status_counts: Vec<StatusCount>,
    /// Categories selectable in the add-item form.
    pub categories: [Category; 8],
    /// Statuses selectable in the add-item form.
    pub statuses: [ItemStatus; 5],
}

impl StorageDetailView {
    pub(crate) fn of(storage: &Storage, link_code: LinkCodeView) -> Self {
        Self {
            storage: storage.clone(),
            type_label: storage.kind.label(),
            icon: storage.kind.icon(),
            link_code,
            status_counts: non_zero(storage.status_counts()),
            categories: Category::ALL,
            statuses: ItemStatus::ALL,
        }
    }
}

/// Confirmation before deleting a storage.
#[derive(Debug, Clone, Serialize)]
pub struct ConfirmDeleteView {
    /// Storage to delete.
    pub storage_id: StorageId,
    /// Its name.
    pub name: String,
    /// Number of items that will be deleted with it.
    pub item_count: usize,
}

/// Add or edit form of a storage.
#[derive(Debug, Clone, Serialize)]
pub struct StorageFormView {
    /// The storage being edited; absent when adding.
    pub storage: Option<Storage>,
    /// Selectable storage types.
    pub storage_types: [StorageKind; 8],
}

impl StorageFormView {
    pub(crate) fn new(storage: Option<&Storage>) -> Self {
        Self {
            storage: storage.cloned(),
            storage_types: StorageKind::ALL,
        }
    }
}

/// Edit form of an item.
#[derive(Debug, Clone, Serialize)]
pub struct EditItemView {
    /// Owning storage.
    pub storage_id: StorageId,
    /// Owning storage name.
    pub storage_name: String,
    /// Position of the item.
    pub index: usize,
    /// Current values.
    pub item: Item,
    /// Selectable categories.
    pub categories: [Category; 8],
    /// Selectable statuses.
    pub statuses: [ItemStatus; 5],
}

fn non_zero(counts: Vec<StatusCount>) -> Vec<StatusCount> {
    counts.into_iter().filter(|c| c.count > 0).collect()
}
