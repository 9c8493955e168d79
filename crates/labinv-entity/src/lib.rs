//! # labinv-entity
//!
//! Domain entity models for LabInv. A [`Storage`](storage::Storage) is a
//! named physical container owning an ordered list of
//! [`Item`](item::Item)s; the [`Inventory`](inventory::Inventory) is the
//! ordered collection of storages held by one session. All entities derive
//! `Debug`, `Clone`, `Serialize`, and `Deserialize`; the JSON field names
//! are the export format.

pub mod inventory;
pub mod item;
pub mod storage;
pub mod validation;

pub use inventory::Inventory;
pub use item::{Category, Item, ItemDraft, ItemId, ItemStatus, StatusCount};
pub use storage::{Storage, StorageDraft, StorageId, StorageKind};
