//! Request DTOs.
//!
//! Text fields default to empty so that missing fields surface as the
//! "required fields" validation message rather than a parse failure.

use serde::{Deserialize, Serialize};

use labinv_core::error::AppError;
use labinv_core::result::AppResult;
use labinv_entity::{Category, ItemDraft, ItemStatus, StorageDraft, StorageKind};
use labinv_service::item::ITEM_REQUIRED_FIELDS;
use labinv_service::storage::STORAGE_REQUIRED_FIELDS;

/// Body of storage create and update requests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageRequest {
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Storage type (`drawer`, `cupboard`, ...).
    #[serde(default, rename = "type")]
    pub kind: String,
    /// Location.
    #[serde(default)]
    pub location: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
}

impl StorageRequest {
    /// Convert into a draft, parsing the storage type.
    pub fn into_draft(self) -> AppResult<StorageDraft> {
        if self.kind.trim().is_empty() {
            return Err(AppError::validation(STORAGE_REQUIRED_FIELDS));
        }
        Ok(StorageDraft {
            kind: self.kind.parse::<StorageKind>()?,
            name: self.name,
            location: self.location,
            description: self.description,
        })
    }
}

/// Body of item add and update requests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemRequest {
    /// Item name.
    #[serde(default)]
    pub name: String,
    /// Free-text quantity.
    #[serde(default)]
    pub quantity: String,
    /// Category; defaults to `Chemical`.
    #[serde(default)]
    pub category: Option<String>,
    /// Status (`Free`, `Occupied`, ...).
    #[serde(default)]
    pub status: Option<String>,
    /// Optional expiry.
    #[serde(default)]
    pub expiry: Option<String>,
    /// Optional notes.
    #[serde(default)]
    pub notes: Option<String>,
}

impl ItemRequest {
    /// Convert into a draft, parsing category and status.
    pub fn into_draft(self) -> AppResult<ItemDraft> {
        let status = match self.status.as_deref().map(str::trim) {
            Some(s) if !s.is_empty() => s.parse::<ItemStatus>()?,
            _ => return Err(AppError::validation(ITEM_REQUIRED_FIELDS)),
        };
        let category = match self.category.as_deref().map(str::trim) {
            Some(c) if !c.is_empty() => c.parse::<Category>()?,
            _ => Category::default(),
        };
        Ok(ItemDraft {
            name: self.name,
            quantity: self.quantity,
            category,
            status,
            expiry: self.expiry,
            notes: self.notes,
        })
    }
}

/// Query of the search endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    /// Search term.
    #[serde(default)]
    pub q: String,
}
