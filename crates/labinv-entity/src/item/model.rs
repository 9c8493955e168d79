//! Item entity model.

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::category::Category;
use super::status::ItemStatus;
use crate::validation::{non_blank, optional_text};

/// Identity of an item within its storage (`item_001`, `item_002`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Build the id for sequence number `n`.
    pub fn sequential(n: u32) -> Self {
        Self(format!("item_{n:03}"))
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A tracked object inside exactly one storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Identity, unique within the owning storage.
    pub id: ItemId,
    /// Item name.
    pub name: String,
    /// Free-text quantity ("500g", "10 pieces"). No unit arithmetic.
    pub quantity: String,
    /// Category.
    #[serde(default)]
    pub category: Category,
    /// Status.
    pub status: ItemStatus,
    /// Free-text expiry date, not validated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry: Option<String>,
    /// Free-text notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Item {
    /// Create an item from a validated draft.
    pub fn new(id: ItemId, draft: ItemDraft) -> Self {
        let draft = draft.normalized();
        Self {
            id,
            name: draft.name,
            quantity: draft.quantity,
            category: draft.category,
            status: draft.status,
            expiry: draft.expiry,
            notes: draft.notes,
        }
    }

    /// Replace every mutable field. The id is kept.
    pub fn apply(&mut self, draft: ItemDraft) {
        let draft = draft.normalized();
        self.name = draft.name;
        self.quantity = draft.quantity;
        self.category = draft.category;
        self.status = draft.status;
        self.expiry = draft.expiry;
        self.notes = draft.notes;
    }

    /// Case-insensitive match of a lowercased needle on name, category, or id.
    pub fn matches(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
            || self.category.as_str().to_lowercase().contains(needle_lower)
            || self.id.as_str().to_lowercase().contains(needle_lower)
    }
}

/// Input for adding or editing an item.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ItemDraft {
    /// Item name (required).
    #[validate(custom(function = "non_blank", message = "Name is required"))]
    pub name: String,
    /// Quantity (required).
    #[validate(custom(function = "non_blank", message = "Quantity is required"))]
    pub quantity: String,
    /// Category, defaults to [`Category::Chemical`].
    #[serde(default)]
    pub category: Category,
    /// Status (required).
    pub status: ItemStatus,
    /// Optional expiry.
    #[serde(default)]
    pub expiry: Option<String>,
    /// Optional notes.
    #[serde(default)]
    pub notes: Option<String>,
}

impl ItemDraft {
    /// Shorthand for the required fields; category defaults.
    pub fn new(name: impl Into<String>, quantity: impl Into<String>, status: ItemStatus) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
            category: Category::default(),
            status,
            expiry: None,
            notes: None,
        }
    }

    /// Trim text fields; blank optionals become `None`.
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            quantity: self.quantity.trim().to_string(),
            category: self.category,
            status: self.status,
            expiry: optional_text(self.expiry),
            notes: optional_text(self.notes),
        }
    }
}
