//! Storage entity model.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::kind::StorageKind;
use crate::item::{Item, ItemId, StatusCount, count_by_status};
use crate::validation::{non_blank, optional_text};

/// Identity of a storage.
///
/// A slug built from the storage type, the name, and the creation time
/// (`drawer_drawer_a1_143005`). It is assigned once and never changes,
/// even when the storage is renamed or its type is edited.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StorageId(String);

impl StorageId {
    /// Wrap an existing identifier (from a URL, path, or snapshot).
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Derive the identity for a storage created at `at`.
    pub fn derive(kind: StorageKind, name: &str, at: DateTime<Utc>) -> Self {
        Self(format!(
            "{}_{}_{}",
            kind.as_str(),
            slugify(name),
            at.format("%H%M%S")
        ))
    }

    /// Append a numeric suffix to disambiguate a colliding identity.
    pub fn with_suffix(&self, n: u32) -> Self {
        Self(format!("{}_{n}", self.0))
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StorageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StorageId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Lowercases `name` and maps every run of non-alphanumeric characters to
/// a single underscore, so the result is safe inside a URL query value.
fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for ch in name.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.ends_with('_') {
            slug.push('_');
        }
    }
    let slug = slug.trim_matches('_');
    if slug.is_empty() {
        "storage".to_string()
    } else {
        slug.to_string()
    }
}

/// A named physical container owning an ordered list of items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Storage {
    /// Immutable identity.
    pub id: StorageId,
    /// Display name.
    pub name: String,
    /// Container type.
    #[serde(rename = "type")]
    pub kind: StorageKind,
    /// Free-text location.
    pub location: String,
    /// Optional free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Items in insertion order.
    #[serde(default)]
    pub items: Vec<Item>,
    /// When the storage or any of its items last changed.
    pub last_updated: DateTime<Utc>,
    /// Highest item sequence number handed out so far.
    #[serde(default)]
    pub item_counter: u32,
}

impl Storage {
    /// Create an empty storage from a validated draft.
    pub fn new(id: StorageId, draft: StorageDraft, now: DateTime<Utc>) -> Self {
        let draft = draft.normalized();
        Self {
            id,
            name: draft.name,
            kind: draft.kind,
            location: draft.location,
            description: draft.description,
            items: Vec::new(),
            last_updated: now,
            item_counter: 0,
        }
    }

    /// Replace the mutable fields from a validated draft. The id is kept.
    pub fn apply(&mut self, draft: StorageDraft, now: DateTime<Utc>) {
        let draft = draft.normalized();
        self.name = draft.name;
        self.kind = draft.kind;
        self.location = draft.location;
        self.description = draft.description;
        self.touch(now);
    }

    /// Bump the last-modified timestamp.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.last_updated = now;
    }

    /// Hand out the next item identity. Numbers are never reused.
    pub fn next_item_id(&mut self) -> ItemId {
        self.item_counter += 1;
        ItemId::sequential(self.item_counter)
    }

    /// Item at `index`, if any.
    pub fn item(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Item counts per status, in status declaration order.
    pub fn status_counts(&self) -> Vec<StatusCount> {
        count_by_status(&self.items)
    }
}

/// Input for creating or editing a storage.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct StorageDraft {
    /// Display name (required).
    #[validate(custom(function = "non_blank", message = "Name is required"))]
    pub name: String,
    /// Container type (required).
    #[serde(rename = "type")]
    pub kind: StorageKind,
    /// Location (required).
    #[validate(custom(function = "non_blank", message = "Location is required"))]
    pub location: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
}

impl StorageDraft {
    /// Trim text fields; blank descriptions become `None`.
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            kind: self.kind,
            location: self.location.trim().to_string(),
            description: optional_text(self.description),
        }
    }
}
