//! Item search across all storages.

use serde::Serialize;

use labinv_entity::{Inventory, Item, StorageId};

/// One matching item and the storage holding it.
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    /// Owning storage id.
    pub storage_id: StorageId,
    /// Owning storage name.
    pub storage_name: String,
    /// Position of the item within its storage.
    pub index: usize,
    /// The item.
    pub item: Item,
}

/// Case-insensitive item search.
#[derive(Debug, Clone, Default)]
pub struct SearchService;

impl SearchService {
    /// Creates a new search service.
    pub fn new() -> Self {
        Self
    }

    /// Items whose name, category, or id contains `term`, ignoring case.
    ///
    /// Hits are ordered by storage, then by position. A blank term matches
    /// nothing.
    pub fn search(&self, inventory: &Inventory, term: &str) -> Vec<SearchHit> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        inventory
            .iter()
            .flat_map(|storage| {
                storage
                    .items
                    .iter()
                    .enumerate()
                    .filter(|(_, item)| item.matches(&needle))
                    .map(|(index, item)| SearchHit {
                        storage_id: storage.id.clone(),
                        storage_name: storage.name.clone(),
                        index,
                        item: item.clone(),
                    })
            })
            .collect()
    }
}
