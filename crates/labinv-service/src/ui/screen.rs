//! Screen selection state.

use serde::{Deserialize, Serialize};

use labinv_entity::StorageId;

/// The screen a session is on.
///
/// At most one secondary screen exists at a time; entering one replaces
/// whatever was there before.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum Screen {
    /// No secondary screen: storage detail or dashboard.
    #[default]
    Browse,
    /// Confirming deletion of a storage.
    ConfirmDelete {
        /// Storage to delete.
        storage_id: StorageId,
    },
    /// Creating a storage.
    AddStorage,
    /// Editing a storage.
    EditStorage {
        /// Storage being edited.
        storage_id: StorageId,
    },
    /// Editing one item of a storage.
    EditItem {
        /// Owning storage.
        storage_id: StorageId,
        /// Position of the item in the storage.
        index: usize,
    },
}

impl Screen {
    /// The storage this screen refers to, if any.
    pub fn storage_id(&self) -> Option<&StorageId> {
        match self {
            Self::ConfirmDelete { storage_id }
            | Self::EditStorage { storage_id }
            | Self::EditItem { storage_id, .. } => Some(storage_id),
            Self::Browse | Self::AddStorage => None,
        }
    }
}

/// Transient navigation state of a session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiState {
    /// Active screen.
    pub screen: Screen,
    /// Storage whose detail view is shown when no secondary screen is active.
    pub current_storage: Option<StorageId>,
}

impl UiState {
    /// Show the detail view of `id`.
    pub fn open_storage(&mut self, id: StorageId) {
        self.screen = Screen::Browse;
        self.current_storage = Some(id);
    }

    /// Show the dashboard.
    pub fn back_to_dashboard(&mut self) {
        self.screen = Screen::Browse;
        self.current_storage = None;
    }

    /// Ask for confirmation before deleting `id`.
    pub fn request_delete(&mut self, id: StorageId) {
        self.screen = Screen::ConfirmDelete { storage_id: id };
    }

    /// Open the add-storage form.
    pub fn begin_add_storage(&mut self) {
        self.screen = Screen::AddStorage;
    }

    /// Open the edit form of `id`.
    pub fn begin_edit_storage(&mut self, id: StorageId) {
        self.screen = Screen::EditStorage { storage_id: id };
    }

    /// Open the edit form of item `index` in `id`.
    pub fn begin_edit_item(&mut self, id: StorageId, index: usize) {
        self.screen = Screen::EditItem {
            storage_id: id,
            index,
        };
    }

    /// Leave the secondary screen. The viewed storage is kept.
    pub fn dismiss(&mut self) {
        self.screen = Screen::Browse;
    }

    /// Drop every reference to a storage that no longer exists.
    pub fn forget_storage(&mut self, id: &StorageId) {
        if self.current_storage.as_ref() == Some(id) {
            self.current_storage = None;
        }
        if self.screen.storage_id() == Some(id) {
            self.screen = Screen::Browse;
        }
    }
}
