//! Per-session working state.

use serde::{Deserialize, Serialize};

use labinv_core::types::Notice;
use labinv_entity::Inventory;

use crate::ui::UiState;

/// Everything one session owns: its inventory, where it is in the UI, and
/// notices waiting to be shown on the next rendered view.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Workspace {
    /// The session's storages and items.
    pub inventory: Inventory,
    /// Current screen and viewed storage.
    pub ui: UiState,
    /// Notices queued for the next render.
    #[serde(default)]
    pub notices: Vec<Notice>,
}

impl Workspace {
    /// Create an empty workspace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a restored inventory with a fresh UI state.
    pub fn with_inventory(inventory: Inventory) -> Self {
        Self {
            inventory,
            ..Self::default()
        }
    }

    /// Queue a notice for the next render.
    pub fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    /// Drain the queued notices.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }
}
