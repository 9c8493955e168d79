//! # labinv-service
//!
//! Use cases of LabInv. Every operation works on an explicit
//! [`Workspace`] (one session's inventory, UI state, and pending notices)
//! passed by `&mut`, so the services themselves hold no per-session state.
//!
//! Services follow constructor injection: their collaborators (the clock)
//! are provided at construction time via `Arc` references.

pub mod export;
pub mod item;
pub mod router;
pub mod search;
pub mod storage;
pub mod ui;
pub mod workspace;

pub use export::{ExportFile, ExportService, InventoryExport};
pub use item::ItemService;
pub use router::{Rendered, RouteQuery, View, ViewRouter};
pub use search::{SearchHit, SearchService};
pub use storage::StorageService;
pub use ui::{NavigationService, Screen, UiState};
pub use workspace::Workspace;
