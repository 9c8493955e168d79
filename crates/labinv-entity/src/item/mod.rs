//! Item domain entities.

pub mod category;
pub mod model;
pub mod status;

pub use category::Category;
pub use model::{Item, ItemDraft, ItemId};
pub use status::{ItemStatus, StatusCount, count_by_status};
