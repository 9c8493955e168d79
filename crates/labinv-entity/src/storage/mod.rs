//! Storage domain entities.

pub mod kind;
pub mod model;

pub use kind::StorageKind;
pub use model::{Storage, StorageDraft, StorageId};
