//! Item use cases.

pub mod service;

pub use service::{ITEM_REQUIRED_FIELDS, ItemService};
