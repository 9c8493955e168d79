//! Storage use cases.

pub mod service;

pub use service::{STORAGE_REQUIRED_FIELDS, StorageService};
