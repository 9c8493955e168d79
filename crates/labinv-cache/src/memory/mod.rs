//! In-process link-code cache providers.

pub mod bounded;
pub mod store;

pub use bounded::BoundedLinkCodeCache;
pub use store::MemoryLinkCodeCache;
