//! Live client sessions.

pub mod entry;
pub mod registry;

pub use entry::{Session, SessionEntry};
pub use registry::SessionRegistry;
