//! Core traits defined in `labinv-core` and implemented by other crates.

pub mod clock;
pub mod link_code;

pub use clock::{Clock, SystemClock};
pub use link_code::{LinkCodeCache, LinkEncoder};
