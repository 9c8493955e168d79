//! # labinv-cache
//!
//! Link-code (QR) encoding and memoization for LabInv. Two providers
//! implement [`LinkCodeCache`](labinv_core::traits::LinkCodeCache):
//!
//! - **unbounded**: a `DashMap` that never evicts (session-lifetime growth)
//! - **bounded**: a [moka](https://crates.io/crates/moka) cache with a
//!   maximum entry count
//!
//! The provider is selected at runtime based on configuration.

pub mod encoder;
pub mod links;
pub mod memory;
pub mod provider;

pub use encoder::QrPngEncoder;
pub use provider::LinkCodeCacheManager;
