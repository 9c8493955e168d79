//! # labinv-core
//!
//! Core crate for LabInv. Contains the collaborator traits (link-code
//! encoding and caching, clock), configuration schemas, typed identifiers,
//! user-facing notices, and the unified error system.
//!
//! This crate has **no** internal dependencies on other LabInv crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
