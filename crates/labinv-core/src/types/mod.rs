//! Core type definitions used across the LabInv workspace.

pub mod id;
pub mod notice;

pub use id::SessionId;
pub use notice::{Notice, NoticeLevel};
