//! # labinv-api
//!
//! HTTP API layer for LabInv built on Axum.
//!
//! Every view-producing endpoint runs one router cycle against the
//! caller's session and answers with the selected view model. Provides
//! the session registry and its cookie middleware, CORS, logging,
//! compression and panic recovery layers, DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod session;
pub mod state;

pub use app::build_app;
pub use state::AppState;
