//! Response DTOs.

use serde::{Deserialize, Serialize};

use labinv_service::SearchHit;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Search results.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    /// The term as received.
    pub query: String,
    /// Number of hits.
    pub total: usize,
    /// Matching items.
    pub hits: Vec<SearchHit>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status string.
    pub status: String,
    /// Application version.
    pub version: String,
    /// Live sessions.
    pub sessions: usize,
}
