//! `SessionCtx` extractor: the caller's live session.

use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use labinv_core::error::AppError;

use crate::error::ApiError;
use crate::session::SessionEntry;

/// The caller's session, opened by the session cookie middleware.
#[derive(Debug, Clone)]
pub struct SessionCtx {
    /// The live session.
    pub entry: Arc<SessionEntry>,
}

impl<S> FromRequestParts<S> for SessionCtx
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SessionCtx>()
            .cloned()
            .ok_or_else(|| ApiError(AppError::internal("Session middleware is not installed")))
    }
}
