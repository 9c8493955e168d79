//! JSON export download.

use axum::extract::State;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::IntoResponse;

use crate::error::ApiResult;
use crate::extractors::SessionCtx;
use crate::state::AppState;

/// GET /export
pub async fn export(State(state): State<AppState>, ctx: SessionCtx) -> ApiResult<impl IntoResponse> {
    let guard = ctx.entry.lock().await;
    let file = state.export_service.export(&guard.workspace.inventory)?;
    Ok((
        [
            (CONTENT_TYPE, "application/json; charset=utf-8".to_string()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file.file_name),
            ),
        ],
        file.body,
    ))
}
