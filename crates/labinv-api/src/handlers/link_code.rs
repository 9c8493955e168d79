//! Link-code PNG downloads.

use axum::extract::{Path, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::IntoResponse;
use bytes::Bytes;

use labinv_cache::links;
use labinv_core::error::AppError;
use labinv_core::traits::LinkCodeCache;
use labinv_entity::StorageId;

use crate::error::ApiResult;
use crate::extractors::SessionCtx;
use crate::state::AppState;

/// GET /codes/dashboard
pub async fn dashboard_code(
    State(state): State<AppState>,
    ctx: SessionCtx,
) -> ApiResult<impl IntoResponse> {
    let guard = ctx.entry.lock().await;
    let url = links::dashboard_url(state.router.public_url());
    let png = guard
        .codes
        .get_or_create(&url)
        .ok_or_else(|| AppError::encoding("Link code for the dashboard could not be generated"))?;
    Ok(png_download(links::DASHBOARD_FILE_NAME, png))
}

/// GET /codes/storages/{id}
pub async fn storage_code(
    State(state): State<AppState>,
    ctx: SessionCtx,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let id = StorageId::new(id);
    let guard = ctx.entry.lock().await;
    let storage = guard.workspace.inventory.require(&id)?;
    let url = links::storage_url(state.router.public_url(), id.as_str());
    let png = guard.codes.get_or_create(&url).ok_or_else(|| {
        AppError::encoding(format!(
            "Link code for {} could not be generated",
            storage.name
        ))
    })?;
    Ok(png_download(&links::storage_file_name(id.as_str()), png))
}

fn png_download(file_name: &str, png: Bytes) -> impl IntoResponse + use<> {
    (
        [
            (CONTENT_TYPE, "image/png".to_string()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ),
        ],
        png,
    )
}
