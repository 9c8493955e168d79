//! Storage CRUD handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::http::header::LOCATION;
use axum::response::IntoResponse;

use labinv_entity::StorageId;
use labinv_service::RouteQuery;

use super::{ViewResponse, view_response};
use crate::dto::request::StorageRequest;
use crate::error::ApiResult;
use crate::extractors::SessionCtx;
use crate::state::AppState;

/// POST /storages
///
/// Answers 201 with the next view and a `Location` pointing at the new
/// storage's detail route.
pub async fn create_storage(
    State(state): State<AppState>,
    ctx: SessionCtx,
    Json(req): Json<StorageRequest>,
) -> ApiResult<impl IntoResponse> {
    let draft = req.into_draft()?;
    let mut guard = ctx.entry.lock().await;
    let id = state
        .storage_service
        .create_storage(&mut guard.workspace, draft)?;
    state.sessions.persist(&guard).await;

    let rendered = state.render(&mut guard, &RouteQuery::default());
    Ok((
        StatusCode::CREATED,
        [(LOCATION, format!("/?storage={id}"))],
        view_response(rendered),
    ))
}

/// PUT /storages/{id}
pub async fn update_storage(
    State(state): State<AppState>,
    ctx: SessionCtx,
    Path(id): Path<String>,
    Json(req): Json<StorageRequest>,
) -> ApiResult<ViewResponse> {
    let draft = req.into_draft()?;
    let id = StorageId::new(id);
    let mut guard = ctx.entry.lock().await;
    state
        .storage_service
        .update_storage(&mut guard.workspace, &id, draft)?;
    state.sessions.persist(&guard).await;

    let rendered = state.render(&mut guard, &RouteQuery::storage(id.as_str()));
    Ok(view_response(rendered))
}

/// DELETE /storages/{id}
pub async fn delete_storage(
    State(state): State<AppState>,
    ctx: SessionCtx,
    Path(id): Path<String>,
) -> ApiResult<ViewResponse> {
    let mut guard = ctx.entry.lock().await;
    state
        .storage_service
        .delete_storage(&mut guard.workspace, &StorageId::new(id))?;
    state.sessions.persist(&guard).await;

    let rendered = state.render(&mut guard, &RouteQuery::default());
    Ok(view_response(rendered))
}
