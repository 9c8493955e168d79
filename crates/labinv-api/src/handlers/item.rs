//! Item CRUD handlers. Responses render the owning storage.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use labinv_entity::StorageId;
use labinv_service::RouteQuery;

use super::{ViewResponse, view_response};
use crate::dto::request::ItemRequest;
use crate::error::ApiResult;
use crate::extractors::SessionCtx;
use crate::state::AppState;

/// POST /storages/{id}/items
pub async fn add_item(
    State(state): State<AppState>,
    ctx: SessionCtx,
    Path(id): Path<String>,
    Json(req): Json<ItemRequest>,
) -> ApiResult<(StatusCode, ViewResponse)> {
    let draft = req.into_draft()?;
    let id = StorageId::new(id);
    let mut guard = ctx.entry.lock().await;
    state.item_service.add_item(&mut guard.workspace, &id, draft)?;
    state.sessions.persist(&guard).await;

    let rendered = state.render(&mut guard, &RouteQuery::storage(id.as_str()));
    Ok((StatusCode::CREATED, view_response(rendered)))
}

/// PUT /storages/{id}/items/{index}
pub async fn update_item(
    State(state): State<AppState>,
    ctx: SessionCtx,
    Path((id, index)): Path<(String, usize)>,
    Json(req): Json<ItemRequest>,
) -> ApiResult<ViewResponse> {
    let draft = req.into_draft()?;
    let id = StorageId::new(id);
    let mut guard = ctx.entry.lock().await;
    state
        .item_service
        .update_item(&mut guard.workspace, &id, index, draft)?;
    state.sessions.persist(&guard).await;

    let rendered = state.render(&mut guard, &RouteQuery::storage(id.as_str()));
    Ok(view_response(rendered))
}

/// DELETE /storages/{id}/items/{index}
pub async fn delete_item(
    State(state): State<AppState>,
    ctx: SessionCtx,
    Path((id, index)): Path<(String, usize)>,
) -> ApiResult<ViewResponse> {
    let id = StorageId::new(id);
    let mut guard = ctx.entry.lock().await;
    state
        .item_service
        .delete_item(&mut guard.workspace, &id, index)?;
    state.sessions.persist(&guard).await;

    let rendered = state.render(&mut guard, &RouteQuery::storage(id.as_str()));
    Ok(view_response(rendered))
}
