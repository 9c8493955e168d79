//! Screen navigation handlers. Each one moves the session and renders.

use axum::extract::{Path, State};

use labinv_entity::StorageId;
use labinv_service::RouteQuery;

use super::{ViewResponse, view_response};
use crate::error::ApiResult;
use crate::extractors::SessionCtx;
use crate::state::AppState;

/// POST /nav/dashboard
pub async fn dashboard(State(state): State<AppState>, ctx: SessionCtx) -> ApiResult<ViewResponse> {
    let mut guard = ctx.entry.lock().await;
    state.navigation.dashboard(&mut guard.workspace);
    let rendered = state.render(&mut guard, &RouteQuery::default());
    Ok(view_response(rendered))
}

/// POST /nav/storages/{id}
pub async fn open_storage(
    State(state): State<AppState>,
    ctx: SessionCtx,
    Path(id): Path<String>,
) -> ApiResult<ViewResponse> {
    let mut guard = ctx.entry.lock().await;
    state
        .navigation
        .open_storage(&mut guard.workspace, &StorageId::new(id))?;
    let rendered = state.render(&mut guard, &RouteQuery::default());
    Ok(view_response(rendered))
}

/// POST /nav/storages/{id}/edit
pub async fn edit_storage(
    State(state): State<AppState>,
    ctx: SessionCtx,
    Path(id): Path<String>,
) -> ApiResult<ViewResponse> {
    let mut guard = ctx.entry.lock().await;
    state
        .navigation
        .edit_storage(&mut guard.workspace, &StorageId::new(id))?;
    let rendered = state.render(&mut guard, &RouteQuery::default());
    Ok(view_response(rendered))
}

/// POST /nav/storages/{id}/delete
pub async fn confirm_delete(
    State(state): State<AppState>,
    ctx: SessionCtx,
    Path(id): Path<String>,
) -> ApiResult<ViewResponse> {
    let mut guard = ctx.entry.lock().await;
    state
        .navigation
        .confirm_delete(&mut guard.workspace, &StorageId::new(id))?;
    let rendered = state.render(&mut guard, &RouteQuery::default());
    Ok(view_response(rendered))
}

/// POST /nav/storages/{id}/items/{index}/edit
pub async fn edit_item(
    State(state): State<AppState>,
    ctx: SessionCtx,
    Path((id, index)): Path<(String, usize)>,
) -> ApiResult<ViewResponse> {
    let mut guard = ctx.entry.lock().await;
    state
        .navigation
        .edit_item(&mut guard.workspace, &StorageId::new(id), index)?;
    let rendered = state.render(&mut guard, &RouteQuery::default());
    Ok(view_response(rendered))
}

/// POST /nav/add-storage
pub async fn add_storage(State(state): State<AppState>, ctx: SessionCtx) -> ApiResult<ViewResponse> {
    let mut guard = ctx.entry.lock().await;
    state.navigation.add_storage(&mut guard.workspace);
    let rendered = state.render(&mut guard, &RouteQuery::default());
    Ok(view_response(rendered))
}

/// POST /nav/cancel
pub async fn cancel(State(state): State<AppState>, ctx: SessionCtx) -> ApiResult<ViewResponse> {
    let mut guard = ctx.entry.lock().await;
    state.navigation.cancel(&mut guard.workspace);
    let rendered = state.render(&mut guard, &RouteQuery::default());
    Ok(view_response(rendered))
}
