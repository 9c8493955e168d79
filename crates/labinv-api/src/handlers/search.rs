//! Item search handler.

use axum::Json;
use axum::extract::{Query, State};

use crate::dto::request::SearchQuery;
use crate::dto::response::{ApiResponse, SearchResponse};
use crate::error::ApiResult;
use crate::extractors::SessionCtx;
use crate::state::AppState;

/// GET /search?q=
pub async fn search(
    State(state): State<AppState>,
    ctx: SessionCtx,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Json<ApiResponse<SearchResponse>>> {
    let guard = ctx.entry.lock().await;
    let hits = state
        .search_service
        .search(&guard.workspace.inventory, &query.q);
    Ok(Json(ApiResponse::ok(SearchResponse {
        query: query.q,
        total: hits.len(),
        hits,
    })))
}
