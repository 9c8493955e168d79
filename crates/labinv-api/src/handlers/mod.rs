//! HTTP request handlers.

pub mod export;
pub mod health;
pub mod item;
pub mod link_code;
pub mod navigation;
pub mod search;
pub mod storage;
pub mod view;

use axum::Json;

use labinv_service::Rendered;

use crate::dto::response::ApiResponse;

/// Response of every view-producing endpoint.
pub type ViewResponse = Json<ApiResponse<Rendered>>;

pub(crate) fn view_response(rendered: Rendered) -> ViewResponse {
    Json(ApiResponse::ok(rendered))
}
