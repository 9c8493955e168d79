//! Route definitions for the LabInv HTTP API.
//!
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post, put},
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the Axum router with all routes, tracing, request logging, and
/// panic recovery.
///
/// Every route except `/health` runs inside the session middleware, so the
/// session cookie is set on error responses as well.
pub fn build_router(state: AppState) -> Router {
    let session_routes = Router::new()
        .merge(view_routes())
        .merge(navigation_routes())
        .merge(storage_routes())
        .merge(item_routes())
        .merge(tool_routes())
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::session::session_cookie,
        ));

    Router::new()
        .merge(session_routes)
        .merge(health_routes())
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// The view route.
fn view_routes() -> Router<AppState> {
    Router::new().route("/", get(handlers::view::render))
}

/// Screen navigation.
fn navigation_routes() -> Router<AppState> {
    Router::new()
        .route("/nav/dashboard", post(handlers::navigation::dashboard))
        .route("/nav/add-storage", post(handlers::navigation::add_storage))
        .route("/nav/cancel", post(handlers::navigation::cancel))
        .route("/nav/storages/{id}", post(handlers::navigation::open_storage))
        .route(
            "/nav/storages/{id}/edit",
            post(handlers::navigation::edit_storage),
        )
        .route(
            "/nav/storages/{id}/delete",
            post(handlers::navigation::confirm_delete),
        )
        .route(
            "/nav/storages/{id}/items/{index}/edit",
            post(handlers::navigation::edit_item),
        )
}

/// Storage CRUD.
fn storage_routes() -> Router<AppState> {
    Router::new()
        .route("/storages", post(handlers::storage::create_storage))
        .route(
            "/storages/{id}",
            put(handlers::storage::update_storage).delete(handlers::storage::delete_storage),
        )
}

/// Item CRUD.
fn item_routes() -> Router<AppState> {
    Router::new()
        .route("/storages/{id}/items", post(handlers::item::add_item))
        .route(
            "/storages/{id}/items/{index}",
            put(handlers::item::update_item).delete(handlers::item::delete_item),
        )
}

/// Search, export, and link-code downloads.
fn tool_routes() -> Router<AppState> {
    Router::new()
        .route("/search", get(handlers::search::search))
        .route("/export", get(handlers::export::export))
        .route("/codes/dashboard", get(handlers::link_code::dashboard_code))
        .route("/codes/storages/{id}", get(handlers::link_code::storage_code))
}

/// Liveness.
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
