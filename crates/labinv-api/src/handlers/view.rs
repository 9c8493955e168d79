//! The view route.

use axum::extract::{Query, State};
use axum::extract::rejection::QueryRejection;
use tracing::warn;

use labinv_service::RouteQuery;

use super::{ViewResponse, view_response};
use crate::error::ApiResult;
use crate::extractors::SessionCtx;
use crate::state::AppState;

/// GET /?storage=<id>
///
/// The query is read as raw pairs so a repeated or malformed parameter
/// still renders a view: the first `storage` value wins and an unreadable
/// query counts as none.
pub async fn render(
    State(state): State<AppState>,
    ctx: SessionCtx,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> ApiResult<ViewResponse> {
    let query = match pairs {
        Ok(Query(pairs)) => RouteQuery::from_pairs(pairs),
        Err(e) => {
            warn!(error = %e, "Ignoring unreadable view query");
            RouteQuery::default()
        }
    };
    let mut guard = ctx.entry.lock().await;
    let rendered = state.render(&mut guard, &query);
    Ok(view_response(rendered))
}
