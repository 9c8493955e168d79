//! Session cookie middleware.
//!
//! Opens the caller's session before the handler runs and sets the session
//! cookie on every response, error responses included, so a session started
//! by a failing first request still reaches the client.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use labinv_core::types::SessionId;

use crate::error::ApiResult;
use crate::extractors::SessionCtx;
use crate::state::AppState;

/// Resolves the session cookie to a live session and stores it in the
/// request extensions for the [`SessionCtx`] extractor.
pub async fn session_cookie(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> ApiResult<Response> {
    let cookie_name = state.config.session.cookie_name.clone();

    let requested = jar
        .get(&cookie_name)
        .and_then(|c| c.value().parse::<SessionId>().ok());

    let entry = state.sessions.open(requested).await?;
    let id = entry.id();
    request.extensions_mut().insert(SessionCtx { entry });

    let response = next.run(request).await;

    let cookie = Cookie::build((cookie_name, id.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);

    Ok((jar.add(cookie), response).into_response())
}
