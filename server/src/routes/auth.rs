//! Admin session routes and extractor.

use axum::Json;
use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Serialize;

use crate::services::session;
use crate::state::AppState;

fn session_cookie<'a>(jar: &'a CookieJar, cookie_name: &str) -> &'a str {
    jar.get(cookie_name).map(Cookie::value).unwrap_or_default()
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Proof of a valid admin session cookie.
/// Use as a handler parameter to require an admin.
pub struct AdminSession;

impl<S> axum::extract::FromRequestParts<S> for AdminSession
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        let jar = CookieJar::from_headers(&parts.headers);
        let token = session_cookie(&jar, &app_state.config.admin_cookie_name);
        if token.is_empty() {
            return Err(StatusCode::UNAUTHORIZED);
        }

        let ok = session::is_authenticated(&app_state.pool, token)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "admin session lookup failed");
                StatusCode::INTERNAL_SERVER_ERROR
            })?;
        if ok { Ok(Self) } else { Err(StatusCode::UNAUTHORIZED) }
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Debug, Serialize)]
pub struct SessionStatus {
    pub authenticated: bool,
}

/// `GET /api/admin/session`: whether the request carries a valid admin session.
pub async fn session_status(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Json<SessionStatus>, StatusCode> {
    let token = session_cookie(&jar, &state.config.admin_cookie_name);
    let authenticated = session::is_authenticated(&state.pool, token)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "admin session lookup failed");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;
    Ok(Json(SessionStatus { authenticated }))
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
