//! Admin auth routes: password login, session check, logout.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use time::Duration;

use crate::state::AppState;

pub(crate) const COOKIE_NAME: &str = "admin_session";

fn session_cookie(value: String, secure: bool, max_age: Duration) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(max_age)
        .build()
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Valid admin session taken from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct AdminSession {
    pub token: String,
}

impl<S> axum::extract::FromRequestParts<S> for AdminSession
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
        if token.is_empty() {
            return Err(StatusCode::UNAUTHORIZED);
        }

        let app_state = AppState::from_ref(state);
        if !app_state.sessions.is_valid(token).await {
            return Err(StatusCode::UNAUTHORIZED);
        }
        Ok(Self { token: token.to_owned() })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Deserialize)]
pub struct LoginRequest {
    password: String,
}

/// `POST /api/auth/login`: check the password, start a session, set cookie.
pub async fn login(State(state): State<AppState>, Json(req): Json<LoginRequest>) -> Response {
    let Some(digest) = &state.admin_password else {
        return (StatusCode::SERVICE_UNAVAILABLE, "Admin login is not configured").into_response();
    };
    if !digest.matches(&req.password) {
        tracing::warn!("admin login rejected");
        return (StatusCode::UNAUTHORIZED, "Invalid password").into_response();
    }

    let token = state.sessions.create().await;
    tracing::info!("admin session started");
    let cookie = session_cookie(token, state.cookie_secure, state.sessions.ttl());
    let jar = CookieJar::new().add(cookie);
    (jar, Json(serde_json::json!({ "authenticated": true }))).into_response()
}

/// `GET /api/auth/me`: 200 when the session cookie is valid, 401 otherwise.
pub async fn me(_session: AdminSession) -> Json<serde_json::Value> {
    Json(serde_json::json!({ "authenticated": true }))
}

/// `POST /api/auth/logout`: end the session (if any) and clear the cookie.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    if let Some(token) = jar.get(COOKIE_NAME).map(Cookie::value).filter(|t| !t.is_empty()) {
        state.sessions.revoke(token).await;
        tracing::info!("admin session ended");
    }

    let cookie = session_cookie(String::new(), state.cookie_secure, Duration::ZERO);
    (CookieJar::new().add(cookie), StatusCode::NO_CONTENT)
}
