use axum::extract::FromRequestParts;
use axum::http::{Request, header};

use super::*;
use crate::config::Config;

fn state(password: Option<&str>) -> AppState {
    AppState::new(&Config {
        port: 3000,
        admin_password: password.map(str::to_owned),
        cookie_secure: false,
        session_ttl: Duration::hours(1),
    })
}

fn login_body(password: &str) -> Json<LoginRequest> {
    Json(LoginRequest { password: password.to_owned() })
}

fn set_cookie_header(response: &Response) -> String {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned()
}

fn token_from_set_cookie(set_cookie: &str) -> String {
    let pair = set_cookie.split(';').next().unwrap_or_default();
    pair.strip_prefix(&format!("{COOKIE_NAME}=")).unwrap_or_default().to_owned()
}

async fn extract_session(state: &AppState, cookie: Option<&str>) -> Result<AdminSession, StatusCode> {
    let mut builder = Request::builder().uri("/api/auth/me");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let (mut parts, ()) = builder.body(()).unwrap().into_parts();
    AdminSession::from_request_parts(&mut parts, state).await
}

// =============================================================================
// login
// =============================================================================

#[tokio::test]
async fn login_without_configured_password_is_unavailable() {
    let response = login(State(state(None)), login_body("anything")).await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn login_with_wrong_password_is_unauthorized() {
    let response = login(State(state(Some("s3cret"))), login_body("guess")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(set_cookie_header(&response).is_empty());
}

#[tokio::test]
async fn login_sets_http_only_session_cookie() {
    let app_state = state(Some("s3cret"));
    let response = login(State(app_state.clone()), login_body("s3cret")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let set_cookie = set_cookie_header(&response);
    assert!(set_cookie.starts_with(&format!("{COOKIE_NAME}=")));
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("Path=/"));

    let token = token_from_set_cookie(&set_cookie);
    assert_eq!(token.len(), 64);
    assert!(app_state.sessions.is_valid(&token).await);
}

// =============================================================================
// AdminSession extractor
// =============================================================================

#[tokio::test]
async fn extractor_rejects_missing_cookie() {
    let app_state = state(Some("s3cret"));
    assert_eq!(extract_session(&app_state, None).await.err(), Some(StatusCode::UNAUTHORIZED));
}

#[tokio::test]
async fn extractor_rejects_unknown_token() {
    let app_state = state(Some("s3cret"));
    let cookie = format!("{COOKIE_NAME}=deadbeef");
    assert_eq!(extract_session(&app_state, Some(&cookie)).await.err(), Some(StatusCode::UNAUTHORIZED));
}

#[tokio::test]
async fn extractor_accepts_live_session() {
    let app_state = state(Some("s3cret"));
    let token = app_state.sessions.create().await;
    let cookie = format!("{COOKIE_NAME}={token}");
    let session = extract_session(&app_state, Some(&cookie)).await.expect("valid session");
    assert_eq!(session.token, token);
}

// =============================================================================
// logout
// =============================================================================

#[tokio::test]
async fn logout_revokes_session_and_clears_cookie() {
    let app_state = state(Some("s3cret"));
    let token = app_state.sessions.create().await;
    let jar = CookieJar::new().add(Cookie::new(COOKIE_NAME, token.clone()));

    let response = logout(State(app_state.clone()), jar).await.into_response();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(set_cookie_header(&response).contains("Max-Age=0"));
    assert!(!app_state.sessions.is_valid(&token).await);
}

#[tokio::test]
async fn logout_without_session_still_clears_cookie() {
    let response = logout(State(state(None)), CookieJar::new()).await.into_response();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(set_cookie_header(&response).starts_with(&format!("{COOKIE_NAME}=")));
}
