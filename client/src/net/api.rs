//! REST helpers for the admin session endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs reporting no session, since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `bool`/`Result` outputs instead of panics so auth failures
//! degrade UI behavior without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

/// Body of `POST /api/auth/login`.
#[cfg(any(test, feature = "hydrate"))]
#[derive(serde::Serialize)]
struct LoginRequest<'a> {
    password: &'a str,
}

#[cfg(any(test, feature = "hydrate"))]
fn login_failed_message(status: u16) -> String {
    match status {
        401 => "Invalid password".to_owned(),
        503 => "Admin login is not configured".to_owned(),
        _ => format!("login failed: {status}"),
    }
}

/// Whether the browser holds a valid admin session (`GET /api/auth/me`).
/// Always `false` on the server.
pub async fn fetch_session() -> bool {
    #[cfg(feature = "hydrate")]
    {
        match gloo_net::http::Request::get("/api/auth/me").send().await {
            Ok(resp) => resp.ok(),
            Err(e) => {
                log::warn!("session check failed: {e}");
                false
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Exchange the admin password for a session cookie via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns an operator-facing message if the request fails or the password
/// is rejected.
pub async fn login(password: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(&LoginRequest { password })
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(login_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = password;
        Err("not available on server".to_owned())
    }
}

/// End the admin session by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout").send().await;
    }
}
