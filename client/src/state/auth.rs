//! Admin session state for the current browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the admin layout guard and the login page to coordinate redirects.
//! The session itself lives in an `HttpOnly` cookie owned by the host; this
//! state only mirrors what `/api/auth/me` last reported.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Authentication state: whether the admin session is valid, and whether
/// that is still being checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub authenticated: bool,
    pub loading: bool,
}

impl Default for AuthState {
    /// Unknown until the first session check completes, so SSR and the first
    /// hydrate render agree.
    fn default() -> Self {
        Self { authenticated: false, loading: true }
    }
}

impl AuthState {
    /// Result of a finished session check.
    pub fn checked(authenticated: bool) -> Self {
        Self { authenticated, loading: false }
    }
}
