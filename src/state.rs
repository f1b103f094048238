//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds only admin auth state; site content stays in the browser.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use crate::config::Config;
use crate::services::password::PasswordDigest;
use crate::services::session::SessionStore;

/// Shared application state. Clone is required by Axum; inner fields are
/// `Arc`-backed or small.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    /// `None` when `ADMIN_PASSWORD` is unset and login is disabled.
    pub admin_password: Option<PasswordDigest>,
    pub cookie_secure: bool,
}

impl AppState {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            sessions: SessionStore::new(config.session_ttl),
            admin_password: config.admin_password.as_deref().map(PasswordDigest::of),
            cookie_secure: config.cookie_secure,
        }
    }
}
