//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Admin routes apply identical unauthenticated redirect behavior, and the
//! session check and logout are the same wherever they are triggered.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// Admin login route.
pub const LOGIN_PATH: &str = "/admin/login";

/// Whether a loaded auth state should bounce the visitor to the login page.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && !state.authenticated
}

/// Redirect to [`LOGIN_PATH`] whenever auth has loaded and no session is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    });
}

/// Ask the host whether the admin session is valid and record the answer.
pub fn refresh_session(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let authenticated = crate::net::api::fetch_session().await;
        auth.set(AuthState::checked(authenticated));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = auth;
}

/// End the admin session and return to the login page.
pub fn logout(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        crate::net::api::logout().await;
        auth.set(AuthState::checked(false));
        if let Some(w) = web_sys::window() {
            let _ = w.location().set_href(LOGIN_PATH);
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = auth;
}
