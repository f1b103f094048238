use super::*;

#[test]
fn default_is_loading_and_unauthenticated() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(!state.authenticated);
}

#[test]
fn checked_clears_loading() {
    assert_eq!(AuthState::checked(true), AuthState { authenticated: true, loading: false });
    assert_eq!(AuthState::checked(false), AuthState { authenticated: false, loading: false });
}
