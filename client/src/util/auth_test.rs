use super::*;

#[test]
fn should_redirect_unauth_when_loaded_without_session() {
    assert!(should_redirect_unauth(&AuthState::checked(false)));
}

#[test]
fn should_not_redirect_while_loading() {
    assert!(!should_redirect_unauth(&AuthState::default()));
}

#[test]
fn should_not_redirect_with_session() {
    assert!(!should_redirect_unauth(&AuthState::checked(true)));
}
