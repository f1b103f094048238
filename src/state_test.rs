use super::*;

fn config(password: Option<&str>) -> Config {
    Config {
        port: 3000,
        admin_password: password.map(str::to_owned),
        cookie_secure: true,
        session_ttl: time::Duration::hours(3),
    }
}

#[test]
fn new_keeps_password_digest_only() {
    let state = AppState::new(&config(Some("s3cret")));
    let digest = state.admin_password.expect("digest");
    assert!(digest.matches("s3cret"));
    assert!(state.cookie_secure);
    assert_eq!(state.sessions.ttl(), time::Duration::hours(3));
}

#[test]
fn new_without_password_disables_login() {
    let state = AppState::new(&config(None));
    assert!(state.admin_password.is_none());
}
