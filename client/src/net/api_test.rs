use super::*;

#[test]
fn login_failed_message_explains_rejected_password() {
    assert_eq!(login_failed_message(401), "Invalid password");
}

#[test]
fn login_failed_message_explains_disabled_login() {
    assert_eq!(login_failed_message(503), "Admin login is not configured");
}

#[test]
fn login_failed_message_formats_other_status() {
    assert_eq!(login_failed_message(500), "login failed: 500");
}

#[test]
fn login_request_matches_host_body() {
    let body = serde_json::to_value(LoginRequest { password: "s3cret" }).unwrap();
    assert_eq!(body, serde_json::json!({ "password": "s3cret" }));
}
