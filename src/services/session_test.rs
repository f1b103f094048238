use super::*;

// =============================================================================
// bytes_to_hex / generate_token
// =============================================================================

#[test]
fn bytes_to_hex_empty() {
    assert_eq!(bytes_to_hex(&[]), "");
}

#[test]
fn bytes_to_hex_leading_zero() {
    assert_eq!(bytes_to_hex(&[0x0a]), "0a");
}

#[test]
fn bytes_to_hex_multi_byte() {
    assert_eq!(bytes_to_hex(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
}

#[test]
fn generate_token_is_64_hex_chars() {
    let token = generate_token();
    assert_eq!(token.len(), 64);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn generate_token_is_unique() {
    assert_ne!(generate_token(), generate_token());
}

// =============================================================================
// SessionStore
// =============================================================================

#[tokio::test]
async fn created_session_is_valid_until_expiry() {
    let store = SessionStore::new(Duration::hours(1));
    let now = OffsetDateTime::now_utc();
    let token = store.create_at(now).await;

    assert!(store.is_valid_at(&token, now).await);
    assert!(store.is_valid_at(&token, now + Duration::minutes(59)).await);
    assert!(!store.is_valid_at(&token, now + Duration::hours(1)).await);
}

#[tokio::test]
async fn unknown_token_is_invalid() {
    let store = SessionStore::new(Duration::hours(1));
    assert!(!store.is_valid("not-a-session").await);
}

#[tokio::test]
async fn revoke_ends_session() {
    let store = SessionStore::new(Duration::hours(1));
    let token = store.create().await;
    store.revoke(&token).await;
    assert!(!store.is_valid(&token).await);
}

#[tokio::test]
async fn purge_removes_only_expired() {
    let store = SessionStore::new(Duration::hours(1));
    let now = OffsetDateTime::now_utc();
    let old = store.create_at(now - Duration::hours(2)).await;
    let fresh = store.create_at(now).await;

    assert_eq!(store.purge_expired(now).await, 1);
    assert!(!store.is_valid_at(&old, now).await);
    assert!(store.is_valid_at(&fresh, now).await);
}
