//! Admin session tokens.
//!
//! DESIGN
//! ======
//! Sessions live in memory only: a map from random token to expiry time
//! behind a `tokio` lock. A host restart logs every operator out, which is
//! acceptable for a single-operator console with no server-side content.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashMap;
use std::fmt::Write;
use std::sync::Arc;

use rand::Rng;
use time::{Duration, OffsetDateTime};
use tokio::sync::RwLock;

const SWEEP_INTERVAL: std::time::Duration = std::time::Duration::from_secs(300);

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// Live admin sessions keyed by token.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, OffsetDateTime>>>,
    ttl: Duration,
}

impl SessionStore {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self { sessions: Arc::new(RwLock::new(HashMap::new())), ttl }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Start a session and return its token.
    pub async fn create(&self) -> String {
        self.create_at(OffsetDateTime::now_utc()).await
    }

    pub(crate) async fn create_at(&self, now: OffsetDateTime) -> String {
        let token = generate_token();
        self.sessions.write().await.insert(token.clone(), now + self.ttl);
        token
    }

    /// Whether `token` names a session that has not expired.
    pub async fn is_valid(&self, token: &str) -> bool {
        self.is_valid_at(token, OffsetDateTime::now_utc()).await
    }

    pub(crate) async fn is_valid_at(&self, token: &str, now: OffsetDateTime) -> bool {
        self.sessions.read().await.get(token).is_some_and(|expires| *expires > now)
    }

    /// End a session. Unknown tokens are ignored.
    pub async fn revoke(&self, token: &str) {
        self.sessions.write().await.remove(token);
    }

    /// Drop expired sessions; returns how many were removed.
    pub async fn purge_expired(&self, now: OffsetDateTime) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, expires| *expires > now);
        before - sessions.len()
    }
}

/// Periodically purge expired sessions.
pub fn spawn_expiry_task(store: SessionStore) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(SWEEP_INTERVAL);
        loop {
            interval.tick().await;
            let removed = store.purge_expired(OffsetDateTime::now_utc()).await;
            if removed > 0 {
                tracing::debug!(removed, "purged expired admin sessions");
            }
        }
    })
}
