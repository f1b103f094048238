//! Admin password check.
//!
//! Only the SHA-256 digest of the configured password is kept in memory, and
//! candidates are compared digest to digest without early exit.

#[cfg(test)]
#[path = "password_test.rs"]
mod password_test;

use sha2::{Digest, Sha256};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordDigest([u8; 32]);

impl PasswordDigest {
    #[must_use]
    pub fn of(password: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(password.as_bytes());
        Self(hasher.finalize().into())
    }

    /// Whether `candidate` hashes to this digest.
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        let other = Self::of(candidate);
        self.0.iter().zip(other.0.iter()).fold(0u8, |acc, (a, b)| acc | (a ^ b)) == 0
    }
}
