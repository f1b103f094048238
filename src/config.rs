//! Host configuration parsed from environment variables.
//!
//! Optional:
//! - `PORT`: listen port, default 3000
//! - `ADMIN_PASSWORD`: admin console password; login is disabled when unset
//! - `COOKIE_SECURE`: mark the session cookie `Secure` (`1/true/yes/on`)
//! - `SESSION_TTL_HOURS`: admin session lifetime, default 12

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SESSION_TTL_HOURS: i64 = 12;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0:?}")]
    InvalidPort(String),
    #[error("invalid SESSION_TTL_HOURS: {0:?}")]
    InvalidSessionTtl(String),
    #[error("invalid COOKIE_SECURE: {0:?}")]
    InvalidBool(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub admin_password: Option<String>,
    pub cookie_secure: bool,
    pub session_ttl: time::Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from any key lookup (the process environment in
    /// production, a map in tests).
    pub(crate) fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match get("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let admin_password = get("ADMIN_PASSWORD").filter(|p| !p.is_empty());
        let cookie_secure = match get("COOKIE_SECURE") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::InvalidBool(raw))?,
            None => false,
        };
        let hours = match get("SESSION_TTL_HOURS") {
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .ok()
                .filter(|h| *h > 0)
                .ok_or(ConfigError::InvalidSessionTtl(raw))?,
            None => DEFAULT_SESSION_TTL_HOURS,
        };

        Ok(Self { port, admin_password, cookie_secure, session_ttl: time::Duration::hours(hours) })
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
