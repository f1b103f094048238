//! Host-side services behind the route handlers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Site content never reaches the host; the only state kept here is the
//! admin session set and the configured password digest.

pub mod password;
pub mod session;
