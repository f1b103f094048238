//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Content never leaves the browser; the only HTTP traffic is the admin
//! session handshake in `api`.

pub mod api;
