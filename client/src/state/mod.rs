//! Shared reactive state provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides the content store, auth state, and notice tray once;
//! pages and components read them with `expect_context`.

pub mod auth;
pub mod content;
pub mod editor;
pub mod notice;
