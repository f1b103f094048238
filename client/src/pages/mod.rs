//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Editor pages are thin: they mount an `Editor` for their
//! domain and lay out bound form widgets.

pub mod about_editor;
pub mod blog_editor;
pub mod contact_editor;
pub mod dashboard;
pub mod footer_editor;
pub mod home_editor;
pub mod login;
pub mod portfolio_editor;
pub mod sections_editor;
pub mod services_editor;
pub mod site;
pub mod theme_editor;
