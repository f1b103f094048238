//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Display sections render the public page from stored content; form
//! widgets and admin chrome are shared by every editor screen.

pub mod about;
pub mod admin_layout;
pub mod blog;
pub mod blog_post_dialog;
pub mod contact;
pub mod editor_actions;
pub mod fields;
pub mod footer;
pub mod header;
pub mod hero;
pub mod notice_tray;
pub mod portfolio;
pub mod services;

use content::sections::SectionKind;
use leptos::prelude::*;

/// Display section for one resolved section kind.
pub fn section_view(kind: SectionKind) -> AnyView {
    match kind {
        SectionKind::Hero => view! { <hero::Hero/> }.into_any(),
        SectionKind::Services => view! { <services::Services/> }.into_any(),
        SectionKind::Portfolio => view! { <portfolio::Portfolio/> }.into_any(),
        SectionKind::About => view! { <about::About/> }.into_any(),
        SectionKind::Blog => view! { <blog::Blog/> }.into_any(),
        SectionKind::Contact => view! { <contact::Contact/> }.into_any(),
    }
}
