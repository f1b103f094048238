//! Site content model and keyed persistence for the agency site.
//!
//! This crate owns every editable content domain (hero, services, portfolio,
//! about, contact, footer, theme, blog posts, section order), the keyed store
//! that persists them, and the draft/lens scaffolding shared by all editor
//! screens. It is browser-independent: the client plugs in a `localStorage`
//! backend, tests use [`store::MemoryStorage`].

pub mod blog;
pub mod display;
pub mod domain;
pub mod draft;
pub mod error;
pub mod lens;
pub mod list;
pub mod schema;
pub mod sections;
pub mod store;
pub mod theme;

pub use domain::{Content, ContentDomain};
pub use draft::Draft;
pub use error::{EditError, StoreError};
pub use lens::Lens;
pub use list::ListField;
pub use store::{ContentStore, MemoryStorage, StorageBackend};

#[cfg(test)]
#[path = "scenario_test.rs"]
mod scenario_test;
