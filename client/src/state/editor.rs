//! Reactive handle binding one editor screen to its content draft.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every admin screen follows the same flow: load the domain once, edit a
//! draft, save or reset explicitly. [`Editor`] is that flow for any
//! [`Content`] type; screens only choose which fields to render. Outcomes
//! that the operator should see (saved, save failed, refused removal) are
//! pushed to the notice tray from here, so screens never handle them.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use content::list::ListField;
use content::{Content, Draft, EditError, Lens};
use leptos::prelude::*;

use crate::state::content::SiteStore;
use crate::state::notice::{NoticeLevel, NoticeState, notify};

/// Notice title for a refused edit.
fn refusal_title(error: &EditError) -> &'static str {
    match error {
        EditError::BelowMinimum { .. } => "Cannot remove item",
        EditError::IndexOutOfRange { .. } => "Item no longer exists",
        EditError::NotFound { .. } => "Item not found",
    }
}

/// Copyable handle over a draft signal plus the store and notice tray.
pub struct Editor<T: Content> {
    draft: RwSignal<Draft<T>>,
    store: SiteStore,
    notices: RwSignal<NoticeState>,
    title: &'static str,
}

impl<T: Content> Clone for Editor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Content> Copy for Editor<T> {}

impl<T: Content> Editor<T> {
    /// Create the draft for the current screen and seed it from the store
    /// after mount.
    pub fn mount() -> Self {
        let store = expect_context::<SiteStore>();
        let notices = expect_context::<RwSignal<NoticeState>>();
        let draft = RwSignal::new(Draft::<T>::default());
        Effect::new(move || draft.set(Draft::load(&store)));
        Self { draft, store, notices, title: T::DOMAIN.label() }
    }

    /// Whole draft value (tracked).
    pub fn value(&self) -> T {
        self.draft.with(|d| d.value().clone())
    }

    pub fn is_dirty(&self) -> bool {
        self.draft.with(Draft::is_dirty)
    }

    /// Field at `lens` (tracked).
    pub fn field<A: Clone>(&self, lens: Lens<T, A>) -> A {
        self.draft.with(|d| d.get(lens).clone())
    }

    pub fn set<A>(&self, lens: Lens<T, A>, value: A) {
        self.draft.update(|d| *d = d.set(lens, value));
    }

    /// Apply an infallible edit.
    pub fn edit(&self, edit: impl FnOnce(&mut T)) {
        self.draft.update(|d| *d = d.with(edit));
    }

    /// Apply an edit that may be refused. A refusal leaves the draft as it
    /// was and is reported to the operator.
    pub fn try_edit(&self, edit: impl FnOnce(&mut T) -> Result<(), EditError>) {
        let refused = self.draft.try_update(|d| match d.try_with(edit) {
            Ok(next) => {
                *d = next;
                None
            }
            Err(e) => Some(e),
        });
        if let Some(Some(e)) = refused {
            notify(self.notices, NoticeLevel::Error, refusal_title(&e), &e.to_string());
        }
    }

    /// Number of entries in a list field (tracked).
    pub fn list_len<A>(&self, field: ListField<T, A>) -> usize {
        self.draft.with(|d| field.items(d.value()).len())
    }

    /// Entry `index` of a list field, if present (tracked).
    pub fn list_item<A: Clone>(&self, field: ListField<T, A>, index: usize) -> Option<A> {
        self.draft.with(|d| field.items(d.value()).get(index).cloned())
    }

    pub fn list_add<A>(&self, field: ListField<T, A>) {
        self.edit(|value| field.add(value));
    }

    pub fn list_remove<A>(&self, field: ListField<T, A>, index: usize) {
        self.try_edit(|value| field.remove(value, index).map(|_| ()));
    }

    pub fn list_update<A>(&self, field: ListField<T, A>, index: usize, item: A) {
        self.try_edit(|value| field.update(value, index, item));
    }

    /// Replace the whole draft (e.g. an imported file).
    pub fn replace(&self, value: T) {
        self.draft.update(|d| *d = d.replace(value));
    }

    /// Persist the draft and report the outcome.
    pub fn save(&self) {
        let store = self.store;
        match self.draft.try_update(|d| d.save(&store)) {
            Some(Ok(())) => {
                log::info!("saved {}", T::DOMAIN.storage_key());
                notify(
                    self.notices,
                    NoticeLevel::Success,
                    "Content saved",
                    &format!("{} content has been updated.", self.title),
                );
            }
            Some(Err(e)) => {
                log::error!("saving {} failed: {e}", T::DOMAIN.storage_key());
                notify(self.notices, NoticeLevel::Error, "Save failed", &e.to_string());
            }
            None => {}
        }
    }

    /// Swap the draft for the compiled-in default. Nothing is written until
    /// the next save.
    pub fn reset(&self) {
        self.draft.update(|d| *d = d.reset_to_default());
        notify(self.notices, NoticeLevel::Info, "Reset to defaults", "Save to apply the default content.");
    }
}
