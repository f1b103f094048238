//! Editor draft scaffold shared by every editor screen.
//!
//! DESIGN
//! ======
//! A draft is seeded once from the store and is the sole source of truth for
//! the form while editing. Updates never mutate a draft in place: each edit
//! returns a new draft, so a screen holding the previous value (e.g. in a
//! reactive signal) observes a clean replacement. Reset only rewrites the
//! draft; persisting it still takes an explicit save.

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

use crate::domain::Content;
use crate::error::StoreError;
use crate::lens::Lens;
use crate::store::{ContentStore, StorageBackend};

/// In-memory working copy of one domain's content.
#[derive(Clone, Debug, PartialEq)]
pub struct Draft<T> {
    value: T,
    dirty: bool,
}

impl<T: Content> Default for Draft<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Content> Draft<T> {
    /// Clean draft over `value`.
    pub fn new(value: T) -> Self {
        Self { value, dirty: false }
    }

    /// Seed a draft from the store.
    pub fn load<B: StorageBackend>(store: &ContentStore<B>) -> Self {
        Self::new(store.load::<T>())
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }

    /// Whether the draft has edits that were not saved.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn get<A>(&self, lens: Lens<T, A>) -> &A {
        lens.get(&self.value)
    }

    /// New draft with `edit` applied to a copy of the value.
    #[must_use]
    pub fn with(&self, edit: impl FnOnce(&mut T)) -> Self {
        let mut value = self.value.clone();
        edit(&mut value);
        self.replaced(value)
    }

    /// Like [`Draft::with`] for edits that can be refused.
    ///
    /// # Errors
    ///
    /// Propagates the edit's error; `self` is unchanged either way.
    pub fn try_with<E>(&self, edit: impl FnOnce(&mut T) -> Result<(), E>) -> Result<Self, E> {
        let mut value = self.value.clone();
        edit(&mut value)?;
        Ok(self.replaced(value))
    }

    /// New draft with the field at `lens` set to `value`.
    #[must_use]
    pub fn set<A>(&self, lens: Lens<T, A>, value: A) -> Self {
        self.with(|content| lens.set(content, value))
    }

    /// New draft holding `value` wholesale (e.g. an imported file).
    #[must_use]
    pub fn replace(&self, value: T) -> Self {
        self.replaced(value)
    }

    /// New draft holding the compiled-in default. Needs a save to persist.
    #[must_use]
    pub fn reset_to_default(&self) -> Self {
        Self { value: T::default(), dirty: true }
    }

    /// Write the draft through the store. On success the draft stays as it
    /// is and becomes clean.
    ///
    /// # Errors
    ///
    /// Returns the store's error; the draft keeps its edits.
    pub fn save<B: StorageBackend>(&mut self, store: &ContentStore<B>) -> Result<(), StoreError> {
        store.save(&self.value)?;
        self.dirty = false;
        Ok(())
    }

    fn replaced(&self, value: T) -> Self {
        let dirty = self.dirty || value != self.value;
        Self { value, dirty }
    }
}
