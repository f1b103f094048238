//! Keyed content store with default fallback.
//!
//! SYSTEM CONTEXT
//! ==============
//! One [`ContentStore`] is constructed per session and injected into editor
//! screens and display sections. The backing medium is any synchronous
//! string key/value API: browser `localStorage` in the client, an in-memory
//! map in tests.
//!
//! TRADE-OFFS
//! ==========
//! Writes replace the whole value with no version check, so two tabs saving
//! the same domain lose one tab's edits (last write wins). Loads fall back to
//! the compiled-in default on any decode failure instead of surfacing it.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::domain::{Content, ContentDomain};
use crate::error::StoreError;

/// Synchronous string key/value medium.
pub trait StorageBackend {
    /// Read the raw value at `key`, `Ok(None)` when absent.
    ///
    /// # Errors
    ///
    /// Returns an error when the medium cannot be reached.
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write `value` at `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error when the medium is unavailable or rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Typed load/save/reset over a [`StorageBackend`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ContentStore<B> {
    backend: B,
}

impl<B: StorageBackend> ContentStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Current value of `T`'s domain, or its default when absent or corrupt.
    pub fn load<T: Content>(&self) -> T {
        let key = T::DOMAIN.storage_key();
        let raw = match self.backend.get_item(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return T::default(),
            Err(e) => {
                log::debug!("content store read failed for {key}: {e}; using default");
                return T::default();
            }
        };
        match serde_json::from_str::<T>(&raw) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("malformed stored value at {key}: {e}; using default");
                T::default()
            }
        }
    }

    /// Persist `value` as the whole content of `T`'s domain.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when encoding fails or the medium refuses the
    /// write. The caller keeps its draft.
    pub fn save<T: Content>(&self, value: &T) -> Result<(), StoreError> {
        let key = T::DOMAIN.storage_key();
        let raw = serde_json::to_string(value)
            .map_err(|e| StoreError::Encode { key: key.to_owned(), message: e.to_string() })?;
        self.backend.set_item(key, &raw)?;
        log::debug!("saved {key} ({} bytes)", raw.len());
        Ok(())
    }

    /// Overwrite `T`'s domain with its compiled-in default.
    ///
    /// # Errors
    ///
    /// Same as [`ContentStore::save`].
    pub fn reset<T: Content>(&self) -> Result<(), StoreError> {
        self.save(&T::default())
    }

    /// Whether anything has ever been stored for `domain`.
    pub fn is_customized(&self, domain: ContentDomain) -> bool {
        matches!(self.backend.get_item(domain.storage_key()), Ok(Some(_)))
    }

    /// Raw stored string for `domain`, if any.
    pub fn load_raw(&self, domain: ContentDomain) -> Option<String> {
        self.backend.get_item(domain.storage_key()).ok().flatten()
    }
}

// =============================================================================
// IN-MEMORY BACKEND
// =============================================================================

/// In-memory backend. Clones share one map, the way tabs share an origin's
/// storage.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
    quota_bytes: Option<usize>,
    unavailable: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend that rejects writes once keys + values exceed `bytes`.
    pub fn with_quota(bytes: usize) -> Self {
        Self { quota_bytes: Some(bytes), ..Self::default() }
    }

    /// Backend that behaves like disabled storage.
    pub fn unavailable() -> Self {
        Self { unavailable: true, ..Self::default() }
    }

    /// Write a raw string, bypassing encoding.
    pub fn insert_raw(&self, key: &str, raw: &str) {
        self.items.borrow_mut().insert(key.to_owned(), raw.to_owned());
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    fn used_bytes_without(&self, key: &str) -> usize {
        self.items
            .borrow()
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl StorageBackend for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        if self.unavailable {
            return Err(StoreError::Unavailable);
        }
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.unavailable {
            return Err(StoreError::Unavailable);
        }
        if let Some(quota) = self.quota_bytes {
            if self.used_bytes_without(key) + key.len() + value.len() > quota {
                return Err(StoreError::QuotaExceeded { key: key.to_owned() });
            }
        }
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
