//! Browser `localStorage` backend for the content store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The content store is generic over its medium; this is the production one.
//! It is a zero-sized handle that looks storage up on every call, so it is
//! `Copy + Send + Sync` and can live in Leptos context.
//!
//! TRADE-OFFS
//! ==========
//! Outside the browser (SSR, native tests) storage is reported unavailable:
//! loads fall back to defaults and saves fail. Display sections only load
//! after mount, so the server never depends on it.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use content::{StorageBackend, StoreError};

/// `window.localStorage` as a [`StorageBackend`].
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl StorageBackend for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).map_err(|_| StoreError::Unavailable)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StoreError::Unavailable)
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast as _;

            local_storage()?.set_item(key, value).map_err(|err| {
                let name = err.dyn_ref::<web_sys::DomException>().map(web_sys::DomException::name);
                write_error(key, name.as_deref(), &format!("{err:?}"))
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StoreError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StoreError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StoreError::Unavailable)
}

/// Map a rejected `setItem` to a store error by its `DOMException` name.
#[cfg(any(test, feature = "hydrate"))]
fn write_error(key: &str, exception_name: Option<&str>, detail: &str) -> StoreError {
    match exception_name {
        // Firefox reported quota under its own name before standardizing.
        Some("QuotaExceededError" | "NS_ERROR_DOM_QUOTA_REACHED") => {
            StoreError::QuotaExceeded { key: key.to_owned() }
        }
        Some("SecurityError") => StoreError::Unavailable,
        Some(name) => StoreError::Write { key: key.to_owned(), message: name.to_owned() },
        None => StoreError::Write { key: key.to_owned(), message: detail.to_owned() },
    }
}
