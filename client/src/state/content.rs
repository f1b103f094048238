//! Display-side content loading.
//!
//! DESIGN
//! ======
//! A display section starts from the compiled-in default, which is what the
//! server renders and what the first hydrate pass sees, then reads its domain
//! from the store once after mount. There is no subscription: edits saved in
//! another tab show up on the next page load.

use content::{Content, ContentStore};
use leptos::prelude::*;

use crate::util::storage::BrowserStorage;

/// The store instance provided to every page.
pub type SiteStore = ContentStore<BrowserStorage>;

/// Current value of `T`'s domain for a display section.
pub fn use_content<T: Content>() -> ReadSignal<T> {
    let store = expect_context::<SiteStore>();
    let (value, set_value) = signal(T::default());
    Effect::new(move || set_value.set(store.load::<T>()));
    value
}
