//! Editor screen header: title, summary, unsaved marker, save and reset.

use content::Content;
use leptos::prelude::*;

use crate::state::editor::Editor;

#[component]
pub fn EditorHeader<T: Content>(editor: Editor<T>) -> impl IntoView {
    let domain = T::DOMAIN;

    view! {
        <header class="editor-header">
            <div>
                <h1 class="editor-header__title">{domain.label()}</h1>
                <p class="editor-header__summary">{domain.summary()}</p>
            </div>
            <div class="editor-header__actions">
                <Show when=move || editor.is_dirty()>
                    <span class="editor-header__dirty">"Unsaved changes"</span>
                </Show>
                <button type="button" class="btn btn--outline" on:click=move |_| editor.reset()>
                    "Reset to Default"
                </button>
                <button type="button" class="btn btn--primary" on:click=move |_| editor.save()>
                    "Save Changes"
                </button>
            </div>
        </header>
    }
}
