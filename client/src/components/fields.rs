//! Form widgets bound to an [`Editor`] through typed lenses.
//!
//! DESIGN
//! ======
//! Widgets never own content state. Each one reads its value from the draft
//! through a lens (or list field) and writes edits back through the editor,
//! so any screen can be assembled from them without per-field glue.

use content::Content;
use content::lens::Lens;
use content::list::ListField;
use content::theme::{PRESET_COLORS, is_complete_hex};
use leptos::prelude::*;

use crate::state::editor::Editor;

/// Labeled text input (or textarea) bound to one string field.
#[component]
pub fn TextField<T: Content>(
    editor: Editor<T>,
    lens: Lens<T, String>,
    #[prop(into)] label: String,
    #[prop(optional)] multiline: bool,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let value = move || editor.field(lens);
    let on_input = move |ev: leptos::ev::Event| editor.set(lens, event_target_value(&ev));

    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            {if multiline {
                view! {
                    <textarea class="field__input" rows="4" placeholder=placeholder prop:value=value on:input=on_input></textarea>
                }
                    .into_any()
            } else {
                view! {
                    <input class="field__input" type="text" placeholder=placeholder prop:value=value on:input=on_input/>
                }
                    .into_any()
            }}
        </label>
    }
}

/// Editable list of strings with add/remove, honoring the field's minimum.
#[component]
pub fn StringListEditor<T: Content>(
    editor: Editor<T>,
    field: ListField<T, String>,
    #[prop(into)] label: String,
    #[prop(into, default = "Add Item".to_owned())] add_label: String,
) -> impl IntoView {
    view! {
        <div class="list-editor">
            <div class="list-editor__header">
                <span class="field__label">{label}</span>
                <button type="button" class="btn btn--small" on:click=move |_| editor.list_add(field)>
                    {add_label}
                </button>
            </div>
            <For
                each=move || 0..editor.list_len(field)
                key=|index| *index
                children=move |index| {
                    view! {
                        <div class="list-editor__row">
                            <input
                                class="field__input"
                                type="text"
                                prop:value=move || editor.list_item(field, index).unwrap_or_default()
                                on:input=move |ev| editor.list_update(field, index, event_target_value(&ev))
                            />
                            <button
                                type="button"
                                class="btn btn--icon"
                                title="Remove"
                                aria-label="Remove"
                                disabled=move || editor.list_len(field) <= field.min_len()
                                on:click=move |_| editor.list_remove(field, index)
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

/// Hex color field: native picker, free-text entry, and preset swatches.
///
/// Typed text is committed only once it is a complete `#rrggbb` value.
#[component]
pub fn ColorField<T: Content>(editor: Editor<T>, lens: Lens<T, String>, #[prop(into)] label: String) -> impl IntoView {
    let text = RwSignal::new(String::new());
    Effect::new(move || text.set(editor.field(lens)));
    let presets_open = RwSignal::new(false);

    view! {
        <div class="color-field">
            <span class="field__label">{label}</span>
            <div class="color-field__row">
                <input
                    type="color"
                    class="color-field__picker"
                    prop:value=move || editor.field(lens)
                    on:input=move |ev| editor.set(lens, event_target_value(&ev))
                />
                <input
                    type="text"
                    class="field__input color-field__text"
                    placeholder="#000000"
                    prop:value=move || text.get()
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        if is_complete_hex(&value) {
                            editor.set(lens, value.clone());
                        }
                        text.set(value);
                    }
                />
                <button type="button" class="btn btn--small" on:click=move |_| presets_open.update(|open| *open = !*open)>
                    "Presets"
                </button>
            </div>
            <Show when=move || presets_open.get()>
                <div class="color-field__presets">
                    {PRESET_COLORS
                        .into_iter()
                        .map(|hex| {
                            view! {
                                <button
                                    type="button"
                                    class="color-swatch"
                                    title=hex
                                    style:background-color=hex
                                    on:click=move |_| {
                                        editor.set(lens, hex.to_owned());
                                        presets_open.set(false);
                                    }
                                ></button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
