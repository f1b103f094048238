//! Services editor screen: heading plus a card per service, each with its
//! own feature list.

use content::list::rules;
use content::schema::{ServiceItem, ServicesContent};
use content::{EditError, lens};
use leptos::prelude::*;

use crate::components::editor_actions::EditorHeader;
use crate::components::fields::TextField;
use crate::state::editor::Editor;

#[component]
pub fn ServicesEditorPage() -> impl IntoView {
    let editor = Editor::<ServicesContent>::mount();
    let entries = rules::service_entries();

    view! {
        <div class="admin-page">
            <EditorHeader editor/>
            <section class="card editor-card">
                <h2 class="editor-card__title">"Section Header"</h2>
                <TextField editor lens={lens!(ServicesContent, heading)} label="Heading"/>
                <TextField editor lens={lens!(ServicesContent, subheading)} label="Subheading" multiline=true/>
            </section>
            <div class="editor-list__header">
                <h2>"Services"</h2>
                <button type="button" class="btn btn--primary" on:click=move |_| editor.list_add(entries)>
                    "Add Service"
                </button>
            </div>
            <For
                each=move || 0..editor.list_len(entries)
                key=|index| *index
                children=move |index| view! { <ServiceCard editor index/> }
            />
        </div>
    }
}

/// Apply `edit` to the service at `index`.
fn edit_service(
    editor: Editor<ServicesContent>,
    index: usize,
    edit: impl FnOnce(&mut ServiceItem) -> Result<(), EditError>,
) {
    editor.try_edit(move |content| {
        let len = content.services.len();
        let item = content.services.get_mut(index).ok_or(EditError::IndexOutOfRange { index, len })?;
        edit(item)
    });
}

/// Editable card for the service at `index`.
#[component]
fn ServiceCard(editor: Editor<ServicesContent>, index: usize) -> impl IntoView {
    let entries = rules::service_entries();
    let features = rules::service_features();
    let service = move || editor.list_item(entries, index).unwrap_or_default();
    let feature_count = move || editor.list_item(entries, index).map_or(0, |s| s.features.len());

    view! {
        <section class="card editor-card">
            <div class="editor-card__header">
                <h3 class="editor-card__title">{format!("Service {}", index + 1)}</h3>
                <button
                    type="button"
                    class="btn btn--danger btn--small"
                    disabled=move || editor.list_len(entries) <= entries.min_len()
                    on:click=move |_| editor.list_remove(entries, index)
                >
                    "Remove"
                </button>
            </div>
            <label class="field">
                <span class="field__label">"Title"</span>
                <input
                    class="field__input"
                    type="text"
                    prop:value=move || service().title
                    on:input=move |ev| {
                        let v = event_target_value(&ev);
                        edit_service(editor, index, |s| {
                            s.title = v;
                            Ok(())
                        });
                    }
                />
            </label>
            <label class="field">
                <span class="field__label">"Description"</span>
                <textarea
                    class="field__input"
                    rows="3"
                    prop:value=move || service().description
                    on:input=move |ev| {
                        let v = event_target_value(&ev);
                        edit_service(editor, index, |s| {
                            s.description = v;
                            Ok(())
                        });
                    }
                ></textarea>
            </label>
            <label class="field">
                <span class="field__label">"Gradient Classes"</span>
                <input
                    class="field__input"
                    type="text"
                    placeholder="from-blue-400 to-purple-600"
                    prop:value=move || service().gradient
                    on:input=move |ev| {
                        let v = event_target_value(&ev);
                        edit_service(editor, index, |s| {
                            s.gradient = v;
                            Ok(())
                        });
                    }
                />
            </label>
            <div class="list-editor">
                <div class="list-editor__header">
                    <span class="field__label">"Features"</span>
                    <button
                        type="button"
                        class="btn btn--small"
                        on:click=move |_| {
                            edit_service(editor, index, |s| {
                                features.add(s);
                                Ok(())
                            });
                        }
                    >
                        "Add Feature"
                    </button>
                </div>
                <For
                    each=move || 0..feature_count()
                    key=|feature| *feature
                    children=move |feature| {
                        view! {
                            <div class="list-editor__row">
                                <input
                                    class="field__input"
                                    type="text"
                                    prop:value=move || service().features.get(feature).cloned().unwrap_or_default()
                                    on:input=move |ev| {
                                        let v = event_target_value(&ev);
                                        edit_service(editor, index, |s| features.update(s, feature, v));
                                    }
                                />
                                <button
                                    type="button"
                                    class="btn btn--icon"
                                    aria-label="Remove feature"
                                    disabled=move || feature_count() <= features.min_len()
                                    on:click=move |_| {
                                        edit_service(editor, index, |s| features.remove(s, feature).map(|_| ()));
                                    }
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    }
                />
            </div>
        </section>
    }
}
