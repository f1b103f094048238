//! Section order screen: reorder and toggle the public page sections.

use content::sections::{ComponentRef, Direction, SectionItem, SectionOrder};
use leptos::prelude::*;

use crate::components::editor_actions::EditorHeader;
use crate::state::editor::Editor;

#[component]
pub fn SectionsEditorPage() -> impl IntoView {
    let editor = Editor::<SectionOrder>::mount();

    view! {
        <div class="admin-page">
            <EditorHeader editor/>
            <section class="card editor-card">
                <h2 class="editor-card__title">"Page Sections"</h2>
                <p class="editor-card__hint">
                    "Sections render top to bottom. Disabled sections stay in the list but are hidden from the site."
                </p>
                <ol class="section-list">
                    {move || {
                        let order = editor.value();
                        let len = order.len();
                        order
                            .0
                            .into_iter()
                            .enumerate()
                            .map(|(index, item)| view! { <SectionRow editor item index len/> })
                            .collect_view()
                    }}
                </ol>
            </section>
        </div>
    }
}

#[component]
fn SectionRow(editor: Editor<SectionOrder>, item: SectionItem, index: usize, len: usize) -> impl IntoView {
    let unknown = matches!(item.component, ComponentRef::Unknown(_));
    let component: String = item.component.into();
    let move_item = move |direction| {
        editor.edit(|order| {
            order.move_item(index, direction);
        });
    };

    view! {
        <li class="section-row" class:section-row--disabled={!item.enabled}>
            <span class="section-row__position">{index + 1}</span>
            <div class="section-row__body">
                <span class="section-row__name">{item.name}</span>
                <span class="section-row__component">
                    {component}
                    {unknown.then(|| view! { <span class="badge badge--outline">"Unknown"</span> })}
                </span>
            </div>
            <div class="section-row__actions">
                <button
                    type="button"
                    class="btn btn--icon"
                    aria-label="Move up"
                    disabled={index == 0}
                    on:click=move |_| move_item(Direction::Up)
                >
                    "↑"
                </button>
                <button
                    type="button"
                    class="btn btn--icon"
                    aria-label="Move down"
                    disabled={index + 1 >= len}
                    on:click=move |_| move_item(Direction::Down)
                >
                    "↓"
                </button>
                <label class="switch">
                    <input
                        type="checkbox"
                        prop:checked=item.enabled
                        on:change=move |_| {
                            editor.edit(|order| {
                                order.toggle(index);
                            });
                        }
                    />
                    <span>{if item.enabled { "Enabled" } else { "Disabled" }}</span>
                </label>
            </div>
        </li>
    }
}
