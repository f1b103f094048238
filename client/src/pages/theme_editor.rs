//! Theme editor screen with live preview, export, and import.
//!
//! DESIGN
//! ======
//! The draft palette is applied to the document on every edit so the admin
//! chrome previews it. Leaving the screen re-applies the saved palette, so
//! an unsaved preview never outlives the editor.

use content::lens;
use content::theme::{EXPORT_FILE_NAME, ThemeColors, export_theme};
use leptos::prelude::*;

use crate::components::editor_actions::EditorHeader;
use crate::components::fields::ColorField;
use crate::state::content::SiteStore;
use crate::state::editor::Editor;
use crate::state::notice::{NoticeLevel, NoticeState, notify};
use crate::util::{file, theme};

#[component]
pub fn ThemeEditorPage() -> impl IntoView {
    let editor = Editor::<ThemeColors>::mount();
    let store = expect_context::<SiteStore>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    Effect::new(move || theme::apply(&editor.value()));
    on_cleanup(move || theme::apply(&store.load::<ThemeColors>()));

    let on_export = move |_| {
        if let Err(e) = file::download_json(EXPORT_FILE_NAME, &export_theme(&editor.value())) {
            log::error!("theme export failed: {e}");
            notify(notices, NoticeLevel::Error, "Export failed", &e);
        }
    };

    let on_import = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast as _;

            let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
                return;
            };
            leptos::task::spawn_local(async move {
                let parsed = file::read_selected_file(&input)
                    .await
                    .and_then(|text| content::theme::import_theme(&text).map_err(|e| e.to_string()));
                input.set_value("");
                match parsed {
                    Ok(colors) => {
                        editor.replace(colors);
                        notify(notices, NoticeLevel::Success, "Theme imported", "Save to apply the imported theme.");
                    }
                    Err(e) => {
                        log::warn!("theme import rejected: {e}");
                        notify(notices, NoticeLevel::Error, "Invalid theme file", "Choose a JSON theme export.");
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    view! {
        <div class="admin-page">
            <EditorHeader editor/>
            <section class="card editor-card">
                <div class="editor-card__header">
                    <h2 class="editor-card__title">"Import / Export"</h2>
                    <div class="editor-card__actions">
                        <button type="button" class="btn" on:click=on_export>"Export"</button>
                        <label class="btn">
                            "Import"
                            <input type="file" accept="application/json,.json" class="visually-hidden" on:change=on_import/>
                        </label>
                    </div>
                </div>
            </section>
            <section class="card editor-card">
                <h2 class="editor-card__title">"Brand Colors"</h2>
                <div class="editor-grid">
                    <ColorField editor lens={lens!(ThemeColors, primary)} label="Primary"/>
                    <ColorField editor lens={lens!(ThemeColors, secondary)} label="Secondary"/>
                    <ColorField editor lens={lens!(ThemeColors, accent)} label="Accent"/>
                </div>
            </section>
            <section class="card editor-card">
                <h2 class="editor-card__title">"Surface Colors"</h2>
                <div class="editor-grid">
                    <ColorField editor lens={lens!(ThemeColors, background)} label="Background"/>
                    <ColorField editor lens={lens!(ThemeColors, foreground)} label="Foreground"/>
                    <ColorField editor lens={lens!(ThemeColors, muted)} label="Muted"/>
                    <ColorField editor lens={lens!(ThemeColors, card)} label="Card"/>
                    <ColorField editor lens={lens!(ThemeColors, border)} label="Border"/>
                    <ColorField editor lens={lens!(ThemeColors, destructive)} label="Destructive"/>
                </div>
            </section>
            <section class="card editor-card">
                <h2 class="editor-card__title">"Preview"</h2>
                <div class="theme-preview">
                    {move || {
                        let palette = editor.value();
                        palette
                            .entries()
                            .into_iter()
                            .map(|(name, hex)| {
                                let hex = hex.to_owned();
                                view! {
                                    <div class="theme-preview__swatch">
                                        <span class="theme-preview__color" style:background-color=hex.clone()></span>
                                        <span class="theme-preview__name">{name}</span>
                                        <code>{hex}</code>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </section>
        </div>
    }
}
