//! Footer editor screen.

use content::lens;
use content::list::rules::{self, FooterColumn};
use content::schema::FooterContent;
use leptos::prelude::*;

use crate::components::editor_actions::EditorHeader;
use crate::components::fields::{ColorField, StringListEditor, TextField};
use crate::state::editor::Editor;
use crate::state::notice::NoticeState;
#[cfg(feature = "hydrate")]
use crate::state::notice::{NoticeLevel, notify};
#[cfg(feature = "hydrate")]
use crate::util::file;

#[component]
pub fn FooterEditorPage() -> impl IntoView {
    let editor = Editor::<FooterContent>::mount();
    let background_image = lens!(FooterContent, styling.background_image);
    let notices = expect_context::<RwSignal<NoticeState>>();

    let on_upload = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast as _;

            let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
                return;
            };
            let Some(size) = file::selected_file_size(&input) else {
                return;
            };
            if let Err(message) = file::check_image_size(size, file::MAX_IMAGE_MB) {
                input.set_value("");
                notify(notices, NoticeLevel::Error, "File too large", &message);
                return;
            }
            leptos::task::spawn_local(async move {
                let read = file::read_selected_data_url(&input).await;
                input.set_value("");
                match read {
                    Ok(url) => editor.set(background_image, Some(url)),
                    Err(e) => {
                        log::warn!("footer image upload failed: {e}");
                        notify(notices, NoticeLevel::Error, "Upload failed", &e);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, notices);
        }
    };

    view! {
        <div class="admin-page">
            <EditorHeader editor/>
            <section class="card editor-card">
                <h2 class="editor-card__title">"Company"</h2>
                <TextField editor lens={lens!(FooterContent, company_name)} label="Company Name"/>
                <TextField editor lens={lens!(FooterContent, description)} label="Description" multiline=true/>
            </section>
            <section class="card editor-card">
                <h2 class="editor-card__title">"Link Columns"</h2>
                <div class="editor-grid">
                    {FooterColumn::ALL
                        .into_iter()
                        .map(|column| {
                            view! {
                                <StringListEditor editor field=rules::footer_column(column) label=column.title()/>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
            <section class="card editor-card">
                <h2 class="editor-card__title">"Social Links"</h2>
                <TextField editor lens={lens!(FooterContent, social_links.twitter)} label="Twitter URL"/>
                <TextField editor lens={lens!(FooterContent, social_links.linkedin)} label="LinkedIn URL"/>
                <TextField editor lens={lens!(FooterContent, social_links.instagram)} label="Instagram URL"/>
                <TextField editor lens={lens!(FooterContent, social_links.email)} label="Email Address" placeholder="hello@example.com"/>
            </section>
            <section class="card editor-card">
                <h2 class="editor-card__title">"Contact Information"</h2>
                <TextField editor lens={lens!(FooterContent, contact_info.email)} label="Email"/>
                <TextField editor lens={lens!(FooterContent, contact_info.phone)} label="Phone"/>
                <TextField editor lens={lens!(FooterContent, contact_info.address)} label="Address"/>
            </section>
            <section class="card editor-card">
                <h2 class="editor-card__title">"Legal"</h2>
                <TextField editor lens={lens!(FooterContent, legal.copyright)} label="Copyright"/>
                <TextField editor lens={lens!(FooterContent, legal.privacy_policy)} label="Privacy Policy Label"/>
                <TextField editor lens={lens!(FooterContent, legal.terms_of_service)} label="Terms of Service Label"/>
                <TextField editor lens={lens!(FooterContent, legal.cookie_policy)} label="Cookie Policy Label"/>
            </section>
            <section class="card editor-card">
                <h2 class="editor-card__title">"Styling"</h2>
                <ColorField editor lens={lens!(FooterContent, styling.background_color)} label="Background Color"/>
                <ColorField editor lens={lens!(FooterContent, styling.text_color)} label="Text Color"/>
                <ColorField editor lens={lens!(FooterContent, styling.link_color)} label="Link Color"/>
                <label class="field">
                    <span class="field__label">"Background Image URL (optional)"</span>
                    <input
                        class="field__input"
                        type="url"
                        placeholder="https://example.com/footer.jpg"
                        prop:value=move || editor.field(background_image).unwrap_or_default()
                        on:input=move |ev| {
                            let url = event_target_value(&ev);
                            let url = if url.trim().is_empty() { None } else { Some(url) };
                            editor.set(background_image, url);
                        }
                    />
                </label>
                <div class="field">
                    <span class="field__label">"Upload Background Image"</span>
                    <input class="field__input" type="file" accept="image/*" on:change=on_upload/>
                    <Show when=move || editor.field(background_image).is_some()>
                        <div class="image-upload__preview">
                            <img src=move || editor.field(background_image).unwrap_or_default() alt="Footer background"/>
                            <button
                                type="button"
                                class="btn btn--small"
                                on:click=move |_| editor.set(background_image, None)
                            >
                                "Remove Image"
                            </button>
                        </div>
                    </Show>
                </div>
            </section>
        </div>
    }
}
