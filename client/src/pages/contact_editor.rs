//! Contact editor screen.

use content::lens;
use content::schema::ContactContent;
use leptos::prelude::*;

use crate::components::editor_actions::EditorHeader;
use crate::components::fields::TextField;
use crate::state::editor::Editor;

#[component]
pub fn ContactEditorPage() -> impl IntoView {
    let editor = Editor::<ContactContent>::mount();

    view! {
        <div class="admin-page">
            <EditorHeader editor/>
            <section class="card editor-card">
                <h2 class="editor-card__title">"Section Header"</h2>
                <TextField editor lens={lens!(ContactContent, heading)} label="Heading"/>
                <TextField editor lens={lens!(ContactContent, subheading)} label="Subheading" multiline=true/>
                <TextField editor lens={lens!(ContactContent, description)} label="Description" multiline=true/>
                <TextField editor lens={lens!(ContactContent, form_title)} label="Form Title"/>
            </section>
            <section class="card editor-card">
                <h2 class="editor-card__title">"Contact Information"</h2>
                <TextField editor lens={lens!(ContactContent, contact_info.email)} label="Email"/>
                <TextField editor lens={lens!(ContactContent, contact_info.email_description)} label="Email Description"/>
                <TextField editor lens={lens!(ContactContent, contact_info.phone)} label="Phone"/>
                <TextField editor lens={lens!(ContactContent, contact_info.phone_description)} label="Phone Description"/>
                <TextField editor lens={lens!(ContactContent, contact_info.location)} label="Location"/>
                <TextField editor lens={lens!(ContactContent, contact_info.location_description)} label="Location Description"/>
            </section>
            <section class="card editor-card">
                <h2 class="editor-card__title">"Response Guarantee"</h2>
                <TextField editor lens={lens!(ContactContent, response_guarantee.title)} label="Title"/>
                <TextField editor lens={lens!(ContactContent, response_guarantee.description)} label="Description" multiline=true/>
            </section>
        </div>
    }
}
