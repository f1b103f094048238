//! About editor screen.

use content::lens;
use content::schema::AboutContent;
use leptos::prelude::*;

use crate::components::editor_actions::EditorHeader;
use crate::components::fields::TextField;
use crate::state::editor::Editor;

#[component]
pub fn AboutEditorPage() -> impl IntoView {
    let editor = Editor::<AboutContent>::mount();

    view! {
        <div class="admin-page">
            <EditorHeader editor/>
            <section class="card editor-card">
                <h2 class="editor-card__title">"Founder"</h2>
                <TextField editor lens={lens!(AboutContent, founder_name)} label="Name"/>
                <TextField editor lens={lens!(AboutContent, founder_title)} label="Title"/>
                <TextField editor lens={lens!(AboutContent, founder_quote)} label="Quote" multiline=true/>
            </section>
            <section class="card editor-card">
                <h2 class="editor-card__title">"Statistics"</h2>
                <TextField editor lens={lens!(AboutContent, stats.experience)} label="Years Experience"/>
                <TextField editor lens={lens!(AboutContent, stats.brands_transformed)} label="Brands Transformed"/>
                <TextField editor lens={lens!(AboutContent, stats.revenue_generated)} label="Revenue Generated"/>
            </section>
            <section class="card editor-card">
                <h2 class="editor-card__title">"Mission"</h2>
                <TextField editor lens={lens!(AboutContent, mission_title)} label="Mission Title"/>
                <TextField editor lens={lens!(AboutContent, mission_description)} label="Mission Description" multiline=true/>
            </section>
            <section class="card editor-card">
                <h2 class="editor-card__title">"Call to Action"</h2>
                <TextField editor lens={lens!(AboutContent, cta_title)} label="CTA Title"/>
                <TextField editor lens={lens!(AboutContent, cta_description)} label="CTA Description" multiline=true/>
                <TextField editor lens={lens!(AboutContent, cta_button_text)} label="Button Text"/>
            </section>
        </div>
    }
}
