//! Home (hero) editor screen.

use content::lens;
use content::schema::HomeContent;
use leptos::prelude::*;

use crate::components::editor_actions::EditorHeader;
use crate::components::fields::TextField;
use crate::state::editor::Editor;

#[component]
pub fn HomeEditorPage() -> impl IntoView {
    let editor = Editor::<HomeContent>::mount();

    view! {
        <div class="admin-page">
            <EditorHeader editor/>
            <section class="card editor-card">
                <h2 class="editor-card__title">"Hero Badge"</h2>
                <TextField editor lens={lens!(HomeContent, badge.text)} label="Badge Text"/>
                <TextField editor lens={lens!(HomeContent, badge.icon)} label="Badge Icon"/>
            </section>
            <section class="card editor-card">
                <h2 class="editor-card__title">"Headline"</h2>
                <TextField editor lens={lens!(HomeContent, headline.main)} label="Main Headline"/>
                <TextField editor lens={lens!(HomeContent, headline.highlighted)} label="Highlighted Text"/>
                <TextField editor lens={lens!(HomeContent, subtitle)} label="Subtitle" multiline=true/>
            </section>
            <section class="card editor-card">
                <h2 class="editor-card__title">"Call to Action Buttons"</h2>
                <TextField editor lens={lens!(HomeContent, buttons.primary)} label="Primary Button"/>
                <TextField editor lens={lens!(HomeContent, buttons.secondary)} label="Secondary Button"/>
            </section>
            <section class="card editor-card">
                <h2 class="editor-card__title">"Statistics"</h2>
                <TextField editor lens={lens!(HomeContent, stats.roi)} label="ROI Increase"/>
                <TextField editor lens={lens!(HomeContent, stats.audience)} label="Audience Reached"/>
                <TextField editor lens={lens!(HomeContent, stats.launch_time)} label="Launch Time"/>
            </section>
        </div>
    }
}
