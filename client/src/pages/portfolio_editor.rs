//! Portfolio editor screen.

use content::lens;
use content::list::rules;
use content::schema::PortfolioContent;
use leptos::prelude::*;

use crate::components::editor_actions::EditorHeader;
use crate::components::fields::{StringListEditor, TextField};
use crate::state::editor::Editor;

#[component]
pub fn PortfolioEditorPage() -> impl IntoView {
    let editor = Editor::<PortfolioContent>::mount();

    view! {
        <div class="admin-page">
            <EditorHeader editor/>
            <section class="card editor-card">
                <h2 class="editor-card__title">"Section Header"</h2>
                <TextField editor lens={lens!(PortfolioContent, heading)} label="Heading"/>
                <TextField editor lens={lens!(PortfolioContent, subheading)} label="Subheading" multiline=true/>
                <TextField editor lens={lens!(PortfolioContent, description)} label="Clients Description" multiline=true/>
            </section>
            <section class="card editor-card">
                <h2 class="editor-card__title">"Featured Case Study"</h2>
                <TextField editor lens={lens!(PortfolioContent, featured_case.title)} label="Title"/>
                <TextField editor lens={lens!(PortfolioContent, featured_case.category)} label="Category"/>
                <TextField editor lens={lens!(PortfolioContent, featured_case.description)} label="Description" multiline=true/>
                <TextField editor lens={lens!(PortfolioContent, featured_case.revenue_growth)} label="Revenue Growth"/>
                <TextField editor lens={lens!(PortfolioContent, featured_case.users_acquired)} label="Users Acquired"/>
                <TextField editor lens={lens!(PortfolioContent, featured_case.valuation)} label="Valuation"/>
            </section>
            <section class="card editor-card">
                <h2 class="editor-card__title">"Statistics"</h2>
                <TextField editor lens={lens!(PortfolioContent, stats.clients_served)} label="Clients Served"/>
                <TextField editor lens={lens!(PortfolioContent, stats.success_rate)} label="Success Rate"/>
                <TextField editor lens={lens!(PortfolioContent, stats.revenue_generated)} label="Revenue Generated"/>
                <TextField editor lens={lens!(PortfolioContent, stats.client_rating)} label="Client Rating"/>
            </section>
            <section class="card editor-card">
                <StringListEditor editor field=rules::portfolio_clients() label="Clients" add_label="Add Client"/>
            </section>
        </div>
    }
}
