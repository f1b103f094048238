//! Public single-page site composed from the stored section order.

use content::sections::SectionOrder;
use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::section_view;
use crate::state::content::use_content;

#[component]
pub fn SitePage() -> impl IntoView {
    let order = use_content::<SectionOrder>();

    view! {
        <div class="site">
            <Header/>
            <main>
                {move || order.with(SectionOrder::resolve).into_iter().map(section_view).collect_view()}
            </main>
            <Footer/>
        </div>
    }
}
