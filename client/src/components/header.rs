//! Site header: brand name and anchor navigation for the visible sections.

use content::schema::FooterContent;
use content::sections::{SectionKind, SectionOrder};
use leptos::prelude::*;

use crate::state::content::use_content;

#[component]
pub fn Header() -> impl IntoView {
    let footer = use_content::<FooterContent>();
    let order = use_content::<SectionOrder>();

    view! {
        <header class="site-header">
            <div class="container site-header__inner">
                <a class="site-header__brand" href="#home">
                    {move || footer.with(|f| f.company_name.clone())}
                </a>
                <nav class="site-header__nav">
                    {move || {
                        order
                            .with(SectionOrder::resolve)
                            .into_iter()
                            .map(|kind| view! { <a href=format!("#{}", kind.anchor())>{nav_label(kind)}</a> })
                            .collect_view()
                    }}
                </nav>
                <a class="btn btn--primary site-header__cta" href="#contact">"Get Started"</a>
            </div>
        </header>
    }
}

fn nav_label(kind: SectionKind) -> &'static str {
    match kind {
        SectionKind::Hero => "Home",
        other => other.name(),
    }
}
