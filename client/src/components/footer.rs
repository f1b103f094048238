//! Site footer: brand blurb, link columns, legal line; colors and optional
//! background image come from the stored styling.

use content::display::footer_style;
use content::list::rules::FooterColumn;
use content::schema::FooterContent;
use leptos::prelude::*;

use crate::state::content::use_content;

#[component]
pub fn Footer() -> impl IntoView {
    let footer = use_content::<FooterContent>();
    let link_color = move || footer.with(|f| f.styling.link_color.clone());
    let column = move |col: FooterColumn| {
        footer.with(|f| match col {
            FooterColumn::Services => f.sections.services.clone(),
            FooterColumn::Company => f.sections.company.clone(),
            FooterColumn::Resources => f.sections.resources.clone(),
        })
    };

    view! {
        <footer class="site-footer" style=move || footer.with(|f| footer_style(&f.styling))>
            <div class="container">
                <div class="site-footer__grid">
                    <div class="site-footer__brand">
                        <h3>{move || footer.with(|f| f.company_name.clone())}</h3>
                        <p>{move || footer.with(|f| f.description.clone())}</p>
                        <div class="site-footer__social">
                            <a href=move || footer.with(|f| f.social_links.twitter.clone()) style:color=link_color>"Twitter"</a>
                            <a href=move || footer.with(|f| f.social_links.linkedin.clone()) style:color=link_color>"LinkedIn"</a>
                            <a href=move || footer.with(|f| f.social_links.instagram.clone()) style:color=link_color>"Instagram"</a>
                            <a href=move || footer.with(|f| format!("mailto:{}", f.social_links.email)) style:color=link_color>"Email"</a>
                        </div>
                    </div>
                    {FooterColumn::ALL
                        .into_iter()
                        .map(|col| {
                            view! {
                                <div class="site-footer__column">
                                    <h4>{col.title()}</h4>
                                    <ul>
                                        {move || {
                                            column(col)
                                                .into_iter()
                                                .map(|item| view! { <li><a href="#" style:color=link_color>{item}</a></li> })
                                                .collect_view()
                                        }}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="site-footer__bottom">
                    <p>{move || footer.with(|f| f.legal.copyright.clone())}</p>
                    <div class="site-footer__legal">
                        <a href="#" style:color=link_color>{move || footer.with(|f| f.legal.privacy_policy.clone())}</a>
                        <a href="#" style:color=link_color>{move || footer.with(|f| f.legal.terms_of_service.clone())}</a>
                        <a href="#" style:color=link_color>{move || footer.with(|f| f.legal.cookie_policy.clone())}</a>
                    </div>
                    <p class="site-footer__contact">
                        {move || footer.with(|f| format!("{} · {} · {}", f.contact_info.email, f.contact_info.phone, f.contact_info.address))}
                    </p>
                </div>
            </div>
        </footer>
    }
}
