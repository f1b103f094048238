//! Portfolio section: featured case study, headline stats, client names.

use content::display::split_heading_leading;
use content::schema::PortfolioContent;
use leptos::prelude::*;

use crate::state::content::use_content;

#[component]
pub fn Portfolio() -> impl IntoView {
    let content = use_content::<PortfolioContent>();
    let heading = move || content.with(|c| split_heading_leading(&c.heading, 2));
    let case = move || content.with(|c| c.featured_case.clone());
    let stats = move || content.with(|c| c.stats.clone());

    view! {
        <section id="portfolio" class="section section--tinted">
            <div class="container">
                <div class="section__header">
                    <span class="badge badge--primary">"Success Stories"</span>
                    <h2 class="section__title">
                        {move || heading().0}
                        <br/>
                        <span class="text-primary">{move || heading().1}</span>
                    </h2>
                    <p class="section__lead">{move || content.with(|c| c.subheading.clone())}</p>
                </div>

                <article class="card case-study">
                    <div class="case-study__preview">"Dashboard Preview"</div>
                    <div class="case-study__body">
                        <span class="badge badge--primary">{move || case().category}</span>
                        <h3 class="case-study__title">{move || case().title}</h3>
                        <p class="case-study__description">{move || case().description}</p>
                        <div class="case-study__stats">
                            <div class="metric">
                                <div class="metric__value">{move || case().revenue_growth}</div>
                                <div class="metric__label">"Revenue Growth"</div>
                            </div>
                            <div class="metric">
                                <div class="metric__value">{move || case().users_acquired}</div>
                                <div class="metric__label">"Users Acquired"</div>
                            </div>
                            <div class="metric">
                                <div class="metric__value">{move || case().valuation}</div>
                                <div class="metric__label">"Valuation"</div>
                            </div>
                        </div>
                    </div>
                </article>

                <div class="section__header">
                    <span class="badge badge--primary">"Notable Clients"</span>
                    <h3 class="section__subtitle">"Trusted by"</h3>
                    <p class="section__lead">{move || content.with(|c| c.description.clone())}</p>
                </div>
                <div class="portfolio__stats">
                    <div class="metric">
                        <div class="metric__value">{move || stats().clients_served}</div>
                        <div class="metric__label">"Clients Served"</div>
                    </div>
                    <div class="metric">
                        <div class="metric__value">{move || stats().success_rate}</div>
                        <div class="metric__label">"Success Rate"</div>
                    </div>
                    <div class="metric">
                        <div class="metric__value">{move || stats().revenue_generated}</div>
                        <div class="metric__label">"Revenue Generated"</div>
                    </div>
                    <div class="metric">
                        <div class="metric__value">{move || stats().client_rating}</div>
                        <div class="metric__label">"Client Rating"</div>
                    </div>
                </div>
                <div class="portfolio__clients">
                    {move || {
                        content
                            .get()
                            .clients
                            .into_iter()
                            .map(|client| view! { <span class="client-logo">{client}</span> })
                            .collect_view()
                    }}
                </div>
            </div>
        </section>
    }
}
