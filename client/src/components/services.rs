//! Services section: heading, service cards with feature bullets, and a
//! closing call to action.

#[cfg(test)]
#[path = "services_test.rs"]
mod services_test;

use content::display::split_heading_trailing;
use content::schema::{ServiceItem, ServicesContent};
use leptos::prelude::*;

use crate::state::content::use_content;

/// Row key for a service card. Cards render their fields once, so the key
/// covers the whole card: stored edits keep the default ids and must still
/// replace the rows built from the default content.
fn row_key(service: &ServiceItem) -> ServiceItem {
    service.clone()
}

#[component]
pub fn Services() -> impl IntoView {
    let content = use_content::<ServicesContent>();
    let heading = move || content.with(|c| split_heading_trailing(&c.heading, 2));

    view! {
        <section id="services" class="section">
            <div class="container">
                <div class="section__header">
                    <span class="badge badge--accent">"Our Arsenal"</span>
                    <h2 class="section__title">
                        {move || heading().0}
                        <br/>
                        <span class="text-primary">{move || heading().1}</span>
                    </h2>
                    <p class="section__lead">{move || content.with(|c| c.subheading.clone())}</p>
                </div>
                <div class="services__grid">
                    <For
                        each=move || content.get().services
                        key=row_key
                        children=|service| {
                            view! {
                                <article class="card service-card">
                                    <div class=format!("service-card__icon bg-gradient-to-br {}", service.gradient)></div>
                                    <h3 class="card__title">{service.title}</h3>
                                    <p class="card__description">{service.description}</p>
                                    <ul class="service-card__features">
                                        {service
                                            .features
                                            .into_iter()
                                            .map(|feature| view! { <li>{feature}</li> })
                                            .collect_view()}
                                    </ul>
                                    <a class="btn btn--outline btn--block" href="#contact">"Learn More"</a>
                                </article>
                            }
                        }
                    />
                </div>
                <div class="cta-panel">
                    <h3>"Ready to Build Your Content Empire?"</h3>
                    <p>
                        "Let's discuss how we can transform your brand into an unstoppable force that dominates your market."
                    </p>
                    <a class="btn btn--light btn--lg" href="#contact">"Start Your Campaign"</a>
                </div>
            </div>
        </section>
    }
}
