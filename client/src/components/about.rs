//! About section: founder card, stats, mission statement.

use content::schema::AboutContent;
use leptos::prelude::*;

use crate::state::content::use_content;

#[component]
pub fn About() -> impl IntoView {
    let about = use_content::<AboutContent>();
    let text = move |pick: fn(&AboutContent) -> &String| move || about.with(|a| pick(a).clone());

    view! {
        <section id="about" class="section">
            <div class="container">
                <div class="section__header">
                    <p class="section__lead">
                        "Built from passion, driven by results, and fueled by an obsession to help brands dominate their markets."
                    </p>
                </div>
                <article class="card founder">
                    <div class="founder__photo">"Founder Photo"</div>
                    <div class="founder__body">
                        <h3 class="founder__name">{text(|a| &a.founder_name)}</h3>
                        <span class="badge badge--primary">{text(|a| &a.founder_title)}</span>
                        <blockquote class="founder__quote">{text(|a| &a.founder_quote)}</blockquote>
                        <div class="founder__stats">
                            <div class="metric">
                                <div class="metric__value">{text(|a| &a.stats.experience)}</div>
                                <div class="metric__label">"Years Experience"</div>
                            </div>
                            <div class="metric">
                                <div class="metric__value">{text(|a| &a.stats.brands_transformed)}</div>
                                <div class="metric__label">"Brands Transformed"</div>
                            </div>
                            <div class="metric">
                                <div class="metric__value">{text(|a| &a.stats.revenue_generated)}</div>
                                <div class="metric__label">"Revenue Generated"</div>
                            </div>
                        </div>
                    </div>
                </article>
                <div class="mission">
                    <h3 class="section__subtitle">{text(|a| &a.mission_title)}</h3>
                    <p class="section__lead">{text(|a| &a.mission_description)}</p>
                    <div class="cta-panel">
                        <h4>{text(|a| &a.cta_title)}</h4>
                        <p>{text(|a| &a.cta_description)}</p>
                        <a class="btn btn--light btn--lg" href="#contact">{text(|a| &a.cta_button_text)}</a>
                    </div>
                </div>
            </div>
        </section>
    }
}
