//! Hero section: badge, two-part headline, calls to action, and stats.

use content::display::hero_stats;
use content::schema::HomeContent;
use leptos::prelude::*;

use crate::state::content::use_content;

#[component]
pub fn Hero() -> impl IntoView {
    let home = use_content::<HomeContent>();

    view! {
        <section id="home" class="hero">
            <div class="container hero__inner">
                <span class="badge badge--gradient" data-icon=move || home.with(|h| h.badge.icon.clone())>
                    {move || home.with(|h| h.badge.text.clone())}
                </span>
                <h1 class="hero__headline">
                    {move || home.with(|h| h.headline.main.clone())}
                    <br/>
                    <span class="text-gradient">{move || home.with(|h| h.headline.highlighted.clone())}</span>
                </h1>
                <p class="hero__subtitle">{move || home.with(|h| h.subtitle.clone())}</p>
                <div class="hero__actions">
                    <a class="btn btn--primary btn--lg" href="#contact">
                        {move || home.with(|h| h.buttons.primary.clone())}
                    </a>
                    <a class="btn btn--outline btn--lg" href="#portfolio">
                        {move || home.with(|h| h.buttons.secondary.clone())}
                    </a>
                </div>
                <div class="hero__stats">
                    {move || {
                        home.with(|h| {
                            hero_stats(h)
                                .into_iter()
                                .map(|(value, label)| {
                                    let value = value.to_owned();
                                    view! {
                                        <div class="stat-card">
                                            <div class="stat-card__value">{value}</div>
                                            <div class="stat-card__label">{label}</div>
                                        </div>
                                    }
                                })
                                .collect_view()
                        })
                    }}
                </div>
            </div>
        </section>
    }
}
