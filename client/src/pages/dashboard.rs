//! Admin dashboard: per-domain customization status and quick links.
//!
//! SYSTEM CONTEXT
//! ==============
//! Landing route of the admin layout. Status is read from the store once
//! after mount, like the public display sections.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use content::ContentDomain;
use content::blog::BlogPosts;
use leptos::prelude::*;

use crate::state::content::SiteStore;

/// One dashboard card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomainStatus {
    pub domain: ContentDomain,
    pub customized: bool,
}

impl DomainStatus {
    pub fn badge(&self) -> &'static str {
        if self.customized { "Customized" } else { "Default" }
    }
}

/// Status of every domain, in navigation order.
pub fn domain_statuses(store: &SiteStore) -> Vec<DomainStatus> {
    ContentDomain::ALL
        .into_iter()
        .map(|domain| DomainStatus { domain, customized: store.is_customized(domain) })
        .collect()
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let store = expect_context::<SiteStore>();
    let statuses = RwSignal::new(Vec::<DomainStatus>::new());
    let post_count = RwSignal::new(0_usize);
    Effect::new(move || {
        statuses.set(domain_statuses(&store));
        post_count.set(store.load::<BlogPosts>().posts().len());
    });

    view! {
        <div class="admin-page">
            <header class="editor-header">
                <div>
                    <h1 class="editor-header__title">"Dashboard"</h1>
                    <p class="editor-header__summary">"Manage every section of the public site."</p>
                </div>
            </header>
            <div class="dashboard__stats">
                <div class="stat-card">
                    <div class="stat-card__value">{move || post_count.get()}</div>
                    <div class="stat-card__label">"Blog Posts"</div>
                </div>
                <div class="stat-card">
                    <div class="stat-card__value">
                        {move || statuses.with(|s| s.iter().filter(|s| s.customized).count())}
                    </div>
                    <div class="stat-card__label">"Customized Sections"</div>
                </div>
            </div>
            <div class="dashboard__grid">
                {move || {
                    statuses
                        .get()
                        .into_iter()
                        .map(|status| {
                            view! {
                                <a class="card dashboard-card" href=status.domain.admin_path()>
                                    <div class="dashboard-card__header">
                                        <h3 class="card__title">{status.domain.label()}</h3>
                                        <span
                                            class="badge"
                                            class:badge--primary=status.customized
                                            class:badge--outline={!status.customized}
                                        >
                                            {status.badge()}
                                        </span>
                                    </div>
                                    <p class="card__description">{status.domain.summary()}</p>
                                </a>
                            }
                        })
                        .collect_view()
                }}
            </div>
            <div class="dashboard__actions">
                <a class="btn btn--primary" href="/admin/blog">"New Blog Post"</a>
                <a class="btn btn--outline" href="/" target="_blank">"View Site"</a>
            </div>
        </div>
    }
}
