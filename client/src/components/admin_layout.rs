//! Admin shell: session guard, sidebar navigation, and the routed editor.
//!
//! SYSTEM CONTEXT
//! ==============
//! Parent route for `/admin/*` (except the login page). Children render only
//! once the session check has succeeded; otherwise the layout redirects to
//! the login page.

#[cfg(test)]
#[path = "admin_layout_test.rs"]
mod admin_layout_test;

use content::ContentDomain;
use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::auth::AuthState;
use crate::util::auth::{install_unauth_redirect, logout};

/// Sidebar entries as `(label, href)`: the dashboard, then one per domain.
pub fn admin_nav() -> Vec<(&'static str, &'static str)> {
    std::iter::once(("Dashboard", "/admin"))
        .chain(ContentDomain::ALL.iter().map(|d| (d.label(), d.admin_path())))
        .collect()
}

#[component]
pub fn AdminLayout() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());
    let pathname = use_location().pathname;
    let sidebar_open = RwSignal::new(false);

    view! {
        <Show
            when=move || auth.get().authenticated
            fallback=move || {
                view! {
                    <div class="admin-page admin-page--pending">
                        <p>{move || if auth.get().loading { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            <div class="admin" class:admin--sidebar-open=move || sidebar_open.get()>
                <aside class="admin__sidebar">
                    <div class="admin__brand">"Admin Panel"</div>
                    <nav class="admin__nav">
                        {admin_nav()
                            .into_iter()
                            .map(|(label, href)| {
                                view! {
                                    <a
                                        class="admin__link"
                                        class:admin__link--active=move || pathname.get() == href
                                        href=href
                                        on:click=move |_| sidebar_open.set(false)
                                    >
                                        {label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </nav>
                    <div class="admin__footer">
                        <a class="btn btn--outline btn--block" href="/" target="_blank">"View Site"</a>
                        <button class="btn btn--block" on:click=move |_| logout(auth)>"Logout"</button>
                    </div>
                </aside>
                <div class="admin__main">
                    <header class="admin__topbar">
                        <button
                            class="btn btn--icon admin__menu"
                            aria-label="Toggle navigation"
                            on:click=move |_| sidebar_open.update(|open| *open = !*open)
                        >
                            "☰"
                        </button>
                    </header>
                    <main class="admin__content">
                        <Outlet/>
                    </main>
                </div>
            </div>
        </Show>
    }
}
