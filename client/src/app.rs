//! Root application component with routing and context providers.

use content::theme::ThemeColors;
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::admin_layout::AdminLayout;
use crate::components::notice_tray::NoticeTray;
use crate::pages::{
    about_editor::AboutEditorPage, blog_editor::BlogEditorPage, contact_editor::ContactEditorPage,
    dashboard::DashboardPage, footer_editor::FooterEditorPage, home_editor::HomeEditorPage, login::LoginPage,
    portfolio_editor::PortfolioEditorPage, sections_editor::SectionsEditorPage, services_editor::ServicesEditorPage,
    site::SitePage, theme_editor::ThemeEditorPage,
};
use crate::state::{auth::AuthState, content::SiteStore, notice::NoticeState};
use crate::util::{auth::refresh_session, theme};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the content store, auth state, and notice tray, applies the
/// saved theme once mounted, and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = SiteStore::default();
    let auth = RwSignal::new(AuthState::default());
    let notices = RwSignal::new(NoticeState::default());

    provide_context(store);
    provide_context(auth);
    provide_context(notices);

    Effect::new(move || {
        theme::apply(&store.load::<ThemeColors>());
        refresh_session(auth);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/agency-site.css"/>
        <Title text="Creative Agency"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=SitePage/>
                <Route path=(StaticSegment("admin"), StaticSegment("login")) view=LoginPage/>
                <ParentRoute path=StaticSegment("admin") view=AdminLayout>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("home") view=HomeEditorPage/>
                    <Route path=StaticSegment("services") view=ServicesEditorPage/>
                    <Route path=StaticSegment("portfolio") view=PortfolioEditorPage/>
                    <Route path=StaticSegment("about") view=AboutEditorPage/>
                    <Route path=StaticSegment("contact") view=ContactEditorPage/>
                    <Route path=StaticSegment("blog") view=BlogEditorPage/>
                    <Route path=StaticSegment("footer") view=FooterEditorPage/>
                    <Route path=StaticSegment("theme") view=ThemeEditorPage/>
                    <Route path=StaticSegment("sections") view=SectionsEditorPage/>
                </ParentRoute>
            </Routes>
        </Router>
        <NoticeTray/>
    }
}
