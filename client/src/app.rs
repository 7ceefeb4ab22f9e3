//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The shell provides two contexts to every route: `RwSignal<AuthState>`
//! (current user, if known) and `RwSignal<ToastState>` (notification queue).
//! No route is gated on a session; the dashboard renders for anyone.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
};

use crate::components::dashboard_layout::DashboardLayout;
use crate::components::toaster::Toaster;
use crate::pages::{
    ai_verification::AiVerificationPage, data_auditing::DataAuditingPage, features::FeaturesPage,
    integrations::IntegrationsPage, login::LoginPage, not_found::NotFoundPage, overview::OverviewPage,
    realtime::RealtimePage, regulatory::RegulatoryPage, reports::ReportsPage, settings::SettingsPage,
    signup::SignupPage, support::SupportPage,
};
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;
use crate::util::routes::AppRoute;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="icon" type="image/svg+xml" href="/logo.svg"/>
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
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState { user: None, loading: true });
    let toasts = RwSignal::new(ToastState::default());
    provide_context(auth);
    provide_context(toasts);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let user = crate::net::api::fetch_current_user().await;
        auth.update(|a| {
            if a.user.is_none() {
                a.user = user;
            }
            a.loading = false;
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/bereans-dashboard.css"/>
        <Title text="BereansTechnology Dashboard"/>

        <Toaster/>
        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=|| view! { <Redirect path=AppRoute::Login.path()/> }/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <ParentRoute path=StaticSegment("dashboard") view=DashboardLayout>
                    <Route path=StaticSegment("") view=OverviewPage/>
                    <Route path=StaticSegment("features") view=FeaturesPage/>
                    <Route path=StaticSegment("auditing") view=DataAuditingPage/>
                    <Route path=StaticSegment("verification") view=AiVerificationPage/>
                    <Route path=StaticSegment("realtime") view=RealtimePage/>
                    <Route path=StaticSegment("regulatory") view=RegulatoryPage/>
                    <Route path=StaticSegment("reports") view=ReportsPage/>
                    <Route path=StaticSegment("integrations") view=IntegrationsPage/>
                    <Route path=StaticSegment("settings") view=SettingsPage/>
                    <Route path=StaticSegment("support") view=SupportPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
