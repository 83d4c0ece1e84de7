//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::route_guard::{AuthRoute, ProtectedRoute};
use crate::components::toaster::Toaster;
use crate::config::{BACKEND_URL_META, ClientConfig, GOOGLE_CLIENT_ID_META};
use crate::net::types::Role;
use crate::pages::{
    admin::AdminDashboard, auth::AuthPage, donor::DonorDashboard, landing::LandingPage, ngo::NgoDashboard,
    volunteer::VolunteerDashboard,
};
use crate::state::{auth::AuthState, toast::ToastState};
use crate::util::session::install_identity_check;
use crate::util::token_storage::LocalStorageTokens;

const NGO_ONLY: &[Role] = &[Role::Ngo];
const DONOR_ONLY: &[Role] = &[Role::Donor];
const VOLUNTEER_ONLY: &[Role] = &[Role::Volunteer];
const ADMIN_ONLY: &[Role] = &[Role::Admin];

/// HTML shell rendered on the server for SSR + hydration.
///
/// The host provides [`ClientConfig`] as context; it is written into meta
/// tags so the hydrated app reads the same values.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_default();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=BACKEND_URL_META content=config.backend_url/>
                <meta name=GOOGLE_CLIENT_ID_META content=config.google_client_id/>
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
/// Provides the auth, toast, and config contexts, starts the identity check
/// for a persisted token, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = use_context::<ClientConfig>().unwrap_or_else(ClientConfig::from_document);
    let auth = RwSignal::new(AuthState::restore(&LocalStorageTokens));
    let toasts = RwSignal::new(ToastState::default());

    provide_context(config.clone());
    provide_context(auth);
    provide_context(toasts);

    install_identity_check(auth, config);

    view! {
        <Stylesheet id="leptos" href="/pkg/smartplate.css"/>
        <Title text="SmartPlate"/>

        <Router>
            <main class="app">
                <Routes fallback=|| view! { <Redirect path="/"/> }>
                    <Route path=StaticSegment("") view=LandingPage/>
                    <Route path=StaticSegment("auth") view=|| view! { <AuthRoute><AuthPage/></AuthRoute> }/>
                    <Route
                        path=(StaticSegment("auth"), StaticSegment("google"))
                        view=|| view! { <AuthRoute><AuthPage/></AuthRoute> }
                    />
                    <Route
                        path=StaticSegment("ngo")
                        view=|| view! { <ProtectedRoute allowed=NGO_ONLY><NgoDashboard/></ProtectedRoute> }
                    />
                    <Route
                        path=StaticSegment("donor")
                        view=|| view! { <ProtectedRoute allowed=DONOR_ONLY><DonorDashboard/></ProtectedRoute> }
                    />
                    <Route
                        path=StaticSegment("volunteer")
                        view=|| view! { <ProtectedRoute allowed=VOLUNTEER_ONLY><VolunteerDashboard/></ProtectedRoute> }
                    />
                    <Route
                        path=StaticSegment("admin")
                        view=|| view! { <ProtectedRoute allowed=ADMIN_ONLY><AdminDashboard/></ProtectedRoute> }
                    />
                </Routes>
            </main>
            <Toaster/>
        </Router>
    }
}
