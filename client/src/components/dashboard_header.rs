//! Header bar shared by the role dashboards.

use leptos::prelude::*;

use crate::net::types::Role;
use crate::state::auth::AuthState;
use crate::util::session;

#[component]
pub fn DashboardHeader(#[prop(into)] title: String, #[prop(optional)] children: Option<Children>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let user_name = move || auth.with(|s| s.user.as_ref().map(|u| u.name.clone()).unwrap_or_default());
    let role_label = move || auth.with(|s| s.role().map_or("", Role::title));

    // The route guard notices the cleared session and redirects to /auth.
    let on_logout = move |_| session::logout(auth);

    view! {
        <header class="dashboard-page__header toolbar">
            <span class="toolbar__brand">"SmartPlate"</span>
            <span class="toolbar__divider" aria-hidden="true"></span>
            <span class="toolbar__title">{title}</span>
            <span class="toolbar__spacer"></span>
            {children.map(|c| c())}
            <span class="toolbar__self">
                {user_name}
                " ("
                <span class="toolbar__self-method">{role_label}</span>
                ")"
            </span>
            <button class="btn toolbar__logout" on:click=on_logout title="Logout">
                "Logout"
            </button>
        </header>
    }
}
