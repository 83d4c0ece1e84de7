//! Route wrappers that gate pages on the auth context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both guards re-evaluate whenever `AuthState` changes. While the boot-time
//! identity check is in flight they render a loading placeholder; redirects
//! replace the current history entry.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::state::auth::AuthState;
use crate::util::auth::{GuardDecision, auth_route, install_guard_redirect, protected_route};

/// Render `children` only for signed-in users whose role is in `allowed`.
#[component]
pub fn ProtectedRoute(allowed: &'static [Role], children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_guard_redirect(auth, move |s| protected_route(s, allowed), use_navigate());

    view! {
        <Show
            when=move || auth.with(|s| protected_route(s, allowed)) == GuardDecision::Render
            fallback=|| view! { <LoadingScreen /> }
        >
            {children()}
        </Show>
    }
}

/// Render the auth page unless the user is already fully onboarded.
#[component]
pub fn AuthRoute(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_guard_redirect(auth, auth_route, use_navigate());

    view! {
        <Show
            when=move || auth.with(auth_route) == GuardDecision::Render
            fallback=|| view! { <LoadingScreen /> }
        >
            {children()}
        </Show>
    }
}

#[component]
fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen">
            <span class="loading-screen__spinner" aria-hidden="true"></span>
            <p>"Loading..."</p>
        </div>
    }
}
