//! Route guard decisions and the redirect effect shared by guarded routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ProtectedRoute` and `AuthRoute` evaluate the decisions here against the
//! auth context on every change and navigate with `replace` when told to.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::types::Role;
use crate::state::auth::AuthState;

/// Login/onboarding route.
pub const AUTH_PATH: &str = "/auth";

/// Outcome of evaluating a guard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Auth is still loading; show a placeholder.
    Pending,
    Render,
    Redirect(String),
}

/// Guard for role-gated dashboards. An empty `allowed` set admits any signed-in user.
#[must_use]
pub fn protected_route(state: &AuthState, allowed: &[Role]) -> GuardDecision {
    if state.loading {
        return GuardDecision::Pending;
    }
    if !state.is_authenticated() {
        return GuardDecision::Redirect(AUTH_PATH.to_owned());
    }
    let role = state.role();
    if !allowed.is_empty() && !role.is_some_and(|r| allowed.contains(&r)) {
        return GuardDecision::Redirect(role.map_or_else(|| AUTH_PATH.to_owned(), Role::dashboard_path));
    }
    GuardDecision::Render
}

/// Guard for the auth page: fully onboarded users go straight to their dashboard.
#[must_use]
pub fn auth_route(state: &AuthState) -> GuardDecision {
    if state.loading {
        return GuardDecision::Pending;
    }
    match state.user.as_ref() {
        Some(user) if user.phone_verified => match user.role {
            Some(role) => GuardDecision::Redirect(role.dashboard_path()),
            None => GuardDecision::Render,
        },
        _ => GuardDecision::Render,
    }
}

/// Navigate (replacing history) whenever `decide` yields a redirect.
pub fn install_guard_redirect<D, F>(auth: RwSignal<AuthState>, decide: D, navigate: F)
where
    D: Fn(&AuthState) -> GuardDecision + 'static,
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let GuardDecision::Redirect(path) = auth.with(&decide) {
            navigate(&path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
