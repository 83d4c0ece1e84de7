use super::*;
use crate::net::types::{AuthResponse, User};
use crate::util::token_storage::MemoryTokens;

// =============================================================
// Helpers
// =============================================================

fn signed_in(role: Option<Role>, phone_verified: bool) -> AuthState {
    let user = User {
        id: "u-1".to_owned(),
        name: "Ravi".to_owned(),
        email: None,
        picture: None,
        role,
        phone: None,
        phone_verified,
        verification: None,
    };
    let mut state = AuthState::default();
    state.logged_in(AuthResponse { token: "tok".to_owned(), user }, &MemoryTokens::default());
    state
}

/// Fresh boot with no persisted token, before the identity check settles.
fn booting() -> AuthState {
    AuthState::restore(&MemoryTokens::default())
}

fn redirect(path: &str) -> GuardDecision {
    GuardDecision::Redirect(path.to_owned())
}

// =============================================================
// protected_route
// =============================================================

#[test]
fn protected_route_pending_while_loading() {
    let state = booting();
    assert_eq!(protected_route(&state, &[Role::Ngo]), GuardDecision::Pending);
}

#[test]
fn protected_route_redirects_unauthenticated_to_auth() {
    let state = AuthState::default();
    assert_eq!(protected_route(&state, &[Role::Ngo]), redirect("/auth"));
}

#[test]
fn protected_route_renders_for_allowed_role() {
    let state = signed_in(Some(Role::Donor), true);
    assert_eq!(protected_route(&state, &[Role::Donor]), GuardDecision::Render);
}

#[test]
fn protected_route_sends_wrong_role_to_own_dashboard() {
    let state = signed_in(Some(Role::Volunteer), true);
    assert_eq!(protected_route(&state, &[Role::Admin]), redirect("/volunteer"));
}

#[test]
fn protected_route_sends_roleless_user_to_auth() {
    let state = signed_in(None, true);
    assert_eq!(protected_route(&state, &[Role::Ngo]), redirect("/auth"));
}

#[test]
fn protected_route_without_allowed_set_admits_any_user() {
    let state = signed_in(None, false);
    assert_eq!(protected_route(&state, &[]), GuardDecision::Render);
}

#[test]
fn protected_route_after_logout_is_unauthenticated() {
    let store = MemoryTokens::with_token("tok");
    let mut state = signed_in(Some(Role::Ngo), true);
    state.logout(&store);
    assert_eq!(protected_route(&state, &[Role::Ngo]), redirect("/auth"));
}

// =============================================================
// auth_route
// =============================================================

#[test]
fn auth_route_pending_while_loading() {
    let state = booting();
    assert_eq!(auth_route(&state), GuardDecision::Pending);
}

#[test]
fn auth_route_renders_for_anonymous_user() {
    assert_eq!(auth_route(&AuthState::default()), GuardDecision::Render);
}

#[test]
fn auth_route_redirects_onboarded_user_to_dashboard() {
    let state = signed_in(Some(Role::Admin), true);
    assert_eq!(auth_route(&state), redirect("/admin"));
}

#[test]
fn auth_route_renders_while_phone_unverified() {
    let state = signed_in(Some(Role::Ngo), false);
    assert_eq!(auth_route(&state), GuardDecision::Render);
}

#[test]
fn auth_route_renders_while_role_missing() {
    let state = signed_in(None, true);
    assert_eq!(auth_route(&state), GuardDecision::Render);
}
