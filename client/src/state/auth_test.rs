use super::*;
use crate::util::token_storage::MemoryTokens;

// =============================================================
// Helpers
// =============================================================

fn make_user(role: Option<Role>, phone_verified: bool) -> User {
    User {
        id: "u-1".to_owned(),
        name: "Asha".to_owned(),
        email: Some("asha@example.com".to_owned()),
        picture: None,
        role,
        phone: None,
        phone_verified,
        verification: None,
    }
}

fn auth_response(token: &str, user: User) -> AuthResponse {
    AuthResponse { token: token.to_owned(), user }
}

// =============================================================
// Boot + identity check
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.is_authenticated());
    assert!(!state.loading);
}

#[test]
fn restore_without_token_settles_on_first_check() {
    let store = MemoryTokens::default();
    let mut state = AuthState::restore(&store);
    assert!(state.loading);
    assert_eq!(state.begin_identity_check(), None);
    assert!(!state.loading);
}

#[test]
fn restore_with_token_checks_it_once() {
    let store = MemoryTokens::with_token("tok-1");
    let mut state = AuthState::restore(&store);
    assert_eq!(state.begin_identity_check().as_deref(), Some("tok-1"));
    assert_eq!(state.begin_identity_check(), None);
    assert!(state.loading);
}

#[test]
fn needs_identity_check_tracks_settlement() {
    let store = MemoryTokens::with_token("tok-1");
    let mut state = AuthState::restore(&store);
    assert!(state.needs_identity_check());
    state.begin_identity_check();
    assert!(!state.needs_identity_check());

    let mut anonymous = AuthState::restore(&MemoryTokens::default());
    assert!(anonymous.needs_identity_check());
    anonymous.begin_identity_check();
    assert!(!anonymous.needs_identity_check());
}

#[test]
fn identity_confirmed_sets_user_and_stops_loading() {
    let store = MemoryTokens::with_token("tok-1");
    let mut state = AuthState::restore(&store);
    let token = state.begin_identity_check().unwrap();
    assert!(state.identity_confirmed(&token, make_user(Some(Role::Donor), true)));
    assert!(!state.loading);
    assert_eq!(state.role(), Some(Role::Donor));
    assert!(state.user.as_ref().unwrap().phone_verified);
}

#[test]
fn identity_confirmed_for_stale_token_is_ignored() {
    let store = MemoryTokens::with_token("tok-1");
    let mut state = AuthState::restore(&store);
    let token = state.begin_identity_check().unwrap();
    state.logged_in(auth_response("tok-2", make_user(None, false)), &store);
    assert!(!state.identity_confirmed(&token, make_user(Some(Role::Admin), true)));
    assert_eq!(state.token.as_deref(), Some("tok-2"));
    assert_eq!(state.role(), None);
}

#[test]
fn identity_failed_with_401_clears_session_and_store() {
    let store = MemoryTokens::with_token("tok-1");
    let mut state = AuthState::restore(&store);
    let token = state.begin_identity_check().unwrap();
    state.identity_failed(&token, &ApiError::Status { status: 401, detail: None }, &store);
    assert!(state.token.is_none());
    assert!(state.user.is_none());
    assert!(!state.loading);
    assert_eq!(store.load(), None);
}

#[test]
fn identity_failed_with_network_error_keeps_persisted_token() {
    let store = MemoryTokens::with_token("tok-1");
    let mut state = AuthState::restore(&store);
    let token = state.begin_identity_check().unwrap();
    state.identity_failed(&token, &ApiError::Network("offline".to_owned()), &store);
    assert!(!state.is_authenticated());
    assert!(!state.loading);
    assert_eq!(store.load().as_deref(), Some("tok-1"));
    assert_eq!(state.begin_identity_check(), None);
}

// =============================================================
// Login lifecycle
// =============================================================

#[test]
fn logged_in_persists_token_and_skips_identity_check() {
    let store = MemoryTokens::default();
    let mut state = AuthState::restore(&store);
    state.begin_identity_check();
    state.logged_in(auth_response("tok-new", make_user(None, false)), &store);

    assert_eq!(store.load().as_deref(), Some("tok-new"));
    assert_eq!(state.token.as_deref(), Some("tok-new"));
    assert!(state.is_authenticated());
    assert_eq!(state.begin_identity_check(), None);
    assert!(!state.user.as_ref().unwrap().phone_verified);
}

#[test]
fn phone_verified_updates_cached_user() {
    let store = MemoryTokens::default();
    let mut state = AuthState::default();
    state.logged_in(auth_response("tok-1", make_user(None, false)), &store);
    state.phone_verified("9876543210");

    let user = state.user.as_ref().unwrap();
    assert!(user.phone_verified);
    assert_eq!(user.phone.as_deref(), Some("9876543210"));
    assert_eq!(state.role(), None);
}

#[test]
fn phone_verified_without_user_is_noop() {
    let mut state = AuthState::default();
    state.phone_verified("9876543210");
    assert!(state.user.is_none());
}

#[test]
fn role_selected_replaces_token_and_user() {
    let store = MemoryTokens::default();
    let mut state = AuthState::default();
    state.logged_in(auth_response("tok-1", make_user(None, true)), &store);
    state.role_selected(auth_response("tok-2", make_user(Some(Role::Volunteer), true)), &store);

    assert_eq!(store.load().as_deref(), Some("tok-2"));
    assert_eq!(state.token.as_deref(), Some("tok-2"));
    assert_eq!(state.role(), Some(Role::Volunteer));
    assert_eq!(state.begin_identity_check(), None);
}

#[test]
fn logout_clears_persisted_token_and_user() {
    let store = MemoryTokens::default();
    let mut state = AuthState::default();
    state.logged_in(auth_response("tok-1", make_user(Some(Role::Ngo), true)), &store);
    state.logout(&store);

    assert_eq!(store.load(), None);
    assert!(state.user.is_none());
    assert!(state.token.is_none());
    assert!(!state.loading);
    assert!(!state.is_authenticated());
}
