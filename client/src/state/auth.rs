//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards, the auth page, and every authenticated API call.
//! All session mutations go through the methods here; callers persist the
//! token by passing a [`TokenStore`].
//!
//! DESIGN
//! ======
//! `checked_token` records which token the identity check has already been
//! settled for. A token that arrives with its own user record (login, role
//! selection) is settled immediately, so the boot-time `/auth/me` call never
//! races a fresh login.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::error::ApiError;
use crate::net::types::{AuthResponse, Role, User};
use crate::util::token_storage::TokenStore;

/// Authentication state tracking the current user, token, and loading status.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub loading: bool,
    checked_token: Option<String>,
}

impl AuthState {
    /// Boot state: picks up a persisted token and stays loading until the
    /// identity check (or its absence) settles.
    pub fn restore(store: &impl TokenStore) -> Self {
        Self { user: None, token: store.load(), loading: true, checked_token: None }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().and_then(|u| u.role)
    }

    /// True while [`Self::begin_identity_check`] still has work to do.
    #[must_use]
    pub fn needs_identity_check(&self) -> bool {
        match &self.token {
            None => self.loading,
            Some(token) => self.checked_token.as_ref() != Some(token),
        }
    }

    /// Claim the identity check for the current token.
    ///
    /// Returns the token to check, or `None` if there is no token or it has
    /// already been settled. A missing token settles the boot immediately.
    pub fn begin_identity_check(&mut self) -> Option<String> {
        let Some(token) = self.token.clone() else {
            self.loading = false;
            return None;
        };
        if self.checked_token.as_deref() == Some(token.as_str()) {
            return None;
        }
        self.checked_token = Some(token.clone());
        self.loading = true;
        Some(token)
    }

    /// Apply a successful `/auth/me` for `token`. Stale results are ignored.
    pub fn identity_confirmed(&mut self, token: &str, user: User) -> bool {
        if self.token.as_deref() != Some(token) {
            return false;
        }
        self.user = Some(user);
        self.loading = false;
        true
    }

    /// Apply a failed `/auth/me` for `token`.
    ///
    /// 401/403 destroys the session including the persisted token; other
    /// failures leave the token for the next boot but keep the user signed out.
    pub fn identity_failed(&mut self, token: &str, err: &ApiError, store: &impl TokenStore) {
        if self.token.as_deref() != Some(token) {
            return;
        }
        if err.is_auth() {
            self.logout(store);
        } else {
            self.user = None;
            self.loading = false;
        }
    }

    /// Install the session from an OAuth exchange response.
    pub fn logged_in(&mut self, response: AuthResponse, store: &impl TokenStore) {
        self.install(response, store);
    }

    /// Mark the cached user's phone as verified.
    pub fn phone_verified(&mut self, phone: &str) {
        if let Some(user) = self.user.as_mut() {
            user.phone = Some(phone.to_owned());
            user.phone_verified = true;
        }
    }

    /// Install the re-issued token and user from a role selection.
    pub fn role_selected(&mut self, response: AuthResponse, store: &impl TokenStore) {
        self.install(response, store);
    }

    /// Drop the session and its persisted token.
    pub fn logout(&mut self, store: &impl TokenStore) {
        store.clear();
        self.user = None;
        self.token = None;
        self.checked_token = None;
        self.loading = false;
    }

    fn install(&mut self, response: AuthResponse, store: &impl TokenStore) {
        store.save(&response.token);
        self.checked_token = Some(response.token.clone());
        self.token = Some(response.token);
        self.user = Some(response.user);
        self.loading = false;
    }
}
