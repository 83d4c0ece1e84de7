//! Session actions: the async side of the auth context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each action is one network call. Success mutates `AuthState` (and the
//! persisted token); failure returns the error and leaves the state as it was.

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::error::ApiError;
use crate::net::types::{Role, User};
use crate::state::auth::AuthState;
use crate::util::token_storage::LocalStorageTokens;

/// API handle carrying the current session token.
pub fn api(auth: RwSignal<AuthState>, config: &ClientConfig) -> crate::net::api::Api {
    config.api(auth.with_untracked(|s| s.token.clone()))
}

/// Run the `/auth/me` identity check whenever the token changes to one that
/// has not been settled yet.
pub fn install_identity_check(auth: RwSignal<AuthState>, config: ClientConfig) {
    Effect::new(move || {
        if !auth.with(AuthState::needs_identity_check) {
            return;
        }
        let mut claimed = None;
        auth.update(|s| claimed = s.begin_identity_check());
        let Some(token) = claimed else {
            return;
        };
        let api = config.api(Some(token.clone()));
        leptos::task::spawn_local(async move {
            match api.fetch_me().await {
                Ok(user) => {
                    auth.update(|s| {
                        s.identity_confirmed(&token, user);
                    });
                }
                Err(err) => {
                    #[cfg(feature = "hydrate")]
                    log::warn!("identity check failed: {err}");
                    auth.update(|s| s.identity_failed(&token, &err, &LocalStorageTokens));
                }
            }
        });
    });
}

/// Exchange a Google credential for a session.
///
/// # Errors
///
/// Returns the [`ApiError`] from `POST /api/auth/google`.
pub async fn login(auth: RwSignal<AuthState>, config: &ClientConfig, credential: &str) -> Result<User, ApiError> {
    let response = config.api(None).login_with_google(credential).await?;
    let user = response.user.clone();
    auth.update(|s| s.logged_in(response, &LocalStorageTokens));
    Ok(user)
}

/// Verify the phone number with its OTP.
///
/// # Errors
///
/// Returns the [`ApiError`] from `POST /api/auth/verify-phone`.
pub async fn verify_phone(
    auth: RwSignal<AuthState>,
    config: &ClientConfig,
    phone: &str,
    otp: &str,
) -> Result<(), ApiError> {
    api(auth, config).verify_phone(phone, otp).await?;
    auth.update(|s| s.phone_verified(phone));
    Ok(())
}

/// Pick the account role and install the re-issued token.
///
/// # Errors
///
/// Returns the [`ApiError`] from `POST /api/auth/select-role`.
pub async fn select_role(auth: RwSignal<AuthState>, config: &ClientConfig, role: Role) -> Result<User, ApiError> {
    let response = api(auth, config).select_role(role).await?;
    let user = response.user.clone();
    auth.update(|s| s.role_selected(response, &LocalStorageTokens));
    Ok(user)
}

/// Clear the session locally. There is no server-side revocation.
pub fn logout(auth: RwSignal<AuthState>) {
    auth.update(|s| s.logout(&LocalStorageTokens));
}
