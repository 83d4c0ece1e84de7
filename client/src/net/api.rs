//! REST API helpers for communicating with the SmartPlate backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call resolves to [`ApiError::Unavailable`] since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses are classified by [`ApiError::from_response`]; callers
//! turn them into toast text with [`ApiError::user_message`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{
    AuthResponse, CreateFulfillmentPayload, CreateRequestPayload, FoodRequest, Fulfillment, Role, User,
};
#[cfg(feature = "hydrate")]
use super::types::UploadResponse;

/// Which moderation queue an admin action targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModerationQueue {
    Requests,
    Fulfillments,
}

impl ModerationQueue {
    fn segment(self) -> &'static str {
        match self {
            Self::Requests => "requests",
            Self::Fulfillments => "fulfillments",
        }
    }
}

/// Admin decision on a pending item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject,
}

impl Decision {
    fn segment(self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Reject => "reject",
        }
    }
}

/// Thin handle over the backend base URL and the current bearer token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Api {
    base_url: String,
    token: Option<String>,
}

#[derive(Serialize)]
struct CredentialBody<'a> {
    credential: &'a str,
}

#[derive(Serialize)]
struct VerifyPhoneBody<'a> {
    phone: &'a str,
    otp: &'a str,
}

#[derive(Serialize)]
struct SelectRoleBody {
    role: Role,
}

impl Api {
    #[must_use]
    pub fn new(base_url: &str, token: Option<String>) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_owned(), token }
    }

    /// Absolute URL for an `/api`-relative path such as `/auth/me`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/api{path}", self.base_url)
    }

    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    fn bearer(&self) -> Result<String, ApiError> {
        self.token
            .as_deref()
            .filter(|t| !t.is_empty())
            .map(|t| format!("Bearer {t}"))
            .ok_or(ApiError::MissingToken)
    }

    // =========================================================================
    // AUTH
    // =========================================================================

    /// Exchange a Google ID credential for a session via `POST /api/auth/google`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or is rejected.
    pub async fn login_with_google(&self, credential: &str) -> Result<AuthResponse, ApiError> {
        self.post_json("/auth/google", &CredentialBody { credential }, false).await
    }

    /// Confirm the phone number with a one-time passcode.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the code is rejected.
    pub async fn verify_phone(&self, phone: &str, otp: &str) -> Result<serde_json::Value, ApiError> {
        self.post_json("/auth/verify-phone", &VerifyPhoneBody { phone, otp }, true).await
    }

    /// Pick the account role. The response carries a re-issued token.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or is rejected.
    pub async fn select_role(&self, role: Role) -> Result<AuthResponse, ApiError> {
        self.post_json("/auth/select-role", &SelectRoleBody { role }, true).await
    }

    /// Fetch the user behind the current token from `GET /api/auth/me`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`]; 401/403 means the token is no longer valid.
    pub async fn fetch_me(&self) -> Result<User, ApiError> {
        self.get_json("/auth/me").await
    }

    // =========================================================================
    // REQUESTS + FULFILLMENTS
    // =========================================================================

    /// Create a food request via `POST /api/requests`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or is rejected.
    pub async fn create_request(&self, payload: &CreateRequestPayload) -> Result<serde_json::Value, ApiError> {
        self.post_json("/requests", payload, true).await
    }

    /// Requests posted by the signed-in NGO.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    pub async fn my_requests(&self) -> Result<Vec<FoodRequest>, ApiError> {
        self.get_json("/requests/mine").await
    }

    /// Approved requests that still need donations.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    pub async fn available_requests(&self) -> Result<Vec<FoodRequest>, ApiError> {
        self.get_json("/requests/available").await
    }

    /// Create a fulfillment via `POST /api/fulfillments`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or is rejected.
    pub async fn create_fulfillment(
        &self,
        payload: &CreateFulfillmentPayload,
    ) -> Result<serde_json::Value, ApiError> {
        self.post_json("/fulfillments", payload, true).await
    }

    /// Donations made by the signed-in donor.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    pub async fn my_fulfillments(&self) -> Result<Vec<Fulfillment>, ApiError> {
        self.get_json("/fulfillments/mine").await
    }

    // =========================================================================
    // VOLUNTEER + ADMIN
    // =========================================================================

    /// Fulfillments that asked for volunteer pickup.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    pub async fn volunteer_deliveries(&self) -> Result<Vec<Fulfillment>, ApiError> {
        self.get_json("/volunteer/deliveries").await
    }

    /// Claim a delivery for the signed-in volunteer.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or is rejected.
    pub async fn accept_delivery(&self, fulfillment_id: &str) -> Result<serde_json::Value, ApiError> {
        self.post_json(&delivery_accept_path(fulfillment_id), &serde_json::json!({}), true)
            .await
    }

    /// Requests waiting for admin approval.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    pub async fn pending_requests(&self) -> Result<Vec<FoodRequest>, ApiError> {
        self.get_json("/admin/requests/pending").await
    }

    /// Fulfillments waiting for admin approval.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    pub async fn pending_fulfillments(&self) -> Result<Vec<Fulfillment>, ApiError> {
        self.get_json("/admin/fulfillments/pending").await
    }

    /// Approve or reject a pending request or fulfillment.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or is rejected.
    pub async fn moderate(
        &self,
        queue: ModerationQueue,
        id: &str,
        decision: Decision,
    ) -> Result<serde_json::Value, ApiError> {
        self.post_json(&moderation_path(queue, id, decision), &serde_json::json!({}), true)
            .await
    }

    // =========================================================================
    // UPLOAD
    // =========================================================================

    /// Upload a photo as multipart field `file` via `POST /api/upload`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the form cannot be built or the upload fails.
    #[cfg(feature = "hydrate")]
    pub async fn upload_file(&self, file: &web_sys::File) -> Result<UploadResponse, ApiError> {
        let form = web_sys::FormData::new().map_err(|_| ApiError::Network("form data unavailable".to_owned()))?;
        form.append_with_blob_and_filename("file", file, &file.name())
            .map_err(|_| ApiError::Network("could not attach file".to_owned()))?;
        let request = gloo_net::http::Request::post(&self.endpoint("/upload"))
            .header("Authorization", &self.bearer()?)
            .body(form)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(request).await
    }

    // =========================================================================
    // TRANSPORT
    // =========================================================================

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = gloo_net::http::Request::get(&self.endpoint(path))
                .header("Authorization", &self.bearer()?)
                .build()
                .map_err(|e| ApiError::Network(e.to_string()))?;
            read_json(request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            Err(ApiError::Unavailable)
        }
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        authenticated: bool,
    ) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let mut builder = gloo_net::http::Request::post(&self.endpoint(path));
            if authenticated {
                builder = builder.header("Authorization", &self.bearer()?);
            }
            let request = builder.json(body).map_err(|e| ApiError::Network(e.to_string()))?;
            read_json(request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, body, authenticated);
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
async fn read_json<T: DeserializeOwned>(request: gloo_net::http::Request) -> Result<T, ApiError> {
    let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        let err = ApiError::from_response(resp.status(), &body);
        log::warn!("{} {}: {err}", resp.status(), resp.url());
        return Err(err);
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

fn delivery_accept_path(fulfillment_id: &str) -> String {
    format!("/volunteer/deliveries/{fulfillment_id}/accept")
}

fn moderation_path(queue: ModerationQueue, id: &str, decision: Decision) -> String {
    format!("/admin/{}/{id}/{}", queue.segment(), decision.segment())
}
