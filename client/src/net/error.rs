//! API failure classification and user-facing messages.
//!
//! ERROR HANDLING
//! ==============
//! Only the HTTP status and the optional `detail`/`message` payload fields are
//! inspected. Every failure aborts the action that triggered it; none of them
//! are fatal to the app.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

/// Message shown for any 401/403 response.
pub const REAUTH_MESSAGE: &str = "Authentication required. Please log in again.";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The backend answered with a non-2xx status.
    #[error("request failed with status code {status}")]
    Status { status: u16, detail: Option<String> },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The response body did not match the expected schema.
    #[error("invalid response: {0}")]
    Decode(String),
    /// Authenticated call attempted without a token.
    #[error("not signed in")]
    MissingToken,
    /// Browser-only call made during server rendering.
    #[error("not available on server")]
    Unavailable,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ErrorPayload {
    detail: Option<serde_json::Value>,
    message: Option<String>,
}

impl ApiError {
    /// Classify a non-2xx response from its status code and raw body.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        let payload: ErrorPayload = serde_json::from_str(body).unwrap_or_default();
        let detail = payload
            .detail
            .as_ref()
            .and_then(detail_text)
            .filter(|text| !text.trim().is_empty())
            .or(payload.message.filter(|text| !text.trim().is_empty()));
        Self::Status { status, detail }
    }

    /// True for 401/403 responses and for calls made without a token.
    #[must_use]
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Status { status: 401 | 403, .. } | Self::MissingToken)
    }

    /// Message to surface in a toast. `fallback` is the action's generic text.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        if self.is_auth() {
            return REAUTH_MESSAGE.to_owned();
        }
        match self {
            Self::Status { detail: Some(detail), .. } => detail.clone(),
            _ => fallback.to_owned(),
        }
    }

    /// Payload-carried detail only, with `fallback` for everything else.
    ///
    /// The onboarding steps surface backend detail verbatim but never the
    /// re-authentication text.
    #[must_use]
    pub fn detail_or(&self, fallback: &str) -> String {
        match self {
            Self::Status { detail: Some(detail), .. } => detail.clone(),
            _ => fallback.to_owned(),
        }
    }
}

/// `detail` is either a plain string or a list of `{ "msg": ... }` validation entries.
fn detail_text(detail: &serde_json::Value) -> Option<String> {
    match detail {
        serde_json::Value::String(text) => Some(text.clone()),
        serde_json::Value::Array(entries) => {
            let messages: Vec<&str> = entries
                .iter()
                .filter_map(|entry| entry.get("msg").and_then(serde_json::Value::as_str))
                .collect();
            if messages.is_empty() { None } else { Some(messages.join("; ")) }
        }
        _ => None,
    }
}
