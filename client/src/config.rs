//! Runtime configuration handed from the host process to the browser.
//!
//! The host provides [`ClientConfig`] as Leptos context while rendering and
//! writes the same values into `<meta>` tags of the shell so the hydrated app
//! can read them back without a build-time rebuild.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::net::api::Api;

pub const BACKEND_URL_META: &str = "smartplate:backend-url";
pub const GOOGLE_CLIENT_ID_META: &str = "smartplate:google-client-id";

/// Backend base URL and OAuth client identifier.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub backend_url: String,
    pub google_client_id: String,
}

impl ClientConfig {
    #[must_use]
    pub fn new(backend_url: &str, google_client_id: &str) -> Self {
        Self {
            backend_url: backend_url.trim().trim_end_matches('/').to_owned(),
            google_client_id: google_client_id.trim().to_owned(),
        }
    }

    /// Read the values the host wrote into the document head.
    #[must_use]
    pub fn from_document() -> Self {
        #[cfg(feature = "hydrate")]
        {
            Self::new(&read_meta(BACKEND_URL_META), &read_meta(GOOGLE_CLIENT_ID_META))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }

    /// API handle for this backend carrying `token`.
    #[must_use]
    pub fn api(&self, token: Option<String>) -> Api {
        Api::new(&self.backend_url, token)
    }
}

#[cfg(feature = "hydrate")]
fn read_meta(name: &str) -> String {
    use wasm_bindgen::JsCast as _;

    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.query_selector(&format!("meta[name=\"{name}\"]")).ok().flatten())
        .and_then(|el| el.dyn_into::<web_sys::HtmlMetaElement>().ok())
        .map(|meta| meta.content())
        .unwrap_or_default()
}
