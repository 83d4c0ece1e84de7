//! Browser `localStorage` persistence for the session bearer token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token is the only client-side state that outlives a page load. The
//! auth state writes through a [`TokenStore`] so session transitions can be
//! exercised against an in-memory store in tests.

/// Storage key holding the bearer token.
pub const TOKEN_KEY: &str = "smartplate_token";

/// Persistence for the single session token.
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// Token store backed by `window.localStorage`. Inert during SSR.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageTokens;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStore for LocalStorageTokens {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .get_item(TOKEN_KEY)
                .ok()
                .flatten()
                .filter(|t| !t.is_empty())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn save(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                return;
            };
            let _ = storage.set_item(TOKEN_KEY, token);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(TOKEN_KEY);
            }
        }
    }
}

/// In-memory token store for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryTokens(std::cell::RefCell<Option<String>>);

#[cfg(test)]
impl MemoryTokens {
    pub fn with_token(token: &str) -> Self {
        Self(std::cell::RefCell::new(Some(token.to_owned())))
    }
}

#[cfg(test)]
impl TokenStore for MemoryTokens {
    fn load(&self) -> Option<String> {
        self.0.borrow().clone()
    }

    fn save(&self, token: &str) {
        *self.0.borrow_mut() = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.0.borrow_mut() = None;
    }
}
