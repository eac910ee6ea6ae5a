//! Persisted bearer-token storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token is the only persisted client state. The session store writes it
//! on login and removes it on logout/expiry; every `ServiceClient` reads it
//! per request. Access is last-writer-wins, which is sound on the
//! single-threaded browser event loop.
//!
//! TRADE-OFFS
//! ==========
//! `LocalTokenStorage` is best-effort browser-only behavior; off-browser it
//! safely no-ops. `MemoryTokenStorage` backs native runs and tests.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::sync::{Mutex, PoisonError};

/// `localStorage` key holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "access_token";

/// Read/write access to the persisted token.
pub trait TokenStorage: Send + Sync {
    fn load(&self) -> Option<String>;
    fn store(&self, token: &str);
    fn clear(&self);
}

/// Token storage backed by the browser's `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalTokenStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStorage for LocalTokenStorage {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .get_item(TOKEN_STORAGE_KEY)
                .ok()
                .flatten()
                .filter(|t| !t.is_empty())
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn store(&self, token: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                if storage.set_item(TOKEN_STORAGE_KEY, token).is_err() {
                    leptos::logging::warn!("failed to persist access token");
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                if storage.remove_item(TOKEN_STORAGE_KEY).is_err() {
                    leptos::logging::warn!("failed to remove persisted access token");
                }
            }
        }
    }
}

/// In-process token storage.
#[derive(Debug, Default)]
pub struct MemoryTokenStorage {
    slot: Mutex<Option<String>>,
}

impl MemoryTokenStorage {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self { slot: Mutex::new(Some(token.into())) }
    }
}

impl TokenStorage for MemoryTokenStorage {
    fn load(&self) -> Option<String> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn store(&self, token: &str) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}
