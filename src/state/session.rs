//! Auth-session store for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the route guard and user-aware pages. The store is created once in
//! `App`, hydrated from the persisted token, and provided via context; there
//! is no global session.
//!
//! INVARIANTS
//! ==========
//! - `user` is only set while `token` is set.
//! - `is_authenticated` means "a token is present"; expiry is a separate
//!   check made by the guard and by `fetch_user`.
//! - Token decode failures read as expired, never as errors.
//!
//! ERROR HANDLING
//! ==============
//! Actions log failures and report `bool`. A 401 from `/users/me` clears the
//! session; any other failure leaves it as it was.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::net::api::{CURRENT_USER_PATH, LOGIN_PATH, REGISTER_PATH};
use crate::net::error::ApiError;
use crate::net::http::{ServiceClient, to_body};
use crate::net::types::{Credentials, LoginResponse, Registration, User};
use crate::util::storage::TokenStorage;
use crate::util::{time, token};

/// Current token and profile.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<User>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Session classification used by the route guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Anonymous,
    AuthenticatedValid,
    AuthenticatedExpired,
}

/// Session store: state signal plus the user-service client and token storage.
#[derive(Clone)]
pub struct SessionStore {
    state: RwSignal<SessionState>,
    api: ServiceClient,
    storage: Arc<dyn TokenStorage>,
}

impl SessionStore {
    /// Create the store, picking up a token persisted by an earlier visit.
    pub fn new(api: ServiceClient, storage: Arc<dyn TokenStorage>) -> Self {
        let token = storage.load();
        Self { state: RwSignal::new(SessionState { token, user: None }), api, storage }
    }

    pub fn state(&self) -> ReadSignal<SessionState> {
        self.state.read_only()
    }

    pub fn token(&self) -> Option<String> {
        self.state.with(|s| s.token.clone())
    }

    pub fn user(&self) -> Option<User> {
        self.state.with(|s| s.user.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(SessionState::is_authenticated)
    }

    /// True when there is no token, it cannot be decoded, or it has expired.
    pub fn is_token_expired(&self) -> bool {
        self.is_token_expired_at(time::now_millis())
    }

    pub fn is_token_expired_at(&self, now_ms: i64) -> bool {
        self.state.with(|s| token::is_expired_at(s.token.as_deref(), now_ms))
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase_at(time::now_millis())
    }

    pub fn phase_at(&self, now_ms: i64) -> SessionPhase {
        if !self.is_authenticated() {
            SessionPhase::Anonymous
        } else if self.is_token_expired_at(now_ms) {
            SessionPhase::AuthenticatedExpired
        } else {
            SessionPhase::AuthenticatedValid
        }
    }

    /// Exchange credentials for a token, persist it, then load the profile.
    pub async fn login(&self, email: &str, password: &str) -> bool {
        let credentials = Credentials { email: email.to_owned(), password: password.to_owned() };
        let result = match to_body(&credentials) {
            Ok(body) => self.api.post::<LoginResponse>(LOGIN_PATH, Some(body)).await,
            Err(e) => Err(e),
        };
        match result {
            Ok(resp) => {
                let access_token = resp.access_token;
                self.storage.store(&access_token);
                self.state.update(|s| s.token = Some(access_token));
                self.fetch_user().await;
                true
            }
            Err(e) => {
                leptos::logging::error!("login failed: {e}");
                false
            }
        }
    }

    /// Create an account. Does not sign in.
    pub async fn register(&self, registration: &Registration) -> bool {
        let result = match to_body(registration) {
            Ok(body) => self.api.post_unit(REGISTER_PATH, Some(body)).await,
            Err(e) => Err(e),
        };
        match result {
            Ok(()) => true,
            Err(e) => {
                leptos::logging::error!("registration failed: {e}");
                false
            }
        }
    }

    /// Load `/users/me` for the current token.
    ///
    /// Skips the network and clears the session when the token is absent or
    /// expired.
    pub async fn fetch_user(&self) {
        if self.state.with_untracked(|s| token::is_expired_at(s.token.as_deref(), time::now_millis())) {
            self.clear();
            return;
        }
        match self.api.get::<User>(CURRENT_USER_PATH).await {
            Ok(user) => self.state.update(|s| {
                if s.token.is_some() {
                    s.user = Some(user);
                }
            }),
            Err(ApiError::Unauthorized) => {
                leptos::logging::warn!("profile request unauthorized; clearing session");
                self.clear();
            }
            Err(e) => leptos::logging::error!("failed to fetch user: {e}"),
        }
    }

    /// Drop the token and profile, in memory and in storage.
    pub fn logout(&self) {
        self.clear();
    }

    fn clear(&self) {
        self.state.set(SessionState::default());
        self.storage.clear();
    }
}
