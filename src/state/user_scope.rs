//! Stores whose contents belong to the signed-in user.
//!
//! Logout and a 401-triggered clear both drop the session token; these stores
//! are then emptied so the next user never sees the previous user's data.

#[cfg(test)]
#[path = "user_scope_test.rs"]
mod user_scope_test;

use leptos::prelude::*;

use super::payments::PaymentsStore;
use super::recommendations::RecommendationStore;
use super::session::{SessionState, SessionStore};
use super::subscriptions::SubscriptionStore;

#[derive(Clone, Debug)]
pub struct UserScopedStores {
    pub subscriptions: SubscriptionStore,
    pub payments: PaymentsStore,
    pub recommendations: RecommendationStore,
}

impl UserScopedStores {
    pub fn reset(&self) {
        self.subscriptions.reset();
        self.payments.reset();
        self.recommendations.reset();
    }

    /// Reset when `session` holds no token. Returns whether a reset happened.
    pub fn sync_with(&self, session: &SessionState) -> bool {
        if session.token.is_some() {
            return false;
        }
        self.reset();
        true
    }
}

/// Empty `stores` every time the session ends up without a token.
pub fn reset_on_sign_out(session: &SessionStore, stores: UserScopedStores) {
    let state = session.state();
    Effect::new(move || {
        if state.with(|s| stores.sync_with(s)) {
            leptos::logging::log!("session cleared; dropped user-scoped state");
        }
    });
}
