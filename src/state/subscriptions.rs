//! Subscription store: the user's subscriptions and the active one.
//!
//! DESIGN
//! ======
//! Mutations never patch local state. After a successful create, cancel or
//! extend, the active-only list is fetched again so the view always reflects
//! what the subscription service holds, at the cost of a second request.
//! `active_subscription` is only ever taken from an active-only fetch.

#[cfg(test)]
#[path = "subscriptions_test.rs"]
mod subscriptions_test;

use leptos::prelude::*;

use crate::net::api::{SUBSCRIPTIONS_PATH, cancel_subscription_path, extend_subscription_path, user_subscriptions_path};
use crate::net::error::ApiError;
use crate::net::http::{ServiceClient, to_body};
use crate::net::types::{NewSubscription, Subscription};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SubscriptionState {
    pub subscriptions: Vec<Subscription>,
    pub active_subscription: Option<Subscription>,
}

#[derive(Clone, Debug)]
pub struct SubscriptionStore {
    state: RwSignal<SubscriptionState>,
    api: ServiceClient,
}

impl SubscriptionStore {
    pub fn new(api: ServiceClient) -> Self {
        Self { state: RwSignal::new(SubscriptionState::default()), api }
    }

    pub fn state(&self) -> ReadSignal<SubscriptionState> {
        self.state.read_only()
    }

    /// Forget everything loaded for the previous user.
    pub fn reset(&self) {
        self.state.set(SubscriptionState::default());
    }

    /// Load the user's subscriptions, optionally only active ones.
    ///
    /// On failure the previous list is kept.
    pub async fn fetch_user_subscriptions(&self, active_only: bool) {
        match self.api.get::<Vec<Subscription>>(user_subscriptions_path(active_only)).await {
            Ok(subscriptions) => self.state.update(|s| {
                if active_only {
                    if let Some(first) = subscriptions.first() {
                        s.active_subscription = Some(first.clone());
                    }
                }
                s.subscriptions = subscriptions;
            }),
            Err(e) => leptos::logging::error!("failed to fetch subscriptions: {e}"),
        }
    }

    pub async fn create_subscription(&self, data: &NewSubscription) -> bool {
        let result = match to_body(data) {
            Ok(body) => self.api.post_unit(SUBSCRIPTIONS_PATH, Some(body)).await,
            Err(e) => Err(e),
        };
        self.finish_mutation("create subscription", result).await
    }

    pub async fn cancel_subscription(&self, subscription_id: i64) -> bool {
        let result = self.api.post_unit(&cancel_subscription_path(subscription_id), None).await;
        self.finish_mutation("cancel subscription", result).await
    }

    pub async fn extend_subscription(&self, subscription_id: i64) -> bool {
        let result = self.api.post_unit(&extend_subscription_path(subscription_id), None).await;
        self.finish_mutation("extend subscription", result).await
    }

    async fn finish_mutation(&self, action: &str, result: Result<(), ApiError>) -> bool {
        match result {
            Ok(()) => {
                self.fetch_user_subscriptions(true).await;
                true
            }
            Err(e) => {
                leptos::logging::error!("failed to {action}: {e}");
                false
            }
        }
    }
}
