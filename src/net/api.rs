//! Service clients and endpoint paths for the three backends.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ApiClients` is built once at startup and handed to the stores. The three
//! clients share a transport and token storage and differ only in base
//! address. Endpoint paths live here so stores never format URLs themselves.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use super::http::{ServiceClient, Transport};
use crate::config::ApiConfig;
use crate::util::storage::TokenStorage;

pub const LOGIN_PATH: &str = "/users/login";
pub const REGISTER_PATH: &str = "/users/register";
pub const CURRENT_USER_PATH: &str = "/users/me";
pub const SUBSCRIPTIONS_PATH: &str = "/sub";
pub const PLANS_PATH: &str = "/sub/plans";
pub const RECOMMEND_PATH: &str = "/recommend";

/// One request client per backend service.
#[derive(Clone, Debug)]
pub struct ApiClients {
    pub user: ServiceClient,
    pub subscription: ServiceClient,
    pub recommend: ServiceClient,
}

impl ApiClients {
    pub fn new(config: &ApiConfig, transport: Arc<dyn Transport>, storage: Arc<dyn TokenStorage>) -> Self {
        let make = |base: &str| ServiceClient::new(base, transport.clone(), storage.clone());
        Self {
            user: make(&config.user_url),
            subscription: make(&config.subscription_url),
            recommend: make(&config.recommend_url),
        }
    }
}

/// `/sub/user`, optionally filtered to active subscriptions.
pub fn user_subscriptions_path(active_only: bool) -> &'static str {
    if active_only { "/sub/user?status=active" } else { "/sub/user" }
}

pub fn cancel_subscription_path(subscription_id: i64) -> String {
    format!("/sub/{subscription_id}/cancel")
}

pub fn extend_subscription_path(subscription_id: i64) -> String {
    format!("/sub/{subscription_id}/extend")
}

/// `/sub/payments` with pagination and an optional payment-status filter.
pub fn payments_path(page: u32, per_page: u32, status: Option<&str>) -> String {
    let mut path = format!("/sub/payments?page={page}&per_page={per_page}");
    if let Some(status) = status.filter(|s| !s.is_empty()) {
        path.push_str("&status=");
        path.push_str(&urlencoding::encode(status));
    }
    path
}

pub fn recommend_path(force: bool) -> &'static str {
    if force { "/recommend?force=true" } else { RECOMMEND_PATH }
}
