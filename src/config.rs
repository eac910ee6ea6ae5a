//! Service base addresses resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser bundle has no process environment, so addresses are baked in
//! from `USER_API_URL`, `SUBS_API_URL` and `RECO_API_URL` when the crate is
//! compiled. Unset or blank values fall back to the local development ports.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_USER_API_URL: &str = "http://localhost:5005";
pub const DEFAULT_SUBS_API_URL: &str = "http://localhost:5004";
pub const DEFAULT_RECO_API_URL: &str = "http://localhost:5003";

/// Base addresses for the three backend services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub user_url: String,
    pub subscription_url: String,
    pub recommend_url: String,
}

impl ApiConfig {
    /// Build config from values captured by `option_env!` at compile time.
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("USER_API_URL"), option_env!("SUBS_API_URL"), option_env!("RECO_API_URL"))
    }

    /// Build config from optional raw values, applying defaults per service.
    pub fn from_values(user: Option<&str>, subscription: Option<&str>, recommend: Option<&str>) -> Self {
        Self {
            user_url: resolve_base_url(user, DEFAULT_USER_API_URL),
            subscription_url: resolve_base_url(subscription, DEFAULT_SUBS_API_URL),
            recommend_url: resolve_base_url(recommend, DEFAULT_RECO_API_URL),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_values(None, None, None)
    }
}

/// Pick `raw` when it is non-blank, else `default`; trailing slashes are
/// dropped so request paths can always start with `/`.
pub fn resolve_base_url(raw: Option<&str>, default: &str) -> String {
    raw.map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(default)
        .trim_end_matches('/')
        .to_owned()
}
