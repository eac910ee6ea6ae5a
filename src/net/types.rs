//! Wire DTOs for the user, subscription and recommendation services.
//!
//! DESIGN
//! ======
//! Field names mirror the services' JSON. Optional and defaulted fields keep
//! decoding lenient where the services omit or null values, so one schema
//! covers both the full record and the joined list shapes.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Profile of the authenticated user (`GET /users/me`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    pub email: String,
    pub username: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Body for `POST /users/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Body for `POST /users/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub email: String,
    pub username: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

/// Successful `POST /users/login` response.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Lifecycle status of a user subscription.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    Active,
    Cancelled,
    Suspended,
    Expired,
    #[serde(other)]
    Unknown,
}

/// Plan summary nested in joined subscription records.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlanSummary {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    pub plan_name: String,
    #[serde(default)]
    pub monthly_fee: Option<f64>,
    #[serde(default)]
    pub billing_cycle_months: Option<i64>,
    #[serde(default)]
    pub provider_name: Option<String>,
    #[serde(default)]
    pub logo_file_name: Option<String>,
    #[serde(default)]
    pub features: serde_json::Value,
}

/// A user subscription as returned by the subscription service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    #[serde(alias = "subscription_id", deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    pub status: SubscriptionStatus,
    #[serde(default)]
    pub subscription_plan_id: Option<i64>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub next_billing_date: Option<String>,
    #[serde(default)]
    pub auto_renewal: Option<bool>,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub plan: Option<PlanSummary>,
}

impl Subscription {
    pub fn is_active(&self) -> bool {
        self.status == SubscriptionStatus::Active
    }
}

/// Body for `POST /sub`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewSubscription {
    pub subscription_plan_id: i64,
    /// `YYYY-MM-DD`.
    pub start_date: String,
    pub payment_method: String,
}

/// Catalog entry from `GET /sub/plans`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    pub plan_name: String,
    pub monthly_fee: f64,
    #[serde(default = "default_billing_cycle")]
    pub billing_cycle_months: i64,
    #[serde(default)]
    pub provider_name: Option<String>,
    #[serde(default)]
    pub logo_file_name: Option<String>,
    #[serde(default)]
    pub features: serde_json::Value,
}

fn default_billing_cycle() -> i64 {
    1
}

/// One row of `GET /sub/payments`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    #[serde(default)]
    pub plan_name: Option<String>,
    #[serde(default)]
    pub provider_name: Option<String>,
    pub amount_paid: f64,
    #[serde(default)]
    pub payment_date: Option<String>,
    #[serde(default)]
    pub payment_status: Option<String>,
    #[serde(default)]
    pub payment_method: Option<String>,
}

/// Paginated payment history.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentPage {
    #[serde(default)]
    pub items: Vec<Payment>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub pages: u64,
    #[serde(default = "default_page")]
    pub current_page: u64,
}

fn default_page() -> u64 {
    1
}

/// `POST /recommend` response: either a list of plans or just a message.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RecommendationResponse {
    #[serde(default)]
    pub recommends: Vec<Plan>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Accept integers and integral floats (`3` or `3.0`) as `i64`.
pub(crate) fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
