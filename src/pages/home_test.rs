use super::*;
use crate::net::types::PlanSummary;

fn user(full_name: Option<&str>, username: &str) -> User {
    User {
        id: 1,
        email: "a@b.com".to_owned(),
        username: username.to_owned(),
        full_name: full_name.map(str::to_owned),
        created_at: None,
    }
}

fn subscription(plan: Option<PlanSummary>, plan_id: Option<i64>) -> Subscription {
    Subscription {
        id: 42,
        status: SubscriptionStatus::Active,
        subscription_plan_id: plan_id,
        start_date: None,
        next_billing_date: None,
        auto_renewal: None,
        payment_method: None,
        plan,
    }
}

#[test]
fn display_name_prefers_full_name_then_username_then_email() {
    assert_eq!(display_name(&user(Some("Alice Doe"), "alice")), "Alice Doe");
    assert_eq!(display_name(&user(Some("   "), "alice")), "alice");
    assert_eq!(display_name(&user(None, "")), "a@b.com");
}

#[test]
fn subscription_headline_falls_back_through_plan_sources() {
    let summary = PlanSummary {
        id: 3,
        plan_name: "Premium".to_owned(),
        monthly_fee: None,
        billing_cycle_months: None,
        provider_name: None,
        logo_file_name: None,
        features: serde_json::Value::Null,
    };
    assert_eq!(subscription_headline(&subscription(Some(summary), Some(3))), "Premium · Active");
    assert_eq!(subscription_headline(&subscription(None, Some(3))), "Plan #3 · Active");
    assert_eq!(subscription_headline(&subscription(None, None)), "Subscription #42 · Active");
}

#[test]
fn next_billing_label_handles_missing_date() {
    let mut sub = subscription(None, None);
    assert_eq!(next_billing_label(&sub), "No upcoming billing");
    sub.next_billing_date = Some("2026-11-19".to_owned());
    assert_eq!(next_billing_label(&sub), "Next billing: 2026-11-19");
}
