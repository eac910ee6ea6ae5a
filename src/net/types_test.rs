use super::*;

// =============================================================
// User / auth payloads
// =============================================================

#[test]
fn user_deserializes_profile_and_ignores_unknown_fields() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": 7,
        "email": "test@subs.com",
        "username": "test",
        "full_name": null,
        "is_admin": false
    }))
    .unwrap();
    assert_eq!(user.id, 7);
    assert_eq!(user.username, "test");
    assert_eq!(user.full_name, None);
}

#[test]
fn login_response_requires_access_token() {
    let ok: Result<LoginResponse, _> =
        serde_json::from_value(serde_json::json!({"access_token": "a.b.c", "token_type": "bearer"}));
    assert_eq!(ok.unwrap().access_token, "a.b.c");

    let missing: Result<LoginResponse, _> = serde_json::from_value(serde_json::json!({"token_type": "bearer"}));
    assert!(missing.is_err());
}

#[test]
fn registration_omits_missing_full_name() {
    let body = serde_json::to_value(Registration {
        email: "a@b.com".to_owned(),
        username: "ab".to_owned(),
        password: "pw".to_owned(),
        full_name: None,
    })
    .unwrap();
    assert_eq!(body, serde_json::json!({"email": "a@b.com", "username": "ab", "password": "pw"}));
}

// =============================================================
// Subscriptions
// =============================================================

#[test]
fn subscription_accepts_full_record_shape() {
    let sub: Subscription = serde_json::from_value(serde_json::json!({
        "id": 3,
        "user_id": 1,
        "subscription_plan_id": 2,
        "start_date": "2025-01-01",
        "next_billing_date": "2025-02-01",
        "auto_renewal": true,
        "payment_method": "credit_card",
        "status": "active"
    }))
    .unwrap();
    assert_eq!(sub.id, 3);
    assert!(sub.is_active());
    assert_eq!(sub.subscription_plan_id, Some(2));
    assert_eq!(sub.plan, None);
}

#[test]
fn subscription_accepts_joined_shape_with_subscription_id() {
    let sub: Subscription = serde_json::from_value(serde_json::json!({
        "subscription_id": 9,
        "status": "cancelled",
        "plan": {
            "id": 4,
            "plan_name": "Premium",
            "monthly_fee": 13.9,
            "billing_cycle_months": 1,
            "provider_name": "Streamly",
            "features": ["4k"]
        }
    }))
    .unwrap();
    assert_eq!(sub.id, 9);
    assert!(!sub.is_active());
    assert_eq!(sub.plan.unwrap().provider_name.as_deref(), Some("Streamly"));
}

#[test]
fn unknown_subscription_status_is_tolerated() {
    let sub: Subscription = serde_json::from_value(serde_json::json!({"id": 1, "status": "paused"})).unwrap();
    assert_eq!(sub.status, SubscriptionStatus::Unknown);
}

#[test]
fn new_subscription_serializes_expected_fields() {
    let body = serde_json::to_value(NewSubscription {
        subscription_plan_id: 2,
        start_date: "2025-03-01".to_owned(),
        payment_method: "credit_card".to_owned(),
    })
    .unwrap();
    assert_eq!(
        body,
        serde_json::json!({"subscription_plan_id": 2, "start_date": "2025-03-01", "payment_method": "credit_card"})
    );
}

// =============================================================
// Plans, payments, recommendations
// =============================================================

#[test]
fn plan_defaults_billing_cycle() {
    let plan: Plan =
        serde_json::from_value(serde_json::json!({"id": 1, "plan_name": "Basic", "monthly_fee": 9.9})).unwrap();
    assert_eq!(plan.billing_cycle_months, 1);
    assert!(plan.features.is_null());
}

#[test]
fn payment_page_decodes_items_and_counters() {
    let page: PaymentPage = serde_json::from_value(serde_json::json!({
        "items": [{
            "id": 5,
            "plan_name": "Basic",
            "provider_name": "Streamly",
            "amount_paid": 9.9,
            "payment_date": "2025-01-01T00:00:00",
            "payment_status": "successful",
            "payment_method": "credit_card"
        }],
        "total": 1,
        "pages": 1,
        "current_page": 1
    }))
    .unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].amount_paid, 9.9);
    assert_eq!(page.total, 1);
}

#[test]
fn recommendation_message_only_yields_empty_list() {
    let resp: RecommendationResponse =
        serde_json::from_value(serde_json::json!({"message": "No available subscription plans to recommend."}))
            .unwrap();
    assert!(resp.recommends.is_empty());
    assert!(resp.message.is_some());
}

#[test]
fn integral_float_ids_are_accepted() {
    let plan: Plan =
        serde_json::from_value(serde_json::json!({"id": 2.0, "plan_name": "X", "monthly_fee": 1.0})).unwrap();
    assert_eq!(plan.id, 2);

    let bad: Result<Plan, _> =
        serde_json::from_value(serde_json::json!({"id": 2.5, "plan_name": "X", "monthly_fee": 1.0}));
    assert!(bad.is_err());
}
