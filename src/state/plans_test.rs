use std::sync::Arc;

use futures::executor::block_on;
use leptos::prelude::*;

use super::*;
use crate::test_support::{FakeTransport, client, owner};
use crate::util::storage::MemoryTokenStorage;

fn store() -> (PlansStore, Arc<FakeTransport>) {
    let transport = FakeTransport::new();
    let storage = Arc::new(MemoryTokenStorage::with_token("tok"));
    (PlansStore::new(client("http://subs", &transport, &storage)), transport)
}

fn catalog() -> serde_json::Value {
    serde_json::json!([
        {"id": 1, "plan_name": "Basic", "monthly_fee": 9.9, "billing_cycle_months": 1, "provider_name": "Streamly"},
        {"id": 2, "plan_name": "Family", "monthly_fee": 19.9, "billing_cycle_months": 12, "provider_name": "Tunes"}
    ])
}

#[test]
fn fetch_plans_stores_catalog() {
    let _owner = owner();
    let (store, transport) = store();
    transport.push_json(200, catalog());

    block_on(store.fetch_plans());

    let state = store.state().get_untracked();
    assert!(state.loaded);
    assert_eq!(state.plans.len(), 2);
    assert_eq!(transport.urls(), vec!["http://subs/sub/plans".to_owned()]);
}

#[test]
fn find_returns_plan_by_id() {
    let _owner = owner();
    let (store, transport) = store();
    transport.push_json(200, catalog());
    block_on(store.fetch_plans());

    assert_eq!(store.find(2).map(|p| p.plan_name), Some("Family".to_owned()));
    assert!(store.find(3).is_none());
}

#[test]
fn fetch_failure_keeps_previous_catalog() {
    let _owner = owner();
    let (store, transport) = store();
    transport.push_json(200, catalog());
    transport.push_json(500, serde_json::json!({"error": "Internal Server Error"}));

    block_on(store.fetch_plans());
    block_on(store.fetch_plans());

    assert_eq!(store.state().get_untracked().plans.len(), 2);
}
