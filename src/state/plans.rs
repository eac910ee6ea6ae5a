//! Plan catalog offered by the subscription service.

#[cfg(test)]
#[path = "plans_test.rs"]
mod plans_test;

use leptos::prelude::*;

use crate::net::api::PLANS_PATH;
use crate::net::http::ServiceClient;
use crate::net::types::Plan;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlansState {
    pub plans: Vec<Plan>,
    pub loaded: bool,
}

#[derive(Clone, Debug)]
pub struct PlansStore {
    state: RwSignal<PlansState>,
    api: ServiceClient,
}

impl PlansStore {
    pub fn new(api: ServiceClient) -> Self {
        Self { state: RwSignal::new(PlansState::default()), api }
    }

    pub fn state(&self) -> ReadSignal<PlansState> {
        self.state.read_only()
    }

    pub fn find(&self, plan_id: i64) -> Option<Plan> {
        self.state.with(|s| s.plans.iter().find(|p| p.id == plan_id).cloned())
    }

    /// Load active plans; keeps the previous catalog on failure.
    pub async fn fetch_plans(&self) {
        match self.api.get::<Vec<Plan>>(PLANS_PATH).await {
            Ok(plans) => self.state.set(PlansState { plans, loaded: true }),
            Err(e) => leptos::logging::error!("failed to fetch plans: {e}"),
        }
    }
}
