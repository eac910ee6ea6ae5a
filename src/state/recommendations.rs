//! Plan recommendations from the recommendation service.

#[cfg(test)]
#[path = "recommendations_test.rs"]
mod recommendations_test;

use leptos::prelude::*;

use crate::net::api::recommend_path;
use crate::net::http::ServiceClient;
use crate::net::types::{Plan, RecommendationResponse};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecommendationState {
    pub plans: Vec<Plan>,
    /// Service note shown when nothing can be recommended.
    pub message: Option<String>,
}

#[derive(Clone, Debug)]
pub struct RecommendationStore {
    state: RwSignal<RecommendationState>,
    api: ServiceClient,
}

impl RecommendationStore {
    pub fn new(api: ServiceClient) -> Self {
        Self { state: RwSignal::new(RecommendationState::default()), api }
    }

    pub fn state(&self) -> ReadSignal<RecommendationState> {
        self.state.read_only()
    }

    pub fn reset(&self) {
        self.state.set(RecommendationState::default());
    }

    /// Ask for recommendations; `force` bypasses the service-side cache.
    pub async fn fetch_recommendations(&self, force: bool) {
        match self.api.post::<RecommendationResponse>(recommend_path(force), None).await {
            Ok(resp) => self.state.set(RecommendationState { plans: resp.recommends, message: resp.message }),
            Err(e) => leptos::logging::error!("failed to fetch recommendations: {e}"),
        }
    }
}
