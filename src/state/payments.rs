//! Payment history for the `/payments` view.
//!
//! The subscription service pages results; the store keeps the last page it
//! received together with the query that produced it.

#[cfg(test)]
#[path = "payments_test.rs"]
mod payments_test;

use leptos::prelude::*;

use crate::net::api::payments_path;
use crate::net::http::ServiceClient;
use crate::net::types::PaymentPage;

pub const DEFAULT_PER_PAGE: u32 = 10;

/// Page selection and optional payment-status filter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaymentQuery {
    pub page: u32,
    pub per_page: u32,
    pub status: Option<String>,
}

impl Default for PaymentQuery {
    fn default() -> Self {
        Self { page: 1, per_page: DEFAULT_PER_PAGE, status: None }
    }
}

impl PaymentQuery {
    pub fn path(&self) -> String {
        payments_path(self.page.max(1), self.per_page.max(1), self.status.as_deref())
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PaymentsState {
    pub page: PaymentPage,
    pub query: PaymentQuery,
}

impl PaymentsState {
    pub fn has_next(&self) -> bool {
        self.page.current_page < self.page.pages
    }

    pub fn has_prev(&self) -> bool {
        self.page.current_page > 1
    }
}

#[derive(Clone, Debug)]
pub struct PaymentsStore {
    state: RwSignal<PaymentsState>,
    api: ServiceClient,
}

impl PaymentsStore {
    pub fn new(api: ServiceClient) -> Self {
        Self { state: RwSignal::new(PaymentsState::default()), api }
    }

    pub fn state(&self) -> ReadSignal<PaymentsState> {
        self.state.read_only()
    }

    pub fn reset(&self) {
        self.state.set(PaymentsState::default());
    }

    /// Load one page; on failure the previous page and query stay in place.
    pub async fn fetch_payments(&self, query: PaymentQuery) {
        match self.api.get::<PaymentPage>(&query.path()).await {
            Ok(page) => self.state.set(PaymentsState { page, query }),
            Err(e) => leptos::logging::error!("failed to fetch payments: {e}"),
        }
    }
}
