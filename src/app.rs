//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::components::route_guard::RouteGuard;
use crate::config::ApiConfig;
use crate::net::api::ApiClients;
use crate::net::http::default_transport;
use crate::pages::{home::HomePage, login::LoginPage, payments::PaymentsPage, plans::PlansPage};
use crate::state::{
    payments::PaymentsStore, plans::PlansStore, recommendations::RecommendationStore, session::SessionStore,
    subscriptions::SubscriptionStore,
    user_scope::{UserScopedStores, reset_on_sign_out},
};
use crate::util::storage::{LocalTokenStorage, TokenStorage};

/// Root application component.
///
/// Builds the service clients and stores once and provides them as context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let storage: Arc<dyn TokenStorage> = Arc::new(LocalTokenStorage);
    let clients = ApiClients::new(&ApiConfig::from_build_env(), default_transport(), storage.clone());

    let session = SessionStore::new(clients.user.clone(), storage);
    let user_scoped = UserScopedStores {
        subscriptions: SubscriptionStore::new(clients.subscription.clone()),
        payments: PaymentsStore::new(clients.subscription.clone()),
        recommendations: RecommendationStore::new(clients.recommend),
    };
    reset_on_sign_out(&session, user_scoped.clone());

    provide_context(session);
    provide_context(user_scoped.subscriptions);
    provide_context(user_scoped.payments);
    provide_context(user_scoped.recommendations);
    provide_context(PlansStore::new(clients.subscription));

    view! {
        <Title text="Subscriptions"/>

        <Router>
            <NavBar/>
            <RouteGuard>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("plans") view=PlansPage/>
                    <Route path=StaticSegment("payments") view=PaymentsPage/>
                </Routes>
            </RouteGuard>
        </Router>
    }
}
