//! Top navigation with the signed-in user and a logout action.
//!
//! Logging out only clears the session; `RouteGuard` observes the change and
//! performs the redirect to `/login`.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::router::guard::AppRoute;
use crate::state::session::SessionStore;

#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let state = session.state();

    view! {
        <Show when=move || state.with(|s| s.is_authenticated())>
            <nav class="nav-bar">
                <A href=AppRoute::Home.path()>"Home"</A>
                <A href=AppRoute::Plans.path()>"Plans"</A>
                <A href=AppRoute::Payments.path()>"Payments"</A>
                <span class="nav-bar__user">
                    {move || state.with(|s| s.user.as_ref().map(|u| u.username.clone()).unwrap_or_default())}
                </span>
                <button
                    class="nav-bar__logout"
                    on:click={
                        let session = session.clone();
                        move |_| session.logout()
                    }
                >
                    "Log out"
                </button>
            </nav>
        </Show>
    }
}
