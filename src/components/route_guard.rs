//! Wraps the route outlet and applies the navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Re-evaluates on every location change and on every session change, so a
//! logout or a 401-triggered clear on a protected page also redirects. Routes
//! stay unmounted while a redirect is pending so protected pages never start
//! requests without a session. The effect remembers the phase of its last
//! run so a fresh sign-in on `/login` follows the `redirect` target, while
//! an already signed-in visit to `/login` goes home.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::router::guard::{REDIRECT_PARAM, destination, guard_navigation, navigation_target};
use crate::state::session::{SessionPhase, SessionStore};

#[component]
pub fn RouteGuard(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let location = use_location();
    let navigate = use_navigate();
    let allowed = RwSignal::new(false);

    Effect::new(move |previous: Option<SessionPhase>| {
        let path = location.pathname.get();
        let search = location.search.get();
        let destination = destination(&path, &search);

        let outcome = guard_navigation(&session, &destination);
        let redirect = location.query.with(|q| q.get(REDIRECT_PARAM));
        let target = navigation_target(&outcome, previous, redirect.as_deref());
        match target {
            Some(target) => {
                if allowed.get_untracked() {
                    allowed.set(false);
                }
                navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
            }
            None => {
                if !allowed.get_untracked() {
                    allowed.set(true);
                }
            }
        }
        session.phase()
    });

    move || allowed.get().then(|| children())
}
