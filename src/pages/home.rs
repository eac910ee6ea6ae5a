//! Home page: profile greeting, the active subscription, and recommendations.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authenticated landing route. On mount it loads the profile when only a
//! token was restored, the active subscription, and a recommendation list.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::net::types::{Subscription, SubscriptionStatus, User};
use crate::pages::plans::format_price;
use crate::state::recommendations::RecommendationStore;
use crate::state::session::SessionStore;
use crate::state::subscriptions::SubscriptionStore;

/// Name shown in the greeting: full name, then username, then email.
fn display_name(user: &User) -> String {
    user.full_name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map_or_else(
            || if user.username.is_empty() { user.email.clone() } else { user.username.clone() },
            str::to_owned,
        )
}

fn status_label(status: &SubscriptionStatus) -> &'static str {
    match status {
        SubscriptionStatus::Active => "Active",
        SubscriptionStatus::Cancelled => "Cancelled",
        SubscriptionStatus::Suspended => "Suspended",
        SubscriptionStatus::Expired => "Expired",
        SubscriptionStatus::Unknown => "Unknown",
    }
}

/// One-line subscription headline, e.g. `Premium · Active`.
fn subscription_headline(sub: &Subscription) -> String {
    let name = sub
        .plan
        .as_ref()
        .map(|plan| plan.plan_name.clone())
        .or_else(|| sub.subscription_plan_id.map(|id| format!("Plan #{id}")))
        .unwrap_or_else(|| format!("Subscription #{}", sub.id));
    format!("{name} · {}", status_label(&sub.status))
}

fn next_billing_label(sub: &Subscription) -> String {
    match sub.next_billing_date.as_deref() {
        Some(date) if !date.is_empty() => format!("Next billing: {date}"),
        _ => "No upcoming billing".to_owned(),
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let subscriptions = expect_context::<SubscriptionStore>();
    let recommendations = expect_context::<RecommendationStore>();

    let session_state = session.state();
    let sub_state = subscriptions.state();
    let reco_state = recommendations.state();
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "csr")]
    {
        let session = session.clone();
        let subscriptions = subscriptions.clone();
        let recommendations = recommendations.clone();
        leptos::task::spawn_local(async move {
            if session.user().is_none() {
                session.fetch_user().await;
            }
            subscriptions.fetch_user_subscriptions(true).await;
            recommendations.fetch_recommendations(false).await;
        });
    }

    let run_mutation = {
        let subscriptions = subscriptions.clone();
        move |subscription_id: i64, extend: bool| {
            if busy.get() {
                return;
            }
            busy.set(true);
            info.set(String::new());

            #[cfg(feature = "csr")]
            {
                let subscriptions = subscriptions.clone();
                leptos::task::spawn_local(async move {
                    let ok = if extend {
                        subscriptions.extend_subscription(subscription_id).await
                    } else {
                        subscriptions.cancel_subscription(subscription_id).await
                    };
                    if !ok {
                        let msg = if extend { "Could not extend subscription." } else { "Could not cancel subscription." };
                        info.set(msg.to_owned());
                    }
                    busy.set(false);
                });
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = (&subscriptions, subscription_id, extend);
                busy.set(false);
            }
        }
    };

    let on_refresh_recommendations = {
        let recommendations = recommendations.clone();
        move |_| {
            #[cfg(feature = "csr")]
            {
                let recommendations = recommendations.clone();
                leptos::task::spawn_local(async move {
                    recommendations.fetch_recommendations(true).await;
                });
            }
            #[cfg(not(feature = "csr"))]
            let _ = &recommendations;
        }
    };

    view! {
        <div class="home-page">
            <h1>
                {move || {
                    session_state
                        .with(|s| s.user.as_ref().map(display_name))
                        .map_or_else(|| "Welcome".to_owned(), |name| format!("Welcome, {name}"))
                }}
            </h1>

            <section class="home-page__subscription">
                <h2>"Your subscription"</h2>
                {move || {
                    let run_mutation = run_mutation.clone();
                    match sub_state.with(|s| s.active_subscription.clone()) {
                        Some(sub) => {
                            let id = sub.id;
                            let active = sub.is_active();
                            let run_cancel = run_mutation.clone();
                            let run_extend = run_mutation;
                            view! {
                                <div class="subscription-card">
                                    <p class="subscription-card__title">{subscription_headline(&sub)}</p>
                                    <p class="subscription-card__billing">{next_billing_label(&sub)}</p>
                                    <Show when=move || active>
                                        <button
                                            class="subscription-card__extend"
                                            disabled=move || busy.get()
                                            on:click={
                                                let run_extend = run_extend.clone();
                                                move |_| run_extend(id, true)
                                            }
                                        >
                                            "Extend"
                                        </button>
                                        <button
                                            class="subscription-card__cancel"
                                            disabled=move || busy.get()
                                            on:click={
                                                let run_cancel = run_cancel.clone();
                                                move |_| run_cancel(id, false)
                                            }
                                        >
                                            "Cancel"
                                        </button>
                                    </Show>
                                </div>
                            }
                                .into_any()
                        }
                        None => view! { <p class="home-page__empty">"No active subscription."</p> }.into_any(),
                    }
                }}
                <Show when=move || !info.get().is_empty()>
                    <p class="home-page__message">{move || info.get()}</p>
                </Show>
            </section>

            <section class="home-page__recommendations">
                <h2>"Recommended for you"</h2>
                <button class="home-page__refresh" on:click=on_refresh_recommendations>
                    "Refresh"
                </button>
                {move || {
                    reco_state
                        .with(|s| s.message.clone())
                        .map(|message| view! { <p class="home-page__reco-message">{message}</p> })
                }}
                <ul class="reco-list">
                    {move || {
                        reco_state
                            .with(|s| s.plans.clone())
                            .into_iter()
                            .map(|plan| {
                                view! {
                                    <li class="reco-list__item">
                                        <span class="reco-list__name">{plan.plan_name.clone()}</span>
                                        <span class="reco-list__price">
                                            {format_price(plan.monthly_fee, plan.billing_cycle_months)}
                                        </span>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </section>
        </div>
    }
}
