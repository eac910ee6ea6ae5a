//! Plan catalog with a subscribe action.

#[cfg(test)]
#[path = "plans_test.rs"]
mod plans_test;

use leptos::prelude::*;

use crate::net::types::{NewSubscription, Plan};
use crate::state::plans::PlansStore;
use crate::state::subscriptions::SubscriptionStore;
use crate::util::time::today_iso;

/// Payment methods offered at checkout as `(wire value, label)`.
pub const PAYMENT_METHODS: [(&str, &str); 3] =
    [("credit_card", "Credit card"), ("debit_card", "Debit card"), ("paypal", "PayPal")];

/// Human price label, e.g. `$9.99 / month` or `$49.00 / 6 months`.
pub fn format_price(monthly_fee: f64, billing_cycle_months: i64) -> String {
    match billing_cycle_months {
        m if m <= 1 => format!("${monthly_fee:.2} / month"),
        m => format!("${monthly_fee:.2} / {m} months"),
    }
}

/// Build the `POST /sub` body, rejecting unknown payment methods.
fn subscription_request(plan: &Plan, payment_method: &str, start_date: String) -> Result<NewSubscription, &'static str> {
    if !PAYMENT_METHODS.iter().any(|(value, _)| *value == payment_method) {
        return Err("Choose a payment method.");
    }
    Ok(NewSubscription {
        subscription_plan_id: plan.id,
        start_date,
        payment_method: payment_method.to_owned(),
    })
}

#[component]
pub fn PlansPage() -> impl IntoView {
    let plans = expect_context::<PlansStore>();
    let subscriptions = expect_context::<SubscriptionStore>();
    let plans_state = plans.state();

    let payment_method = RwSignal::new(PAYMENT_METHODS[0].0.to_owned());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "csr")]
    {
        let plans = plans.clone();
        leptos::task::spawn_local(async move {
            plans.fetch_plans().await;
        });
    }

    let subscribe = move |plan: Plan| {
        if busy.get() {
            return;
        }
        let Some(start_date) = today_iso() else {
            info.set("Could not read today's date.".to_owned());
            return;
        };
        let request = match subscription_request(&plan, &payment_method.get(), start_date) {
            Ok(request) => request,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(format!("Subscribing to {}...", plan.plan_name));

        #[cfg(feature = "csr")]
        {
            let subscriptions = subscriptions.clone();
            leptos::task::spawn_local(async move {
                if subscriptions.create_subscription(&request).await {
                    info.set(format!("Subscribed to {}.", plan.plan_name));
                } else {
                    info.set("Subscription failed.".to_owned());
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&subscriptions, request);
            busy.set(false);
        }
    };

    view! {
        <div class="plans-page">
            <h1>"Plans"</h1>
            <label class="plans-page__method">
                "Pay with "
                <select
                    prop:value=move || payment_method.get()
                    on:change=move |ev| payment_method.set(event_target_value(&ev))
                >
                    {PAYMENT_METHODS
                        .iter()
                        .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                        .collect_view()}
                </select>
            </label>
            <Show when=move || !info.get().is_empty()>
                <p class="plans-page__message">{move || info.get()}</p>
            </Show>
            <Show
                when=move || plans_state.with(|s| s.loaded)
                fallback=|| view! { <p class="plans-page__loading">"Loading plans..."</p> }
            >
                <ul class="plan-list">
                    {
                        let subscribe = subscribe.clone();
                        move || {
                            plans_state
                                .with(|s| s.plans.clone())
                                .into_iter()
                                .map(|plan| {
                                    let subscribe = subscribe.clone();
                                    let price = format_price(plan.monthly_fee, plan.billing_cycle_months);
                                    let name = plan.plan_name.clone();
                                    let provider = plan.provider_name.clone().unwrap_or_default();
                                    view! {
                                        <li class="plan-list__item">
                                            <span class="plan-list__name">{name}</span>
                                            <span class="plan-list__provider">{provider}</span>
                                            <span class="plan-list__price">{price}</span>
                                            <button
                                                class="plan-list__subscribe"
                                                disabled=move || busy.get()
                                                on:click=move |_| subscribe(plan.clone())
                                            >
                                                "Subscribe"
                                            </button>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }
                    }
                </ul>
            </Show>
        </div>
    }
}
