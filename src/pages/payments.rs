//! Payment history with status filter and pagination.

#[cfg(test)]
#[path = "payments_test.rs"]
mod payments_test;

use leptos::prelude::*;

use crate::net::types::Payment;
use crate::state::payments::{PaymentQuery, PaymentsStore};

/// Filter choices as `(wire value, label)`; an empty value means no filter.
const STATUS_FILTERS: [(&str, &str); 4] =
    [("", "All"), ("completed", "Completed"), ("pending", "Pending"), ("failed", "Failed")];

/// Query for `page` with the given filter select value.
fn query_for(page: u32, filter: &str) -> PaymentQuery {
    let filter = filter.trim();
    PaymentQuery {
        page: page.max(1),
        status: (!filter.is_empty()).then(|| filter.to_owned()),
        ..PaymentQuery::default()
    }
}

fn amount_label(payment: &Payment) -> String {
    format!("${:.2}", payment.amount_paid)
}

fn page_label(current: u64, pages: u64) -> String {
    format!("Page {} of {}", current.max(1), pages.max(1))
}

#[component]
pub fn PaymentsPage() -> impl IntoView {
    let payments = expect_context::<PaymentsStore>();
    let state = payments.state();
    let filter = RwSignal::new(String::new());

    let load = move |query: PaymentQuery| {
        #[cfg(feature = "csr")]
        {
            let payments = payments.clone();
            leptos::task::spawn_local(async move {
                payments.fetch_payments(query).await;
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = (&payments, query);
    };

    load(PaymentQuery::default());

    let on_filter = {
        let load = load.clone();
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            filter.set(value.clone());
            load(query_for(1, &value));
        }
    };
    let on_prev = {
        let load = load.clone();
        move |_| {
            let page = state.with_untracked(|s| s.query.page);
            load(query_for(page.saturating_sub(1), &filter.get_untracked()));
        }
    };
    let on_next = move |_| {
        let page = state.with_untracked(|s| s.query.page);
        load(query_for(page.saturating_add(1), &filter.get_untracked()));
    };

    view! {
        <div class="payments-page">
            <h1>"Payments"</h1>
            <select class="payments-page__filter" prop:value=move || filter.get() on:change=on_filter>
                {STATUS_FILTERS
                    .iter()
                    .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                    .collect_view()}
            </select>
            <table class="payment-table">
                <thead>
                    <tr>
                        <th>"Date"</th>
                        <th>"Plan"</th>
                        <th>"Amount"</th>
                        <th>"Status"</th>
                        <th>"Method"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        state
                            .with(|s| s.page.items.clone())
                            .into_iter()
                            .map(|payment| {
                                let amount = amount_label(&payment);
                                view! {
                                    <tr>
                                        <td>{payment.payment_date.unwrap_or_default()}</td>
                                        <td>{payment.plan_name.unwrap_or_default()}</td>
                                        <td>{amount}</td>
                                        <td>{payment.payment_status.unwrap_or_default()}</td>
                                        <td>{payment.payment_method.unwrap_or_default()}</td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
            <Show when=move || state.with(|s| s.page.items.is_empty())>
                <p class="payments-page__empty">"No payments yet."</p>
            </Show>
            <div class="payments-page__pager">
                <button disabled=move || !state.with(|s| s.has_prev()) on:click=on_prev>
                    "Previous"
                </button>
                <span>{move || state.with(|s| page_label(s.page.current_page, s.page.pages))}</span>
                <button disabled=move || !state.with(|s| s.has_next()) on:click=on_next>
                    "Next"
                </button>
            </div>
        </div>
    }
}
