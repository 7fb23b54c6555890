//! Balance and payouts.

use leptos::prelude::*;

use crate::components::balance_card::BalanceCard;
use crate::components::empty_state::EmptyState;
use crate::components::layout::AppShell;
use crate::components::payout_form::PayoutForm;
use crate::components::status_badge::StatusBadge;
use crate::net::api;
use crate::net::types::{Balance, Payout};
use crate::state::fetch::FetchState;
use crate::state::refresh::{AppRefresh, RefreshReason};
use crate::util::alive::AliveFlag;
use crate::util::clock::now_ms;
use crate::util::format::format_money;
use crate::util::loader::{fetch_into, refetch_on};

#[component]
pub fn BalancePage() -> impl IntoView {
    view! {
        <AppShell>
            <BalanceView/>
        </AppShell>
    }
}

#[component]
fn BalanceView() -> impl IntoView {
    let hub = expect_context::<AppRefresh>();
    let alive = AliveFlag::for_current_owner();
    let version = RwSignal::new(0_u64);
    let balance = RwSignal::new(FetchState::<Balance>::loading());
    let payouts = RwSignal::new(FetchState::<Vec<Payout>>::loading());
    let requesting = RwSignal::new(false);
    refetch_on(RefreshReason::Balance, version);

    let alive_balance = alive.clone();
    Effect::new(move || {
        version.track();
        fetch_into(balance, alive_balance.clone(), api::get_balance());
    });
    Effect::new(move || {
        version.track();
        fetch_into(payouts, alive.clone(), api::list_payouts());
    });

    let on_requested = Callback::new(move |_: Payout| {
        requesting.set(false);
        hub.announce(RefreshReason::Balance, now_ms());
        hub.announce(RefreshReason::Transactions, now_ms());
    });
    let on_close = Callback::new(move |()| requesting.set(false));

    view! {
        <div class="page balance-page">
            <header class="page__header">
                <h1>"Balance"</h1>
                <button
                    class="btn btn--primary"
                    disabled=move || balance.with(|s| s.data.as_ref().is_none_or(|b| b.available_minor <= 0))
                    on:click=move |_| requesting.set(true)
                >
                    "Request payout"
                </button>
            </header>
            {move || {
                let state = balance.get();
                match (state.data, state.error) {
                    (Some(data), _) => {
                        let available = data.available_minor;
                        let currency = data.currency.clone();
                        view! {
                            <BalanceCard balance=data/>
                            <Show when=move || requesting.get()>
                                <PayoutForm
                                    available_minor=available
                                    currency=currency.clone()
                                    on_complete=on_requested
                                    on_cancel=on_close
                                />
                            </Show>
                        }
                            .into_any()
                    }
                    (None, Some(error)) => view! { <p class="page__error">{error}</p> }.into_any(),
                    (None, None) => view! { <p class="page__loading">"Loading balance..."</p> }.into_any(),
                }
            }}
            <section class="card payouts">
                <h3 class="card__title">"Payouts"</h3>
                {move || {
                    let state = payouts.get();
                    if state.is_initial_load() {
                        return view! { <p class="card__placeholder">"Loading payouts..."</p> }.into_any();
                    }
                    let rows = state.data.unwrap_or_default();
                    if rows.is_empty() {
                        return view! { <EmptyState title="No payouts yet"/> }.into_any();
                    }
                    view! {
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"Arrives"</th>
                                    <th>"Status"</th>
                                    <th class="amount">"Amount"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {rows
                                    .into_iter()
                                    .map(|payout| {
                                        view! {
                                            <tr>
                                                <td class="table__date">{payout.arrival_date.clone()}</td>
                                                <td>
                                                    <StatusBadge status=payout.status.as_str()/>
                                                </td>
                                                <td class="amount">{format_money(payout.amount_minor, &payout.currency)}</td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                        .into_any()
                }}
            </section>
        </div>
    }
}
