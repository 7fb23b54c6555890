//! Dashboard: reorderable widget grid.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns the balance, transaction and subscription fetches and hands
//! typed data to each widget; the analytics widget fetches for itself. Every
//! fetch re-runs when the refresh hub announces a change to its topic, so a
//! payout or new subscription made elsewhere (or in another tab) shows up
//! without a reload.
//!
//! DESIGN
//! ======
//! Widget order is restored from storage after hydration, not during render,
//! so the server-rendered default order and the first client render agree.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::analytics_widget::AnalyticsWidget;
use crate::components::balance_card::BalanceCard;
use crate::components::layout::AppShell;
use crate::components::transaction_table::RecentTransactions;
use crate::list_view::Paged;
use crate::net::api;
use crate::net::types::{Balance, BillingInterval, Subscription, SubscriptionStatus, Transaction};
use crate::state::currency::CurrencyState;
use crate::state::dashboard::{DashboardLayout, Widget};
use crate::state::fetch::FetchState;
use crate::state::refresh::RefreshReason;
use crate::util::alive::AliveFlag;
use crate::util::loader::{fetch_into, refetch_on};
use crate::util::storage::BrowserStorage;

/// Subscription counts and monthly recurring revenue for the summary widget.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct SubscriptionSummary {
    active: usize,
    trialing: usize,
    past_due: usize,
    mrr_minor: i64,
}

fn summarize(subscriptions: &[Subscription]) -> SubscriptionSummary {
    subscriptions.iter().fold(SubscriptionSummary::default(), |mut acc, sub| {
        match sub.status {
            SubscriptionStatus::Active => acc.active += 1,
            SubscriptionStatus::Trialing => acc.trialing += 1,
            SubscriptionStatus::PastDue => acc.past_due += 1,
            SubscriptionStatus::Canceled => return acc,
        }
        if sub.status == SubscriptionStatus::Active {
            acc.mrr_minor += match sub.interval {
                BillingInterval::Monthly => sub.amount_minor,
                BillingInterval::Yearly => sub.amount_minor / 12,
            };
        }
        acc
    })
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <AppShell>
            <DashboardView/>
        </AppShell>
    }
}

#[component]
fn DashboardView() -> impl IntoView {
    let alive = AliveFlag::for_current_owner();
    let layout = RwSignal::new(DashboardLayout::default());
    Effect::new(move || layout.set(DashboardLayout::load(&BrowserStorage)));

    let balance = RwSignal::new(FetchState::<Balance>::loading());
    let transactions = RwSignal::new(FetchState::<Vec<Transaction>>::loading());
    let subscriptions = RwSignal::new(FetchState::<Paged<Subscription>>::loading());
    let balance_version = RwSignal::new(0_u64);
    let transactions_version = RwSignal::new(0_u64);
    let subscriptions_version = RwSignal::new(0_u64);
    refetch_on(RefreshReason::Balance, balance_version);
    refetch_on(RefreshReason::Transactions, transactions_version);
    refetch_on(RefreshReason::Subscriptions, subscriptions_version);

    let alive_balance = alive.clone();
    Effect::new(move || {
        balance_version.track();
        fetch_into(balance, alive_balance.clone(), api::get_balance());
    });
    let alive_transactions = alive.clone();
    Effect::new(move || {
        transactions_version.track();
        fetch_into(transactions, alive_transactions.clone(), api::list_transactions());
    });
    Effect::new(move || {
        subscriptions_version.track();
        fetch_into(subscriptions, alive.clone(), api::list_subscriptions(1, 100));
    });

    let persist = move || layout.with_untracked(|l| l.save(&BrowserStorage));

    view! {
        <div class="page dashboard-page">
            <header class="page__header">
                <h1>"Dashboard"</h1>
                <button
                    class="btn btn--link"
                    on:click=move |_| {
                        layout.update(DashboardLayout::reset);
                        persist();
                    }
                >
                    "Reset layout"
                </button>
            </header>
            <div class="widget-grid">
                {move || {
                    let order = layout.with(|l| l.widgets().to_vec());
                    let count = order.len();
                    order
                        .into_iter()
                        .enumerate()
                        .map(|(index, widget)| {
                            view! {
                                <div
                                    class=move || {
                                        if layout.with(DashboardLayout::dragging) == Some(index) {
                                            "widget widget--dragging"
                                        } else {
                                            "widget"
                                        }
                                    }
                                    draggable="true"
                                    on:dragstart=move |_| layout.update(|l| l.start_drag(index))
                                    on:dragover=move |ev: leptos::ev::DragEvent| ev.prevent_default()
                                    on:drop=move |ev: leptos::ev::DragEvent| {
                                        ev.prevent_default();
                                        if layout.try_update(|l| l.drop_on(index)).unwrap_or(false) {
                                            persist();
                                        }
                                    }
                                    on:dragend=move |_| layout.update(DashboardLayout::cancel_drag)
                                >
                                    <div class="widget__toolbar">
                                        <span class="widget__handle" aria-hidden="true">"⠿"</span>
                                        <button
                                            class="btn btn--icon"
                                            title="Move up"
                                            disabled={index == 0}
                                            on:click=move |_| {
                                                if layout.try_update(|l| l.move_widget(index, index.saturating_sub(1))).unwrap_or(false) {
                                                    persist();
                                                }
                                            }
                                        >
                                            "↑"
                                        </button>
                                        <button
                                            class="btn btn--icon"
                                            title="Move down"
                                            disabled={index + 1 == count}
                                            on:click=move |_| {
                                                if layout.try_update(|l| l.move_widget(index, index + 1)).unwrap_or(false) {
                                                    persist();
                                                }
                                            }
                                        >
                                            "↓"
                                        </button>
                                    </div>
                                    <WidgetBody widget=widget balance=balance transactions=transactions subscriptions=subscriptions/>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[component]
fn WidgetBody(
    widget: Widget,
    balance: RwSignal<FetchState<Balance>>,
    transactions: RwSignal<FetchState<Vec<Transaction>>>,
    subscriptions: RwSignal<FetchState<Paged<Subscription>>>,
) -> impl IntoView {
    match widget {
        Widget::Balance => {
            view! {
                {move || {
                    let state = balance.get();
                    match (state.data, state.error) {
                        (Some(data), _) => view! { <BalanceCard balance=data show_payout_link=true/> }.into_any(),
                        (None, Some(error)) => view! { <p class="card card__error">{error}</p> }.into_any(),
                        (None, None) => view! { <p class="card card__placeholder">"Loading balance..."</p> }.into_any(),
                    }
                }}
            }
                .into_any()
        }
        Widget::Analytics => view! { <AnalyticsWidget/> }.into_any(),
        Widget::RecentTransactions => {
            let rows = Signal::derive(move || transactions.with(|s| s.data.clone().unwrap_or_default()));
            view! { <RecentTransactions transactions=rows/> }.into_any()
        }
        Widget::Subscriptions => view! { <SubscriptionsWidget subscriptions=subscriptions/> }.into_any(),
        Widget::QuickActions => view! { <QuickActions/> }.into_any(),
    }
}

#[component]
fn SubscriptionsWidget(subscriptions: RwSignal<FetchState<Paged<Subscription>>>) -> impl IntoView {
    let currency = expect_context::<RwSignal<CurrencyState>>();
    let summary = move || subscriptions.with(|s| s.data.as_ref().map(|page| summarize(&page.data)));

    view! {
        <section class="card subscriptions-widget">
            <header class="card__header">
                <h3 class="card__title">{Widget::Subscriptions.title()}</h3>
                <a class="btn btn--link" href="/subscriptions">"Manage"</a>
            </header>
            {move || match summary() {
                Some(s) => {
                    view! {
                        <dl class="subscriptions-widget__figures">
                            <div>
                                <dt>"Active"</dt>
                                <dd>{s.active}</dd>
                            </div>
                            <div>
                                <dt>"Trialing"</dt>
                                <dd>{s.trialing}</dd>
                            </div>
                            <div>
                                <dt>"Past due"</dt>
                                <dd>{s.past_due}</dd>
                            </div>
                            <div>
                                <dt>"MRR"</dt>
                                <dd>{currency.with(|c| c.format(s.mrr_minor))}</dd>
                            </div>
                        </dl>
                    }
                        .into_any()
                }
                None => view! { <p class="card__placeholder">"Loading subscriptions..."</p> }.into_any(),
            }}
        </section>
    }
}

#[component]
fn QuickActions() -> impl IntoView {
    view! {
        <section class="card quick-actions">
            <h3 class="card__title">{Widget::QuickActions.title()}</h3>
            <ul class="quick-actions__list">
                <li>
                    <a href="/subscriptions">"New subscription"</a>
                </li>
                <li>
                    <a href="/storefronts">"Create storefront"</a>
                </li>
                <li>
                    <a href="/balance">"Request payout"</a>
                </li>
                <li>
                    <a href="/payment-methods">"Add payment method"</a>
                </li>
            </ul>
        </section>
    }
}
