//! Subscriptions: server-paged list with create, plan switch and cancel.

use leptos::prelude::*;

use crate::components::empty_state::EmptyState;
use crate::components::layout::AppShell;
use crate::components::pagination::{Pagination, configured_page_size, server_range};
use crate::components::plan_switcher::PlanSwitcher;
use crate::components::status_badge::StatusBadge;
use crate::components::subscription_wizard::CreateSubscriptionWizard;
use crate::components::toast_stack::Toaster;
use crate::list_view::Paged;
use crate::net::api;
use crate::net::types::{Subscription, SubscriptionStatus};
use crate::state::fetch::FetchState;
use crate::state::refresh::{AppRefresh, RefreshReason};
use crate::util::alive::{AliveFlag, spawn_guarded};
use crate::util::clock::now_ms;
use crate::util::format::format_money;
use crate::util::loader::{fetch_into, refetch_on};
use crate::wizard::flows::{PLANS, choice_label};

#[derive(Clone, Debug, PartialEq)]
enum Panel {
    Closed,
    Create,
    Switch(Subscription),
}

#[component]
pub fn SubscriptionsPage() -> impl IntoView {
    view! {
        <AppShell>
            <SubscriptionsView/>
        </AppShell>
    }
}

#[component]
fn SubscriptionsView() -> impl IntoView {
    let toaster = expect_context::<Toaster>();
    let hub = expect_context::<AppRefresh>();
    let alive = AliveFlag::for_current_owner();
    let limit = configured_page_size();
    let page = RwSignal::new(1_usize);
    let version = RwSignal::new(0_u64);
    let subscriptions = RwSignal::new(FetchState::<Paged<Subscription>>::loading());
    let panel = RwSignal::new(Panel::Closed);
    let cancelling = RwSignal::new(None::<String>);

    refetch_on(RefreshReason::Subscriptions, version);
    let alive_fetch = alive.clone();
    Effect::new(move || {
        let requested = page.get();
        version.track();
        fetch_into(subscriptions, alive_fetch.clone(), api::list_subscriptions(requested, limit));
    });

    let changed = {
        let hub = hub.clone();
        move || {
            hub.announce(RefreshReason::Subscriptions, now_ms());
            hub.announce(RefreshReason::Transactions, now_ms());
        }
    };

    let on_created = {
        let changed = changed.clone();
        Callback::new(move |_: Subscription| {
            panel.set(Panel::Closed);
            page.set(1);
            changed();
        })
    };
    let on_switched = Callback::new(move |_: Subscription| {
        panel.set(Panel::Closed);
        hub.announce(RefreshReason::Subscriptions, now_ms());
    });
    let on_close = Callback::new(move |()| panel.set(Panel::Closed));

    let cancel = Callback::new(move |sub: Subscription| {
        cancelling.set(Some(sub.id.clone()));
        let id = sub.id.clone();
        let changed = changed.clone();
        spawn_guarded(alive.clone(), async move { api::delete_subscription(&id).await }, move |result| {
            cancelling.set(None);
            match result {
                Ok(()) => {
                    toaster.success(format!("Canceled subscription for {}", sub.customer));
                    changed();
                }
                Err(e) => toaster.api_error(&e),
            }
        });
    });

    let rows = move || subscriptions.with(|s| s.data.as_ref().map(|p| p.data.clone()).unwrap_or_default());
    let pages = Signal::derive(move || subscriptions.with(|s| s.data.as_ref().map_or(1, |p| p.pages)));
    let total = Signal::derive(move || subscriptions.with(|s| s.data.as_ref().map_or(0, |p| p.total)));
    let range = Signal::derive(move || server_range(page.get(), limit, rows().len()));

    view! {
        <div class="page subscriptions-page">
            <header class="page__header">
                <h1>"Subscriptions"</h1>
                <button class="btn btn--primary" on:click=move |_| panel.set(Panel::Create)>
                    "New subscription"
                </button>
            </header>
            {move || match panel.get() {
                Panel::Closed => ().into_any(),
                Panel::Create => view! { <CreateSubscriptionWizard on_complete=on_created on_cancel=on_close/> }.into_any(),
                Panel::Switch(sub) => {
                    view! { <PlanSwitcher subscription=sub on_complete=on_switched on_cancel=on_close/> }.into_any()
                }
            }}
            {move || subscriptions.with(|s| s.error.clone()).map(|e| view! { <p class="page__error">{e}</p> })}
            <Show
                when=move || !subscriptions.with(FetchState::is_initial_load)
                fallback=|| view! { <p class="page__loading">"Loading subscriptions..."</p> }
            >
                <Show
                    when=move || { total.get() > 0 }
                    fallback=|| {
                        view! { <EmptyState title="No subscriptions yet" message="Create one to start recurring billing."/> }
                    }
                >
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Customer"</th>
                                <th>"Plan"</th>
                                <th>"Status"</th>
                                <th>"Renews"</th>
                                <th class="amount">"Amount"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=rows
                                key=|sub| (sub.id.clone(), sub.plan.clone(), sub.status)
                                children=move |sub| {
                                    let live = sub.status != SubscriptionStatus::Canceled;
                                    let id = sub.id.clone();
                                    let busy = move || cancelling.with(|c| c.as_deref() == Some(id.as_str()));
                                    let for_switch = sub.clone();
                                    let for_cancel = sub.clone();
                                    view! {
                                        <tr>
                                            <td>{sub.customer.clone()}</td>
                                            <td>{choice_label(PLANS, &sub.plan)}</td>
                                            <td>
                                                <StatusBadge status=sub.status.as_str()/>
                                            </td>
                                            <td class="table__date">{sub.current_period_end.clone()}</td>
                                            <td class="amount">{format_money(sub.amount_minor, &sub.currency)}</td>
                                            <td class="table__actions">
                                                {live
                                                    .then(|| {
                                                        view! {
                                                            <button
                                                                class="btn btn--link"
                                                                on:click=move |_| panel.set(Panel::Switch(for_switch.clone()))
                                                            >
                                                                "Switch plan"
                                                            </button>
                                                            <button
                                                                class="btn btn--link btn--danger"
                                                                disabled=busy
                                                                on:click=move |_| cancel.run(for_cancel.clone())
                                                            >
                                                                "Cancel"
                                                            </button>
                                                        }
                                                    })}
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                    <Pagination
                        page=page
                        pages=pages
                        total=total
                        range=range
                        on_page=Callback::new(move |requested: usize| page.set(requested))
                    />
                </Show>
            </Show>
        </div>
    }
}
