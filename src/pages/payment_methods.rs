//! Saved cards: add, remove, choose the default.

#[cfg(test)]
#[path = "payment_methods_test.rs"]
mod payment_methods_test;

use leptos::prelude::*;

use crate::components::empty_state::EmptyState;
use crate::components::layout::AppShell;
use crate::components::payment_method_form::PaymentMethodForm;
use crate::components::toast_stack::Toaster;
use crate::net::api;
use crate::net::types::PaymentMethod;
use crate::state::fetch::FetchState;
use crate::state::refresh::{AppRefresh, RefreshReason};
use crate::util::alive::{AliveFlag, spawn_guarded};
use crate::util::clock::now_ms;
use crate::util::format::mask_card;
use crate::util::loader::{fetch_into, refetch_on};

fn expiry_label(method: &PaymentMethod) -> String {
    format!("{:02}/{:02}", method.exp_month, method.exp_year % 100)
}

#[component]
pub fn PaymentMethodsPage() -> impl IntoView {
    view! {
        <AppShell>
            <PaymentMethodsView/>
        </AppShell>
    }
}

#[component]
fn PaymentMethodsView() -> impl IntoView {
    let toaster = expect_context::<Toaster>();
    let hub = expect_context::<AppRefresh>();
    let alive = AliveFlag::for_current_owner();
    let version = RwSignal::new(0_u64);
    let methods = RwSignal::new(FetchState::<Vec<PaymentMethod>>::loading());
    let adding = RwSignal::new(false);
    refetch_on(RefreshReason::PaymentMethods, version);

    let alive_fetch = alive.clone();
    Effect::new(move || {
        version.track();
        fetch_into(methods, alive_fetch.clone(), api::list_payment_methods());
    });

    let changed = move || hub.announce(RefreshReason::PaymentMethods, now_ms());
    let on_added = {
        let changed = changed.clone();
        Callback::new(move |_: PaymentMethod| {
            adding.set(false);
            changed();
        })
    };
    let on_close = Callback::new(move |()| adding.set(false));

    let remove = {
        let changed = changed.clone();
        let alive = alive.clone();
        Callback::new(move |method: PaymentMethod| {
            let id = method.id.clone();
            let changed = changed.clone();
            spawn_guarded(alive.clone(), async move { api::remove_payment_method(&id).await }, move |result| {
                match result {
                    Ok(()) => {
                        toaster.success(format!("Removed {}", mask_card(&method.last4)));
                        changed();
                    }
                    Err(e) => toaster.api_error(&e),
                }
            });
        })
    };
    let make_default = Callback::new(move |method: PaymentMethod| {
        let id = method.id.clone();
        let changed = changed.clone();
        spawn_guarded(alive.clone(), async move { api::set_default_payment_method(&id).await }, move |result| {
            match result {
                Ok(updated) => {
                    toaster.success(format!("{} {} is now your default card", updated.brand, mask_card(&updated.last4)));
                    changed();
                }
                Err(e) => toaster.api_error(&e),
            }
        });
    });

    view! {
        <div class="page payment-methods-page">
            <header class="page__header">
                <h1>"Payment methods"</h1>
                <button class="btn btn--primary" on:click=move |_| adding.set(true)>
                    "Add card"
                </button>
            </header>
            <Show when=move || adding.get()>
                <PaymentMethodForm on_complete=on_added on_cancel=on_close/>
            </Show>
            {move || methods.with(|s| s.error.clone()).map(|e| view! { <p class="page__error">{e}</p> })}
            {move || {
                let state = methods.get();
                if state.is_initial_load() {
                    return view! { <p class="page__loading">"Loading payment methods..."</p> }.into_any();
                }
                let cards = state.data.unwrap_or_default();
                if cards.is_empty() {
                    return view! { <EmptyState title="No saved cards" message="Add a card to pay for your plan."/> }
                        .into_any();
                }
                view! {
                    <ul class="card-list">
                        {cards
                            .into_iter()
                            .map(|method| {
                                let for_remove = method.clone();
                                let for_default = method.clone();
                                view! {
                                    <li class="card card-list__item">
                                        <span class="card-list__brand">{method.brand.clone()}</span>
                                        <span class="card-list__number">{mask_card(&method.last4)}</span>
                                        <span class="table__muted">{expiry_label(&method)}</span>
                                        <span class="table__muted">{method.cardholder_name.clone()}</span>
                                        {if method.is_default {
                                            view! { <span class="badge badge--default">"Default"</span> }.into_any()
                                        } else {
                                            view! {
                                                <button
                                                    class="btn btn--link"
                                                    on:click=move |_| make_default.run(for_default.clone())
                                                >
                                                    "Make default"
                                                </button>
                                            }
                                                .into_any()
                                        }}
                                        <button
                                            class="btn btn--link btn--danger"
                                            on:click=move |_| remove.run(for_remove.clone())
                                        >
                                            "Remove"
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                }
                    .into_any()
            }}
        </div>
    }
}
