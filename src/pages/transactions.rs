//! Transaction history page.

use leptos::prelude::*;

use crate::components::layout::AppShell;
use crate::components::transaction_table::TransactionHistory;
use crate::net::api;
use crate::net::types::Transaction;
use crate::state::fetch::FetchState;
use crate::state::refresh::RefreshReason;
use crate::util::alive::AliveFlag;
use crate::util::loader::{fetch_into, refetch_on};

#[component]
pub fn TransactionsPage() -> impl IntoView {
    view! {
        <AppShell>
            <TransactionsView/>
        </AppShell>
    }
}

#[component]
fn TransactionsView() -> impl IntoView {
    let alive = AliveFlag::for_current_owner();
    let version = RwSignal::new(0_u64);
    let transactions = RwSignal::new(FetchState::<Vec<Transaction>>::loading());
    refetch_on(RefreshReason::Transactions, version);
    Effect::new(move || {
        version.track();
        fetch_into(transactions, alive.clone(), api::list_transactions());
    });

    let rows = Signal::derive(move || transactions.with(|s| s.data.clone().unwrap_or_default()));

    view! {
        <div class="page transactions-page">
            <header class="page__header">
                <h1>"Transactions"</h1>
                <button class="btn" on:click=move |_| version.update(|v| *v += 1)>
                    "Refresh"
                </button>
            </header>
            {move || transactions.with(|s| s.error.clone()).map(|e| view! { <p class="page__error">{e}</p> })}
            <Show
                when=move || !transactions.with(FetchState::is_initial_load)
                fallback=|| view! { <p class="page__loading">"Loading transactions..."</p> }
            >
                {view! { <TransactionHistory transactions=rows/> }.into_any()}
            </Show>
        </div>
    }
}
