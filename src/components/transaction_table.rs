//! Transaction history (search, status filter, pages) and the compact
//! recent-activity list used on the dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host page owns the fetched collection; these components only derive
//! views of it. Clearing the search and filter shows the source unchanged.

#[cfg(test)]
#[path = "transaction_table_test.rs"]
mod transaction_table_test;

use leptos::prelude::*;

use crate::components::empty_state::EmptyState;
use crate::components::pagination::{PageModel, Pagination, configured_query};
use crate::components::status_badge::StatusBadge;
use crate::list_view::{ALL, ListQuery};
use crate::net::types::{Transaction, TransactionKind};
use crate::util::format::{format_money, short_date};

const STATUS_FILTERS: &[(&str, &str)] = &[
    (ALL, "All statuses"),
    ("succeeded", "Succeeded"),
    ("pending", "Pending"),
    ("failed", "Failed"),
    ("refunded", "Refunded"),
];

/// Money leaving the account renders with a minus sign.
fn display_amount(tx: &Transaction) -> String {
    let formatted = format_money(tx.amount_minor.abs(), &tx.currency);
    match tx.kind {
        TransactionKind::Payout | TransactionKind::Refund => format!("-{formatted}"),
        TransactionKind::Payment | TransactionKind::Subscription => formatted,
    }
}

fn amount_class(kind: TransactionKind) -> &'static str {
    match kind {
        TransactionKind::Payout | TransactionKind::Refund => "amount amount--out",
        TransactionKind::Payment | TransactionKind::Subscription => "amount",
    }
}

#[component]
fn TransactionRow(tx: Transaction) -> impl IntoView {
    let amount = display_amount(&tx);
    let date = short_date(&tx.created_at).to_owned();
    view! {
        <tr>
            <td class="table__date">{date}</td>
            <td>{tx.description}</td>
            <td class="table__muted">{tx.customer.unwrap_or_default()}</td>
            <td>
                <StatusBadge status=tx.status.as_str()/>
            </td>
            <td class=amount_class(tx.kind)>{amount}</td>
        </tr>
    }
}

/// Full, searchable history table.
#[component]
pub fn TransactionHistory(#[prop(into)] transactions: Signal<Vec<Transaction>>) -> impl IntoView {
    let query = RwSignal::new(configured_query());
    let model = Memo::new(move |_| transactions.with(|source| query.with(|q| PageModel::derive(source, q))));
    let filtered = move || query.with(ListQuery::is_filtered);

    let on_search = move |ev: leptos::ev::Event| {
        let text = event_target_value(&ev);
        query.update(|q| q.set_search(text));
    };
    let on_filter = move |ev: leptos::ev::Event| {
        let category = event_target_value(&ev);
        query.update(|q| q.set_filter(category));
    };
    let on_page = Callback::new(move |page: usize| query.update(|q| q.set_page(page)));

    view! {
        <section class="card transactions">
            <div class="list-controls">
                <input
                    class="list-controls__search"
                    type="search"
                    placeholder="Search description, customer or ID"
                    prop:value=move || query.with(|q| q.search.clone())
                    on:input=on_search
                />
                <select
                    class="list-controls__filter"
                    prop:value=move || query.with(|q| q.filter.clone())
                    on:change=on_filter
                >
                    {STATUS_FILTERS
                        .iter()
                        .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                        .collect_view()}
                </select>
                <Show when=filtered>
                    <button class="btn btn--link" on:click=move |_| query.update(ListQuery::clear)>
                        "Clear"
                    </button>
                </Show>
            </div>
            <Show
                when=move || model.with(|m| m.total > 0)
                fallback=move || {
                    if filtered() {
                        view! { <EmptyState title="No matching transactions" message="Try a different search or filter."/> }
                            .into_any()
                    } else {
                        view! { <EmptyState title="No transactions yet" message="Payments you receive will appear here."/> }
                            .into_any()
                    }
                }
            >
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Date"</th>
                            <th>"Description"</th>
                            <th>"Customer"</th>
                            <th>"Status"</th>
                            <th class="amount">"Amount"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || model.get().rows
                            key=|tx| tx.id.clone()
                            children=|tx| view! { <TransactionRow tx=tx/> }
                        />
                    </tbody>
                </table>
                <Pagination
                    page=Signal::derive(move || model.with(|m| m.page))
                    pages=Signal::derive(move || model.with(|m| m.pages))
                    total=Signal::derive(move || model.with(|m| m.total))
                    range=Signal::derive(move || model.with(|m| m.range))
                    on_page=on_page
                />
            </Show>
        </section>
    }
}

/// Newest few transactions with a link to the full history.
#[component]
pub fn RecentTransactions(
    #[prop(into)] transactions: Signal<Vec<Transaction>>,
    #[prop(default = 5)] limit: usize,
) -> impl IntoView {
    let recent = move || transactions.with(|all| all.iter().take(limit).cloned().collect::<Vec<_>>());

    view! {
        <section class="card recent-transactions">
            <header class="card__header">
                <h3 class="card__title">"Recent transactions"</h3>
                <a class="btn btn--link" href="/transactions">"View all"</a>
            </header>
            {move || {
                let rows = recent();
                if rows.is_empty() {
                    view! { <p class="card__placeholder">"No transactions yet."</p> }.into_any()
                } else {
                    view! {
                        <ul class="recent-transactions__list">
                            {rows
                                .into_iter()
                                .map(|tx| {
                                    let amount = display_amount(&tx);
                                    view! {
                                        <li class="recent-transactions__item">
                                            <span class="recent-transactions__description">{tx.description}</span>
                                            <StatusBadge status=tx.status.as_str()/>
                                            <span class=amount_class(tx.kind)>{amount}</span>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}
