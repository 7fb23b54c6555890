//! Invoice table with number / customer search and a status filter.

#[cfg(test)]
#[path = "invoice_list_test.rs"]
mod invoice_list_test;

use leptos::prelude::*;

use crate::components::empty_state::EmptyState;
use crate::components::pagination::{PageModel, Pagination, configured_query};
use crate::components::status_badge::StatusBadge;
use crate::list_view::{ALL, ListQuery};
use crate::net::types::{Invoice, InvoiceStatus};
use crate::util::format::{format_money, short_date};

const STATUS_FILTERS: &[(&str, &str)] = &[
    (ALL, "All invoices"),
    ("draft", "Draft"),
    ("open", "Open"),
    ("paid", "Paid"),
    ("overdue", "Overdue"),
    ("void", "Void"),
];

/// Amount still owed across `invoices` (open and overdue only).
fn outstanding_minor(invoices: &[Invoice]) -> i64 {
    invoices
        .iter()
        .filter(|inv| matches!(inv.status, InvoiceStatus::Open | InvoiceStatus::Overdue))
        .map(|inv| inv.amount_minor)
        .sum()
}

#[component]
pub fn InvoiceList(#[prop(into)] invoices: Signal<Vec<Invoice>>) -> impl IntoView {
    let query = RwSignal::new(configured_query());
    let model = Memo::new(move |_| invoices.with(|source| query.with(|q| PageModel::derive(source, q))));
    let outstanding = move || {
        invoices.with(|all| {
            let currency = all.first().map_or("USD", |inv| inv.currency.as_str());
            format_money(outstanding_minor(all), currency)
        })
    };

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
        <section class="card invoices">
            <p class="invoices__outstanding">"Outstanding: " {outstanding}</p>
            <div class="list-controls">
                <input
                    class="list-controls__search"
                    type="search"
                    placeholder="Search invoice number or customer"
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
            </div>
            <Show
                when=move || model.with(|m| m.total > 0)
                fallback=move || {
                    let title = if query.with(ListQuery::is_filtered) { "No matching invoices" } else { "No invoices yet" };
                    view! { <EmptyState title=title/> }
                }
            >
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Invoice"</th>
                            <th>"Customer"</th>
                            <th>"Issued"</th>
                            <th>"Due"</th>
                            <th>"Status"</th>
                            <th class="amount">"Amount"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || model.get().rows
                            key=|inv| inv.id.clone()
                            children=|inv| {
                                let amount = format_money(inv.amount_minor, &inv.currency);
                                let issued = short_date(&inv.issued_at).to_owned();
                                view! {
                                    <tr>
                                        <td>{inv.number}</td>
                                        <td>{inv.customer}</td>
                                        <td class="table__date">{issued}</td>
                                        <td class="table__date">{inv.due_date}</td>
                                        <td>
                                            <StatusBadge status=inv.status.as_str()/>
                                        </td>
                                        <td class="amount">{amount}</td>
                                    </tr>
                                }
                            }
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
