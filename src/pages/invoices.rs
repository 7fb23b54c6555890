//! Invoice list page.

use leptos::prelude::*;

use crate::components::invoice_list::InvoiceList;
use crate::components::layout::AppShell;
use crate::net::api;
use crate::net::types::Invoice;
use crate::state::fetch::FetchState;
use crate::util::alive::AliveFlag;
use crate::util::loader::fetch_into;

#[component]
pub fn InvoicesPage() -> impl IntoView {
    view! {
        <AppShell>
            <InvoicesView/>
        </AppShell>
    }
}

#[component]
fn InvoicesView() -> impl IntoView {
    let alive = AliveFlag::for_current_owner();
    let invoices = RwSignal::new(FetchState::<Vec<Invoice>>::loading());
    Effect::new(move || fetch_into(invoices, alive.clone(), api::list_invoices()));

    let rows = Signal::derive(move || invoices.with(|s| s.data.clone().unwrap_or_default()));

    view! {
        <div class="page invoices-page">
            <header class="page__header">
                <h1>"Invoices"</h1>
            </header>
            {move || invoices.with(|s| s.error.clone()).map(|e| view! { <p class="page__error">{e}</p> })}
            <Show
                when=move || !invoices.with(FetchState::is_initial_load)
                fallback=|| view! { <p class="page__loading">"Loading invoices..."</p> }
            >
                {view! { <InvoiceList invoices=rows/> }.into_any()}
            </Show>
        </div>
    }
}
