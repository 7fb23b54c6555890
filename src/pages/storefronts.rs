//! Storefronts: server-paged list with create, edit and delete.

#[cfg(test)]
#[path = "storefronts_test.rs"]
mod storefronts_test;

use leptos::prelude::*;

use crate::components::empty_state::EmptyState;
use crate::components::layout::AppShell;
use crate::components::pagination::{Pagination, configured_page_size, server_range};
use crate::components::storefront_wizard::CreateStorefrontWizard;
use crate::components::toast_stack::Toaster;
use crate::list_view::Paged;
use crate::net::api;
use crate::net::types::Storefront;
use crate::state::fetch::FetchState;
use crate::state::refresh::{AppRefresh, RefreshReason};
use crate::util::alive::{AliveFlag, spawn_guarded};
use crate::util::clock::now_ms;
use crate::util::loader::{fetch_into, refetch_on};

#[derive(Clone, Debug, PartialEq)]
enum Panel {
    Closed,
    Create,
    Edit(Storefront),
}

fn product_count_label(count: u32) -> String {
    match count {
        1 => "1 product".to_owned(),
        n => format!("{n} products"),
    }
}

#[component]
pub fn StorefrontsPage() -> impl IntoView {
    view! {
        <AppShell>
            <StorefrontsView/>
        </AppShell>
    }
}

#[component]
fn StorefrontsView() -> impl IntoView {
    let toaster = expect_context::<Toaster>();
    let hub = expect_context::<AppRefresh>();
    let alive = AliveFlag::for_current_owner();
    let limit = configured_page_size();
    let page = RwSignal::new(1_usize);
    let version = RwSignal::new(0_u64);
    let storefronts = RwSignal::new(FetchState::<Paged<Storefront>>::loading());
    let panel = RwSignal::new(Panel::Closed);

    refetch_on(RefreshReason::Storefronts, version);
    let alive_fetch = alive.clone();
    Effect::new(move || {
        let requested = page.get();
        version.track();
        fetch_into(storefronts, alive_fetch.clone(), api::list_storefronts(requested, limit));
    });

    let announce = move || hub.announce(RefreshReason::Storefronts, now_ms());
    let on_saved = {
        let announce = announce.clone();
        Callback::new(move |_: Storefront| {
            panel.set(Panel::Closed);
            announce();
        })
    };
    let on_close = Callback::new(move |()| panel.set(Panel::Closed));

    let delete = Callback::new(move |store: Storefront| {
        let id = store.id.clone();
        let announce = announce.clone();
        spawn_guarded(alive.clone(), async move { api::delete_storefront(&id).await }, move |result| match result {
            Ok(()) => {
                toaster.success(format!("Deleted {}", store.name));
                announce();
            }
            Err(e) => toaster.api_error(&e),
        });
    });

    let rows = move || storefronts.with(|s| s.data.as_ref().map(|p| p.data.clone()).unwrap_or_default());
    let pages = Signal::derive(move || storefronts.with(|s| s.data.as_ref().map_or(1, |p| p.pages)));
    let total = Signal::derive(move || storefronts.with(|s| s.data.as_ref().map_or(0, |p| p.total)));
    let range = Signal::derive(move || server_range(page.get(), limit, rows().len()));

    view! {
        <div class="page storefronts-page">
            <header class="page__header">
                <h1>"Storefronts"</h1>
                <button class="btn btn--primary" on:click=move |_| panel.set(Panel::Create)>
                    "New storefront"
                </button>
            </header>
            {move || match panel.get() {
                Panel::Closed => ().into_any(),
                Panel::Create => view! { <CreateStorefrontWizard on_complete=on_saved on_cancel=on_close/> }.into_any(),
                Panel::Edit(store) => {
                    view! { <CreateStorefrontWizard existing=store on_complete=on_saved on_cancel=on_close/> }.into_any()
                }
            }}
            {move || storefronts.with(|s| s.error.clone()).map(|e| view! { <p class="page__error">{e}</p> })}
            <Show
                when=move || !storefronts.with(FetchState::is_initial_load)
                fallback=|| view! { <p class="page__loading">"Loading storefronts..."</p> }
            >
                <Show
                    when=move || { total.get() > 0 }
                    fallback=|| view! { <EmptyState title="No storefronts yet" message="Create a store to start selling products."/> }
                >
                    <div class="storefront-grid">
                        <For
                            each=rows
                            key=|store| (store.id.clone(), store.name.clone(), store.slug.clone(), store.product_count)
                            children=move |store| {
                                let for_edit = store.clone();
                                let for_delete = store.clone();
                                let href = format!("/storefronts/{}", store.id);
                                view! {
                                    <article class="card storefront-card">
                                        <h3 class="card__title">
                                            <a href=href>{store.name.clone()}</a>
                                        </h3>
                                        <p class="storefront-card__slug">{format!("/{}", store.slug)}</p>
                                        <p class="table__muted">{store.description.clone().unwrap_or_default()}</p>
                                        <p class="storefront-card__meta">
                                            {product_count_label(store.product_count)} " · " {store.currency.clone()}
                                        </p>
                                        <div class="card__actions">
                                            <button class="btn btn--link" on:click=move |_| panel.set(Panel::Edit(for_edit.clone()))>
                                                "Edit"
                                            </button>
                                            <button class="btn btn--link btn--danger" on:click=move |_| delete.run(for_delete.clone())>
                                                "Delete"
                                            </button>
                                        </div>
                                    </article>
                                }
                            }
                        />
                    </div>
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
