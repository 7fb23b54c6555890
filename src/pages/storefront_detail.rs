//! One storefront and its products.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::empty_state::EmptyState;
use crate::components::layout::AppShell;
use crate::components::pagination::{Pagination, configured_page_size, server_range};
use crate::components::product_form::ProductForm;
use crate::components::toast_stack::Toaster;
use crate::error::ApiError;
use crate::list_view::Paged;
use crate::net::api;
use crate::net::types::{Product, Storefront};
use crate::state::fetch::FetchState;
use crate::state::refresh::{AppRefresh, RefreshReason};
use crate::util::alive::{AliveFlag, spawn_guarded};
use crate::util::clock::now_ms;
use crate::util::format::format_money;
use crate::util::loader::{fetch_into, refetch_on};

#[derive(Clone, Debug, PartialEq)]
enum Panel {
    Closed,
    Add,
    Edit(Product),
}

#[component]
pub fn StorefrontDetailPage() -> impl IntoView {
    view! {
        <AppShell>
            <StorefrontDetailView/>
        </AppShell>
    }
}

#[component]
fn StorefrontDetailView() -> impl IntoView {
    let params = use_params_map();
    let storefront_id = Memo::new(move |_| params.read().get("id").unwrap_or_default());
    let toaster = expect_context::<Toaster>();
    let hub = expect_context::<AppRefresh>();
    let alive = AliveFlag::for_current_owner();
    let limit = configured_page_size();

    let store = RwSignal::new(FetchState::<Storefront>::loading());
    let missing = RwSignal::new(false);
    let products = RwSignal::new(FetchState::<Paged<Product>>::loading());
    let page = RwSignal::new(1_usize);
    let version = RwSignal::new(0_u64);
    let panel = RwSignal::new(Panel::Closed);
    refetch_on(RefreshReason::Products, version);

    let alive_store = alive.clone();
    Effect::new(move || {
        let id = storefront_id.get();
        store.update(FetchState::start);
        spawn_guarded(alive_store.clone(), async move { api::get_storefront(&id).await }, move |result| {
            missing.set(matches!(result, Err(ApiError::NotFound)));
            store.try_update(|s| s.finish(result));
        });
    });
    let alive_products = alive.clone();
    Effect::new(move || {
        let id = storefront_id.get();
        let requested = page.get();
        version.track();
        fetch_into(products, alive_products.clone(), async move { api::list_products(&id, requested, limit).await });
    });

    let changed = move || {
        hub.announce(RefreshReason::Products, now_ms());
        hub.announce(RefreshReason::Storefronts, now_ms());
    };
    let on_saved = {
        let changed = changed.clone();
        Callback::new(move |_: Product| {
            panel.set(Panel::Closed);
            changed();
        })
    };
    let on_close = Callback::new(move |()| panel.set(Panel::Closed));
    let delete = Callback::new(move |product: Product| {
        let store_id = storefront_id.get_untracked();
        let product_id = product.id.clone();
        let changed = changed.clone();
        spawn_guarded(
            alive.clone(),
            async move { api::delete_product(&store_id, &product_id).await },
            move |result| match result {
                Ok(()) => {
                    toaster.success(format!("Removed {}", product.name));
                    changed();
                }
                Err(e) => toaster.api_error(&e),
            },
        );
    });

    let rows = move || products.with(|s| s.data.as_ref().map(|p| p.data.clone()).unwrap_or_default());
    let pages = Signal::derive(move || products.with(|s| s.data.as_ref().map_or(1, |p| p.pages)));
    let total = Signal::derive(move || products.with(|s| s.data.as_ref().map_or(0, |p| p.total)));
    let range = Signal::derive(move || server_range(page.get(), limit, rows().len()));

    view! {
        <div class="page storefront-detail-page">
            <Show
                when=move || !missing.get()
                fallback=|| {
                    view! {
                        <EmptyState
                            title="Storefront not found"
                            message="It may have been deleted."
                            action=("Back to storefronts", "/storefronts")
                        />
                    }
                }
            >
                <header class="page__header">
                    <div>
                        <a class="btn btn--link" href="/storefronts">"← Storefronts"</a>
                        <h1>{move || store.with(|s| s.data.as_ref().map(|st| st.name.clone()).unwrap_or_default())}</h1>
                        <p class="table__muted">
                            {move || store.with(|s| s.data.as_ref().and_then(|st| st.description.clone()).unwrap_or_default())}
                        </p>
                    </div>
                    <button class="btn btn--primary" on:click=move |_| panel.set(Panel::Add)>
                        "Add product"
                    </button>
                </header>
                {move || {
                    let id = storefront_id.get();
                    match panel.get() {
                        Panel::Closed => ().into_any(),
                        Panel::Add => {
                            view! { <ProductForm storefront_id=id on_complete=on_saved on_cancel=on_close/> }.into_any()
                        }
                        Panel::Edit(product) => {
                            view! { <ProductForm storefront_id=id existing=product on_complete=on_saved on_cancel=on_close/> }
                                .into_any()
                        }
                    }
                }}
                {move || products.with(|s| s.error.clone()).map(|e| view! { <p class="page__error">{e}</p> })}
                <Show
                    when=move || { total.get() > 0 }
                    fallback=move || {
                        if products.with(FetchState::is_initial_load) {
                            view! { <p class="page__loading">"Loading products..."</p> }.into_any()
                        } else {
                            view! { <EmptyState title="No products yet" message="Add your first product to this store."/> }
                                .into_any()
                        }
                    }
                >
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Product"</th>
                                <th>"Description"</th>
                                <th class="amount">"Price"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=rows
                                key=|p| (p.id.clone(), p.name.clone(), p.price_minor, p.description.clone())
                                children=move |product| {
                                    let for_edit = product.clone();
                                    let for_delete = product.clone();
                                    view! {
                                        <tr>
                                            <td>{product.name.clone()}</td>
                                            <td class="table__muted">{product.description.clone().unwrap_or_default()}</td>
                                            <td class="amount">{format_money(product.price_minor, &product.currency)}</td>
                                            <td class="table__actions">
                                                <button class="btn btn--link" on:click=move |_| panel.set(Panel::Edit(for_edit.clone()))>
                                                    "Edit"
                                                </button>
                                                <button
                                                    class="btn btn--link btn--danger"
                                                    on:click=move |_| delete.run(for_delete.clone())
                                                >
                                                    "Delete"
                                                </button>
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
