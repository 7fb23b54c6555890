//! Top navigation for signed-in pages: section links, display currency,
//! merchant name and sign-out.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::toast_stack::Toaster;
use crate::state::auth::AuthState;
use crate::state::currency::{Currency, CurrencyState};
use crate::util::auth::sign_out;
use crate::util::storage::BrowserStorage;

const NAV_LINKS: &[(&str, &str)] = &[
    ("/dashboard", "Dashboard"),
    ("/transactions", "Transactions"),
    ("/invoices", "Invoices"),
    ("/subscriptions", "Subscriptions"),
    ("/storefronts", "Storefronts"),
    ("/balance", "Balance"),
    ("/payment-methods", "Payment methods"),
];

/// A section link is active on its own path and on any nested path.
fn is_active(pathname: &str, href: &str) -> bool {
    pathname == href || pathname.strip_prefix(href).is_some_and(|rest| rest.starts_with('/'))
}

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let currency = expect_context::<RwSignal<CurrencyState>>();
    let toaster = expect_context::<Toaster>();
    let location = use_location();

    let merchant = move || {
        auth.with(|a| {
            a.user
                .as_ref()
                .map(|u| u.business_name.clone().unwrap_or_else(|| u.name.clone()))
                .unwrap_or_default()
        })
    };

    let on_currency = move |ev: leptos::ev::Event| {
        if let Some(selected) = Currency::from_code(&event_target_value(&ev)) {
            currency.update(|c| c.select(selected, &BrowserStorage));
        }
    };

    let on_sign_out = move |_| {
        toaster.info("Signing out...");
        sign_out(auth);
    };

    view! {
        <header class="navbar">
            <a class="navbar__brand" href="/dashboard">"Paybord"</a>
            <nav class="navbar__links">
                {NAV_LINKS
                    .iter()
                    .map(|(href, label)| {
                        let href = *href;
                        view! {
                            <a
                                href=href
                                class=move || {
                                    if location.pathname.with(|p| is_active(p, href)) {
                                        "navbar__link navbar__link--active"
                                    } else {
                                        "navbar__link"
                                    }
                                }
                            >
                                {*label}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
            <span class="navbar__spacer"></span>
            <select
                class="navbar__currency"
                title="Display currency"
                prop:value=move || currency.with(|c| c.selected.code())
                on:change=on_currency
            >
                {Currency::ALL
                    .into_iter()
                    .map(|c| view! { <option value=c.code()>{c.code()}</option> })
                    .collect_view()}
            </select>
            <span class="navbar__merchant">{merchant}</span>
            <button class="btn navbar__sign-out" on:click=on_sign_out>
                "Sign out"
            </button>
        </header>
    }
}
