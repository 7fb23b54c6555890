//! Public payment-link checkout at `/pay/:id`. No session required.
//!
//! SYSTEM CONTEXT
//! ==============
//! A missing, expired or disabled link renders one full-page error with a
//! single way out. A declined card leaves the form filled in for a retry.

#[cfg(test)]
#[path = "checkout_test.rs"]
mod checkout_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::toast_stack::Toaster;
use crate::components::wizard_form::{WizardForm, submit_wizard};
use crate::error::ApiError;
use crate::net::api;
use crate::net::types::{PaymentLinkDetails, PaymentReceipt};
use crate::util::alive::{AliveFlag, spawn_guarded};
use crate::util::format::format_money;
use crate::wizard::Wizard;
use crate::wizard::flows::{CHECKOUT, checkout_from};

#[derive(Clone, Debug, PartialEq)]
enum LinkView {
    Loading,
    Unavailable,
    Failed(String),
    Ready(PaymentLinkDetails),
}

impl LinkView {
    fn from_result(result: Result<PaymentLinkDetails, ApiError>) -> Self {
        match result {
            Ok(link) if link.is_payable() => Self::Ready(link),
            Ok(link) => {
                log::info!("payment link {} is {:?}", link.id, link.status);
                Self::Unavailable
            }
            Err(ApiError::NotFound) => Self::Unavailable,
            Err(e) => {
                log::warn!("payment link fetch failed: {e}");
                Self::Failed(e.user_message())
            }
        }
    }
}

#[component]
pub fn CheckoutPage() -> impl IntoView {
    let params = use_params_map();
    let link_id = Memo::new(move |_| params.read().get("id").unwrap_or_default());
    let alive = AliveFlag::for_current_owner();
    let link = RwSignal::new(LinkView::Loading);

    Effect::new(move || {
        let id = link_id.get();
        link.set(LinkView::Loading);
        spawn_guarded(alive.clone(), async move { api::get_public_payment_link(&id).await }, move |result| {
            link.set(LinkView::from_result(result));
        });
    });

    view! {
        <div class="checkout-page">
            {move || match link.get() {
                LinkView::Loading => view! { <p class="page__loading">"Loading payment link..."</p> }.into_any(),
                LinkView::Unavailable => view! { <LinkUnavailable/> }.into_any(),
                LinkView::Failed(message) => {
                    view! {
                        <div class="checkout-card">
                            <p class="page__error">{message}</p>
                            <a class="btn" href="/">"Return Home"</a>
                        </div>
                    }
                        .into_any()
                }
                LinkView::Ready(details) => view! { <CheckoutCard link=details/> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn LinkUnavailable() -> impl IntoView {
    view! {
        <div class="checkout-card checkout-card--unavailable">
            <h1>"This payment link is unavailable"</h1>
            <p>"It may have expired or been disabled by the merchant."</p>
            <a class="btn btn--primary" href="/">"Return Home"</a>
        </div>
    }
}

#[component]
fn CheckoutCard(link: PaymentLinkDetails) -> impl IntoView {
    let toaster = expect_context::<Toaster>();
    let alive = AliveFlag::for_current_owner();
    let wizard = RwSignal::new(Wizard::new(CHECKOUT));
    let receipt = RwSignal::new(None::<PaymentReceipt>);
    let amount = format_money(link.amount_minor, &link.currency);
    let link_id = link.id.clone();

    let on_submit = Callback::new(move |()| {
        let id = link_id.clone();
        submit_wizard(
            wizard,
            toaster,
            alive.clone(),
            |values| async move { api::pay_payment_link(&id, &checkout_from(&values)).await },
            move |paid: PaymentReceipt| {
                toaster.success("Payment received");
                receipt.set(Some(paid));
            },
        );
    });

    view! {
        <div class="checkout-card">
            <p class="checkout-card__merchant">{link.merchant_name}</p>
            <h1 class="checkout-card__title">{link.title}</h1>
            {link.description.map(|d| view! { <p class="checkout-card__description">{d}</p> })}
            <p class="checkout-card__amount">{amount.clone()}</p>
            {move || match receipt.get() {
                Some(paid) => {
                    view! {
                        <div class="checkout-card__receipt">
                            <h2>"Thank you!"</h2>
                            <p>{format!("You paid {amount}.")}</p>
                            <p class="table__muted">"Reference: " {paid.transaction_id}</p>
                        </div>
                    }
                        .into_any()
                }
                None => view! { <WizardForm wizard=wizard submit_label="Pay now" on_submit=on_submit/> }.into_any(),
            }}
        </div>
    }
}
