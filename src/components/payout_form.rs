//! Payout request form, bounded by the available balance.

#[cfg(test)]
#[path = "payout_form_test.rs"]
mod payout_form_test;

use leptos::prelude::*;

use crate::components::toast_stack::Toaster;
use crate::components::wizard_form::{WizardForm, submit_wizard};
use crate::net::api;
use crate::net::types::{Payout, PayoutRequest};
use crate::util::alive::AliveFlag;
use crate::util::format::format_money;
use crate::wizard::Wizard;
use crate::wizard::flows::{PAYOUT, payout_amount_from};

/// Client-side bound check before the request goes out. The backend
/// repeats it against the live balance.
fn check_payout(amount_minor: i64, available_minor: i64, currency: &str) -> Result<(), String> {
    if amount_minor <= 0 {
        return Err("Enter an amount greater than zero".to_owned());
    }
    if amount_minor > available_minor {
        return Err(format!("You can pay out at most {}", format_money(available_minor, currency)));
    }
    Ok(())
}

#[component]
pub fn PayoutForm(
    available_minor: i64,
    #[prop(into)] currency: String,
    on_complete: Callback<Payout>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let wizard = RwSignal::new(Wizard::new(PAYOUT));
    let toaster = expect_context::<Toaster>();
    let alive = AliveFlag::for_current_owner();
    let available = format_money(available_minor, &currency);

    let on_submit = Callback::new(move |()| {
        let amount_minor = wizard.with_untracked(|w| payout_amount_from(w.values()));
        if let Err(message) = check_payout(amount_minor, available_minor, &currency) {
            wizard.update(|w| w.reject_field("amount", message));
            return;
        }
        let request = PayoutRequest { amount_minor, currency: currency.clone() };
        submit_wizard(
            wizard,
            toaster,
            alive.clone(),
            move |_| async move { api::request_payout(&request).await },
            move |payout: Payout| {
                toaster.success(format!(
                    "Payout of {} is on its way",
                    format_money(payout.amount_minor, &payout.currency)
                ));
                on_complete.run(payout);
            },
        );
    });

    view! {
        <div class="panel payout-form">
            <p class="payout-form__available">"Available to pay out: " {available}</p>
            <WizardForm wizard=wizard submit_label="Request payout" on_submit=on_submit on_cancel=on_cancel/>
        </div>
    }
}
