//! Add-card form for the payment methods page.

use leptos::prelude::*;

use crate::components::toast_stack::Toaster;
use crate::components::wizard_form::{WizardForm, submit_wizard};
use crate::net::api;
use crate::net::types::PaymentMethod;
use crate::util::alive::AliveFlag;
use crate::util::format::mask_card;
use crate::wizard::Wizard;
use crate::wizard::flows::{PAYMENT_METHOD, payment_method_from};

#[component]
pub fn PaymentMethodForm(on_complete: Callback<PaymentMethod>, on_cancel: Callback<()>) -> impl IntoView {
    let wizard = RwSignal::new(Wizard::new(PAYMENT_METHOD));
    let toaster = expect_context::<Toaster>();
    let alive = AliveFlag::for_current_owner();

    let on_submit = Callback::new(move |()| {
        submit_wizard(
            wizard,
            toaster,
            alive.clone(),
            |values| async move { api::add_payment_method(&payment_method_from(&values)).await },
            move |method: PaymentMethod| {
                toaster.success(format!("Added {} {}", method.brand, mask_card(&method.last4)));
                on_complete.run(method);
            },
        );
    });

    view! {
        <div class="panel payment-method-form">
            <WizardForm wizard=wizard submit_label="Add card" on_submit=on_submit on_cancel=on_cancel/>
        </div>
    }
}
