//! Create-subscription wizard: customer, plan, then card.

use leptos::prelude::*;

use crate::components::toast_stack::Toaster;
use crate::components::wizard_form::{WizardForm, submit_wizard};
use crate::net::api;
use crate::net::types::Subscription;
use crate::util::alive::AliveFlag;
use crate::wizard::Wizard;
use crate::wizard::flows::{CREATE_SUBSCRIPTION, subscription_from};

#[component]
pub fn CreateSubscriptionWizard(on_complete: Callback<Subscription>, on_cancel: Callback<()>) -> impl IntoView {
    let wizard = RwSignal::new(Wizard::new(CREATE_SUBSCRIPTION));
    let toaster = expect_context::<Toaster>();
    let alive = AliveFlag::for_current_owner();

    let on_submit = Callback::new(move |()| {
        submit_wizard(
            wizard,
            toaster,
            alive.clone(),
            |values| async move { api::create_subscription(&subscription_from(&values)).await },
            move |created: Subscription| {
                toaster.success(format!("Subscription created for {}", created.customer));
                on_complete.run(created);
            },
        );
    });
    let cancel = Callback::new(move |()| {
        wizard.update(Wizard::cancel);
        on_cancel.run(());
    });

    view! {
        <div class="panel subscription-wizard">
            <WizardForm wizard=wizard submit_label="Create subscription" on_submit=on_submit on_cancel=cancel/>
        </div>
    }
}
