//! Single-step form moving a subscription to another plan.

#[cfg(test)]
#[path = "plan_switcher_test.rs"]
mod plan_switcher_test;

use leptos::prelude::*;

use crate::components::toast_stack::Toaster;
use crate::components::wizard_form::{WizardForm, submit_wizard};
use crate::net::api;
use crate::net::types::{Subscription, SubscriptionUpdate};
use crate::util::alive::AliveFlag;
use crate::wizard::flows::{PLAN_SWITCH, PLANS, choice_label, plan_from};
use crate::wizard::{FieldValue, FieldValues, Wizard};

/// Wizard preselected with the subscription's current plan.
fn switch_wizard(current_plan: &str) -> Wizard {
    let mut values = FieldValues::new();
    values.insert("plan".to_owned(), FieldValue::Text(current_plan.to_owned()));
    Wizard::with_values(PLAN_SWITCH, values)
}

/// Update payload, or `None` when the plan did not change.
fn plan_update(current_plan: &str, values: &FieldValues) -> Option<SubscriptionUpdate> {
    let plan = plan_from(values);
    (plan != current_plan).then(|| SubscriptionUpdate { plan: Some(plan), status: None })
}

#[component]
pub fn PlanSwitcher(
    subscription: Subscription,
    on_complete: Callback<Subscription>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let current_plan = subscription.plan.clone();
    let wizard = RwSignal::new(switch_wizard(&current_plan));
    let toaster = expect_context::<Toaster>();
    let alive = AliveFlag::for_current_owner();
    let id = subscription.id.clone();

    let on_submit = Callback::new(move |()| {
        let Some(update) = wizard.with_untracked(|w| plan_update(&current_plan, w.values())) else {
            wizard.update(|w| w.reject_field("plan", "Pick a different plan"));
            return;
        };
        let id = id.clone();
        submit_wizard(
            wizard,
            toaster,
            alive.clone(),
            move |_| async move { api::update_subscription(&id, &update).await },
            move |updated: Subscription| {
                toaster.success(format!("Switched to {}", choice_label(PLANS, &updated.plan)));
                on_complete.run(updated);
            },
        );
    });

    view! {
        <div class="panel plan-switcher">
            <p class="plan-switcher__current">
                "Current plan: " {choice_label(PLANS, &subscription.plan)}
            </p>
            <WizardForm wizard=wizard submit_label="Switch plan" on_submit=on_submit on_cancel=on_cancel/>
        </div>
    }
}
