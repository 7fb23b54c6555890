//! Storefront create / edit wizard.

#[cfg(test)]
#[path = "storefront_wizard_test.rs"]
mod storefront_wizard_test;

use leptos::prelude::*;

use crate::components::toast_stack::Toaster;
use crate::components::wizard_form::{WizardForm, submit_wizard_with_field_errors};
use crate::error::ApiError;
use crate::net::api;
use crate::net::types::Storefront;
use crate::util::alive::AliveFlag;
use crate::wizard::Wizard;
use crate::wizard::flows::{CREATE_STOREFRONT, storefront_from, storefront_values};

/// A taken store URL belongs on the slug field.
fn storefront_field_for(err: &ApiError) -> Option<&'static str> {
    err.is_conflict().then_some("slug")
}

/// With `existing`, the wizard edits that store; otherwise it creates one.
#[component]
pub fn CreateStorefrontWizard(
    #[prop(optional)] existing: Option<Storefront>,
    on_complete: Callback<Storefront>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let editing_id = existing.as_ref().map(|store| store.id.clone());
    let initial = match &existing {
        Some(store) => Wizard::with_values(CREATE_STOREFRONT, storefront_values(store)),
        None => Wizard::new(CREATE_STOREFRONT),
    };
    let wizard = RwSignal::new(initial);
    let toaster = expect_context::<Toaster>();
    let alive = AliveFlag::for_current_owner();
    let submit_label = if editing_id.is_some() { "Save changes" } else { "Create storefront" };

    let on_submit = Callback::new(move |()| {
        let editing_id = editing_id.clone();
        submit_wizard_with_field_errors(
            wizard,
            toaster,
            alive.clone(),
            move |values| async move {
                let draft = storefront_from(&values);
                match editing_id {
                    Some(id) => api::update_storefront(&id, &draft).await,
                    None => api::create_storefront(&draft).await,
                }
            },
            move |store: Storefront| {
                toaster.success(format!("Saved {}", store.name));
                on_complete.run(store);
            },
            storefront_field_for,
        );
    });

    view! {
        <div class="panel storefront-wizard">
            <WizardForm wizard=wizard submit_label=submit_label on_submit=on_submit on_cancel=on_cancel/>
        </div>
    }
}
