//! Add / edit product form for one storefront.

use leptos::prelude::*;

use crate::components::toast_stack::Toaster;
use crate::components::wizard_form::{WizardForm, submit_wizard};
use crate::net::api;
use crate::net::types::Product;
use crate::util::alive::AliveFlag;
use crate::wizard::Wizard;
use crate::wizard::flows::{PRODUCT, product_from, product_values};

#[component]
pub fn ProductForm(
    #[prop(into)] storefront_id: String,
    #[prop(optional)] existing: Option<Product>,
    on_complete: Callback<Product>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let product_id = existing.as_ref().map(|p| p.id.clone());
    let initial = existing.as_ref().map_or_else(|| Wizard::new(PRODUCT), |p| Wizard::with_values(PRODUCT, product_values(p)));
    let wizard = RwSignal::new(initial);
    let toaster = expect_context::<Toaster>();
    let alive = AliveFlag::for_current_owner();
    let submit_label = if product_id.is_some() { "Save product" } else { "Add product" };

    let on_submit = Callback::new(move |()| {
        let storefront_id = storefront_id.clone();
        let product_id = product_id.clone();
        submit_wizard(
            wizard,
            toaster,
            alive.clone(),
            move |values| async move {
                let draft = product_from(&values);
                match product_id {
                    Some(id) => api::update_product(&storefront_id, &id, &draft).await,
                    None => api::create_product(&storefront_id, &draft).await,
                }
            },
            move |product: Product| {
                toaster.success(format!("Saved {}", product.name));
                on_complete.run(product);
            },
        );
    });

    view! {
        <div class="panel product-form">
            <WizardForm wizard=wizard submit_label=submit_label on_submit=on_submit on_cancel=on_cancel/>
        </div>
    }
}
