//! Account creation page. New merchants continue straight to KYC.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::toast_stack::Toaster;
use crate::components::wizard_form::{WizardForm, submit_wizard_with_field_errors};
use crate::error::ApiError;
use crate::net::api;
use crate::net::types::AuthResponse;
use crate::state::auth::AuthState;
use crate::util::alive::AliveFlag;
use crate::util::auth::{KYC_PATH, complete_sign_in};
use crate::wizard::Wizard;
use crate::wizard::flows::{SIGNUP, signup_from};

/// An already registered email belongs on the email field.
fn signup_field_for(err: &ApiError) -> Option<&'static str> {
    err.is_conflict().then_some("email")
}

#[component]
pub fn SignupForm(on_signed_up: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toaster = expect_context::<Toaster>();
    let wizard = RwSignal::new(Wizard::new(SIGNUP));
    let alive = AliveFlag::for_current_owner();

    let on_submit = Callback::new(move |()| {
        let request = match wizard.with_untracked(|w| signup_from(w.values())) {
            Ok(request) => request,
            Err((field, message)) => {
                wizard.update(|w| w.reject_field(field, message));
                return;
            }
        };
        submit_wizard_with_field_errors(
            wizard,
            toaster,
            alive.clone(),
            move |_| async move { api::signup(&request).await },
            move |response: AuthResponse| {
                toaster.success("Account created. Let's verify your identity.");
                complete_sign_in(auth, response);
                on_signed_up.run(());
            },
            signup_field_for,
        );
    });

    view! { <WizardForm wizard=wizard submit_label="Create account" on_submit=on_submit/> }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let navigate = use_navigate();
    let signed_up = RwSignal::new(false);

    Effect::new(move || {
        if signed_up.get() {
            navigate(KYC_PATH, NavigateOptions::default());
        }
    });

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create your Paybord account"</h1>
                <SignupForm on_signed_up=Callback::new(move |()| signed_up.set(true))/>
                <p class="auth-card__switch">"Already have an account? " <a href="/signin">"Sign in"</a></p>
            </div>
        </div>
    }
}
