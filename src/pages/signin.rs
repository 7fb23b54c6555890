//! Sign-in page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::toast_stack::Toaster;
use crate::components::wizard_form::{WizardForm, submit_wizard};
use crate::net::api;
use crate::net::types::AuthResponse;
use crate::state::auth::AuthState;
use crate::util::alive::AliveFlag;
use crate::util::auth::{DASHBOARD_PATH, complete_sign_in};
use crate::wizard::Wizard;
use crate::wizard::flows::{SIGNIN, login_from};

/// Email + password form. `on_signed_in` fires after the session is stored.
#[component]
pub fn SigninForm(on_signed_in: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toaster = expect_context::<Toaster>();
    let wizard = RwSignal::new(Wizard::new(SIGNIN));
    let alive = AliveFlag::for_current_owner();

    let on_submit = Callback::new(move |()| {
        submit_wizard(
            wizard,
            toaster,
            alive.clone(),
            |values| async move { api::login(&login_from(&values)).await },
            move |response: AuthResponse| {
                toaster.success(format!("Welcome back, {}", response.user.name));
                complete_sign_in(auth, response);
                on_signed_in.run(());
            },
        );
    });

    view! { <WizardForm wizard=wizard submit_label="Sign in" on_submit=on_submit/> }
}

#[component]
pub fn SigninPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let signed_in = RwSignal::new(false);

    // Already signed in (or just signed in): go to the dashboard.
    Effect::new(move || {
        if signed_in.get() || auth.with(AuthState::is_authenticated) {
            navigate(DASHBOARD_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign in to Paybord"</h1>
                <SigninForm on_signed_in=Callback::new(move |()| signed_in.set(true))/>
                <p class="auth-card__switch">"New to Paybord? " <a href="/signup">"Create an account"</a></p>
            </div>
        </div>
    }
}
