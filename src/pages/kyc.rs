//! KYC onboarding: personal details, address, then optional documents.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::layout::AppShell;
use crate::components::toast_stack::Toaster;
use crate::components::wizard_form::{WizardForm, submit_wizard};
use crate::net::api;
use crate::net::types::{KycStatus, User};
use crate::state::auth::AuthState;
use crate::state::refresh::{AppRefresh, RefreshReason};
use crate::util::alive::AliveFlag;
use crate::util::auth::DASHBOARD_PATH;
use crate::util::clock::now_ms;
use crate::wizard::Wizard;
use crate::wizard::flows::{KYC, kyc_from};

#[component]
pub fn KycPage() -> impl IntoView {
    view! {
        <AppShell>
            <KycView/>
        </AppShell>
    }
}

#[component]
fn KycView() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let status = move || auth.with(|a| a.user.as_ref().map(|u| u.kyc_status).unwrap_or_default());

    view! {
        <div class="page kyc-page">
            <h1>"Verify your identity"</h1>
            {move || match status() {
                KycStatus::Verified => {
                    view! {
                        <div class="panel">
                            <p>"Your identity is verified. You're all set."</p>
                            <a class="btn btn--primary" href=DASHBOARD_PATH>"Go to dashboard"</a>
                        </div>
                    }
                        .into_any()
                }
                KycStatus::Pending => {
                    view! {
                        <div class="panel">
                            <p>"Thanks! We're reviewing your details and will let you know once you're verified."</p>
                            <a class="btn btn--primary" href=DASHBOARD_PATH>"Go to dashboard"</a>
                        </div>
                    }
                        .into_any()
                }
                KycStatus::NotStarted | KycStatus::Rejected => view! { <KycForm/> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn KycForm() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toaster = expect_context::<Toaster>();
    let hub = expect_context::<AppRefresh>();
    let wizard = RwSignal::new(Wizard::new(KYC));
    let alive = AliveFlag::for_current_owner();
    let navigate = use_navigate();
    let submitted = RwSignal::new(false);

    Effect::new(move || {
        if submitted.get() {
            navigate(DASHBOARD_PATH, NavigateOptions::default());
        }
    });

    let on_submit = Callback::new(move |()| {
        let hub = hub.clone();
        submit_wizard(
            wizard,
            toaster,
            alive.clone(),
            |values| async move { api::submit_kyc(&kyc_from(&values)).await },
            move |user: User| {
                toaster.success("Verification submitted");
                auth.update(|a| a.user = Some(user));
                hub.announce(RefreshReason::Profile, now_ms());
                submitted.set(true);
            },
        );
    });
    let on_cancel = Callback::new(move |()| submitted.set(true));

    view! {
        <div class="kyc-form">
            <div class="progress" role="progressbar" aria-valuemin="0" aria-valuemax="100">
                <span
                    class="progress__fill"
                    style=move || format!("width: {}%", wizard.with(Wizard::progress_percent))
                ></span>
            </div>
            <WizardForm wizard=wizard submit_label="Submit for review" on_submit=on_submit on_cancel=on_cancel/>
            <p class="kyc-form__note">"Documents are optional but speed up the review."</p>
        </div>
    }
}
