//! Frame for every signed-in page: guard, navbar, KYC banner, toasts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages wrap their content in `AppShell`. The content is only built once a
//! user is present, so page-level fetches never run for a signed-out
//! visitor; while the session is restoring a loading line is shown instead.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::navbar::Navbar;
use crate::net::types::KycStatus;
use crate::state::auth::AuthState;
use crate::util::auth::{KYC_PATH, install_unauth_redirect};

fn kyc_banner_text(status: KycStatus) -> Option<&'static str> {
    match status {
        KycStatus::NotStarted => Some("Verify your identity to start receiving payouts."),
        KycStatus::Rejected => Some("Your verification was not approved. Please resubmit your details."),
        KycStatus::Pending => Some("Your verification is being reviewed."),
        KycStatus::Verified => None,
    }
}

#[component]
pub fn AppShell(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    let banner = move || {
        auth.with(|a| {
            let status = a.user.as_ref()?.kyc_status;
            let text = kyc_banner_text(status)?;
            Some((text, a.needs_kyc()))
        })
    };

    view! {
        <Show
            when=move || auth.with(AuthState::is_authenticated)
            fallback=move || {
                view! {
                    <div class="app-loading">
                        <p>{move || if auth.with(|a| a.loading) { "Loading..." } else { "Redirecting to sign in..." }}</p>
                    </div>
                }
            }
        >
            <Navbar/>
            {move || {
                banner()
                    .map(|(text, actionable)| {
                        view! {
                            <div class="kyc-banner" role="status">
                                <span>{text}</span>
                                {actionable.then(|| view! { <a class="btn btn--primary" href=KYC_PATH>"Verify now"</a> })}
                            </div>
                        }
                    })
            }}
            <main class="app-main">{children()}</main>
        </Show>
    }
}
