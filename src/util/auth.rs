//! Session lifecycle and route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` restores the session once after hydration; every dashboard route
//! then applies identical unauthenticated redirect behavior through
//! `AppShell`. Unverified merchants are not blocked; the shell shows them a
//! banner linking to KYC.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::api;
use crate::net::types::AuthResponse;
use crate::state::auth::{AuthState, should_redirect_unauth};
use crate::util::alive::{AliveFlag, spawn_guarded};
use crate::util::storage::{clear_token, load_token, store_token};

pub const SIGNIN_PATH: &str = "/signin";
pub const KYC_PATH: &str = "/onboarding/kyc";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Redirect to `/signin` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate(SIGNIN_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// Resolve the stored token into a user. Without a token, loading ends
/// immediately.
pub fn restore_session(auth: RwSignal<AuthState>) {
    let Some(token) = load_token() else {
        auth.update(|a| a.loading = false);
        return;
    };
    auth.set(AuthState::restoring(Some(token)));
    spawn_guarded(AliveFlag::new(), api::fetch_current_user(), move |result| {
        let stale = auth.try_update(|a| a.finish_restore(result)).unwrap_or(false);
        if stale {
            clear_token();
        }
    });
}

/// Persist a fresh sign-in / sign-up.
pub fn complete_sign_in(auth: RwSignal<AuthState>, response: AuthResponse) {
    store_token(&response.token);
    log::info!("signed in as {}", response.user.email);
    auth.set(AuthState::signed_in(response));
}

/// Revoke the session on the backend, then forget it locally whatever the
/// backend said.
pub fn sign_out(auth: RwSignal<AuthState>) {
    spawn_guarded(AliveFlag::new(), api::logout(), move |result| {
        if let Err(e) = result {
            log::warn!("logout request failed: {e}");
        }
        clear_token();
        auth.update(AuthState::sign_out);
    });
}
