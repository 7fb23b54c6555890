//! Auth-session state for the signed-in merchant.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as `RwSignal<AuthState>` from `App`. Route guards read it to
//! decide redirects; `net::api` reads the token from storage, not from here,
//! so a request started before sign-out still carries the token it began
//! with.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::error::ApiError;
use crate::net::types::{AuthResponse, KycStatus, User};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub token: Option<String>,
    /// True while the session is being restored on startup.
    pub loading: bool,
}

impl AuthState {
    /// State used at startup before `fetch_current_user` has answered.
    #[must_use]
    pub fn restoring(token: Option<String>) -> Self {
        Self { user: None, loading: token.is_some(), token }
    }

    #[must_use]
    pub fn signed_in(response: AuthResponse) -> Self {
        Self { user: Some(response.user), token: Some(response.token), loading: false }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Whether the merchant still has to complete identity verification.
    #[must_use]
    pub fn needs_kyc(&self) -> bool {
        self.user
            .as_ref()
            .is_some_and(|u| matches!(u.kyc_status, KycStatus::NotStarted | KycStatus::Rejected))
    }

    /// Apply the answer to the startup `fetch_current_user`. Returns whether
    /// the stored token was rejected and should be discarded; a network
    /// failure keeps it for the next visit.
    pub fn finish_restore(&mut self, result: Result<User, ApiError>) -> bool {
        match result {
            Ok(user) => {
                self.user = Some(user);
                self.loading = false;
                false
            }
            Err(e) => {
                log::warn!("session restore failed: {e}");
                let stale = e.is_unauthorized();
                self.sign_out();
                stale
            }
        }
    }

    pub fn sign_out(&mut self) {
        self.user = None;
        self.token = None;
        self.loading = false;
    }
}

/// Guarded routes redirect once loading finished without a user.
#[must_use]
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}
