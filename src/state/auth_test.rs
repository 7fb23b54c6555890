use super::*;

fn user(kyc_status: KycStatus) -> User {
    User {
        id: "usr_1".to_owned(),
        name: "Jane Doe".to_owned(),
        email: "jane@paybord.io".to_owned(),
        business_name: None,
        kyc_status,
    }
}

// =============================================================
// AuthState
// =============================================================

#[test]
fn default_has_no_user_and_is_not_loading() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
}

#[test]
fn restoring_only_loads_when_a_token_exists() {
    assert!(AuthState::restoring(Some("tok".to_owned())).loading);
    assert!(!AuthState::restoring(None).loading);
}

#[test]
fn signed_in_carries_user_and_token() {
    let state =
        AuthState::signed_in(AuthResponse { user: user(KycStatus::Verified), token: "tok_abc".to_owned() });
    assert!(state.is_authenticated());
    assert_eq!(state.token.as_deref(), Some("tok_abc"));
    assert!(!state.needs_kyc());
}

#[test]
fn needs_kyc_until_submitted() {
    let mut state = AuthState { user: Some(user(KycStatus::NotStarted)), token: None, loading: false };
    assert!(state.needs_kyc());
    state.user = Some(user(KycStatus::Pending));
    assert!(!state.needs_kyc());
    state.user = Some(user(KycStatus::Rejected));
    assert!(state.needs_kyc());
}

#[test]
fn sign_out_clears_session() {
    let mut state = AuthState::signed_in(AuthResponse { user: user(KycStatus::Verified), token: "t".to_owned() });
    state.sign_out();
    assert!(!state.is_authenticated());
    assert!(state.token.is_none());
}

// =============================================================
// should_redirect_unauth
// =============================================================

#[test]
fn redirects_when_not_loading_and_user_missing() {
    assert!(should_redirect_unauth(&AuthState::default()));
}

#[test]
fn does_not_redirect_while_loading() {
    let state = AuthState { user: None, token: Some("t".to_owned()), loading: true };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn does_not_redirect_when_user_exists() {
    let state = AuthState { user: Some(user(KycStatus::Verified)), token: None, loading: false };
    assert!(!should_redirect_unauth(&state));
}

// =============================================================
// Session restore
// =============================================================

#[test]
fn restore_success_sets_user_and_stops_loading() {
    let mut state = AuthState::restoring(Some("tok".to_owned()));
    let discard = state.finish_restore(Ok(user(KycStatus::Verified)));
    assert!(!discard);
    assert!(state.is_authenticated());
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn restore_with_rejected_token_discards_it() {
    let mut state = AuthState::restoring(Some("tok".to_owned()));
    let discard = state.finish_restore(Err(ApiError::Status { status: 401, message: "Please sign in".to_owned() }));
    assert!(discard);
    assert!(state.token.is_none());
    assert!(should_redirect_unauth(&state));
}

#[test]
fn restore_network_failure_keeps_stored_token() {
    let mut state = AuthState::restoring(Some("tok".to_owned()));
    let discard = state.finish_restore(Err(ApiError::Network("offline".to_owned())));
    assert!(!discard);
    assert!(!state.is_authenticated());
    assert!(!state.loading);
}
