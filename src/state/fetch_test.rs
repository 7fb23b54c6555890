use super::*;

#[test]
fn loading_state_is_initial_load() {
    let state: FetchState<u32> = FetchState::loading();
    assert!(state.is_initial_load());
}

#[test]
fn finish_ok_stores_data_and_clears_error() {
    let mut state = FetchState::loading();
    state.finish(Ok(vec![1, 2]));
    assert!(!state.loading);
    assert_eq!(state.data, Some(vec![1, 2]));
    assert!(state.error.is_none());
}

#[test]
fn failed_refetch_keeps_previous_data() {
    let mut state = FetchState::default();
    state.finish(Ok(7));
    state.start();
    assert!(state.loading);
    assert!(!state.is_initial_load());
    state.finish(Err(ApiError::Network("offline".to_owned())));
    assert_eq!(state.data, Some(7));
    assert_eq!(state.error.as_deref(), Some("Network error. Check your connection and try again."));
}
