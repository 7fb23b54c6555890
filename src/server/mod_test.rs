use super::*;

// =============================================================================
// LOG FILTER
// =============================================================================

#[test]
fn unset_log_env_uses_defaults() {
    let filter = log_filter(None).to_string();
    assert!(filter.contains("paybord=debug"));
    assert!(filter.contains("tower_http=info"));
}

#[test]
fn blank_log_env_uses_defaults() {
    assert!(log_filter(Some("  ")).to_string().contains("paybord=debug"));
}

#[test]
fn valid_log_env_wins() {
    let filter = log_filter(Some("paybord=trace")).to_string();
    assert!(filter.contains("paybord=trace"));
    assert!(!filter.contains("tower_http"));
}
