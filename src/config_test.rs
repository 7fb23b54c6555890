use super::*;
use std::collections::HashMap;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

// =============================================================
// ClientConfig
// =============================================================

#[test]
fn client_defaults_apply_when_nothing_is_set() {
    let config = ClientConfig::from_lookup(lookup(&[]));
    assert_eq!(config, ClientConfig::default());
    assert_eq!(config.url("/auth/login"), "/api/auth/login");
}

#[test]
fn client_api_base_is_normalized() {
    let config = ClientConfig::from_lookup(lookup(&[("PAYBORD_API_BASE", " https://api.paybord.io/v1/ ")]));
    assert_eq!(config.api_base, "https://api.paybord.io/v1");
    assert_eq!(config.url("storefronts"), "https://api.paybord.io/v1/storefronts");
}

#[test]
fn client_invalid_numbers_fall_back_and_minimums_hold() {
    let config = ClientConfig::from_lookup(lookup(&[
        ("PAYBORD_PAGE_SIZE", "0"),
        ("PAYBORD_REFRESH_POLL_MS", "10"),
        ("PAYBORD_TOAST_TTL_MS", "soon"),
    ]));
    assert_eq!(config.page_size, 1);
    assert_eq!(config.refresh_poll_ms, 250);
    assert_eq!(config.toast_ttl_ms, DEFAULT_TOAST_TTL_MS);
}

// =============================================================
// ServerConfig
// =============================================================

#[test]
fn server_defaults_keep_leptos_addr_and_enable_demo() {
    let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config.addr, None);
    assert!(config.demo_api);
}

#[test]
fn server_port_binds_all_interfaces() {
    let config = ServerConfig::from_lookup(lookup(&[("PORT", "8080")])).unwrap();
    assert_eq!(config.addr, Some("0.0.0.0:8080".parse().unwrap()));
}

#[test]
fn server_explicit_addr_wins_over_port() {
    let config = ServerConfig::from_lookup(lookup(&[("PAYBORD_ADDR", "127.0.0.1:4000"), ("PORT", "8080")])).unwrap();
    assert_eq!(config.addr, Some("127.0.0.1:4000".parse().unwrap()));
}

#[test]
fn server_rejects_bad_values() {
    assert_eq!(
        ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])),
        Err(ConfigError::Invalid { var: "PORT", value: "eighty".to_owned() })
    );
    assert!(ServerConfig::from_lookup(lookup(&[("PAYBORD_DEMO_API", "maybe")])).is_err());
    let off = ServerConfig::from_lookup(lookup(&[("PAYBORD_DEMO_API", "off")])).unwrap();
    assert!(!off.demo_api);
}
