use super::*;

#[test]
fn link_is_active_on_exact_path() {
    assert!(is_active("/storefronts", "/storefronts"));
}

#[test]
fn link_is_active_on_nested_path() {
    assert!(is_active("/storefronts/sf_0001", "/storefronts"));
}

#[test]
fn sibling_prefix_is_not_active() {
    assert!(!is_active("/balances", "/balance"));
    assert!(!is_active("/dashboard", "/transactions"));
}

#[test]
fn nav_links_are_unique() {
    let mut hrefs: Vec<&str> = NAV_LINKS.iter().map(|(href, _)| *href).collect();
    hrefs.sort_unstable();
    hrefs.dedup();
    assert_eq!(hrefs.len(), NAV_LINKS.len());
}
