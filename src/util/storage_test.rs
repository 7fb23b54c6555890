use super::*;

#[test]
fn memory_store_clones_share_entries() {
    let tab_a = MemoryStore::new();
    let tab_b = tab_a.clone();
    tab_a.set("k", "v");
    assert_eq!(tab_b.get("k").as_deref(), Some("v"));
    tab_b.remove("k");
    assert!(tab_a.get("k").is_none());
}

#[test]
fn json_round_trip_through_store() {
    let store = MemoryStore::new();
    save_json_to(&store, "order", &vec!["balance", "analytics"]);
    let order: Option<Vec<String>> = load_json_from(&store, "order");
    assert_eq!(order, Some(vec!["balance".to_owned(), "analytics".to_owned()]));
}

#[test]
fn corrupt_json_reads_as_none() {
    let store = MemoryStore::new();
    store.set("order", "{not json");
    let order: Option<Vec<String>> = load_json_from(&store, "order");
    assert!(order.is_none());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_inert_outside_the_browser() {
    store_token("tok_123");
    assert!(load_token().is_none());
    clear_token();
    let value: Option<u32> = load_json("anything");
    assert!(value.is_none());
}
