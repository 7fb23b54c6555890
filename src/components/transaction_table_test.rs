use super::*;
use crate::demo::fixtures;
use crate::net::types::TransactionStatus;

fn tx(kind: TransactionKind, amount_minor: i64) -> Transaction {
    Transaction {
        id: "txn_1".to_owned(),
        description: "Test".to_owned(),
        amount_minor,
        currency: "USD".to_owned(),
        status: TransactionStatus::Succeeded,
        kind,
        customer: None,
        created_at: "2026-10-01T10:00:00Z".to_owned(),
    }
}

// =============================================================================
// AMOUNTS
// =============================================================================

#[test]
fn outgoing_money_is_negative() {
    assert_eq!(display_amount(&tx(TransactionKind::Payout, 5_000)), "-$50.00");
    assert_eq!(display_amount(&tx(TransactionKind::Refund, -1_250)), "-$12.50");
    assert_eq!(amount_class(TransactionKind::Refund), "amount amount--out");
}

#[test]
fn incoming_money_is_plain() {
    assert_eq!(display_amount(&tx(TransactionKind::Payment, 4_200)), "$42.00");
    assert_eq!(amount_class(TransactionKind::Subscription), "amount");
}

// =============================================================================
// HISTORY DERIVATION
// =============================================================================

#[test]
fn search_by_invoice_number_finds_the_invoice_payment() {
    let source = fixtures::transactions();
    let mut query = ListQuery::default();
    query.set_search("42");

    let model = PageModel::derive(&source, &query);
    assert_eq!(model.total, 1);
    assert_eq!(model.rows[0].description, "Invoice #42");
}

#[test]
fn unmatched_search_leaves_nothing_to_show() {
    let source = fixtures::transactions();
    let mut query = ListQuery::default();
    query.set_search("zzz");

    let model = PageModel::derive(&source, &query);
    assert_eq!(model.total, 0);
    assert!(model.rows.is_empty());
    assert!(query.is_filtered());
}

#[test]
fn status_filter_keeps_only_that_status() {
    let source = fixtures::transactions();
    let mut query = ListQuery::with_page_size(100);
    query.set_filter("refunded");

    let model = PageModel::derive(&source, &query);
    assert!(model.total > 0);
    assert!(model.rows.iter().all(|t| t.status == TransactionStatus::Refunded));
}

#[test]
fn clearing_restores_the_source_order() {
    let source = fixtures::transactions();
    let mut query = ListQuery::with_page_size(source.len());
    query.set_search("order");
    query.set_filter("failed");
    query.clear();

    let model = PageModel::derive(&source, &query);
    assert_eq!(model.rows, source);
}

#[test]
fn every_status_filter_matches_a_wire_value() {
    for (value, _) in STATUS_FILTERS.iter().skip(1) {
        let status: TransactionStatus =
            serde_json::from_value(serde_json::Value::String((*value).to_owned())).unwrap();
        assert_eq!(status.as_str(), *value);
    }
}
