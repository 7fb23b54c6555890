use super::*;
use crate::net::types::{InvoiceStatus, TransactionKind, TransactionStatus};

fn tx(id: &str, description: &str, status: TransactionStatus, created_at: &str) -> Transaction {
    Transaction {
        id: id.to_owned(),
        description: description.to_owned(),
        amount_minor: 1_000,
        currency: "USD".to_owned(),
        status,
        kind: TransactionKind::Payment,
        customer: None,
        created_at: created_at.to_owned(),
    }
}

fn ledger(n: usize) -> Vec<Transaction> {
    (0..n)
        .map(|i| {
            let status = if i % 3 == 0 { TransactionStatus::Failed } else { TransactionStatus::Succeeded };
            tx(&format!("txn_{i:03}"), &format!("Order {i}"), status, &format!("2026-01-{:02}T00:00:00Z", i % 28 + 1))
        })
        .collect()
}

fn ids<'a>(items: &[&'a Transaction]) -> Vec<&'a str> {
    items.iter().map(|t| t.id.as_str()).collect()
}

// =============================================================
// search / filter
// =============================================================

#[test]
fn search_finds_invoice_number_in_description() {
    let source = vec![tx("txn_1", "Invoice #42", TransactionStatus::Succeeded, "2026-01-01T00:00:00Z")];
    let mut query = ListQuery::default();

    query.set_search("42");
    let view = derive(&source, &query);
    assert_eq!(view.total(), 1);
    assert_eq!(view.visible()[0].description, "Invoice #42");

    query.set_search("zzz");
    let view = derive(&source, &query);
    assert!(view.is_empty());
    assert!(view.visible().is_empty());
    assert_eq!(view.pages, 1);
}

#[test]
fn search_is_case_insensitive_and_trimmed() {
    let source = vec![
        tx("txn_1", "Coffee Beans", TransactionStatus::Succeeded, "a"),
        tx("txn_2", "Tea", TransactionStatus::Succeeded, "b"),
    ];
    let mut query = ListQuery::default();
    query.set_search("  COFFEE ");
    assert_eq!(ids(&derive(&source, &query).filtered), vec!["txn_1"]);
}

#[test]
fn search_matches_customer_name() {
    let mut row = tx("txn_1", "Order", TransactionStatus::Pending, "a");
    row.customer = Some("Globex Ltd".to_owned());
    let source = vec![row, tx("txn_2", "Order", TransactionStatus::Pending, "b")];
    let mut query = ListQuery::default();
    query.set_search("globex");
    assert_eq!(ids(&derive(&source, &query).filtered), vec!["txn_1"]);
}

#[test]
fn filter_by_status_category() {
    let source = ledger(9);
    let mut query = ListQuery::default();
    query.set_filter("failed");
    let view = derive(&source, &query);
    assert_eq!(ids(&view.filtered), vec!["txn_000", "txn_003", "txn_006"]);
    assert!(query.is_filtered());
}

#[test]
fn filtered_never_exceeds_source_and_page_never_exceeds_page_size() {
    let source = ledger(37);
    for search in ["", "1", "order 2", "nothing"] {
        for filter in [ALL, "failed", "succeeded", "refunded"] {
            for page in 1..6 {
                let mut query = ListQuery::with_page_size(8);
                query.set_search(search);
                query.set_filter(filter);
                query.set_page(page);
                let view = derive(&source, &query);
                assert!(view.filtered.len() <= source.len());
                assert!(view.visible().len() <= 8);
            }
        }
    }
}

#[test]
fn clearing_search_and_filter_restores_source_order() {
    let source = ledger(12);
    let mut query = ListQuery::default();
    query.set_search("order 1");
    query.set_filter("succeeded");
    assert!(derive(&source, &query).total() < source.len());

    query.clear();
    assert!(!query.is_filtered());
    let view = derive(&source, &query);
    let expected: Vec<&str> = source.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids(&view.filtered), expected);
}

// =============================================================
// pagination
// =============================================================

#[test]
fn page_past_the_end_is_clamped() {
    let source = ledger(25);
    let mut query = ListQuery::with_page_size(10);
    query.set_page(9);
    let view = derive(&source, &query);
    assert_eq!(view.pages, 3);
    assert_eq!(view.page, 3);
    assert_eq!(view.visible().len(), 5);
    assert_eq!(view.range(), (21, 25));
    assert!(view.has_prev());
    assert!(!view.has_next());
}

#[test]
fn changing_search_resets_to_first_page() {
    let mut query = ListQuery::default();
    query.set_page(4);
    query.set_search("x");
    assert_eq!(query.page, 1);
    query.set_page(3);
    query.set_filter("pending");
    assert_eq!(query.page, 1);
}

#[test]
fn set_page_floors_at_one() {
    let mut query = ListQuery::default();
    query.set_page(0);
    assert_eq!(query.page, 1);
}

#[test]
fn empty_source_yields_one_empty_page() {
    let source: Vec<Transaction> = Vec::new();
    let view = derive(&source, &ListQuery::default());
    assert_eq!(view.pages, 1);
    assert_eq!(view.page, 1);
    assert_eq!(view.range(), (0, 0));
    assert!(!view.has_next());
}

// =============================================================
// sort / envelope
// =============================================================

#[test]
fn sort_orders_by_timestamp() {
    let source = vec![
        tx("b", "x", TransactionStatus::Succeeded, "2026-02-01T00:00:00Z"),
        tx("a", "x", TransactionStatus::Succeeded, "2026-01-01T00:00:00Z"),
        tx("c", "x", TransactionStatus::Succeeded, "2026-03-01T00:00:00Z"),
    ];
    let mut query = ListQuery::default();
    query.set_sort(SortDirection::Asc);
    assert_eq!(ids(&derive(&source, &query).filtered), vec!["a", "b", "c"]);
    query.set_sort(SortDirection::Desc);
    assert_eq!(ids(&derive(&source, &query).filtered), vec!["c", "b", "a"]);
}

#[test]
fn to_paged_reports_total_and_pages() {
    let source = ledger(23);
    let mut query = ListQuery::with_page_size(10);
    query.set_page(2);
    let paged = derive(&source, &query).to_paged();
    assert_eq!(paged.total, 23);
    assert_eq!(paged.pages, 3);
    assert_eq!(paged.data.len(), 10);
    assert_eq!(paged.data[0].id, "txn_010");
}

#[test]
fn invoices_search_by_number_and_filter_by_status() {
    let invoice = |number: &str, status| Invoice {
        id: format!("inv_{number}"),
        number: number.to_owned(),
        customer: "Acme Corp".to_owned(),
        amount_minor: 5_000,
        currency: "USD".to_owned(),
        status,
        issued_at: "2026-01-01".to_owned(),
        due_date: "2026-01-31".to_owned(),
    };
    let source = vec![invoice("INV-0042", InvoiceStatus::Paid), invoice("INV-0043", InvoiceStatus::Overdue)];
    let mut query = ListQuery::default();
    query.set_search("0042");
    assert_eq!(derive(&source, &query).total(), 1);
    query.set_search("");
    query.set_filter("overdue");
    assert_eq!(derive(&source, &query).visible()[0].number, "INV-0043");
}
