use super::*;

#[test]
fn summary_formats_range() {
    assert_eq!(summary((11, 20), 42), "11-20 of 42");
    assert_eq!(summary((1, 1), 1), "1-1 of 1");
}

#[test]
fn summary_for_empty_result() {
    assert_eq!(summary((0, 0), 0), "No results");
}

// =============================================================================
// PAGE MODEL
// =============================================================================

use crate::net::types::{Invoice, InvoiceStatus};

fn invoice(n: usize, status: InvoiceStatus) -> Invoice {
    Invoice {
        id: format!("inv_{n}"),
        number: format!("INV-{n:04}"),
        customer: "Acme".to_owned(),
        amount_minor: 1_000,
        currency: "USD".to_owned(),
        status,
        issued_at: "2026-01-01T00:00:00Z".to_owned(),
        due_date: "2026-01-15".to_owned(),
    }
}

#[test]
fn page_model_clamps_requested_page() {
    let source: Vec<Invoice> = (1..=12).map(|n| invoice(n, InvoiceStatus::Paid)).collect();
    let mut query = ListQuery::with_page_size(5);
    query.set_page(9);

    let model = PageModel::derive(&source, &query);
    assert_eq!(model.page, 3);
    assert_eq!(model.pages, 3);
    assert_eq!(model.total, 12);
    assert_eq!(model.range, (11, 12));
    assert_eq!(model.rows.len(), 2);
}

#[test]
fn page_model_of_filtered_out_list_is_empty() {
    let source = vec![invoice(1, InvoiceStatus::Paid)];
    let mut query = ListQuery::default();
    query.set_filter("void");

    let model = PageModel::derive(&source, &query);
    assert!(model.rows.is_empty());
    assert_eq!((model.page, model.pages, model.total, model.range), (1, 1, 0, (0, 0)));
}

#[test]
fn server_range_matches_local_derivation() {
    assert_eq!(server_range(1, 10, 10), (1, 10));
    assert_eq!(server_range(3, 10, 4), (21, 24));
    assert_eq!(server_range(2, 10, 0), (0, 0));
}
