use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_transaction_json() -> serde_json::Value {
    serde_json::json!({
        "id": "txn_1",
        "description": "Invoice #42",
        "amountMinor": 4200,
        "currency": "USD",
        "status": "succeeded",
        "kind": "payment",
        "customer": "Acme Corp",
        "createdAt": "2026-03-01T10:00:00Z"
    })
}

// =============================================================
// Status enums
// =============================================================

#[test]
fn statuses_serialize_as_snake_case() {
    assert_eq!(serde_json::to_string(&TransactionStatus::Succeeded).unwrap(), "\"succeeded\"");
    assert_eq!(serde_json::to_string(&SubscriptionStatus::PastDue).unwrap(), "\"past_due\"");
    assert_eq!(serde_json::to_string(&PayoutStatus::InTransit).unwrap(), "\"in_transit\"");
    assert_eq!(serde_json::to_string(&KycStatus::NotStarted).unwrap(), "\"not_started\"");
}

#[test]
fn status_as_str_matches_wire_name() {
    for status in [
        TransactionStatus::Succeeded,
        TransactionStatus::Pending,
        TransactionStatus::Failed,
        TransactionStatus::Refunded,
    ] {
        assert_eq!(serde_json::to_value(status).unwrap(), serde_json::json!(status.as_str()));
    }
    assert_eq!(serde_json::to_value(SubscriptionStatus::PastDue).unwrap(), serde_json::json!("past_due"));
    assert_eq!(SubscriptionStatus::PastDue.as_str(), "past_due");
}

// =============================================================
// DTOs
// =============================================================

#[test]
fn transaction_deserializes_camel_case_fields() {
    let txn: Transaction = serde_json::from_value(make_transaction_json()).unwrap();
    assert_eq!(txn.amount_minor, 4200);
    assert_eq!(txn.kind, TransactionKind::Payment);
    assert_eq!(txn.customer.as_deref(), Some("Acme Corp"));
}

#[test]
fn amount_accepts_integer_valued_floats() {
    let mut json = make_transaction_json();
    json["amountMinor"] = serde_json::json!(4200.0);
    let txn: Transaction = serde_json::from_value(json).unwrap();
    assert_eq!(txn.amount_minor, 4200);
}

#[test]
fn amount_rejects_fractional_and_non_numbers() {
    let mut json = make_transaction_json();
    json["amountMinor"] = serde_json::json!(42.5);
    assert!(serde_json::from_value::<Transaction>(json.clone()).is_err());
    json["amountMinor"] = serde_json::json!("4200");
    assert!(serde_json::from_value::<Transaction>(json).is_err());
}

#[test]
fn user_defaults_kyc_status_when_missing() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": "usr_1",
        "name": "Jane",
        "email": "jane@paybord.io"
    }))
    .unwrap();
    assert_eq!(user.kyc_status, KycStatus::NotStarted);
    assert!(user.business_name.is_none());
}

#[test]
fn subscription_update_omits_unset_fields() {
    let update = SubscriptionUpdate { plan: Some("plan_pro".to_owned()), status: None };
    assert_eq!(serde_json::to_value(&update).unwrap(), serde_json::json!({ "plan": "plan_pro" }));
}

#[test]
fn new_subscription_nests_payment_details() {
    let draft = NewSubscription {
        customer: "cust_001".to_owned(),
        plan: "plan_pro".to_owned(),
        payment: CardDetails {
            card_number: "4242424242424242".to_owned(),
            expiry: "12/29".to_owned(),
            cvc: "123".to_owned(),
        },
    };
    assert_eq!(
        serde_json::to_value(&draft).unwrap(),
        serde_json::json!({
            "customer": "cust_001",
            "plan": "plan_pro",
            "payment": { "cardNumber": "4242424242424242", "expiry": "12/29", "cvc": "123" }
        })
    );
}

#[test]
fn storefront_defaults_active_flag() {
    let store: Storefront = serde_json::from_value(serde_json::json!({
        "id": "sf_1",
        "name": "Main",
        "slug": "main",
        "currency": "USD"
    }))
    .unwrap();
    assert!(store.is_active);
    assert_eq!(store.product_count, 0);
}

// =============================================================
// TimeRange / payment links
// =============================================================

#[test]
fn time_range_query_values_round_trip() {
    for range in TimeRange::ALL {
        assert_eq!(TimeRange::from_query(range.as_query()), Some(range));
        assert_eq!(serde_json::to_value(range).unwrap(), serde_json::json!(range.as_query()));
    }
    assert_eq!(TimeRange::from_query("2w"), None);
    assert_eq!(TimeRange::default(), TimeRange::Month);
}

#[test]
fn only_active_payment_links_are_payable() {
    let mut link = PaymentLinkDetails {
        id: "pl_1".to_owned(),
        title: "Consulting".to_owned(),
        description: None,
        amount_minor: 10_000,
        currency: "USD".to_owned(),
        merchant_name: "Acme".to_owned(),
        status: PaymentLinkStatus::Active,
    };
    assert!(link.is_payable());
    link.status = PaymentLinkStatus::Expired;
    assert!(!link.is_payable());
}

#[test]
fn error_body_parses_backend_shape() {
    let body: ErrorBody = serde_json::from_str(r#"{"error":"Email already registered"}"#).unwrap();
    assert_eq!(body.error, "Email already registered");
}
