use super::*;
use crate::net::types::{ErrorBody, KycStatus};

// =============================================================
// endpoints
// =============================================================

#[test]
fn paged_clamps_page_and_limit() {
    assert_eq!(paged("/storefronts", 2, 10), "/storefronts?page=2&limit=10");
    assert_eq!(paged("/subscriptions", 0, 0), "/subscriptions?page=1&limit=1");
}

#[test]
fn analytics_endpoint_carries_range() {
    assert_eq!(analytics_endpoint(TimeRange::Week), "/analytics/payments?range=7d");
    assert_eq!(analytics_endpoint(TimeRange::default()), "/analytics/payments?range=30d");
}

#[test]
fn nested_product_endpoints() {
    assert_eq!(products_endpoint("sf_1"), "/storefronts/sf_1/products");
    assert_eq!(product_endpoint("sf_1", "prod_9"), "/storefronts/sf_1/products/prod_9");
}

#[test]
fn ids_are_percent_encoded() {
    assert_eq!(storefront_endpoint("a b/c"), "/storefronts/a%20b%2Fc");
    assert_eq!(payment_link_endpoint("plink_1"), "/payment-links/plink_1/public");
    assert_eq!(payment_link_pay_endpoint("x?y"), "/payment-links/x%3Fy/pay");
    assert_eq!(subscription_endpoint("sub_1"), "/subscriptions/sub_1");
    assert_eq!(payment_method_endpoint("pm_1"), "/payment-methods/pm_1");
}

#[test]
fn non_ascii_ids_encode_as_utf8_bytes() {
    assert_eq!(storefront_endpoint("café"), "/storefronts/caf%C3%A9");
    assert_eq!(product_endpoint("sf_1", "100%"), "/storefronts/sf_1/products/100%25");
}

#[test]
fn bearer_header_value() {
    assert_eq!(bearer("tok_1"), "Bearer tok_1");
}

// =============================================================
// decode
// =============================================================

#[test]
fn decode_success_body() {
    let user: User = decode(
        200,
        r#"{"id":"usr_1","name":"Jane","email":"jane@paybord.io","kycStatus":"pending"}"#,
    )
    .unwrap();
    assert_eq!(user.kyc_status, KycStatus::Pending);
}

#[test]
fn decode_empty_no_content_as_unit() {
    let unit: Result<(), ApiError> = decode(204, "");
    assert!(unit.is_ok());
}

#[test]
fn decode_error_body_surfaces_message() {
    let body = serde_json::to_string(&ErrorBody { error: "Card declined".to_owned() }).unwrap();
    let result: Result<PaymentReceipt, ApiError> = decode(402, &body);
    assert_eq!(result.unwrap_err().user_message(), "Card declined");
}

#[test]
fn decode_shape_mismatch_is_decode_error() {
    let result: Result<Balance, ApiError> = decode(200, r#"{"unexpected":true}"#);
    assert!(matches!(result, Err(ApiError::Decode(_))));
}

// =============================================================
// server-side behavior
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_are_unavailable_outside_the_browser() {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut cx = Context::from_waker(Waker::noop());
    let mut call = pin!(get_balance());
    match call.as_mut().poll(&mut cx) {
        Poll::Ready(result) => assert_eq!(result, Err(ApiError::Unavailable)),
        Poll::Pending => panic!("stub call should resolve immediately"),
    }
}
