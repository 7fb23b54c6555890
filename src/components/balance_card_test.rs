use super::*;

#[test]
fn projected_adds_pending_to_available() {
    let balance = Balance { available_minor: 12_500, pending_minor: 2_500, currency: "USD".to_owned() };
    assert_eq!(projected_minor(&balance), 15_000);
}

#[test]
fn projected_saturates_instead_of_overflowing() {
    let balance = Balance { available_minor: i64::MAX, pending_minor: 1, currency: "USD".to_owned() };
    assert_eq!(projected_minor(&balance), i64::MAX);
}
