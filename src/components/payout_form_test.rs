use super::*;

#[test]
fn payout_must_be_positive() {
    assert_eq!(check_payout(0, 10_000, "USD"), Err("Enter an amount greater than zero".to_owned()));
}

#[test]
fn payout_cannot_exceed_available_balance() {
    assert_eq!(check_payout(10_001, 10_000, "USD"), Err("You can pay out at most $100.00".to_owned()));
}

#[test]
fn payout_up_to_available_is_allowed() {
    assert_eq!(check_payout(10_000, 10_000, "USD"), Ok(()));
    assert_eq!(check_payout(1, 10_000, "USD"), Ok(()));
}
