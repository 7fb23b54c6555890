use super::*;

#[test]
fn verified_merchants_see_no_banner() {
    assert!(kyc_banner_text(KycStatus::Verified).is_none());
}

#[test]
fn unverified_merchants_are_prompted() {
    assert!(kyc_banner_text(KycStatus::NotStarted).is_some());
    assert!(kyc_banner_text(KycStatus::Rejected).is_some());
    assert!(kyc_banner_text(KycStatus::Pending).is_some());
}
