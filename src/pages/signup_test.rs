use super::*;

#[test]
fn duplicate_email_is_pinned_on_email_field() {
    let err = ApiError::Status { status: 409, message: "Email already registered".to_owned() };
    assert_eq!(signup_field_for(&err), Some("email"));
}

#[test]
fn validation_failures_stay_form_level() {
    let err = ApiError::Status { status: 400, message: "Password must be at least 8 characters".to_owned() };
    assert_eq!(signup_field_for(&err), None);
}
