use super::*;

const CHOICES: &[(&str, &str)] = &[("usd", "US Dollar"), ("eur", "Euro")];

fn text(value: &str) -> FieldValue {
    FieldValue::Text(value.to_owned())
}

// =============================================================
// Required / optional
// =============================================================

#[test]
fn required_field_rejects_missing_and_blank_values() {
    let spec = FieldSpec::required("firstName", "First name");
    assert_eq!(check_field(&spec, None), Err("First name is required".to_owned()));
    assert_eq!(check_field(&spec, Some(&text("   "))), Err("First name is required".to_owned()));
    assert_eq!(check_field(&spec, Some(&text("Jane"))), Ok(()));
}

#[test]
fn optional_field_skips_validator_when_empty() {
    let spec = FieldSpec::optional("supportEmail", "Support email").validate(Validator::Email);
    assert_eq!(check_field(&spec, None), Ok(()));
    assert_eq!(check_field(&spec, Some(&text(""))), Ok(()));
    assert!(check_field(&spec, Some(&text("nope"))).is_err());
}

#[test]
fn required_file_field_accepts_any_file() {
    let spec = FieldSpec::required("idDocument", "ID document").kind(FieldKind::File);
    let file = FieldValue::File(FileRef {
        name: "passport.png".to_owned(),
        size_bytes: 1024,
        mime_type: "image/png".to_owned(),
    });
    assert!(check_field(&spec, None).is_err());
    assert_eq!(check_field(&spec, Some(&file)), Ok(()));
}

// =============================================================
// Validators
// =============================================================

#[test]
fn email_validator_requires_local_part_and_dotted_domain() {
    let spec = FieldSpec::required("email", "Email").validate(Validator::Email);
    assert_eq!(check_field(&spec, Some(&text("jane@paybord.io"))), Ok(()));
    assert!(check_field(&spec, Some(&text("@paybord.io"))).is_err());
    assert!(check_field(&spec, Some(&text("jane@localhost"))).is_err());
    assert!(check_field(&spec, Some(&text("jane@@paybord.io"))).is_err());
    assert!(check_field(&spec, Some(&text("jane doe@paybord.io"))).is_err());
}

#[test]
fn min_length_counts_characters() {
    let spec = FieldSpec::required("password", "Password").validate(Validator::MinLength(8));
    assert_eq!(
        check_field(&spec, Some(&text("short"))),
        Err("Password must be at least 8 characters".to_owned())
    );
    assert_eq!(check_field(&spec, Some(&text("long-enough"))), Ok(()));
}

#[test]
fn digits_validator_ignores_separators() {
    let spec = FieldSpec::required("postalCode", "Postal code").validate(Validator::Digits { min: 5, max: 5 });
    assert_eq!(check_field(&spec, Some(&text("94 107"))), Ok(()));
    assert_eq!(
        check_field(&spec, Some(&text("9410"))),
        Err("Postal code must be 5 digits".to_owned())
    );
    assert!(check_field(&spec, Some(&text("94l07"))).is_err());
}

#[test]
fn card_number_uses_luhn_checksum() {
    assert!(is_card_number("4242424242424242"));
    assert!(is_card_number("4242 4242 4242 4242"));
    assert!(!is_card_number("4242424242424241"));
    assert!(!is_card_number("4242"));
    assert!(!is_card_number("4242-4242-4242-424x"));
}

#[test]
fn expiry_parses_month_and_year() {
    assert_eq!(parse_expiry("12/29"), Some((12, 29)));
    assert_eq!(parse_expiry("01/30"), Some((1, 30)));
    assert_eq!(parse_expiry("13/29"), None);
    assert_eq!(parse_expiry("1/29"), None);
    assert_eq!(parse_expiry("1229"), None);
}

#[test]
fn cvc_accepts_three_or_four_digits() {
    let spec = FieldSpec::required("cvc", "CVC").validate(Validator::Cvc);
    assert_eq!(check_field(&spec, Some(&text("123"))), Ok(()));
    assert_eq!(check_field(&spec, Some(&text("1234"))), Ok(()));
    assert!(check_field(&spec, Some(&text("12"))).is_err());
    assert!(check_field(&spec, Some(&text("12a"))).is_err());
}

#[test]
fn iso_date_validator_checks_shape_and_ranges() {
    let spec = FieldSpec::required("dateOfBirth", "Date of birth").validate(Validator::IsoDate);
    assert_eq!(check_field(&spec, Some(&text("1990-04-21"))), Ok(()));
    assert!(check_field(&spec, Some(&text("1990-13-01"))).is_err());
    assert!(check_field(&spec, Some(&text("21/04/1990"))).is_err());
}

#[test]
fn iso_date_validator_rejects_days_past_month_end() {
    let spec = FieldSpec::required("dateOfBirth", "Date of birth").validate(Validator::IsoDate);
    assert!(check_field(&spec, Some(&text("2023-02-31"))).is_err());
    assert!(check_field(&spec, Some(&text("2023-04-31"))).is_err());
    assert!(check_field(&spec, Some(&text("2023-02-29"))).is_err());
    assert_eq!(check_field(&spec, Some(&text("2024-02-29"))), Ok(()));
}

#[test]
fn amount_parses_into_minor_units() {
    assert_eq!(parse_amount_minor("12"), Some(1200));
    assert_eq!(parse_amount_minor("12.5"), Some(1250));
    assert_eq!(parse_amount_minor("1,000.05"), Some(100_005));
    assert_eq!(parse_amount_minor("1.005"), None);
    assert_eq!(parse_amount_minor("abc"), None);
    assert_eq!(parse_amount_minor(".50"), None);
}

#[test]
fn amount_validator_rejects_zero() {
    let spec = FieldSpec::required("amount", "Amount").validate(Validator::Amount);
    assert!(check_field(&spec, Some(&text("0"))).is_err());
    assert_eq!(check_field(&spec, Some(&text("25.00"))), Ok(()));
}

#[test]
fn one_of_options_matches_choice_values() {
    let spec = FieldSpec::required("currency", "Currency")
        .kind(FieldKind::Choice(CHOICES))
        .validate(Validator::OneOfOptions);
    assert_eq!(check_field(&spec, Some(&text("eur"))), Ok(()));
    assert_eq!(check_field(&spec, Some(&text("gbp"))), Err("Choose a currency".to_owned()));
}

#[test]
fn custom_validator_runs_on_trimmed_text() {
    fn no_spaces(value: &str) -> Result<(), String> {
        if value.contains(' ') { Err("No spaces".to_owned()) } else { Ok(()) }
    }
    let spec = FieldSpec::required("slug", "Slug").validate(Validator::Custom(no_spaces));
    assert_eq!(check_field(&spec, Some(&text("  my-store  "))), Ok(()));
    assert_eq!(check_field(&spec, Some(&text("my store"))), Err("No spaces".to_owned()));
}

// =============================================================
// FieldKind / FieldValue
// =============================================================

#[test]
fn field_kind_maps_to_input_types() {
    assert_eq!(FieldKind::Email.input_type(), "email");
    assert_eq!(FieldKind::File.input_type(), "file");
    assert_eq!(FieldKind::Choice(CHOICES).input_type(), "text");
    assert_eq!(FieldKind::Choice(CHOICES).options().len(), 2);
    assert!(FieldKind::Text.options().is_empty());
}

#[test]
fn blank_text_is_distinct_from_file_value() {
    assert!(text("").is_blank());
    let file = FieldValue::File(FileRef { name: "a.pdf".to_owned(), size_bytes: 0, mime_type: String::new() });
    assert!(!file.is_blank());
    assert_eq!(file.as_text(), None);
    assert!(file.as_file().is_some());
}
