use super::*;
use crate::wizard::{Advance, FieldErrors, Phase, SubmitError, Wizard, validate_step};

fn fill(wizard: &mut Wizard, pairs: &[(&str, &str)]) {
    for (name, value) in pairs {
        wizard.set_text(name, *value);
    }
}

// =============================================================
// Flow tables
// =============================================================

#[test]
fn field_names_are_unique_within_each_step() {
    for flow in [
        SIGNIN,
        SIGNUP,
        KYC,
        CREATE_SUBSCRIPTION,
        PAYMENT_METHOD,
        PLAN_SWITCH,
        CREATE_STOREFRONT,
        PRODUCT,
        PAYOUT,
        CHECKOUT,
    ] {
        for step in flow.steps() {
            let mut names: Vec<&str> = step.fields.iter().map(|f| f.name).collect();
            let total = names.len();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), total, "duplicate field in {}/{}", flow.name, step.id);
        }
    }
}

#[test]
fn choice_fields_validate_against_their_options() {
    for flow in [KYC, CREATE_SUBSCRIPTION, PLAN_SWITCH, CREATE_STOREFRONT] {
        for step in flow.steps() {
            for field in step.fields {
                if !field.kind.options().is_empty() {
                    assert!(
                        matches!(field.validator, Some(Validator::OneOfOptions)),
                        "{} should validate its options",
                        field.name
                    );
                }
            }
        }
    }
}

// =============================================================
// KYC
// =============================================================

#[test]
fn kyc_personal_step_blocks_on_missing_last_name() {
    let mut wizard = Wizard::new(KYC);
    wizard.set_text("firstName", "Jane");
    wizard.set_text("lastName", "");

    assert!(wizard.next().is_err());
    assert_eq!(wizard.step_index(), 0);
    assert_eq!(wizard.error("lastName"), Some("Last name is required"));
    assert_eq!(wizard.error("firstName"), None);
}

#[test]
fn kyc_documents_are_optional_and_removable() {
    let mut wizard = Wizard::new(KYC);
    fill(&mut wizard, &[("firstName", "Jane"), ("lastName", "Doe"), ("dateOfBirth", "1990-04-21")]);
    assert_eq!(wizard.next(), Ok(Advance::Step(1)));
    fill(&mut wizard, &[("addressLine", "1 Market St"), ("city", "Lagos"), ("postalCode", "100001"), ("country", "NG")]);
    assert_eq!(wizard.next(), Ok(Advance::Step(2)));

    wizard.set_file(
        "idDocument",
        FileRef { name: "passport.jpg".to_owned(), size_bytes: 2048, mime_type: "image/jpeg".to_owned() },
    );
    wizard.remove_file("idDocument");
    assert!(wizard.file("idDocument").is_none());
    assert_eq!(wizard.next(), Ok(Advance::ReadyToSubmit));

    let values = wizard.begin_submit().unwrap();
    let submission = kyc_from(&values);
    assert_eq!(submission.first_name, "Jane");
    assert_eq!(submission.country, "NG");
    assert!(submission.phone.is_none());
    assert!(submission.id_document.is_none());
}

#[test]
fn kyc_submission_carries_uploaded_file_metadata() {
    let mut values = crate::wizard::FieldValues::new();
    values.insert(
        "proofOfAddress".to_owned(),
        FieldValue::File(FileRef { name: "bill.pdf".to_owned(), size_bytes: 512, mime_type: "application/pdf".to_owned() }),
    );
    let submission = kyc_from(&values);
    assert_eq!(submission.proof_of_address.map(|f| f.name), Some("bill.pdf".to_owned()));
}

// =============================================================
// Subscription wizard
// =============================================================

#[test]
fn subscription_wizard_completes_exactly_once() {
    let mut wizard = Wizard::new(CREATE_SUBSCRIPTION);
    wizard.set_text("customer", "cust_001");
    assert_eq!(wizard.next(), Ok(Advance::Step(1)));
    wizard.set_text("plan", "plan_pro");
    assert_eq!(wizard.next(), Ok(Advance::Step(2)));
    fill(&mut wizard, &[("cardNumber", "4242424242424242"), ("expiry", "12/29"), ("cvc", "123")]);
    assert_eq!(wizard.next(), Ok(Advance::ReadyToSubmit));

    let mut completed = Vec::new();
    let mut on_complete = |values: &crate::wizard::FieldValues| -> Result<(), String> {
        completed.push(subscription_from(values));
        Ok(())
    };

    assert!(wizard.submit(&mut on_complete).is_ok());
    assert!(matches!(wizard.submit(&mut on_complete), Err(SubmitError::Closed(Phase::Submitted))));

    assert_eq!(completed.len(), 1);
    assert_eq!(
        serde_json::to_value(&completed[0]).unwrap(),
        serde_json::json!({
            "customer": "cust_001",
            "plan": "plan_pro",
            "payment": { "cardNumber": "4242424242424242", "expiry": "12/29", "cvc": "123" }
        })
    );
}

#[test]
fn subscription_wizard_rejects_unknown_plan() {
    let mut wizard = Wizard::new(CREATE_SUBSCRIPTION);
    wizard.set_text("customer", "cust_002");
    wizard.next().unwrap();
    wizard.set_text("plan", "plan_gold");
    assert!(wizard.next().is_err());
    assert_eq!(wizard.error("plan"), Some("Choose a plan"));
}

#[test]
fn card_number_is_normalized_to_digits() {
    let mut wizard = Wizard::new(PAYMENT_METHOD);
    fill(
        &mut wizard,
        &[("cardholderName", "Jane Doe"), ("cardNumber", "4242 4242 4242 4242"), ("expiry", "01/30"), ("cvc", "999")],
    );
    wizard.next().unwrap();
    let method = payment_method_from(&wizard.begin_submit().unwrap());
    assert_eq!(method.card.card_number, "4242424242424242");
    assert_eq!(method.cardholder_name, "Jane Doe");
}

// =============================================================
// Auth / storefront / product
// =============================================================

#[test]
fn signup_reports_password_mismatch() {
    let mut values = crate::wizard::FieldValues::new();
    for (k, v) in [("name", "Jane"), ("email", "Jane@Paybord.io"), ("password", "hunter2!!"), ("confirmPassword", "hunter3!!")]
    {
        values.insert(k.to_owned(), FieldValue::Text(v.to_owned()));
    }
    assert_eq!(signup_from(&values), Err(("confirmPassword", "Passwords do not match".to_owned())));

    values.insert("confirmPassword".to_owned(), FieldValue::Text("hunter2!!".to_owned()));
    let request = signup_from(&values).unwrap();
    assert_eq!(request.email, "jane@paybord.io");
    assert!(request.business_name.is_none());
}

#[test]
fn signin_requires_valid_email() {
    let mut wizard = Wizard::new(SIGNIN);
    fill(&mut wizard, &[("email", "jane"), ("password", "secret")]);
    assert!(wizard.next().is_err());
    assert_eq!(wizard.error("email"), Some("Enter a valid email address"));
    assert_eq!(wizard.error("password"), None);
}

#[test]
fn storefront_slug_rules() {
    let step = &CREATE_STOREFRONT.steps()[0];
    let mut values = crate::wizard::FieldValues::new();
    values.insert("name".to_owned(), FieldValue::Text("My Store".to_owned()));
    values.insert("slug".to_owned(), FieldValue::Text("My Store".to_owned()));
    let errors: FieldErrors = validate_step(step, &values);
    assert!(errors.contains_key("slug"));

    values.insert("slug".to_owned(), FieldValue::Text("my-store".to_owned()));
    assert!(validate_step(step, &values).is_empty());
}

#[test]
fn storefront_values_prefill_round_trips_through_builder() {
    let store = crate::net::types::Storefront {
        id: "sf_1".to_owned(),
        name: "Main".to_owned(),
        slug: "main".to_owned(),
        description: Some("Flagship".to_owned()),
        currency: "EUR".to_owned(),
        support_email: None,
        product_count: 3,
        is_active: true,
    };
    let draft = storefront_from(&storefront_values(&store));
    assert_eq!(draft.name, "Main");
    assert_eq!(draft.description.as_deref(), Some("Flagship"));
    assert_eq!(draft.currency, "EUR");
    assert!(draft.support_email.is_none());
}

#[test]
fn product_and_payout_amounts_parse_to_minor_units() {
    let mut values = crate::wizard::FieldValues::new();
    values.insert("name".to_owned(), FieldValue::Text("T-shirt".to_owned()));
    values.insert("price".to_owned(), FieldValue::Text("19.99".to_owned()));
    values.insert("amount".to_owned(), FieldValue::Text("250".to_owned()));
    assert_eq!(product_from(&values).price_minor, 1999);
    assert_eq!(payout_amount_from(&values), 25_000);
}

#[test]
fn choice_label_falls_back_to_raw_value() {
    assert_eq!(choice_label(PLANS, "plan_pro"), "Pro - $29/month");
    assert_eq!(choice_label(PLANS, "plan_x"), "plan_x");
}

#[test]
fn product_values_show_price_in_major_units() {
    let product = crate::net::types::Product {
        id: "prod_1".to_owned(),
        storefront_id: "sf_1".to_owned(),
        name: "Mug".to_owned(),
        description: None,
        price_minor: 1_205,
        currency: "USD".to_owned(),
        active: true,
    };
    let values = product_values(&product);
    assert_eq!(values.get("price").and_then(FieldValue::as_text), Some("12.05"));
    assert_eq!(product_from(&values).price_minor, 1_205);
    assert!(!values.contains_key("description"));
}
