use super::*;
use crate::wizard::flows;

#[test]
fn card_and_expiry_inputs_are_reformatted() {
    let card = flows::PAYMENT_METHOD.field("cardNumber").unwrap();
    let expiry = flows::PAYMENT_METHOD.field("expiry").unwrap();
    let name = flows::PAYMENT_METHOD.field("cardholderName").unwrap();
    assert_eq!(normalize_input(card, "4242424242424242"), "4242 4242 4242 4242");
    assert_eq!(normalize_input(expiry, "1229"), "12/29");
    assert_eq!(normalize_input(name, "Jane 42"), "Jane 42");
}

#[test]
fn step_classes_mark_done_and_current() {
    assert_eq!(step_class(0, 1), "steps__item steps__item--done");
    assert_eq!(step_class(1, 1), "steps__item steps__item--current");
    assert_eq!(step_class(2, 1), "steps__item");
}

#[test]
fn primary_label_follows_position() {
    let mut wizard = Wizard::new(flows::KYC);
    assert_eq!(primary_label(&wizard, "Submit"), "Continue");

    wizard.set_text("firstName", "Jane");
    wizard.set_text("lastName", "Doe");
    wizard.set_text("dateOfBirth", "1990-04-01");
    wizard.next().unwrap();
    wizard.set_text("addressLine", "1 Main St");
    wizard.set_text("city", "Lagos");
    wizard.set_text("postalCode", "100001");
    wizard.set_text("country", "NG");
    wizard.next().unwrap();
    assert_eq!(primary_label(&wizard, "Submit"), "Submit");

    wizard.next().unwrap();
    wizard.begin_submit().unwrap();
    assert_eq!(primary_label(&wizard, "Submit"), "Submitting...");
}

#[test]
fn file_ref_clamps_bad_sizes() {
    let file = file_ref("id.png".to_owned(), 2048.0, "image/png".to_owned());
    assert_eq!(file.size_bytes, 2048);
    assert_eq!(file_ref("x".to_owned(), f64::NAN, String::new()).size_bytes, 0);
    assert_eq!(file_ref("x".to_owned(), -5.0, String::new()).size_bytes, 0);
}
