use super::*;

#[test]
fn slug_conflicts_land_on_the_slug_field() {
    let err = ApiError::Status { status: 409, message: "That store URL is already taken".to_owned() };
    assert_eq!(storefront_field_for(&err), Some("slug"));
}

#[test]
fn other_failures_stay_form_level() {
    let err = ApiError::Status { status: 400, message: "Store name is required".to_owned() };
    assert_eq!(storefront_field_for(&err), None);
    assert_eq!(storefront_field_for(&ApiError::Network("offline".to_owned())), None);
}

#[test]
fn rejected_slug_returns_wizard_to_details_step() {
    let mut wizard = Wizard::new(CREATE_STOREFRONT);
    wizard.set_text("name", "Shop");
    wizard.set_text("slug", "shop");
    wizard.next().unwrap();
    wizard.set_text("currency", "USD");
    wizard.next().unwrap();
    let _values = wizard.begin_submit().unwrap();

    wizard.finish_submit(Err("That store URL is already taken".to_owned()));
    wizard.reject_field("slug", "That store URL is already taken");

    assert_eq!(wizard.step_index(), 0);
    assert_eq!(wizard.error("slug"), Some("That store URL is already taken"));
    assert_eq!(wizard.text("name"), "Shop");
}
