use super::*;

fn card(exp_month: u8, exp_year: u16) -> PaymentMethod {
    PaymentMethod {
        id: "pm_1".to_owned(),
        brand: "Visa".to_owned(),
        last4: "4242".to_owned(),
        exp_month,
        exp_year,
        cardholder_name: "Jane Doe".to_owned(),
        is_default: false,
    }
}

#[test]
fn expiry_uses_two_digit_month_and_year() {
    assert_eq!(expiry_label(&card(3, 2029)), "03/29");
    assert_eq!(expiry_label(&card(12, 2031)), "12/31");
}
