//! Concrete step tables for every form in the dashboard, plus builders that
//! turn validated field values into request payloads.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages construct `Wizard::new(flows::KYC)` (etc.) and, once the wizard
//! reports `ReadyToSubmit`, call the matching `*_from` builder on the value
//! snapshot returned by `begin_submit`.

#[cfg(test)]
#[path = "flows_test.rs"]
mod flows_test;

use super::field::{FieldKind, FieldSpec, Validator, parse_amount_minor};
use super::{FieldValue, FieldValues, FileRef, Flow, StepSpec};
use crate::net::types::{
    CardDetails, KycSubmission, LoginRequest, NewPaymentMethod, NewProduct, NewStorefront, NewSubscription,
    PaymentLinkPayment, SignupRequest,
};

// =============================================================================
// CHOICE TABLES
// =============================================================================

pub const COUNTRIES: &[(&str, &str)] = &[
    ("US", "United States"),
    ("GB", "United Kingdom"),
    ("NG", "Nigeria"),
    ("DE", "Germany"),
    ("CA", "Canada"),
    ("KE", "Kenya"),
];

pub const CURRENCIES: &[(&str, &str)] =
    &[("USD", "US Dollar"), ("EUR", "Euro"), ("GBP", "British Pound"), ("NGN", "Nigerian Naira")];

pub const CUSTOMERS: &[(&str, &str)] = &[
    ("cust_001", "Acme Corp"),
    ("cust_002", "Globex Ltd"),
    ("cust_003", "Initech"),
    ("cust_004", "Umbrella Health"),
];

pub const PLANS: &[(&str, &str)] = &[
    ("plan_basic", "Basic - $9/month"),
    ("plan_pro", "Pro - $29/month"),
    ("plan_enterprise", "Enterprise - $99/month"),
];

// =============================================================================
// SHARED FIELDS
// =============================================================================

const EMAIL: FieldSpec = FieldSpec::required("email", "Email")
    .kind(FieldKind::Email)
    .placeholder("you@business.com")
    .validate(Validator::Email);

const CARD_NUMBER: FieldSpec = FieldSpec::required("cardNumber", "Card number")
    .kind(FieldKind::Numeric)
    .placeholder("4242 4242 4242 4242")
    .validate(Validator::CardNumber);

const EXPIRY: FieldSpec = FieldSpec::required("expiry", "Expiry").placeholder("MM/YY").validate(Validator::Expiry);

const CVC: FieldSpec = FieldSpec::required("cvc", "CVC").kind(FieldKind::Numeric).placeholder("123").validate(Validator::Cvc);

const CARD_FIELDS: &[FieldSpec] = &[CARD_NUMBER, EXPIRY, CVC];

// =============================================================================
// FLOWS
// =============================================================================

const SIGNIN_STEPS: &[StepSpec] = &[StepSpec {
    id: "credentials",
    title: "Sign in",
    fields: &[EMAIL, FieldSpec::required("password", "Password").kind(FieldKind::Password)],
}];

pub const SIGNIN: Flow = Flow::new("signin", SIGNIN_STEPS);

const SIGNUP_STEPS: &[StepSpec] = &[StepSpec {
    id: "account",
    title: "Create your account",
    fields: &[
        FieldSpec::required("name", "Full name"),
        EMAIL,
        FieldSpec::optional("businessName", "Business name"),
        FieldSpec::required("password", "Password").kind(FieldKind::Password).validate(Validator::MinLength(8)),
        FieldSpec::required("confirmPassword", "Confirm password").kind(FieldKind::Password),
    ],
}];

pub const SIGNUP: Flow = Flow::new("signup", SIGNUP_STEPS);

const KYC_STEPS: &[StepSpec] = &[
    StepSpec {
        id: "personal",
        title: "Personal information",
        fields: &[
            FieldSpec::required("firstName", "First name"),
            FieldSpec::required("lastName", "Last name"),
            FieldSpec::required("dateOfBirth", "Date of birth").kind(FieldKind::Date).validate(Validator::IsoDate),
            FieldSpec::optional("phone", "Phone number")
                .kind(FieldKind::Phone)
                .validate(Validator::Digits { min: 7, max: 15 }),
        ],
    },
    StepSpec {
        id: "address",
        title: "Address",
        fields: &[
            FieldSpec::required("addressLine", "Street address"),
            FieldSpec::required("city", "City"),
            FieldSpec::required("postalCode", "Postal code").validate(Validator::MinLength(3)),
            FieldSpec::required("country", "Country")
                .kind(FieldKind::Choice(COUNTRIES))
                .validate(Validator::OneOfOptions),
        ],
    },
    StepSpec {
        id: "documents",
        title: "Documents",
        fields: &[
            FieldSpec::optional("idDocument", "Government ID").kind(FieldKind::File),
            FieldSpec::optional("proofOfAddress", "Proof of address").kind(FieldKind::File),
        ],
    },
];

/// Identity verification. Document uploads are optional; see DESIGN.md.
pub const KYC: Flow = Flow::new("kyc", KYC_STEPS);

const CREATE_SUBSCRIPTION_STEPS: &[StepSpec] = &[
    StepSpec {
        id: "customer",
        title: "Customer",
        fields: &[FieldSpec::required("customer", "Customer")
            .kind(FieldKind::Choice(CUSTOMERS))
            .validate(Validator::OneOfOptions)],
    },
    StepSpec {
        id: "plan",
        title: "Plan",
        fields: &[FieldSpec::required("plan", "Plan").kind(FieldKind::Choice(PLANS)).validate(Validator::OneOfOptions)],
    },
    StepSpec { id: "payment", title: "Payment", fields: CARD_FIELDS },
];

pub const CREATE_SUBSCRIPTION: Flow = Flow::new("create_subscription", CREATE_SUBSCRIPTION_STEPS);

const PAYMENT_METHOD_STEPS: &[StepSpec] = &[StepSpec {
    id: "card",
    title: "Add a card",
    fields: &[FieldSpec::required("cardholderName", "Name on card"), CARD_NUMBER, EXPIRY, CVC],
}];

pub const PAYMENT_METHOD: Flow = Flow::new("payment_method", PAYMENT_METHOD_STEPS);

const PLAN_SWITCH_STEPS: &[StepSpec] = &[StepSpec {
    id: "plan",
    title: "Change plan",
    fields: &[FieldSpec::required("plan", "Plan").kind(FieldKind::Choice(PLANS)).validate(Validator::OneOfOptions)],
}];

pub const PLAN_SWITCH: Flow = Flow::new("plan_switch", PLAN_SWITCH_STEPS);

const CREATE_STOREFRONT_STEPS: &[StepSpec] = &[
    StepSpec {
        id: "details",
        title: "Store details",
        fields: &[
            FieldSpec::required("name", "Store name"),
            FieldSpec::required("slug", "Store URL").placeholder("my-store").validate(Validator::Custom(check_slug)),
            FieldSpec::optional("description", "Description").kind(FieldKind::TextArea),
        ],
    },
    StepSpec {
        id: "settings",
        title: "Settings",
        fields: &[
            FieldSpec::required("currency", "Currency")
                .kind(FieldKind::Choice(CURRENCIES))
                .validate(Validator::OneOfOptions),
            FieldSpec::optional("supportEmail", "Support email").kind(FieldKind::Email).validate(Validator::Email),
        ],
    },
];

pub const CREATE_STOREFRONT: Flow = Flow::new("create_storefront", CREATE_STOREFRONT_STEPS);

const PRODUCT_STEPS: &[StepSpec] = &[StepSpec {
    id: "product",
    title: "Product",
    fields: &[
        FieldSpec::required("name", "Product name"),
        FieldSpec::optional("description", "Description").kind(FieldKind::TextArea),
        FieldSpec::required("price", "Price").kind(FieldKind::Numeric).placeholder("0.00").validate(Validator::Amount),
    ],
}];

pub const PRODUCT: Flow = Flow::new("product", PRODUCT_STEPS);

const PAYOUT_STEPS: &[StepSpec] = &[StepSpec {
    id: "amount",
    title: "Request payout",
    fields: &[FieldSpec::required("amount", "Amount").kind(FieldKind::Numeric).placeholder("0.00").validate(Validator::Amount)],
}];

pub const PAYOUT: Flow = Flow::new("payout", PAYOUT_STEPS);

const CHECKOUT_STEPS: &[StepSpec] = &[StepSpec { id: "pay", title: "Pay", fields: &[EMAIL, CARD_NUMBER, EXPIRY, CVC] }];

pub const CHECKOUT: Flow = Flow::new("checkout", CHECKOUT_STEPS);

fn check_slug(value: &str) -> Result<(), String> {
    let valid = value.len() >= 3
        && value.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        && !value.starts_with('-')
        && !value.ends_with('-');
    if valid {
        Ok(())
    } else {
        Err("Use at least 3 lowercase letters, digits or hyphens".to_owned())
    }
}

// =============================================================================
// PAYLOAD BUILDERS
// =============================================================================

fn text(values: &FieldValues, name: &str) -> String {
    values.get(name).and_then(FieldValue::as_text).map(str::trim).unwrap_or_default().to_owned()
}

fn optional_text(values: &FieldValues, name: &str) -> Option<String> {
    Some(text(values, name)).filter(|v| !v.is_empty())
}

fn file(values: &FieldValues, name: &str) -> Option<FileRef> {
    values.get(name).and_then(FieldValue::as_file).cloned()
}

fn card(values: &FieldValues) -> CardDetails {
    CardDetails {
        card_number: crate::wizard::field::digits_only(&text(values, "cardNumber")),
        expiry: text(values, "expiry"),
        cvc: text(values, "cvc"),
    }
}

#[must_use]
pub fn login_from(values: &FieldValues) -> LoginRequest {
    LoginRequest { email: text(values, "email").to_lowercase(), password: text(values, "password") }
}

/// Build the signup payload, or report a password confirmation mismatch.
///
/// # Errors
///
/// Returns `(field, message)` for the confirmation field when the two
/// passwords differ.
pub fn signup_from(values: &FieldValues) -> Result<SignupRequest, (&'static str, String)> {
    let password = text(values, "password");
    if password != text(values, "confirmPassword") {
        return Err(("confirmPassword", "Passwords do not match".to_owned()));
    }
    Ok(SignupRequest {
        name: text(values, "name"),
        email: text(values, "email").to_lowercase(),
        password,
        business_name: optional_text(values, "businessName"),
    })
}

#[must_use]
pub fn kyc_from(values: &FieldValues) -> KycSubmission {
    KycSubmission {
        first_name: text(values, "firstName"),
        last_name: text(values, "lastName"),
        date_of_birth: text(values, "dateOfBirth"),
        phone: optional_text(values, "phone"),
        address_line: text(values, "addressLine"),
        city: text(values, "city"),
        postal_code: text(values, "postalCode"),
        country: text(values, "country"),
        id_document: file(values, "idDocument"),
        proof_of_address: file(values, "proofOfAddress"),
    }
}

#[must_use]
pub fn subscription_from(values: &FieldValues) -> NewSubscription {
    NewSubscription { customer: text(values, "customer"), plan: text(values, "plan"), payment: card(values) }
}

#[must_use]
pub fn payment_method_from(values: &FieldValues) -> NewPaymentMethod {
    NewPaymentMethod { cardholder_name: text(values, "cardholderName"), card: card(values) }
}

#[must_use]
pub fn storefront_from(values: &FieldValues) -> NewStorefront {
    NewStorefront {
        name: text(values, "name"),
        slug: text(values, "slug"),
        description: optional_text(values, "description"),
        currency: text(values, "currency"),
        support_email: optional_text(values, "supportEmail"),
    }
}

/// Prefill values for editing an existing storefront.
#[must_use]
pub fn storefront_values(store: &crate::net::types::Storefront) -> FieldValues {
    let mut values = FieldValues::new();
    values.insert("name".to_owned(), FieldValue::Text(store.name.clone()));
    values.insert("slug".to_owned(), FieldValue::Text(store.slug.clone()));
    values.insert("currency".to_owned(), FieldValue::Text(store.currency.clone()));
    if let Some(description) = &store.description {
        values.insert("description".to_owned(), FieldValue::Text(description.clone()));
    }
    if let Some(email) = &store.support_email {
        values.insert("supportEmail".to_owned(), FieldValue::Text(email.clone()));
    }
    values
}

#[must_use]
pub fn product_from(values: &FieldValues) -> NewProduct {
    NewProduct {
        name: text(values, "name"),
        description: optional_text(values, "description"),
        price_minor: parse_amount_minor(&text(values, "price")).unwrap_or(0),
    }
}

/// Prefill values for editing a product; the price is shown in major units.
#[must_use]
pub fn product_values(product: &crate::net::types::Product) -> FieldValues {
    let mut values = FieldValues::new();
    values.insert("name".to_owned(), FieldValue::Text(product.name.clone()));
    let price = format!("{}.{:02}", product.price_minor / 100, product.price_minor.rem_euclid(100));
    values.insert("price".to_owned(), FieldValue::Text(price));
    if let Some(description) = &product.description {
        values.insert("description".to_owned(), FieldValue::Text(description.clone()));
    }
    values
}

/// Payout amount in minor units.
#[must_use]
pub fn payout_amount_from(values: &FieldValues) -> i64 {
    parse_amount_minor(&text(values, "amount")).unwrap_or(0)
}

#[must_use]
pub fn plan_from(values: &FieldValues) -> String {
    text(values, "plan")
}

#[must_use]
pub fn checkout_from(values: &FieldValues) -> PaymentLinkPayment {
    PaymentLinkPayment { email: text(values, "email").to_lowercase(), card: card(values) }
}

/// Display label for a choice value, falling back to the raw value.
#[must_use]
pub fn choice_label(options: &[(&'static str, &'static str)], value: &str) -> String {
    options
        .iter()
        .find(|(v, _)| *v == value)
        .map_or_else(|| value.to_owned(), |(_, label)| (*label).to_owned())
}
