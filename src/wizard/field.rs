//! Field specifications, values, and built-in validators for wizard steps.
//!
//! DESIGN
//! ======
//! Field tables are `'static` data so every flow can be declared as a
//! `const` and shared between the Leptos components that render it and the
//! tests that drive it. Validators are plain enum variants (or bare `fn`
//! pointers for custom rules) so specs stay `Copy` and `Send + Sync`.

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;

use serde::{Deserialize, Serialize};
use time::Date;
use time::macros::format_description;

/// How a field is rendered and which input type the browser should use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Password,
    Phone,
    Date,
    /// Free text restricted to digits and separators (card numbers, amounts).
    Numeric,
    /// Select box over fixed `(value, label)` options.
    Choice(&'static [(&'static str, &'static str)]),
    TextArea,
    /// File picker. Absence of a value means "no file selected".
    File,
}

impl FieldKind {
    /// HTML `type` attribute for `<input>` rendering.
    #[must_use]
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
            Self::Phone => "tel",
            Self::Date => "date",
            Self::File => "file",
            Self::Text | Self::Numeric | Self::Choice(_) | Self::TextArea => "text",
        }
    }

    /// Options for choice fields; empty for every other kind.
    #[must_use]
    pub fn options(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Choice(options) => options,
            _ => &[],
        }
    }
}

/// Built-in validation rules applied to non-empty values.
#[derive(Clone, Copy, Debug)]
pub enum Validator {
    Email,
    MinLength(usize),
    /// Digits only (spaces and dashes ignored), length within `min..=max`.
    Digits { min: usize, max: usize },
    /// Card number passing the Luhn checksum.
    CardNumber,
    /// Card expiry in `MM/YY` form.
    Expiry,
    /// Three or four digit security code.
    Cvc,
    /// Calendar date in `YYYY-MM-DD` form.
    IsoDate,
    /// Positive decimal amount with at most two fraction digits.
    Amount,
    /// Value must be one of the field's choice options.
    OneOfOptions,
    Custom(fn(&str) -> Result<(), String>),
}

/// Static description of one form field inside a step.
#[derive(Clone, Copy, Debug)]
pub struct FieldSpec {
    /// Field name; unique within its step and used as the payload key.
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub placeholder: &'static str,
    pub validator: Option<Validator>,
}

impl FieldSpec {
    /// Required text field with no extra validation.
    #[must_use]
    pub const fn required(name: &'static str, label: &'static str) -> Self {
        Self { name, label, kind: FieldKind::Text, required: true, placeholder: "", validator: None }
    }

    /// Optional text field with no extra validation.
    #[must_use]
    pub const fn optional(name: &'static str, label: &'static str) -> Self {
        Self { name, label, kind: FieldKind::Text, required: false, placeholder: "", validator: None }
    }

    #[must_use]
    pub const fn kind(mut self, kind: FieldKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub const fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = placeholder;
        self
    }

    #[must_use]
    pub const fn validate(mut self, validator: Validator) -> Self {
        self.validator = Some(validator);
        self
    }
}

/// Metadata for a file chosen in a file-upload field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRef {
    pub name: String,
    pub size_bytes: u64,
    pub mime_type: String,
}

/// A value held for one field.
///
/// A file field with no entry at all is "no file selected"; a text field
/// holding `Text("")` is "present but empty". The two are never conflated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    File(FileRef),
}

impl FieldValue {
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::File(_) => None,
        }
    }

    #[must_use]
    pub fn as_file(&self) -> Option<&FileRef> {
        match self {
            Self::File(file) => Some(file),
            Self::Text(_) => None,
        }
    }

    /// Whether the value counts as "filled in" for a required field.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(text) => text.trim().is_empty(),
            Self::File(_) => false,
        }
    }
}

/// Check one field value against its spec.
///
/// `None` means the field has never been set.
///
/// # Errors
///
/// Returns the user-facing message for the first failed rule.
pub fn check_field(spec: &FieldSpec, value: Option<&FieldValue>) -> Result<(), String> {
    let present = value.filter(|v| !v.is_blank());
    let Some(value) = present else {
        if spec.required {
            return Err(format!("{} is required", spec.label));
        }
        return Ok(());
    };
    let Some(validator) = spec.validator else {
        return Ok(());
    };
    let Some(text) = value.as_text() else {
        return Ok(());
    };
    apply_validator(validator, spec, text.trim())
}

fn apply_validator(validator: Validator, spec: &FieldSpec, text: &str) -> Result<(), String> {
    match validator {
        Validator::Email => {
            if is_email(text) {
                Ok(())
            } else {
                Err("Enter a valid email address".to_owned())
            }
        }
        Validator::MinLength(min) => {
            if text.chars().count() >= min {
                Ok(())
            } else {
                Err(format!("{} must be at least {min} characters", spec.label))
            }
        }
        Validator::Digits { min, max } => {
            let digits = digits_only(text);
            let all_digits = text.chars().all(|c| c.is_ascii_digit() || c == ' ' || c == '-');
            if all_digits && (min..=max).contains(&digits.len()) {
                Ok(())
            } else if min == max {
                Err(format!("{} must be {min} digits", spec.label))
            } else {
                Err(format!("{} must be {min}-{max} digits", spec.label))
            }
        }
        Validator::CardNumber => {
            if is_card_number(text) {
                Ok(())
            } else {
                Err("Enter a valid card number".to_owned())
            }
        }
        Validator::Expiry => parse_expiry(text).map(|_| ()).ok_or_else(|| "Use MM/YY".to_owned()),
        Validator::Cvc => {
            let ok = text.chars().all(|c| c.is_ascii_digit()) && (3..=4).contains(&text.len());
            if ok { Ok(()) } else { Err("Enter the 3 or 4 digit security code".to_owned()) }
        }
        Validator::IsoDate => {
            if is_iso_date(text) {
                Ok(())
            } else {
                Err("Use YYYY-MM-DD".to_owned())
            }
        }
        Validator::Amount => parse_amount_minor(text)
            .filter(|minor| *minor > 0)
            .map(|_| ())
            .ok_or_else(|| "Enter an amount greater than zero".to_owned()),
        Validator::OneOfOptions => {
            if spec.kind.options().iter().any(|(value, _)| *value == text) {
                Ok(())
            } else {
                Err(format!("Choose a {}", spec.label.to_lowercase()))
            }
        }
        Validator::Custom(check) => check(text),
    }
}

// =============================================================================
// RULE HELPERS
// =============================================================================

/// Single `@`, non-empty local part, dotted domain, no whitespace.
#[must_use]
pub fn is_email(text: &str) -> bool {
    let mut parts = text.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    !local.is_empty()
        && !text.contains(char::is_whitespace)
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// Strip everything except ASCII digits.
#[must_use]
pub fn digits_only(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}

/// Luhn checksum over a 12-19 digit card number (spaces and dashes allowed).
#[must_use]
pub fn is_card_number(text: &str) -> bool {
    if !text.chars().all(|c| c.is_ascii_digit() || c == ' ' || c == '-') {
        return false;
    }
    let digits = digits_only(text);
    if !(12..=19).contains(&digits.len()) {
        return false;
    }
    let sum: u32 = digits
        .bytes()
        .rev()
        .enumerate()
        .map(|(i, b)| {
            let d = u32::from(b - b'0');
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                d
            }
        })
        .sum();
    sum % 10 == 0
}

/// Parse `MM/YY` into `(month, two-digit year)`.
#[must_use]
pub fn parse_expiry(text: &str) -> Option<(u8, u8)> {
    let (month, year) = text.split_once('/')?;
    let (month, year) = (month.trim(), year.trim());
    if month.len() != 2 || year.len() != 2 {
        return None;
    }
    let month: u8 = month.parse().ok()?;
    let year: u8 = year.parse().ok()?;
    (1..=12).contains(&month).then_some((month, year))
}

/// A real calendar date, so `2023-02-31` is rejected.
fn is_iso_date(text: &str) -> bool {
    Date::parse(text, format_description!("[year]-[month]-[day]")).is_ok()
}

/// Parse a decimal amount such as `"12.5"` into minor units (`1250`).
#[must_use]
pub fn parse_amount_minor(text: &str) -> Option<i64> {
    let text = text.trim().replace(',', "");
    let (whole, frac) = text.split_once('.').unwrap_or((text.as_str(), ""));
    if whole.is_empty() || !whole.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    if frac.len() > 2 || !frac.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let whole: i64 = whole.parse().ok()?;
    let frac_minor: i64 = match frac.len() {
        0 => 0,
        1 => frac.parse::<i64>().ok()? * 10,
        _ => frac.parse().ok()?,
    };
    whole.checked_mul(100)?.checked_add(frac_minor)
}
