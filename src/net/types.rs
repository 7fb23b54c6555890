//! Wire DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! The backend owns the canonical copy of every record here; the UI only
//! keeps local copies for rendering. Field names follow the backend's
//! camelCase JSON. Money is always integer minor units plus an ISO currency
//! code, and every status is a closed enum so components match exhaustively
//! instead of comparing strings.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::wizard::FileRef;

// =============================================================================
// AUTH
// =============================================================================

/// Identity-verification state of a merchant account.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KycStatus {
    #[default]
    NotStarted,
    Pending,
    Verified,
    Rejected,
}

/// The signed-in merchant user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub business_name: Option<String>,
    #[serde(default)]
    pub kyc_status: KycStatus,
}

/// Response of `signup` and `login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub business_name: Option<String>,
}

/// Identity details collected by the KYC onboarding flow.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KycSubmission {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub phone: Option<String>,
    pub address_line: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
    pub id_document: Option<FileRef>,
    pub proof_of_address: Option<FileRef>,
}

// =============================================================================
// PAYMENTS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    Succeeded,
    Pending,
    Failed,
    Refunded,
}

impl TransactionStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Succeeded => "succeeded",
            Self::Pending => "pending",
            Self::Failed => "failed",
            Self::Refunded => "refunded",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Payment,
    Payout,
    Refund,
    Subscription,
}

impl TransactionKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Payment => "payment",
            Self::Payout => "payout",
            Self::Refund => "refund",
            Self::Subscription => "subscription",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub description: String,
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub amount_minor: i64,
    pub currency: String,
    pub status: TransactionStatus,
    pub kind: TransactionKind,
    #[serde(default)]
    pub customer: Option<String>,
    /// RFC 3339 timestamp.
    pub created_at: String,
}

/// Card details entered in payment forms.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDetails {
    pub card_number: String,
    pub expiry: String,
    pub cvc: String,
}

/// A saved card on the merchant account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    pub id: String,
    pub brand: String,
    pub last4: String,
    pub exp_month: u8,
    pub exp_year: u16,
    pub cardholder_name: String,
    #[serde(default)]
    pub is_default: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPaymentMethod {
    pub cardholder_name: String,
    pub card: CardDetails,
}

// =============================================================================
// INVOICES
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Draft,
    Open,
    Paid,
    Overdue,
    Void,
}

impl InvoiceStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Open => "open",
            Self::Paid => "paid",
            Self::Overdue => "overdue",
            Self::Void => "void",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,
    pub number: String,
    pub customer: String,
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub amount_minor: i64,
    pub currency: String,
    pub status: InvoiceStatus,
    pub issued_at: String,
    pub due_date: String,
}

// =============================================================================
// SUBSCRIPTIONS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingInterval {
    Monthly,
    Yearly,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Active,
    Trialing,
    PastDue,
    Canceled,
}

impl SubscriptionStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Trialing => "trialing",
            Self::PastDue => "past_due",
            Self::Canceled => "canceled",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub id: String,
    pub name: String,
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub amount_minor: i64,
    pub currency: String,
    pub interval: BillingInterval,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: String,
    pub customer: String,
    pub plan: String,
    pub status: SubscriptionStatus,
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub amount_minor: i64,
    pub currency: String,
    pub interval: BillingInterval,
    pub current_period_end: String,
}

/// Payload produced by the create-subscription wizard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSubscription {
    pub customer: String,
    pub plan: String,
    pub payment: CardDetails,
}

/// Partial update used by the plan switcher and cancel action.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SubscriptionStatus>,
}

// =============================================================================
// STOREFRONTS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Storefront {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    pub currency: String,
    #[serde(default)]
    pub support_email: Option<String>,
    #[serde(default)]
    pub product_count: u32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStorefront {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub currency: String,
    pub support_email: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub storefront_id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub price_minor: i64,
    pub currency: String,
    #[serde(default = "default_true")]
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub price_minor: i64,
}

// =============================================================================
// BALANCE & PAYOUTS
// =============================================================================

/// Account balance shown by the balance card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Balance {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub available_minor: i64,
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub pending_minor: i64,
    pub currency: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayoutStatus {
    Pending,
    InTransit,
    Paid,
    Failed,
}

impl PayoutStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InTransit => "in_transit",
            Self::Paid => "paid",
            Self::Failed => "failed",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payout {
    pub id: String,
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub amount_minor: i64,
    pub currency: String,
    pub status: PayoutStatus,
    pub arrival_date: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoutRequest {
    pub amount_minor: i64,
    pub currency: String,
}

// =============================================================================
// ANALYTICS
// =============================================================================

/// Window requested from the analytics endpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "7d")]
    Week,
    #[default]
    #[serde(rename = "30d")]
    Month,
    #[serde(rename = "90d")]
    Quarter,
    #[serde(rename = "1y")]
    Year,
}

impl TimeRange {
    pub const ALL: [Self; 4] = [Self::Week, Self::Month, Self::Quarter, Self::Year];

    /// Query-string value understood by the backend.
    #[must_use]
    pub fn as_query(self) -> &'static str {
        match self {
            Self::Week => "7d",
            Self::Month => "30d",
            Self::Quarter => "90d",
            Self::Year => "1y",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Week => "Last 7 days",
            Self::Month => "Last 30 days",
            Self::Quarter => "Last 90 days",
            Self::Year => "Last 12 months",
        }
    }

    #[must_use]
    pub fn from_query(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_query() == raw)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsPoint {
    pub label: String,
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub volume_minor: i64,
    pub count: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSnapshot {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub total_volume_minor: i64,
    pub transaction_count: u32,
    /// Fraction of successful payments in `0.0..=1.0`.
    pub success_rate: f64,
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub average_ticket_minor: i64,
    pub currency: String,
    #[serde(default)]
    pub series: Vec<AnalyticsPoint>,
}

/// Envelope returned by `GET /api/analytics/payments`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsResponse {
    pub success: bool,
    pub data: AnalyticsSnapshot,
}

// =============================================================================
// PAYMENT LINKS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentLinkStatus {
    Active,
    Expired,
    Disabled,
}

/// Public view of a payment link for the unauthenticated checkout page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentLinkDetails {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub amount_minor: i64,
    pub currency: String,
    pub merchant_name: String,
    pub status: PaymentLinkStatus,
}

impl PaymentLinkDetails {
    #[must_use]
    pub fn is_payable(&self) -> bool {
        self.status == PaymentLinkStatus::Active
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentLinkPayment {
    pub email: String,
    pub card: CardDetails,
}

/// Receipt returned after paying a payment link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentReceipt {
    pub transaction_id: String,
    pub status: TransactionStatus,
}

// =============================================================================
// ERROR BODY
// =============================================================================

/// Backend failure body: `{ "error": "..." }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

fn default_true() -> bool {
    true
}

/// Accept integer-valued JSON numbers, including `12.0`, as `i64`.
fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
