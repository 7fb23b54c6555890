//! REST API wrappers for the Paybord backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, carrying
//! `Authorization: Bearer <token>` when a session token is stored.
//! Server-side (SSR): every call returns `ApiError::Unavailable`, since the
//! dashboard only fetches after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, ApiError>` instead of panics. Non-2xx responses
//! are classified by `ApiError::from_response`, which lifts the backend's
//! `{ "error": "..." }` message so pages can show it verbatim in a toast.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::LazyLock;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{
    AnalyticsResponse, AuthResponse, Balance, Customer, Invoice, KycSubmission, LoginRequest, NewPaymentMethod,
    NewProduct, NewStorefront, NewSubscription, PaymentLinkDetails, PaymentLinkPayment, PaymentMethod,
    PaymentReceipt, Payout, PayoutRequest, Plan, Product, SignupRequest, Storefront, Subscription,
    SubscriptionUpdate, TimeRange, Transaction, User,
};
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::list_view::Paged;

static CONFIG: LazyLock<ClientConfig> = LazyLock::new(ClientConfig::from_build_env);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Verb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

// =============================================================================
// ENDPOINTS
// =============================================================================

/// Percent-encode one path segment.
fn segment(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}

fn paged(path: &str, page: usize, limit: usize) -> String {
    format!("{path}?page={}&limit={}", page.max(1), limit.max(1))
}

fn analytics_endpoint(range: TimeRange) -> String {
    format!("/analytics/payments?range={}", range.as_query())
}

fn storefront_endpoint(id: &str) -> String {
    format!("/storefronts/{}", segment(id))
}

fn products_endpoint(storefront_id: &str) -> String {
    format!("/storefronts/{}/products", segment(storefront_id))
}

fn product_endpoint(storefront_id: &str, product_id: &str) -> String {
    format!("{}/{}", products_endpoint(storefront_id), segment(product_id))
}

fn subscription_endpoint(id: &str) -> String {
    format!("/subscriptions/{}", segment(id))
}

fn payment_method_endpoint(id: &str) -> String {
    format!("/payment-methods/{}", segment(id))
}

fn payment_link_endpoint(id: &str) -> String {
    format!("/payment-links/{}/public", segment(id))
}

fn payment_link_pay_endpoint(id: &str) -> String {
    format!("/payment-links/{}/pay", segment(id))
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Turn a status code and body into the caller's result. An empty 2xx body
/// decodes as JSON `null`, so `T = ()` works for `204 No Content`.
#[cfg(any(test, feature = "hydrate"))]
fn decode<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::from_response(status, body));
    }
    let body = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

// =============================================================================
// TRANSPORT
// =============================================================================

async fn request<B, T>(verb: Verb, path: &str, body: Option<&B>) -> Result<T, ApiError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;

        let url = CONFIG.url(path);
        let mut builder = match verb {
            Verb::Get => Request::get(&url),
            Verb::Post => Request::post(&url),
            Verb::Put => Request::put(&url),
            Verb::Patch => Request::patch(&url),
            Verb::Delete => Request::delete(&url),
        };
        if let Some(token) = crate::util::storage::load_token() {
            builder = builder.header("Authorization", &bearer(&token));
        }
        let request = match body {
            Some(body) => builder.json(body).map_err(|e| ApiError::Decode(e.to_string()))?,
            None => builder.build().map_err(|e| ApiError::Network(e.to_string()))?,
        };
        let response = request.send().await.map_err(|e| {
            log::warn!("{verb:?} {url} failed: {e}");
            ApiError::Network(e.to_string())
        })?;
        let status = response.status();
        let text = response.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let result = decode(status, &text);
        if let Err(e) = &result {
            log::warn!("{verb:?} {url} -> {status}: {e}");
        }
        result
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (verb, path, body, &*CONFIG);
        Err(ApiError::Unavailable)
    }
}

async fn get<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    request::<(), T>(Verb::Get, path, None).await
}

async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    request(Verb::Post, path, Some(body)).await
}

async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    request(Verb::Put, path, Some(body)).await
}

async fn patch<B: Serialize + ?Sized, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    request(Verb::Patch, path, Some(body)).await
}

async fn delete(path: &str) -> Result<(), ApiError> {
    request::<(), ()>(Verb::Delete, path, None).await
}

// =============================================================================
// AUTH
// =============================================================================

/// Create a merchant account via `POST /auth/signup`.
///
/// # Errors
///
/// Returns the backend's message (e.g. an already registered email) as
/// `ApiError::Status`.
pub async fn signup(payload: &SignupRequest) -> Result<AuthResponse, ApiError> {
    post("/auth/signup", payload).await
}

/// Sign in via `POST /auth/login`.
///
/// # Errors
///
/// `ApiError::Status` with status 401 for wrong credentials.
pub async fn login(payload: &LoginRequest) -> Result<AuthResponse, ApiError> {
    post("/auth/login", payload).await
}

/// # Errors
///
/// Transport failures only; the local session is cleared by the caller
/// regardless.
pub async fn logout() -> Result<(), ApiError> {
    request::<(), ()>(Verb::Post, "/auth/logout", None).await
}

/// Fetch the user behind the stored token from `GET /auth/me`.
///
/// # Errors
///
/// `ApiError::Status` with status 401 when the token is missing or expired.
pub async fn fetch_current_user() -> Result<User, ApiError> {
    get("/auth/me").await
}

/// Submit KYC details; returns the user with its updated verification status.
///
/// # Errors
///
/// Propagates transport and validation failures.
pub async fn submit_kyc(payload: &KycSubmission) -> Result<User, ApiError> {
    post("/kyc", payload).await
}

// =============================================================================
// ANALYTICS
// =============================================================================

/// # Errors
///
/// Propagates transport failures.
pub async fn get_payment_analytics(range: TimeRange) -> Result<AnalyticsResponse, ApiError> {
    get(&analytics_endpoint(range)).await
}

// =============================================================================
// STOREFRONTS & PRODUCTS
// =============================================================================

/// # Errors
///
/// Propagates transport failures.
pub async fn list_storefronts(page: usize, limit: usize) -> Result<Paged<Storefront>, ApiError> {
    get(&paged("/storefronts", page, limit)).await
}

/// # Errors
///
/// `ApiError::NotFound` for an unknown id.
pub async fn get_storefront(id: &str) -> Result<Storefront, ApiError> {
    get(&storefront_endpoint(id)).await
}

/// # Errors
///
/// `ApiError::Status` with status 409 when the slug is taken.
pub async fn create_storefront(payload: &NewStorefront) -> Result<Storefront, ApiError> {
    post("/storefronts", payload).await
}

/// # Errors
///
/// `ApiError::NotFound` for an unknown id, 409 when the slug is taken.
pub async fn update_storefront(id: &str, payload: &NewStorefront) -> Result<Storefront, ApiError> {
    put(&storefront_endpoint(id), payload).await
}

/// # Errors
///
/// `ApiError::NotFound` for an unknown id.
pub async fn delete_storefront(id: &str) -> Result<(), ApiError> {
    delete(&storefront_endpoint(id)).await
}

/// # Errors
///
/// `ApiError::NotFound` for an unknown storefront.
pub async fn list_products(storefront_id: &str, page: usize, limit: usize) -> Result<Paged<Product>, ApiError> {
    get(&paged(&products_endpoint(storefront_id), page, limit)).await
}

/// # Errors
///
/// `ApiError::NotFound` for an unknown storefront.
pub async fn create_product(storefront_id: &str, payload: &NewProduct) -> Result<Product, ApiError> {
    post(&products_endpoint(storefront_id), payload).await
}

/// # Errors
///
/// `ApiError::NotFound` for an unknown storefront or product.
pub async fn update_product(storefront_id: &str, product_id: &str, payload: &NewProduct) -> Result<Product, ApiError> {
    put(&product_endpoint(storefront_id, product_id), payload).await
}

/// # Errors
///
/// `ApiError::NotFound` for an unknown storefront or product.
pub async fn delete_product(storefront_id: &str, product_id: &str) -> Result<(), ApiError> {
    delete(&product_endpoint(storefront_id, product_id)).await
}

// =============================================================================
// SUBSCRIPTIONS
// =============================================================================

/// # Errors
///
/// Propagates transport failures.
pub async fn list_subscriptions(page: usize, limit: usize) -> Result<Paged<Subscription>, ApiError> {
    get(&paged("/subscriptions", page, limit)).await
}

/// # Errors
///
/// `ApiError::Status` when the card is declined or the plan is unknown.
pub async fn create_subscription(payload: &NewSubscription) -> Result<Subscription, ApiError> {
    post("/subscriptions", payload).await
}

/// Switch plan or change status.
///
/// # Errors
///
/// `ApiError::NotFound` for an unknown id.
pub async fn update_subscription(id: &str, update: &SubscriptionUpdate) -> Result<Subscription, ApiError> {
    patch(&subscription_endpoint(id), update).await
}

/// # Errors
///
/// `ApiError::NotFound` for an unknown id.
pub async fn delete_subscription(id: &str) -> Result<(), ApiError> {
    delete(&subscription_endpoint(id)).await
}

/// # Errors
///
/// Propagates transport failures.
pub async fn list_plans() -> Result<Vec<Plan>, ApiError> {
    get("/plans").await
}

/// # Errors
///
/// Propagates transport failures.
pub async fn list_customers() -> Result<Vec<Customer>, ApiError> {
    get("/customers").await
}

// =============================================================================
// PAYMENTS
// =============================================================================

/// Full transaction history; filtering happens client-side.
///
/// # Errors
///
/// Propagates transport failures.
pub async fn list_transactions() -> Result<Vec<Transaction>, ApiError> {
    get("/transactions").await
}

/// # Errors
///
/// Propagates transport failures.
pub async fn list_invoices() -> Result<Vec<Invoice>, ApiError> {
    get("/invoices").await
}

/// # Errors
///
/// Propagates transport failures.
pub async fn list_payment_methods() -> Result<Vec<PaymentMethod>, ApiError> {
    get("/payment-methods").await
}

/// # Errors
///
/// `ApiError::Status` when the card is rejected.
pub async fn add_payment_method(payload: &NewPaymentMethod) -> Result<PaymentMethod, ApiError> {
    post("/payment-methods", payload).await
}

/// # Errors
///
/// `ApiError::NotFound` for an unknown id.
pub async fn remove_payment_method(id: &str) -> Result<(), ApiError> {
    delete(&payment_method_endpoint(id)).await
}

/// # Errors
///
/// `ApiError::NotFound` for an unknown id.
pub async fn set_default_payment_method(id: &str) -> Result<PaymentMethod, ApiError> {
    request::<(), PaymentMethod>(Verb::Post, &format!("{}/default", payment_method_endpoint(id)), None).await
}

// =============================================================================
// BALANCE & PAYOUTS
// =============================================================================

/// # Errors
///
/// Propagates transport failures.
pub async fn get_balance() -> Result<Balance, ApiError> {
    get("/balance").await
}

/// # Errors
///
/// Propagates transport failures.
pub async fn list_payouts() -> Result<Vec<Payout>, ApiError> {
    get("/payouts").await
}

/// # Errors
///
/// `ApiError::Status` when the amount exceeds the available balance.
pub async fn request_payout(payload: &PayoutRequest) -> Result<Payout, ApiError> {
    post("/payouts", payload).await
}

// =============================================================================
// PAYMENT LINKS
// =============================================================================

/// Public (unauthenticated) view of a payment link.
///
/// # Errors
///
/// `ApiError::NotFound` when the link does not exist.
pub async fn get_public_payment_link(id: &str) -> Result<PaymentLinkDetails, ApiError> {
    get(&payment_link_endpoint(id)).await
}

/// # Errors
///
/// `ApiError::NotFound` for an unknown link, `ApiError::Status` when the
/// link is no longer payable or the card is declined.
pub async fn pay_payment_link(id: &str, payload: &PaymentLinkPayment) -> Result<PaymentReceipt, ApiError> {
    post(&payment_link_pay_endpoint(id), payload).await
}
