//! Demo REST API handlers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted under `/api` by `server::app`. Paths and payloads mirror what
//! `net::api` calls, so the browser client cannot tell the demo backend
//! from the real one.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is a `DemoError`, rendered as its status code with an
//! `{ "error": "..." }` body that `ApiError::from_response` understands.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::sync::Arc;

use axum::Router;
use axum::extract::{FromRef, FromRequestParts, Path, Query, State};
use axum::http::StatusCode;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{delete, get, patch, post, put};
use serde::Deserialize;
use tokio::sync::RwLock;

use crate::demo::{DemoError, DemoStore};
use crate::list_view::{DEFAULT_PAGE_SIZE, Paged};
use crate::net::types::{
    AnalyticsResponse, AuthResponse, Balance, Customer, ErrorBody, Invoice, KycSubmission, LoginRequest,
    NewPaymentMethod, NewProduct, NewStorefront, NewSubscription, PaymentLinkDetails, PaymentLinkPayment,
    PaymentMethod, PaymentReceipt, Payout, PayoutRequest, Plan, Product, SignupRequest, Storefront, Subscription,
    SubscriptionUpdate, TimeRange, Transaction, User,
};

/// Handler state: the shared demo store.
#[derive(Clone, Default)]
pub struct ApiState {
    pub store: Arc<RwLock<DemoStore>>,
}

impl ApiState {
    #[must_use]
    pub fn new(store: DemoStore) -> Self {
        Self { store: Arc::new(RwLock::new(store)) }
    }
}

type ApiResult<T> = Result<Json<T>, DemoError>;

impl IntoResponse for DemoError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            tracing::error!(error = %self, "demo api failure");
        } else {
            tracing::debug!(%status, error = %self, "demo api rejected request");
        }
        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}

// =============================================================================
// EXTRACTORS
// =============================================================================

/// `Authorization: Bearer <token>` value, if any.
fn bearer_token(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
}

/// Authenticated caller. Rejects with 401 when the token is missing or
/// unknown.
pub struct Session {
    pub user: User,
    pub token: String,
}

impl<S> FromRequestParts<S> for Session
where
    ApiState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = DemoError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts);
        let api = ApiState::from_ref(state);
        let user = api.store.read().await.user_for(token.as_deref())?;
        Ok(Self { user, token: token.unwrap_or_default() })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    page: Option<usize>,
    limit: Option<usize>,
}

impl PageParams {
    fn resolve(&self) -> (usize, usize) {
        (self.page.unwrap_or(1).max(1), self.limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, 100))
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AnalyticsParams {
    range: Option<String>,
}

// =============================================================================
// ROUTER
// =============================================================================

/// Every demo endpoint, relative to the `/api` mount point.
pub fn router(state: ApiState) -> Router {
    Router::new()
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
        .route("/auth/me", get(me))
        .route("/kyc", post(submit_kyc))
        .route("/analytics/payments", get(analytics))
        .route("/storefronts", get(list_storefronts).post(create_storefront))
        .route("/storefronts/{id}", get(get_storefront).put(update_storefront).delete(delete_storefront))
        .route("/storefronts/{id}/products", get(list_products).post(create_product))
        .route("/storefronts/{id}/products/{product_id}", put(update_product).delete(delete_product))
        .route("/subscriptions", get(list_subscriptions).post(create_subscription))
        .route("/subscriptions/{id}", patch(update_subscription).delete(cancel_subscription))
        .route("/plans", get(list_plans))
        .route("/customers", get(list_customers))
        .route("/transactions", get(list_transactions))
        .route("/invoices", get(list_invoices))
        .route("/payment-methods", get(list_payment_methods).post(add_payment_method))
        .route("/payment-methods/{id}", delete(remove_payment_method))
        .route("/payment-methods/{id}/default", post(set_default_payment_method))
        .route("/balance", get(balance))
        .route("/payouts", get(list_payouts).post(request_payout))
        .route("/payment-links/{id}/public", get(get_payment_link))
        .route("/payment-links/{id}/pay", post(pay_payment_link))
        .route("/healthz", get(healthz))
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

// =============================================================================
// AUTH
// =============================================================================

/// `POST /api/auth/signup`
pub async fn signup(State(state): State<ApiState>, Json(body): Json<SignupRequest>) -> ApiResult<AuthResponse> {
    let auth = state.store.write().await.signup(body)?;
    tracing::info!(user_id = %auth.user.id, "demo signup");
    Ok(Json(auth))
}

/// `POST /api/auth/login`
pub async fn login(State(state): State<ApiState>, Json(body): Json<LoginRequest>) -> ApiResult<AuthResponse> {
    let auth = state.store.write().await.login(body)?;
    tracing::info!(user_id = %auth.user.id, "demo login");
    Ok(Json(auth))
}

/// `POST /api/auth/logout`
pub async fn logout(State(state): State<ApiState>, session: Session) -> StatusCode {
    state.store.write().await.logout(&session.token);
    StatusCode::NO_CONTENT
}

/// `GET /api/auth/me`
pub async fn me(session: Session) -> Json<User> {
    Json(session.user)
}

/// `POST /api/kyc`
pub async fn submit_kyc(
    State(state): State<ApiState>,
    session: Session,
    Json(body): Json<KycSubmission>,
) -> ApiResult<User> {
    let user = state.store.write().await.submit_kyc(Some(&session.token), &body)?;
    Ok(Json(user))
}

// =============================================================================
// ANALYTICS
// =============================================================================

/// `GET /api/analytics/payments?range=7d|30d|90d|1y`
pub async fn analytics(
    State(state): State<ApiState>,
    _session: Session,
    Query(params): Query<AnalyticsParams>,
) -> ApiResult<AnalyticsResponse> {
    let range = match params.range.as_deref() {
        None => TimeRange::default(),
        Some(raw) => TimeRange::from_query(raw)
            .ok_or_else(|| DemoError::BadRequest(format!("Unsupported range: {raw}")))?,
    };
    Ok(Json(state.store.read().await.analytics(range)))
}

// =============================================================================
// STOREFRONTS
// =============================================================================

pub async fn list_storefronts(
    State(state): State<ApiState>,
    _session: Session,
    Query(params): Query<PageParams>,
) -> Json<Paged<Storefront>> {
    let (page, limit) = params.resolve();
    Json(state.store.read().await.list_storefronts(page, limit))
}

pub async fn get_storefront(
    State(state): State<ApiState>,
    _session: Session,
    Path(id): Path<String>,
) -> ApiResult<Storefront> {
    Ok(Json(state.store.read().await.storefront(&id)?))
}

pub async fn create_storefront(
    State(state): State<ApiState>,
    _session: Session,
    Json(body): Json<NewStorefront>,
) -> Result<(StatusCode, Json<Storefront>), DemoError> {
    let store = state.store.write().await.create_storefront(body)?;
    Ok((StatusCode::CREATED, Json(store)))
}

pub async fn update_storefront(
    State(state): State<ApiState>,
    _session: Session,
    Path(id): Path<String>,
    Json(body): Json<NewStorefront>,
) -> ApiResult<Storefront> {
    Ok(Json(state.store.write().await.update_storefront(&id, body)?))
}

pub async fn delete_storefront(
    State(state): State<ApiState>,
    _session: Session,
    Path(id): Path<String>,
) -> Result<StatusCode, DemoError> {
    state.store.write().await.delete_storefront(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_products(
    State(state): State<ApiState>,
    _session: Session,
    Path(id): Path<String>,
    Query(params): Query<PageParams>,
) -> ApiResult<Paged<Product>> {
    let (page, limit) = params.resolve();
    Ok(Json(state.store.read().await.list_products(&id, page, limit)?))
}

pub async fn create_product(
    State(state): State<ApiState>,
    _session: Session,
    Path(id): Path<String>,
    Json(body): Json<NewProduct>,
) -> Result<(StatusCode, Json<Product>), DemoError> {
    let product = state.store.write().await.create_product(&id, body)?;
    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn update_product(
    State(state): State<ApiState>,
    _session: Session,
    Path((id, product_id)): Path<(String, String)>,
    Json(body): Json<NewProduct>,
) -> ApiResult<Product> {
    Ok(Json(state.store.write().await.update_product(&id, &product_id, body)?))
}

pub async fn delete_product(
    State(state): State<ApiState>,
    _session: Session,
    Path((id, product_id)): Path<(String, String)>,
) -> Result<StatusCode, DemoError> {
    state.store.write().await.delete_product(&id, &product_id)?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// SUBSCRIPTIONS
// =============================================================================

pub async fn list_subscriptions(
    State(state): State<ApiState>,
    _session: Session,
    Query(params): Query<PageParams>,
) -> Json<Paged<Subscription>> {
    let (page, limit) = params.resolve();
    Json(state.store.read().await.list_subscriptions(page, limit))
}

pub async fn create_subscription(
    State(state): State<ApiState>,
    _session: Session,
    Json(body): Json<NewSubscription>,
) -> Result<(StatusCode, Json<Subscription>), DemoError> {
    let subscription = state.store.write().await.create_subscription(body)?;
    tracing::info!(subscription_id = %subscription.id, "demo subscription created");
    Ok((StatusCode::CREATED, Json(subscription)))
}

pub async fn update_subscription(
    State(state): State<ApiState>,
    _session: Session,
    Path(id): Path<String>,
    Json(body): Json<SubscriptionUpdate>,
) -> ApiResult<Subscription> {
    Ok(Json(state.store.write().await.update_subscription(&id, body)?))
}

pub async fn cancel_subscription(
    State(state): State<ApiState>,
    _session: Session,
    Path(id): Path<String>,
) -> Result<StatusCode, DemoError> {
    state.store.write().await.cancel_subscription(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_plans(State(state): State<ApiState>, _session: Session) -> Json<Vec<Plan>> {
    Json(state.store.read().await.plans())
}

pub async fn list_customers(State(state): State<ApiState>, _session: Session) -> Json<Vec<Customer>> {
    Json(state.store.read().await.customers())
}

// =============================================================================
// PAYMENTS
// =============================================================================

pub async fn list_transactions(State(state): State<ApiState>, _session: Session) -> Json<Vec<Transaction>> {
    Json(state.store.read().await.transactions())
}

pub async fn list_invoices(State(state): State<ApiState>, _session: Session) -> Json<Vec<Invoice>> {
    Json(state.store.read().await.invoices())
}

pub async fn list_payment_methods(State(state): State<ApiState>, _session: Session) -> Json<Vec<PaymentMethod>> {
    Json(state.store.read().await.payment_methods())
}

pub async fn add_payment_method(
    State(state): State<ApiState>,
    _session: Session,
    Json(body): Json<NewPaymentMethod>,
) -> Result<(StatusCode, Json<PaymentMethod>), DemoError> {
    let method = state.store.write().await.add_payment_method(body)?;
    Ok((StatusCode::CREATED, Json(method)))
}

pub async fn remove_payment_method(
    State(state): State<ApiState>,
    _session: Session,
    Path(id): Path<String>,
) -> Result<StatusCode, DemoError> {
    state.store.write().await.remove_payment_method(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn set_default_payment_method(
    State(state): State<ApiState>,
    _session: Session,
    Path(id): Path<String>,
) -> ApiResult<PaymentMethod> {
    Ok(Json(state.store.write().await.set_default_payment_method(&id)?))
}

// =============================================================================
// BALANCE & PAYOUTS
// =============================================================================

pub async fn balance(State(state): State<ApiState>, _session: Session) -> Json<Balance> {
    Json(state.store.read().await.balance())
}

pub async fn list_payouts(State(state): State<ApiState>, _session: Session) -> Json<Vec<Payout>> {
    Json(state.store.read().await.payouts())
}

pub async fn request_payout(
    State(state): State<ApiState>,
    _session: Session,
    Json(body): Json<PayoutRequest>,
) -> Result<(StatusCode, Json<Payout>), DemoError> {
    let payout = state.store.write().await.request_payout(body)?;
    tracing::info!(payout_id = %payout.id, amount_minor = payout.amount_minor, "demo payout requested");
    Ok((StatusCode::CREATED, Json(payout)))
}

// =============================================================================
// PAYMENT LINKS (public)
// =============================================================================

/// `GET /api/payment-links/{id}/public`. No session required.
pub async fn get_payment_link(State(state): State<ApiState>, Path(id): Path<String>) -> ApiResult<PaymentLinkDetails> {
    Ok(Json(state.store.read().await.payment_link(&id)?))
}

/// `POST /api/payment-links/{id}/pay`. No session required.
pub async fn pay_payment_link(
    State(state): State<ApiState>,
    Path(id): Path<String>,
    Json(body): Json<PaymentLinkPayment>,
) -> ApiResult<PaymentReceipt> {
    let receipt = state.store.write().await.pay_payment_link(&id, body)?;
    tracing::info!(link_id = %id, transaction_id = %receipt.transaction_id, "demo payment link paid");
    Ok(Json(receipt))
}
