//! In-memory demo backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The SSR binary mounts these operations under `/api` so the dashboard can
//! be exercised end to end without the real payments platform. State lives
//! in one `DemoStore` behind the server's `RwLock`; nothing is persisted and
//! no money moves.
//!
//! DESIGN
//! ======
//! - Any well-formed credentials sign in; unknown emails get an account on
//!   first login. Signup still rejects an already registered email.
//! - All merchants share one fixture dataset.
//! - Server-side pagination runs through `list_view::derive`, the same
//!   derivation the list pages run in the browser.
//! - Card `4000 0000 0000 0002` is always declined.

pub mod fixtures;


use std::collections::HashMap;

use crate::list_view::{ListQuery, Listable, Paged, derive};
use crate::net::types::{
    AnalyticsPoint, AnalyticsResponse, AnalyticsSnapshot, AuthResponse, Balance, CardDetails, Customer, Invoice,
    KycStatus, KycSubmission, LoginRequest, NewPaymentMethod, NewProduct, NewStorefront, NewSubscription,
    PaymentLinkDetails, PaymentLinkPayment, PaymentMethod, PaymentReceipt, Payout, PayoutRequest, PayoutStatus, Plan,
    Product, SignupRequest, Storefront, Subscription, SubscriptionStatus, SubscriptionUpdate, TimeRange, Transaction,
    TransactionKind, TransactionStatus, User,
};
use crate::wizard::field::{digits_only, is_card_number, is_email, parse_expiry};

pub const DECLINED_CARD: &str = "4000000000000002";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DemoError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    PaymentDeclined(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Gone(String),
}

impl DemoError {
    /// HTTP status code for the response.
    #[must_use]
    pub fn status(&self) -> u16 {
        match self {
            Self::BadRequest(_) => 400,
            Self::Unauthorized(_) => 401,
            Self::PaymentDeclined(_) => 402,
            Self::NotFound(_) => 404,
            Self::Conflict(_) => 409,
            Self::Gone(_) => 410,
        }
    }

    fn bad_request(message: &str) -> Self {
        Self::BadRequest(message.to_owned())
    }

    fn not_found(what: &str) -> Self {
        Self::NotFound(format!("{what} not found"))
    }
}

struct Account {
    user: User,
    password: String,
}

pub struct DemoStore {
    accounts: HashMap<String, Account>,
    sessions: HashMap<String, String>,
    customers: Vec<Customer>,
    plans: Vec<Plan>,
    transactions: Vec<Transaction>,
    invoices: Vec<Invoice>,
    subscriptions: Vec<Subscription>,
    storefronts: Vec<Storefront>,
    products: Vec<Product>,
    payment_methods: Vec<PaymentMethod>,
    balance: Balance,
    payouts: Vec<Payout>,
    payment_links: Vec<PaymentLinkDetails>,
    next_seq: u64,
}

impl Default for DemoStore {
    fn default() -> Self {
        Self::seeded()
    }
}

impl DemoStore {
    /// Store populated with the fixture dataset and the demo account.
    #[must_use]
    pub fn seeded() -> Self {
        let demo = fixtures::demo_user();
        let mut accounts = HashMap::new();
        accounts.insert(demo.email.clone(), Account { user: demo, password: fixtures::DEMO_PASSWORD.to_owned() });
        Self {
            accounts,
            sessions: HashMap::new(),
            customers: fixtures::customers(),
            plans: fixtures::plans(),
            transactions: fixtures::transactions(),
            invoices: fixtures::invoices(),
            subscriptions: fixtures::subscriptions(),
            storefronts: fixtures::storefronts(),
            products: fixtures::products(),
            payment_methods: fixtures::payment_methods(),
            balance: fixtures::balance(),
            payouts: fixtures::payouts(),
            payment_links: fixtures::payment_links(),
            next_seq: 100,
        }
    }

    fn next_id(&mut self, prefix: &str) -> String {
        self.next_seq += 1;
        format!("{prefix}_{:04}", self.next_seq)
    }

    // =========================================================================
    // AUTH
    // =========================================================================

    /// # Errors
    ///
    /// `BadRequest` for malformed input, `Conflict` for a registered email.
    pub fn signup(&mut self, request: SignupRequest) -> Result<AuthResponse, DemoError> {
        let email = request.email.trim().to_lowercase();
        if request.name.trim().is_empty() {
            return Err(DemoError::bad_request("Name is required"));
        }
        if !is_email(&email) {
            return Err(DemoError::bad_request("Enter a valid email address"));
        }
        if request.password.chars().count() < 8 {
            return Err(DemoError::bad_request("Password must be at least 8 characters"));
        }
        if self.accounts.contains_key(&email) {
            return Err(DemoError::Conflict("Email already registered".to_owned()));
        }
        let user = User {
            id: self.next_id("usr"),
            name: request.name.trim().to_owned(),
            email: email.clone(),
            business_name: request.business_name.filter(|b| !b.trim().is_empty()),
            kyc_status: KycStatus::NotStarted,
        };
        self.accounts.insert(email, Account { user: user.clone(), password: request.password });
        Ok(self.open_session(user))
    }

    /// # Errors
    ///
    /// `BadRequest` for malformed input, `Unauthorized` for a wrong password
    /// on an existing account.
    pub fn login(&mut self, request: LoginRequest) -> Result<AuthResponse, DemoError> {
        let email = request.email.trim().to_lowercase();
        if !is_email(&email) || request.password.is_empty() {
            return Err(DemoError::bad_request("Email and password are required"));
        }
        let user = match self.accounts.get(&email) {
            Some(account) if account.password == request.password => account.user.clone(),
            Some(_) => return Err(DemoError::Unauthorized("Invalid email or password".to_owned())),
            None => {
                let name = email.split('@').next().unwrap_or_default().to_owned();
                let user = User {
                    id: self.next_id("usr"),
                    name,
                    email: email.clone(),
                    business_name: None,
                    kyc_status: KycStatus::Verified,
                };
                self.accounts.insert(email, Account { user: user.clone(), password: request.password });
                user
            }
        };
        Ok(self.open_session(user))
    }

    fn open_session(&mut self, user: User) -> AuthResponse {
        let token = format!("tok_{}", uuid::Uuid::new_v4().simple());
        self.sessions.insert(token.clone(), user.email.clone());
        AuthResponse { user, token }
    }

    pub fn logout(&mut self, token: &str) {
        self.sessions.remove(token);
    }

    /// # Errors
    ///
    /// `Unauthorized` for a missing or unknown token.
    pub fn user_for(&self, token: Option<&str>) -> Result<User, DemoError> {
        token
            .and_then(|t| self.sessions.get(t))
            .and_then(|email| self.accounts.get(email))
            .map(|account| account.user.clone())
            .ok_or_else(|| DemoError::Unauthorized("Please sign in".to_owned()))
    }

    /// Record a KYC submission and mark the user as pending review.
    ///
    /// # Errors
    ///
    /// `Unauthorized` without a session, `BadRequest` when a required
    /// detail is missing.
    pub fn submit_kyc(&mut self, token: Option<&str>, submission: &KycSubmission) -> Result<User, DemoError> {
        let user = self.user_for(token)?;
        let required = [
            &submission.first_name,
            &submission.last_name,
            &submission.date_of_birth,
            &submission.address_line,
            &submission.city,
            &submission.postal_code,
            &submission.country,
        ];
        if required.iter().any(|v| v.trim().is_empty()) {
            return Err(DemoError::bad_request("Complete every required KYC field"));
        }
        let account = self.accounts.get_mut(&user.email).ok_or_else(|| DemoError::not_found("Account"))?;
        account.user.kyc_status = KycStatus::Pending;
        Ok(account.user.clone())
    }

    // =========================================================================
    // ANALYTICS
    // =========================================================================

    #[must_use]
    pub fn analytics(&self, range: TimeRange) -> AnalyticsResponse {
        let (buckets, unit) = match range {
            TimeRange::Week => (7_usize, "Day"),
            TimeRange::Month => (30, "Day"),
            TimeRange::Quarter => (13, "Week"),
            TimeRange::Year => (12, "Month"),
        };
        let series: Vec<AnalyticsPoint> = (0..buckets)
            .map(|i| {
                let count = 8 + u32::try_from(i * 5 % 13).unwrap_or_default();
                let ticket = 2_000 + i64::try_from(i * 379 % 1_500).unwrap_or_default();
                AnalyticsPoint { label: format!("{unit} {}", i + 1), volume_minor: i64::from(count) * ticket, count }
            })
            .collect();
        let total_volume_minor: i64 = series.iter().map(|p| p.volume_minor).sum();
        let transaction_count: u32 = series.iter().map(|p| p.count).sum();
        AnalyticsResponse {
            success: true,
            data: AnalyticsSnapshot {
                total_volume_minor,
                transaction_count,
                success_rate: self.success_rate(),
                average_ticket_minor: total_volume_minor / i64::from(transaction_count.max(1)),
                currency: self.balance.currency.clone(),
                series,
            },
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn success_rate(&self) -> f64 {
        let charges = self.transactions.iter().filter(|t| t.kind != TransactionKind::Refund);
        let (ok, total) = charges.fold((0_usize, 0_usize), |(ok, total), t| {
            (ok + usize::from(t.status == TransactionStatus::Succeeded), total + 1)
        });
        if total == 0 { 0.0 } else { ok as f64 / total as f64 }
    }

    // =========================================================================
    // STOREFRONTS & PRODUCTS
    // =========================================================================

    #[must_use]
    pub fn list_storefronts(&self, page: usize, limit: usize) -> Paged<Storefront> {
        paginate(&self.storefronts, page, limit)
    }

    /// # Errors
    ///
    /// `NotFound` for an unknown id.
    pub fn storefront(&self, id: &str) -> Result<Storefront, DemoError> {
        self.storefronts.iter().find(|s| s.id == id).cloned().ok_or_else(|| DemoError::not_found("Storefront"))
    }

    /// # Errors
    ///
    /// `BadRequest` for missing fields, `Conflict` for a taken slug.
    pub fn create_storefront(&mut self, draft: NewStorefront) -> Result<Storefront, DemoError> {
        self.check_storefront(&draft, None)?;
        let store = Storefront {
            id: self.next_id("sf"),
            name: draft.name.trim().to_owned(),
            slug: draft.slug.trim().to_owned(),
            description: draft.description,
            currency: draft.currency,
            support_email: draft.support_email,
            product_count: 0,
            is_active: true,
        };
        self.storefronts.push(store.clone());
        Ok(store)
    }

    /// # Errors
    ///
    /// `NotFound`, `BadRequest` or `Conflict` as for create.
    pub fn update_storefront(&mut self, id: &str, draft: NewStorefront) -> Result<Storefront, DemoError> {
        self.check_storefront(&draft, Some(id))?;
        let store = self.storefronts.iter_mut().find(|s| s.id == id).ok_or_else(|| DemoError::not_found("Storefront"))?;
        store.name = draft.name.trim().to_owned();
        store.slug = draft.slug.trim().to_owned();
        store.description = draft.description;
        store.currency = draft.currency;
        store.support_email = draft.support_email;
        Ok(store.clone())
    }

    fn check_storefront(&self, draft: &NewStorefront, id: Option<&str>) -> Result<(), DemoError> {
        if id.is_some_and(|id| !self.storefronts.iter().any(|s| s.id == id)) {
            return Err(DemoError::not_found("Storefront"));
        }
        if draft.name.trim().is_empty() || draft.slug.trim().is_empty() || draft.currency.trim().is_empty() {
            return Err(DemoError::bad_request("Name, URL and currency are required"));
        }
        let taken = self
            .storefronts
            .iter()
            .any(|s| s.slug.eq_ignore_ascii_case(draft.slug.trim()) && Some(s.id.as_str()) != id);
        if taken {
            return Err(DemoError::Conflict("That store URL is already taken".to_owned()));
        }
        Ok(())
    }

    /// Delete a storefront together with its products.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown id.
    pub fn delete_storefront(&mut self, id: &str) -> Result<(), DemoError> {
        let before = self.storefronts.len();
        self.storefronts.retain(|s| s.id != id);
        if self.storefronts.len() == before {
            return Err(DemoError::not_found("Storefront"));
        }
        self.products.retain(|p| p.storefront_id != id);
        Ok(())
    }

    /// # Errors
    ///
    /// `NotFound` for an unknown storefront.
    pub fn list_products(&self, storefront_id: &str, page: usize, limit: usize) -> Result<Paged<Product>, DemoError> {
        self.storefront(storefront_id)?;
        let products: Vec<Product> = self.products.iter().filter(|p| p.storefront_id == storefront_id).cloned().collect();
        Ok(paginate(&products, page, limit))
    }

    /// # Errors
    ///
    /// `NotFound` for an unknown storefront, `BadRequest` for a missing name
    /// or non-positive price.
    pub fn create_product(&mut self, storefront_id: &str, draft: NewProduct) -> Result<Product, DemoError> {
        let store = self.storefront(storefront_id)?;
        check_product(&draft)?;
        let product = Product {
            id: self.next_id("prod"),
            storefront_id: store.id,
            name: draft.name.trim().to_owned(),
            description: draft.description,
            price_minor: draft.price_minor,
            currency: store.currency,
            active: true,
        };
        self.products.push(product.clone());
        self.recount_products(storefront_id);
        Ok(product)
    }

    /// # Errors
    ///
    /// `NotFound` for an unknown storefront or product.
    pub fn update_product(&mut self, storefront_id: &str, product_id: &str, draft: NewProduct) -> Result<Product, DemoError> {
        check_product(&draft)?;
        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == product_id && p.storefront_id == storefront_id)
            .ok_or_else(|| DemoError::not_found("Product"))?;
        product.name = draft.name.trim().to_owned();
        product.description = draft.description;
        product.price_minor = draft.price_minor;
        Ok(product.clone())
    }

    /// # Errors
    ///
    /// `NotFound` for an unknown storefront or product.
    pub fn delete_product(&mut self, storefront_id: &str, product_id: &str) -> Result<(), DemoError> {
        let before = self.products.len();
        self.products.retain(|p| !(p.id == product_id && p.storefront_id == storefront_id));
        if self.products.len() == before {
            return Err(DemoError::not_found("Product"));
        }
        self.recount_products(storefront_id);
        Ok(())
    }

    fn recount_products(&mut self, storefront_id: &str) {
        let count = self.products.iter().filter(|p| p.storefront_id == storefront_id).count();
        if let Some(store) = self.storefronts.iter_mut().find(|s| s.id == storefront_id) {
            store.product_count = u32::try_from(count).unwrap_or(u32::MAX);
        }
    }

    // =========================================================================
    // SUBSCRIPTIONS
    // =========================================================================

    #[must_use]
    pub fn list_subscriptions(&self, page: usize, limit: usize) -> Paged<Subscription> {
        paginate(&self.subscriptions, page, limit)
    }

    /// # Errors
    ///
    /// `BadRequest` for an unknown customer/plan or invalid card,
    /// `PaymentDeclined` for the decline test card.
    pub fn create_subscription(&mut self, draft: NewSubscription) -> Result<Subscription, DemoError> {
        let customer = self
            .customers
            .iter()
            .find(|c| c.id == draft.customer)
            .cloned()
            .ok_or_else(|| DemoError::bad_request("Unknown customer"))?;
        let plan = self.plan(&draft.plan)?;
        charge_card(&draft.payment)?;
        let subscription = Subscription {
            id: self.next_id("sub"),
            customer: customer.id,
            plan: plan.id,
            status: SubscriptionStatus::Active,
            amount_minor: plan.amount_minor,
            currency: plan.currency.clone(),
            interval: plan.interval,
            current_period_end: clock::date_in_days(30),
        };
        self.subscriptions.insert(0, subscription.clone());
        self.record_transaction(
            format!("Subscription started - {}", plan.name),
            plan.amount_minor,
            TransactionKind::Subscription,
            TransactionStatus::Succeeded,
            Some(customer.name),
        );
        Ok(subscription)
    }

    /// Switch plan and/or change status.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown subscription, `BadRequest` for an unknown
    /// plan.
    pub fn update_subscription(&mut self, id: &str, update: SubscriptionUpdate) -> Result<Subscription, DemoError> {
        let plan = update.plan.as_deref().map(|p| self.plan(p)).transpose()?;
        let subscription =
            self.subscriptions.iter_mut().find(|s| s.id == id).ok_or_else(|| DemoError::not_found("Subscription"))?;
        if let Some(plan) = plan {
            subscription.plan = plan.id;
            subscription.amount_minor = plan.amount_minor;
            subscription.interval = plan.interval;
        }
        if let Some(status) = update.status {
            subscription.status = status;
        }
        Ok(subscription.clone())
    }

    /// Cancel a subscription. The record stays listed as `canceled`.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown id.
    pub fn cancel_subscription(&mut self, id: &str) -> Result<(), DemoError> {
        self.update_subscription(id, SubscriptionUpdate { plan: None, status: Some(SubscriptionStatus::Canceled) })
            .map(|_| ())
    }

    fn plan(&self, id: &str) -> Result<Plan, DemoError> {
        self.plans.iter().find(|p| p.id == id).cloned().ok_or_else(|| DemoError::bad_request("Unknown plan"))
    }

    #[must_use]
    pub fn plans(&self) -> Vec<Plan> {
        self.plans.clone()
    }

    #[must_use]
    pub fn customers(&self) -> Vec<Customer> {
        self.customers.clone()
    }

    // =========================================================================
    // PAYMENTS
    // =========================================================================

    #[must_use]
    pub fn transactions(&self) -> Vec<Transaction> {
        self.transactions.clone()
    }

    #[must_use]
    pub fn invoices(&self) -> Vec<Invoice> {
        self.invoices.clone()
    }

    #[must_use]
    pub fn payment_methods(&self) -> Vec<PaymentMethod> {
        self.payment_methods.clone()
    }

    /// # Errors
    ///
    /// `BadRequest` for invalid card details, `PaymentDeclined` for the
    /// decline test card.
    pub fn add_payment_method(&mut self, draft: NewPaymentMethod) -> Result<PaymentMethod, DemoError> {
        if draft.cardholder_name.trim().is_empty() {
            return Err(DemoError::bad_request("Name on card is required"));
        }
        let (exp_month, exp_year) = charge_card(&draft.card)?;
        let number = digits_only(&draft.card.card_number);
        let method = PaymentMethod {
            id: self.next_id("pm"),
            brand: card_brand(&number).to_owned(),
            last4: number[number.len().saturating_sub(4)..].to_owned(),
            exp_month,
            exp_year,
            cardholder_name: draft.cardholder_name.trim().to_owned(),
            is_default: self.payment_methods.is_empty(),
        };
        self.payment_methods.push(method.clone());
        Ok(method)
    }

    /// Remove a card; removing the default promotes the first remaining one.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown id.
    pub fn remove_payment_method(&mut self, id: &str) -> Result<(), DemoError> {
        let index =
            self.payment_methods.iter().position(|m| m.id == id).ok_or_else(|| DemoError::not_found("Payment method"))?;
        let removed = self.payment_methods.remove(index);
        if removed.is_default
            && let Some(first) = self.payment_methods.first_mut()
        {
            first.is_default = true;
        }
        Ok(())
    }

    /// # Errors
    ///
    /// `NotFound` for an unknown id.
    pub fn set_default_payment_method(&mut self, id: &str) -> Result<PaymentMethod, DemoError> {
        if !self.payment_methods.iter().any(|m| m.id == id) {
            return Err(DemoError::not_found("Payment method"));
        }
        for method in &mut self.payment_methods {
            method.is_default = method.id == id;
        }
        self.payment_methods.iter().find(|m| m.id == id).cloned().ok_or_else(|| DemoError::not_found("Payment method"))
    }

    // =========================================================================
    // BALANCE & PAYOUTS
    // =========================================================================

    #[must_use]
    pub fn balance(&self) -> Balance {
        self.balance.clone()
    }

    #[must_use]
    pub fn payouts(&self) -> Vec<Payout> {
        self.payouts.clone()
    }

    /// Move funds from the available balance into a pending payout.
    ///
    /// # Errors
    ///
    /// `BadRequest` for a non-positive amount or one exceeding the
    /// available balance.
    pub fn request_payout(&mut self, request: PayoutRequest) -> Result<Payout, DemoError> {
        if request.amount_minor <= 0 {
            return Err(DemoError::bad_request("Enter an amount greater than zero"));
        }
        if request.amount_minor > self.balance.available_minor {
            return Err(DemoError::bad_request("Amount exceeds available balance"));
        }
        self.balance.available_minor -= request.amount_minor;
        let payout = Payout {
            id: self.next_id("po"),
            amount_minor: request.amount_minor,
            currency: self.balance.currency.clone(),
            status: PayoutStatus::Pending,
            arrival_date: clock::date_in_days(2),
        };
        self.payouts.insert(0, payout.clone());
        self.record_transaction(
            "Payout to bank account".to_owned(),
            request.amount_minor,
            TransactionKind::Payout,
            TransactionStatus::Pending,
            None,
        );
        Ok(payout)
    }

    // =========================================================================
    // PAYMENT LINKS
    // =========================================================================

    /// # Errors
    ///
    /// `NotFound` for an unknown link.
    pub fn payment_link(&self, id: &str) -> Result<PaymentLinkDetails, DemoError> {
        self.payment_links.iter().find(|l| l.id == id).cloned().ok_or_else(|| DemoError::not_found("Payment link"))
    }

    /// Pay a link as an anonymous customer.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown link, `Gone` for an expired or disabled
    /// one, `BadRequest`/`PaymentDeclined` for the payment details.
    pub fn pay_payment_link(&mut self, id: &str, payment: PaymentLinkPayment) -> Result<PaymentReceipt, DemoError> {
        let link = self.payment_link(id)?;
        if !link.is_payable() {
            return Err(DemoError::Gone("This payment link is no longer active".to_owned()));
        }
        if !is_email(payment.email.trim()) {
            return Err(DemoError::bad_request("Enter a valid email address"));
        }
        charge_card(&payment.card)?;
        self.balance.pending_minor += link.amount_minor;
        let transaction_id = self.record_transaction(
            link.title,
            link.amount_minor,
            TransactionKind::Payment,
            TransactionStatus::Succeeded,
            Some(payment.email.trim().to_lowercase()),
        );
        Ok(PaymentReceipt { transaction_id, status: TransactionStatus::Succeeded })
    }

    fn record_transaction(
        &mut self,
        description: String,
        amount_minor: i64,
        kind: TransactionKind,
        status: TransactionStatus,
        customer: Option<String>,
    ) -> String {
        let id = self.next_id("txn");
        self.transactions.insert(
            0,
            Transaction {
                id: id.clone(),
                description,
                amount_minor,
                currency: self.balance.currency.clone(),
                status,
                kind,
                customer,
                created_at: clock::now_rfc3339(),
            },
        );
        id
    }
}

fn paginate<T: Listable + Clone>(source: &[T], page: usize, limit: usize) -> Paged<T> {
    let mut query = ListQuery::with_page_size(limit);
    query.set_page(page);
    derive(source, &query).to_paged()
}

fn check_product(draft: &NewProduct) -> Result<(), DemoError> {
    if draft.name.trim().is_empty() {
        return Err(DemoError::bad_request("Product name is required"));
    }
    if draft.price_minor <= 0 {
        return Err(DemoError::bad_request("Price must be greater than zero"));
    }
    Ok(())
}

/// Validate card details and simulate an authorization. Returns the expiry
/// as `(month, four-digit year)`.
fn charge_card(card: &CardDetails) -> Result<(u8, u16), DemoError> {
    let cvc_ok = card.cvc.chars().all(|c| c.is_ascii_digit()) && (3..=4).contains(&card.cvc.len());
    let expiry = parse_expiry(&card.expiry);
    let (Some((month, year)), true, true) = (expiry, cvc_ok, is_card_number(&card.card_number)) else {
        return Err(DemoError::bad_request("Invalid card details"));
    };
    if digits_only(&card.card_number) == DECLINED_CARD {
        return Err(DemoError::PaymentDeclined("Card declined".to_owned()));
    }
    Ok((month, 2_000 + u16::from(year)))
}

fn card_brand(number: &str) -> &'static str {
    match number.as_bytes().first() {
        Some(b'4') => "Visa",
        Some(b'5' | b'2') => "Mastercard",
        Some(b'3') => "Amex",
        Some(b'6') => "Discover",
        _ => "Card",
    }
}

mod clock {
    use time::format_description::well_known::Rfc3339;
    use time::{Duration, OffsetDateTime};

    pub fn now_rfc3339() -> String {
        OffsetDateTime::now_utc().format(&Rfc3339).unwrap_or_default()
    }

    /// `YYYY-MM-DD`, `days` from today (UTC).
    pub fn date_in_days(days: i64) -> String {
        (OffsetDateTime::now_utc() + Duration::days(days)).date().to_string()
    }
}
