//! Seed data for the demo backend.
//!
//! Choice ids (`cust_*`, `plan_*`) match the option tables in
//! `wizard::flows`, so records created through the wizards resolve against
//! these fixtures.

use crate::net::types::{
    Balance, BillingInterval, Customer, Invoice, InvoiceStatus, KycStatus, PaymentLinkDetails, PaymentLinkStatus,
    PaymentMethod, Payout, PayoutStatus, Plan, Product, Storefront, Subscription, SubscriptionStatus, Transaction,
    TransactionKind, TransactionStatus, User,
};

pub const DEMO_EMAIL: &str = "demo@paybord.io";
pub const DEMO_PASSWORD: &str = "password123";
pub const CURRENCY: &str = "USD";

pub fn demo_user() -> User {
    User {
        id: "usr_demo".to_owned(),
        name: "Demo Merchant".to_owned(),
        email: DEMO_EMAIL.to_owned(),
        business_name: Some("Paybord Demo Co".to_owned()),
        kyc_status: KycStatus::Verified,
    }
}

pub fn customers() -> Vec<Customer> {
    [
        ("cust_001", "Acme Corp", "billing@acme.test"),
        ("cust_002", "Globex Ltd", "accounts@globex.test"),
        ("cust_003", "Initech", "ap@initech.test"),
        ("cust_004", "Umbrella Health", "finance@umbrella.test"),
    ]
    .into_iter()
    .map(|(id, name, email)| Customer { id: id.to_owned(), name: name.to_owned(), email: email.to_owned() })
    .collect()
}

pub fn plans() -> Vec<Plan> {
    [("plan_basic", "Basic", 900), ("plan_pro", "Pro", 2_900), ("plan_enterprise", "Enterprise", 9_900)]
        .into_iter()
        .map(|(id, name, amount_minor)| Plan {
            id: id.to_owned(),
            name: name.to_owned(),
            amount_minor,
            currency: CURRENCY.to_owned(),
            interval: BillingInterval::Monthly,
        })
        .collect()
}

/// 36 transactions, newest first, spanning September and October 2026.
pub fn transactions() -> Vec<Transaction> {
    let names = customers();
    (0..36_usize)
        .map(|i| {
            let customer = names[i % names.len()].name.clone();
            let (kind, description) = match i % 6 {
                0 => (TransactionKind::Subscription, "Subscription renewal - Pro".to_owned()),
                1 | 2 => (TransactionKind::Payment, format!("Invoice #{}", 28 + i)),
                3 => (TransactionKind::Payment, format!("Order #{}", 1_000 + i)),
                4 => (TransactionKind::Refund, format!("Refund for Order #{}", 990 + i)),
                _ => (TransactionKind::Payout, "Payout to bank account".to_owned()),
            };
            let status = if kind == TransactionKind::Refund {
                TransactionStatus::Refunded
            } else if i % 7 == 3 {
                TransactionStatus::Failed
            } else if i % 11 == 5 {
                TransactionStatus::Pending
            } else {
                TransactionStatus::Succeeded
            };
            let (month, day) = if i < 18 { (10, 18 - i) } else { (9, 30 - (i - 18)) };
            Transaction {
                id: format!("txn_{:04}", 36 - i),
                description,
                amount_minor: 1_500 + i64::try_from(i * 937 % 20_000).unwrap_or_default(),
                currency: CURRENCY.to_owned(),
                status,
                kind,
                customer: (kind != TransactionKind::Payout).then_some(customer),
                created_at: format!("2026-{month:02}-{day:02}T{:02}:15:00Z", i % 24),
            }
        })
        .collect()
}

pub fn invoices() -> Vec<Invoice> {
    let names = customers();
    let statuses = [InvoiceStatus::Paid, InvoiceStatus::Open, InvoiceStatus::Overdue, InvoiceStatus::Paid, InvoiceStatus::Draft];
    (0..14_usize)
        .map(|i| {
            let day = 28 - i;
            Invoice {
                id: format!("inv_{:03}", 40 + i),
                number: format!("INV-{:04}", 40 + i),
                customer: names[i % names.len()].name.clone(),
                amount_minor: 12_000 + i64::try_from(i * 2_750).unwrap_or_default(),
                currency: CURRENCY.to_owned(),
                status: statuses[i % statuses.len()],
                issued_at: format!("2026-09-{day:02}"),
                due_date: format!("2026-10-{day:02}"),
            }
        })
        .collect()
}

pub fn subscriptions() -> Vec<Subscription> {
    let names = customers();
    let plans = plans();
    let statuses = [SubscriptionStatus::Active, SubscriptionStatus::Trialing, SubscriptionStatus::Active, SubscriptionStatus::PastDue];
    (0..6_usize)
        .map(|i| {
            let plan = &plans[i % plans.len()];
            Subscription {
                id: format!("sub_{:03}", i + 1),
                customer: names[i % names.len()].id.clone(),
                plan: plan.id.clone(),
                status: statuses[i % statuses.len()],
                amount_minor: plan.amount_minor,
                currency: CURRENCY.to_owned(),
                interval: plan.interval,
                current_period_end: format!("2026-11-{:02}", 3 + i * 4),
            }
        })
        .collect()
}

pub fn storefronts() -> Vec<Storefront> {
    vec![
        Storefront {
            id: "sf_001".to_owned(),
            name: "Main Street Goods".to_owned(),
            slug: "main-street".to_owned(),
            description: Some("Handmade home goods".to_owned()),
            currency: CURRENCY.to_owned(),
            support_email: Some("help@mainstreet.test".to_owned()),
            product_count: 3,
            is_active: true,
        },
        Storefront {
            id: "sf_002".to_owned(),
            name: "Digital Downloads".to_owned(),
            slug: "downloads".to_owned(),
            description: None,
            currency: CURRENCY.to_owned(),
            support_email: None,
            product_count: 2,
            is_active: true,
        },
    ]
}

pub fn products() -> Vec<Product> {
    [
        ("prod_001", "sf_001", "Ceramic mug", Some("Stoneware, 350ml"), 2_400),
        ("prod_002", "sf_001", "Linen towel", None, 1_800),
        ("prod_003", "sf_001", "Candle set", Some("Three soy candles"), 3_200),
        ("prod_004", "sf_002", "Icon pack", Some("400 SVG icons"), 1_900),
        ("prod_005", "sf_002", "UI kit", None, 4_900),
    ]
    .into_iter()
    .map(|(id, storefront_id, name, description, price_minor)| Product {
        id: id.to_owned(),
        storefront_id: storefront_id.to_owned(),
        name: name.to_owned(),
        description: description.map(str::to_owned),
        price_minor,
        currency: CURRENCY.to_owned(),
        active: true,
    })
    .collect()
}

pub fn payment_methods() -> Vec<PaymentMethod> {
    vec![
        PaymentMethod {
            id: "pm_001".to_owned(),
            brand: "Visa".to_owned(),
            last4: "4242".to_owned(),
            exp_month: 12,
            exp_year: 2029,
            cardholder_name: "Demo Merchant".to_owned(),
            is_default: true,
        },
        PaymentMethod {
            id: "pm_002".to_owned(),
            brand: "Mastercard".to_owned(),
            last4: "4444".to_owned(),
            exp_month: 6,
            exp_year: 2028,
            cardholder_name: "Demo Merchant".to_owned(),
            is_default: false,
        },
    ]
}

pub fn balance() -> Balance {
    Balance { available_minor: 1_254_300, pending_minor: 180_000, currency: CURRENCY.to_owned() }
}

pub fn payouts() -> Vec<Payout> {
    vec![
        Payout {
            id: "po_003".to_owned(),
            amount_minor: 250_000,
            currency: CURRENCY.to_owned(),
            status: PayoutStatus::InTransit,
            arrival_date: "2026-10-21".to_owned(),
        },
        Payout {
            id: "po_002".to_owned(),
            amount_minor: 410_000,
            currency: CURRENCY.to_owned(),
            status: PayoutStatus::Paid,
            arrival_date: "2026-10-07".to_owned(),
        },
        Payout {
            id: "po_001".to_owned(),
            amount_minor: 98_500,
            currency: CURRENCY.to_owned(),
            status: PayoutStatus::Paid,
            arrival_date: "2026-09-23".to_owned(),
        },
    ]
}

pub fn payment_links() -> Vec<PaymentLinkDetails> {
    vec![
        PaymentLinkDetails {
            id: "plink_demo".to_owned(),
            title: "Consulting session".to_owned(),
            description: Some("One hour strategy call".to_owned()),
            amount_minor: 15_000,
            currency: CURRENCY.to_owned(),
            merchant_name: "Paybord Demo Co".to_owned(),
            status: PaymentLinkStatus::Active,
        },
        PaymentLinkDetails {
            id: "plink_expired".to_owned(),
            title: "Summer sale deposit".to_owned(),
            description: None,
            amount_minor: 5_000,
            currency: CURRENCY.to_owned(),
            merchant_name: "Paybord Demo Co".to_owned(),
            status: PaymentLinkStatus::Expired,
        },
    ]
}
