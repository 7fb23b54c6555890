//! Route-level page modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages own data fetching for their route and compose components. Signed-in
//! pages wrap their body in `AppShell`; the marketing, auth and public
//! checkout pages do not.

pub mod balance;
pub mod checkout;
pub mod dashboard;
pub mod home;
pub mod invoices;
pub mod kyc;
pub mod payment_methods;
pub mod signin;
pub mod signup;
pub mod storefront_detail;
pub mod storefronts;
pub mod subscriptions;
pub mod transactions;
