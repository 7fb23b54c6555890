//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render cards, tables and wizard forms while reading shared
//! state (auth, toasts, currency, refresh hub) from Leptos context providers.
//! Data arrives as typed props; form components report completion upward
//! through `Callback`s.

pub mod analytics_widget;
pub mod balance_card;
pub mod empty_state;
pub mod invoice_list;
pub mod layout;
pub mod navbar;
pub mod pagination;
pub mod payment_method_form;
pub mod payout_form;
pub mod plan_switcher;
pub mod product_form;
pub mod status_badge;
pub mod storefront_wizard;
pub mod subscription_wizard;
pub mod toast_stack;
pub mod transaction_table;
pub mod wizard_form;
