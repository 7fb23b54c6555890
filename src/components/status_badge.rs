//! Colored status pill for transactions, invoices, subscriptions and payouts.

#[cfg(test)]
#[path = "status_badge_test.rs"]
mod status_badge_test;

use leptos::prelude::*;

/// `"past_due"` -> `"Past due"`.
fn humanize(status: &str) -> String {
    let spaced = status.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Takes the wire form of a status (`as_str()` of the enum).
#[component]
pub fn StatusBadge(status: &'static str) -> impl IntoView {
    view! { <span class=format!("badge badge--{}", status.replace('_', "-"))>{humanize(status)}</span> }
}
