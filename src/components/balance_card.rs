//! Available / pending balance summary.

#[cfg(test)]
#[path = "balance_card_test.rs"]
mod balance_card_test;

use leptos::prelude::*;

use crate::net::types::Balance;
use crate::util::format::format_money;

/// Funds the merchant will hold once pending payments settle.
fn projected_minor(balance: &Balance) -> i64 {
    balance.available_minor.saturating_add(balance.pending_minor)
}

#[component]
pub fn BalanceCard(balance: Balance, #[prop(optional)] show_payout_link: bool) -> impl IntoView {
    let available = format_money(balance.available_minor, &balance.currency);
    let pending = format_money(balance.pending_minor, &balance.currency);
    let projected = format_money(projected_minor(&balance), &balance.currency);

    view! {
        <section class="card balance-card">
            <h3 class="card__title">"Balance"</h3>
            <dl class="balance-card__figures">
                <div class="balance-card__figure balance-card__figure--primary">
                    <dt>"Available"</dt>
                    <dd>{available}</dd>
                </div>
                <div class="balance-card__figure">
                    <dt>"Pending"</dt>
                    <dd>{pending}</dd>
                </div>
                <div class="balance-card__figure">
                    <dt>"After settlement"</dt>
                    <dd>{projected}</dd>
                </div>
            </dl>
            {show_payout_link.then(|| view! { <a class="btn btn--link" href="/balance">"Request payout"</a> })}
        </section>
    }
}
