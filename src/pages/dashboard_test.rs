use super::*;

fn sub(status: SubscriptionStatus, interval: BillingInterval, amount_minor: i64) -> Subscription {
    Subscription {
        id: "sub_1".to_owned(),
        customer: "Acme".to_owned(),
        plan: "plan_pro".to_owned(),
        status,
        amount_minor,
        currency: "USD".to_owned(),
        interval,
        current_period_end: "2026-11-01".to_owned(),
    }
}

#[test]
fn summary_counts_each_live_status() {
    let subs = vec![
        sub(SubscriptionStatus::Active, BillingInterval::Monthly, 2_900),
        sub(SubscriptionStatus::Trialing, BillingInterval::Monthly, 900),
        sub(SubscriptionStatus::PastDue, BillingInterval::Monthly, 900),
        sub(SubscriptionStatus::Canceled, BillingInterval::Monthly, 9_900),
    ];
    let summary = summarize(&subs);
    assert_eq!((summary.active, summary.trialing, summary.past_due), (1, 1, 1));
}

#[test]
fn mrr_counts_active_only_and_spreads_yearly_plans() {
    let subs = vec![
        sub(SubscriptionStatus::Active, BillingInterval::Monthly, 2_900),
        sub(SubscriptionStatus::Active, BillingInterval::Yearly, 120_000),
        sub(SubscriptionStatus::Trialing, BillingInterval::Monthly, 900),
    ];
    assert_eq!(summarize(&subs).mrr_minor, 2_900 + 10_000);
}

#[test]
fn empty_summary_is_zero() {
    assert_eq!(summarize(&[]), SubscriptionSummary::default());
}
