//! Payment analytics: headline figures plus a volume bar chart for a
//! selectable time range.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns its own fetch so the dashboard can place it anywhere in the widget
//! order. Re-fetches when the range changes or a transaction refresh is
//! announced.

#[cfg(test)]
#[path = "analytics_widget_test.rs"]
mod analytics_widget_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::{AnalyticsPoint, AnalyticsSnapshot, TimeRange};
use crate::state::fetch::FetchState;
use crate::state::refresh::RefreshReason;
use crate::util::alive::AliveFlag;
use crate::util::format::{format_money, format_percent};
use crate::util::loader::{fetch_into, refetch_on};

/// Bar heights as a percentage of the busiest bucket. Non-empty buckets get
/// at least a sliver so they stay visible next to a large peak.
fn bar_percents(series: &[AnalyticsPoint]) -> Vec<u8> {
    let peak = series.iter().map(|p| p.volume_minor).max().unwrap_or(0);
    if peak <= 0 {
        return vec![0; series.len()];
    }
    series
        .iter()
        .map(|p| {
            if p.volume_minor <= 0 {
                return 0;
            }
            let pct = i128::from(p.volume_minor) * 100 / i128::from(peak);
            u8::try_from(pct.clamp(2, 100)).unwrap_or(100)
        })
        .collect()
}

#[component]
pub fn AnalyticsWidget() -> impl IntoView {
    let alive = AliveFlag::for_current_owner();
    let range = RwSignal::new(TimeRange::default());
    let version = RwSignal::new(0_u64);
    let analytics = RwSignal::new(FetchState::<AnalyticsSnapshot>::loading());

    refetch_on(RefreshReason::Transactions, version);
    Effect::new(move || {
        let selected = range.get();
        version.track();
        fetch_into(analytics, alive.clone(), async move {
            api::get_payment_analytics(selected).await.map(|response| response.data)
        });
    });

    let on_range = move |ev: leptos::ev::Event| {
        if let Some(selected) = TimeRange::from_query(&event_target_value(&ev)) {
            range.set(selected);
        }
    };

    view! {
        <section class="card analytics">
            <header class="card__header">
                <h3 class="card__title">"Payments"</h3>
                <select class="analytics__range" on:change=on_range prop:value=move || range.get().as_query()>
                    {TimeRange::ALL
                        .into_iter()
                        .map(|r| view! { <option value=r.as_query()>{r.label()}</option> })
                        .collect_view()}
                </select>
            </header>
            {move || {
                let state = analytics.get();
                if state.is_initial_load() {
                    return view! { <p class="card__placeholder">"Loading analytics..."</p> }.into_any();
                }
                match (state.data, state.error) {
                    (Some(snapshot), error) => {
                        view! {
                            {error.map(|e| view! { <p class="card__error">{e}</p> })}
                            <AnalyticsBody snapshot=snapshot/>
                        }
                            .into_any()
                    }
                    (None, Some(error)) => view! { <p class="card__error">{error}</p> }.into_any(),
                    (None, None) => view! { <p class="card__placeholder">"No analytics yet."</p> }.into_any(),
                }
            }}
        </section>
    }
}

#[component]
fn AnalyticsBody(snapshot: AnalyticsSnapshot) -> impl IntoView {
    let heights = bar_percents(&snapshot.series);
    let currency = snapshot.currency.clone();

    view! {
        <dl class="analytics__figures">
            <div>
                <dt>"Volume"</dt>
                <dd>{format_money(snapshot.total_volume_minor, &snapshot.currency)}</dd>
            </div>
            <div>
                <dt>"Transactions"</dt>
                <dd>{snapshot.transaction_count}</dd>
            </div>
            <div>
                <dt>"Success rate"</dt>
                <dd>{format_percent(snapshot.success_rate)}</dd>
            </div>
            <div>
                <dt>"Average ticket"</dt>
                <dd>{format_money(snapshot.average_ticket_minor, &snapshot.currency)}</dd>
            </div>
        </dl>
        <div class="analytics__chart" role="img" aria-label="Payment volume per period">
            {snapshot
                .series
                .into_iter()
                .zip(heights)
                .map(|(point, height)| {
                    let title = format!("{}: {}", point.label, format_money(point.volume_minor, &currency));
                    view! {
                        <div class="analytics__bar" title=title>
                            <span class="analytics__bar-fill" style=format!("height: {height}%")></span>
                            <span class="analytics__bar-label">{point.label}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
