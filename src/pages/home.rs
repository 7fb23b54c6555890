//! Public marketing landing page.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::util::auth::{DASHBOARD_PATH, SIGNIN_PATH};

const FEATURES: &[(&str, &str)] = &[
    ("Accept payments", "Share a payment link and get paid by card in minutes."),
    ("Recurring billing", "Create subscriptions and switch plans without code."),
    ("Storefronts", "Sell products from a hosted store with its own URL."),
    ("Fast payouts", "Move your available balance to your bank whenever you like."),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <div class="home-page">
            <header class="home-page__header">
                <span class="navbar__brand">"Paybord"</span>
                <span class="navbar__spacer"></span>
                {move || {
                    if auth.with(AuthState::is_authenticated) {
                        view! { <a class="btn btn--primary" href=DASHBOARD_PATH>"Go to dashboard"</a> }.into_any()
                    } else {
                        view! {
                            <a class="btn" href=SIGNIN_PATH>"Sign in"</a>
                            <a class="btn btn--primary" href="/signup">"Get started"</a>
                        }
                            .into_any()
                    }
                }}
            </header>
            <section class="hero">
                <h1>"Payments for growing businesses"</h1>
                <p class="hero__lead">
                    "Take payments, run subscriptions and manage payouts from one dashboard."
                </p>
                <a class="btn btn--primary btn--large" href="/signup">"Create your account"</a>
            </section>
            <section class="features">
                {FEATURES
                    .iter()
                    .map(|(title, body)| {
                        view! {
                            <article class="features__item">
                                <h3>{*title}</h3>
                                <p>{*body}</p>
                            </article>
                        }
                    })
                    .collect_view()}
            </section>
        </div>
    }
}
