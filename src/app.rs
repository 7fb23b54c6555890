//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_stack::{ToastStack, Toaster};
use crate::config::ClientConfig;
use crate::pages::{
    balance::BalancePage, checkout::CheckoutPage, dashboard::DashboardPage, home::HomePage,
    invoices::InvoicesPage, kyc::KycPage, payment_methods::PaymentMethodsPage, signin::SigninPage,
    signup::SignupPage, storefront_detail::StorefrontDetailPage, storefronts::StorefrontsPage,
    subscriptions::SubscriptionsPage, transactions::TransactionsPage,
};
use crate::state::auth::AuthState;
use crate::state::currency::CurrencyState;
use crate::state::refresh::AppRefresh;
use crate::state::toast::ToastState;
use crate::util::auth::restore_session;
use crate::util::storage::BrowserStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Forward other tabs' refresh beacons to this tab's bus for as long as the
/// page lives.
fn start_beacon_pump(hub: AppRefresh, interval_ms: u64) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_millis(interval_ms)).await;
                hub.pump_beacon();
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (hub, interval_ms);
    }
}

/// Root application component.
///
/// Provides the session, toast, currency and refresh contexts, then routes.
/// Anything read from browser storage is loaded after hydration so the
/// first client render matches the server's.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    // Guards wait for the restore instead of redirecting on first paint.
    let auth = RwSignal::new(AuthState { loading: true, ..AuthState::default() });
    let toaster = Toaster::new(RwSignal::new(ToastState::with_capacity(config.max_toasts)), config.toast_ttl_ms);
    let currency = RwSignal::new(CurrencyState::default());
    let hub = AppRefresh::new(BrowserStorage);
    let poll_ms = config.refresh_poll_ms;

    provide_context(config);
    provide_context(auth);
    provide_context(toaster);
    provide_context(currency);
    provide_context(hub.clone());

    Effect::new(move || {
        currency.set(CurrencyState::load(&BrowserStorage));
        restore_session(auth);
        start_beacon_pump(hub.clone(), poll_ms);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/paybord.css"/>
        <Title text="Paybord"/>
        <ToastStack/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("signin") view=SigninPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=(StaticSegment("onboarding"), StaticSegment("kyc")) view=KycPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("transactions") view=TransactionsPage/>
                <Route path=StaticSegment("invoices") view=InvoicesPage/>
                <Route path=StaticSegment("subscriptions") view=SubscriptionsPage/>
                <Route path=StaticSegment("storefronts") view=StorefrontsPage/>
                <Route path=(StaticSegment("storefronts"), ParamSegment("id")) view=StorefrontDetailPage/>
                <Route path=StaticSegment("balance") view=BalancePage/>
                <Route path=StaticSegment("payment-methods") view=PaymentMethodsPage/>
                <Route path=(StaticSegment("pay"), ParamSegment("id")) view=CheckoutPage/>
            </Routes>
        </Router>
    }
}
