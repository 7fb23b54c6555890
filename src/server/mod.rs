//! SSR server assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the Leptos SSR app, its static `/pkg` assets, and
//! (unless disabled) the in-memory demo API under `/api`. Only compiled with
//! the `ssr` feature.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod routes;

use std::net::SocketAddr;

use axum::Router;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::app::{App, shell};
use crate::config::ServerConfig;
use crate::demo::DemoStore;
use routes::ApiState;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("leptos configuration: {0}")]
    Config(String),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}

/// Directives used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_LOG_FILTER: &str = "info,paybord=debug,tower_http=info";

/// `RUST_LOG` if it parses, else [`DEFAULT_LOG_FILTER`].
#[must_use]
pub fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|raw| !raw.trim().is_empty())
        .and_then(|raw| EnvFilter::try_new(raw).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Build the full router: demo API, Leptos routes, asset fallback.
pub fn app(leptos_options: LeptosOptions, config: &ServerConfig) -> Router {
    let routes = generate_route_list(App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options);

    let mut router = Router::new();
    if config.demo_api {
        let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);
        router = router.nest("/api", routes::router(ApiState::new(DemoStore::seeded())).layer(cors));
    }

    router.merge(leptos_router).layer(CompressionLayer::new()).layer(TraceLayer::new_for_http())
}

/// Load the Leptos configuration, bind, and serve until shutdown.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded, the
/// address cannot be bound, or the server loop fails.
pub async fn serve(config: ServerConfig) -> Result<(), ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Config(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let addr = config.addr.unwrap_or(leptos_options.site_addr);

    let app = app(leptos_options, &config);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!(%addr, demo_api = config.demo_api, "paybord listening");
    axum::serve(listener, app.into_make_service()).await.map_err(ServerError::Serve)
}
