use paybord::config::ServerConfig;

#[tokio::main]
async fn main() {
    // A missing .env is normal outside development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(paybord::server::log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid server configuration");
            std::process::exit(2);
        }
    };

    if let Err(e) = paybord::server::serve(config).await {
        tracing::error!(error = %e, "paybord server stopped");
        std::process::exit(1);
    }
}
