use std::net::TcpListener;

use actix_web::web;
use campus_backend::{
    graceful_shutdown::shutdown_signal,
    server,
    settings::AppConfig,
    AppState,
};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .init();

    let config = match AppConfig::new() {
        Ok(cfg) => {
            tracing::info!("Loaded configuration: {:?}", cfg);
            cfg
        },
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let app_state = match AppState::new(&config).await {
        Ok(state) => web::Data::new(state),
        Err(e) => {
            tracing::error!("Failed to initialise application state: {}", e);
            std::process::exit(1);
        }
    };

    let server_addr = config.server_addr();
    let listener = TcpListener::bind(&server_addr)?;

    tracing::info!(
        "🚀 Starting {} v{} on {} ({} routes)",
        config.name,
        env!("CARGO_PKG_VERSION"),
        server_addr,
        app_state.routes.len()
    );

    let server = server::run(listener, app_state, &config)?;

    tokio::select! {
        res = server => res,
        _ = shutdown_signal() => Ok(()),
    }
}
