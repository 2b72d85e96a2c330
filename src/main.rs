//! Server entry point for the exit compliance engine.
//!
//! Binds to a configurable port (default 8080) and serves the reconcile API.

use exit_compliance_engine::api::{AppState, create_router};
use exit_compliance_engine::config::ConfigLoader;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let loader = match std::env::var("EXIT_COMPLIANCE_CONFIG_DIR") {
        Ok(dir) => {
            let loader = ConfigLoader::load(&dir).map_err(|e| {
                tracing::error!("Configuration load failed: {e}");
                e
            })?;
            info!(config_dir = %dir, "Loaded reconciliation configuration");
            loader
        }
        Err(_) => {
            info!("EXIT_COMPLIANCE_CONFIG_DIR not set, using built-in defaults");
            ConfigLoader::default()
        }
    };

    let port: u16 = std::env::var("EXIT_COMPLIANCE_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    let app = create_router(AppState::new(loader));
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!(port, "Exit compliance engine listening");
    axum::serve(listener, app).await?;

    Ok(())
}
