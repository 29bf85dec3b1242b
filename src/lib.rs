pub mod api; // HTTP + WebSocket surface
pub mod config;
pub mod core_state; // Shared state behind the API
pub mod models;
pub mod seed;
pub mod store; // Profile collection, queries, selection, observers
pub mod views; // View models for the browser frontend

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Errors that stop the process before or while serving.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Server(#[from] api::ServerError),
    #[error("Failed to listen for shutdown signal: {0}")]
    Signal(#[source] std::io::Error),
}

/// Run the server until Ctrl-C.
pub async fn run() -> Result<(), StartupError> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let app_config = config::AppConfig::from_env()?;
    let core = Arc::new(core_state::CoreState::from_config(&app_config));

    let mut server = api::start_server_on(core, app_config.bind_addr).await?;
    tracing::info!(
        addr = %server.session.server_addr,
        session_id = %server.session.session_id,
        "Listening"
    );

    let signal = tokio::signal::ctrl_c().await;
    server.shutdown();
    server.wait().await;
    signal.map_err(StartupError::Signal)
}
