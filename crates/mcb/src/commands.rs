//! Subcommand implementations.

use std::path::PathBuf;
use std::sync::Arc;

use mcb_domain::error::Result;
use mcb_infrastructure::config::ConfigLoader;
use mcb_infrastructure::logging::{init_logging, spawn_log_forwarder};
use mcb_server::state::AnalysisServerState;
use tokio::net::TcpListener;

/// Load configuration, stand up the composition root, and serve the
/// Analysis Execution Core HTTP API until the process is signaled to stop.
///
/// # Errors
/// Returns an error if configuration loading, provider resolution, or
/// binding the listener fails.
pub async fn serve(config_path: Option<PathBuf>) -> Result<()> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = config_path {
        loader = loader.with_config_path(path);
    }
    let config = loader.load()?;

    let log_receiver = init_logging(&config.logging);

    let bind_host = config.server.network.host.clone();
    let bind_port = config.server.network.port;

    let state = AnalysisServerState::build(Arc::new(config)).await?;
    let forwarder = spawn_log_forwarder(log_receiver, Arc::clone(&state.event_bus));

    let router = mcb_server::routes::build_router(Arc::new(state));
    let listener = TcpListener::bind((bind_host.as_str(), bind_port))
        .await
        .map_err(|e| mcb_domain::error::Error::internal(format!("failed to bind {bind_host}:{bind_port}: {e}")))?;

    tracing::info!(host = %bind_host, port = bind_port, "analysis execution core listening");
    axum::serve(listener, router)
        .await
        .map_err(|e| mcb_domain::error::Error::internal(format!("server error: {e}")))?;

    forwarder.abort();
    Ok(())
}
