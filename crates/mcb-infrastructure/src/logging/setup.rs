//!
//! **Documentation**: [docs/modules/infrastructure.md](../../../../docs/modules/infrastructure.md)
//!
//! Tracing subscriber setup: level parsing, stdout/file/JSON layering, and
//! wiring the [`super::event_bus_layer::EventBusLayer`] that feeds SSE.

use std::path::Path;

use mcb_domain::error::{Error, Result};
use mcb_domain::infra::logging::set_log_fn;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use super::LoggingConfig;
use super::event_bus_layer::EventBusLayer;
use super::sensitive::log_facade_shim;

/// Receiving half of the channel fed by [`EventBusLayer`]; forwarded to the
/// event bus by [`super::spawn_log_forwarder`].
pub type LogEventReceiver = tokio::sync::mpsc::UnboundedReceiver<mcb_domain::events::DomainEvent>;

/// Parse a log level string, accepting the common `"warning"` alias for `WARN`.
///
/// # Errors
/// Returns an error if `level` is not a recognized level name.
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_ascii_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        other => Err(Error::config(format!("unrecognized log level: {other}"))),
    }
}

/// Initialize the global tracing subscriber from `config`.
///
/// Installs a stdout layer (plain or JSON per `config.json_format`), an
/// optional rotating file layer, and an [`EventBusLayer`] for SSE forwarding.
/// Also registers the domain log facade so `mcb_domain`'s `trace!`..`error!`
/// macros route through this subscriber.
///
/// Returns the receiver that must be handed to [`super::spawn_log_forwarder`]
/// once the event bus is available.
///
/// # Panics
/// Panics if a global subscriber has already been installed.
pub fn init_logging(config: &LoggingConfig) -> LogEventReceiver {
    let level = parse_log_level(&config.level).unwrap_or(Level::INFO);
    let event_bus_level = parse_log_level(&config.event_bus_level).unwrap_or(level);

    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let (event_bus_layer, receiver) = EventBusLayer::new(event_bus_level);

    let stdout_layer: Box<dyn tracing_subscriber::Layer<tracing_subscriber::Registry> + Send + Sync> =
        if config.json_format {
            Box::new(fmt::layer().json())
        } else {
            Box::new(fmt::layer())
        };

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(event_bus_layer);

    if let Some(file_path) = &config.file_output {
        let directory = file_path.parent().unwrap_or_else(|| Path::new("."));
        let file_name = file_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "mcb.log".to_string());
        let file_appender = tracing_appender::rolling::daily(directory, file_name);
        registry.with(fmt::layer().with_writer(file_appender).with_ansi(false)).init();
    } else {
        registry.init();
    }

    set_log_fn(log_facade_shim);

    receiver
}

/// Log that the configuration file at `path` was (re)loaded.
pub fn log_config_loaded(path: &Path, success: bool) {
    if success {
        tracing::info!(path = %path.display(), "configuration loaded");
    } else {
        tracing::warn!(path = %path.display(), "configuration reload failed, keeping previous config");
    }
}

/// Log the outcome of a dependency health check.
pub fn log_health_check(name: &str, healthy: bool, message: Option<&str>) {
    if healthy {
        tracing::debug!(dependency = name, "health check passed");
    } else {
        tracing::warn!(dependency = name, detail = message.unwrap_or(""), "health check failed");
    }
}
