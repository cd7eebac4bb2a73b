//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the Playfield client.

use std::path::Path;

use tracing::{debug, error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use crate::config::LoggingConfig;
use crate::utils::errors::{PlayfieldError, Result};

/// Initialize logging based on configuration
///
/// The returned guard flushes the log file on drop and must be kept alive
/// for as long as file logging is wanted.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| PlayfieldError::Config(format!("Invalid log filter: {}", e)))?;

    let stderr_layer = if config.format == "json" {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .boxed()
    };

    let (file_layer, guard) = match config.file_path.as_deref() {
        Some(file_path) => {
            let path = Path::new(file_path);
            let directory = path.parent().unwrap_or_else(|| Path::new("."));
            let file_name = path
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or("playfield.log");

            let file_appender = tracing_appender::rolling::daily(directory, file_name);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking)
                .boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| PlayfieldError::Config(format!("Logging already initialized: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log event actions with structured data
pub fn log_event_action(event_id: Option<i64>, action: &str, details: Option<&str>) {
    info!(
        event_id = event_id,
        action = action,
        details = details,
        "Event action performed"
    );
}

/// Log API errors with context
pub fn log_api_error(api: &str, error: &PlayfieldError, context: Option<&str>) {
    match error.severity() {
        crate::utils::errors::ErrorSeverity::Info => info!(
            api = api,
            error = %error,
            context = context,
            "Request rejected by server"
        ),
        crate::utils::errors::ErrorSeverity::Warning => warn!(
            api = api,
            error = %error,
            context = context,
            "API request refused"
        ),
        severity => error!(
            api = api,
            error = %error,
            severity = %severity,
            recoverable = error.is_recoverable(),
            context = context,
            "API error occurred"
        ),
    }
}

/// Log view renders
pub fn log_view_render(view: &str, items: usize) {
    debug!(view = view, items = items, "View rendered");
}
