use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{InitError, RollingFileAppender, Rotation},
};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{
    config::Config, data::connection::ConnectionManager, data::mongo::MongoConnector,
    error::AppError, router::router, state::AppState,
};

/// Number of daily log files kept before the oldest is removed.
const LOG_RETENTION_DAYS: usize = 21;

/// Installs the global log subscriber.
///
/// Logs go to stdout and, as JSON lines, to a daily rotated file in the configured log
/// directory. The default level comes from the configured environment (`info` in
/// production, `debug` otherwise) and can be overridden with `RUST_LOG`.
///
/// # Returns
/// - `Ok(WorkerGuard)` - Guard flushing the file writer; keep it alive until exit
/// - `Err(AppError::LogFileErr)` - The log file could not be opened
pub fn init_logging(config: &Config) -> Result<WorkerGuard, AppError> {
    let (file_writer, guard) = tracing_appender::non_blocking(log_file_appender(config)?);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_log_level()));

    if let Err(e) = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .with(
            fmt::layer()
                .json()
                .with_ansi(false)
                .with_writer(file_writer),
        )
        .try_init()
    {
        eprintln!("Failed to initialize logging: {}", e);
    }

    Ok(guard)
}

/// Opens the daily rotated log file `<prefix>.<YYYY-MM-DD>.log` in the log directory.
pub fn log_file_appender(config: &Config) -> Result<RollingFileAppender, InitError> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(config.log_file_prefix.as_str())
        .filename_suffix("log")
        .max_log_files(LOG_RETENTION_DAYS)
        .build(&config.log_dir)
}

/// Creates the connection manager for the configured MongoDB database.
///
/// No connection is made here; the first request to use the store connects.
pub fn connect_to_database(config: &Config) -> Arc<ConnectionManager> {
    let connector = MongoConnector::new(&config.mongo_uri, &config.db_name);

    Arc::new(ConnectionManager::new(connector))
}

/// Assembles the HTTP application around `state`.
pub fn app(state: AppState) -> Router {
    router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Resolves when the process receives Ctrl-C.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
