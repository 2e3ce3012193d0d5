/// Typed errors for the parts of the crate that can fail before or around
/// a copy run. The worker itself never returns an error: every failure
/// inside a run is converted into a log event and reflected in the
/// terminal outcome.
use std::path::PathBuf;

/// Failure to start a copy run.
#[derive(Debug, thiserror::Error)]
pub enum CopierError {
    #[error("failed to spawn copy worker thread: {0}")]
    Spawn(#[source] std::io::Error),
}

/// Failure to persist settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to write settings to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialise settings: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure to set up the logging sink.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("failed to create log directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to open session log file: {0}")]
    Appender(#[from] tracing_appender::rolling::InitError),
    #[error("a global tracing subscriber is already installed: {0}")]
    AlreadyInstalled(String),
}
