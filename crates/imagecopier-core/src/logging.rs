/// Logging sink — one log file per session plus console output.
///
/// Every `tracing` event (including the mirrored worker log lines) is
/// written with timestamp and level to `logs/image_copier_YYYYMMDD_HHMMSS.log`
/// and to stdout.
use crate::error::LoggingError;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::writer::MakeWriterExt;

/// Directory used when no explicit log location is given.
pub const LOG_DIR: &str = "logs";

/// Keeps the background log writer alive; drop it last.
pub struct LogGuard {
    path: PathBuf,
    _worker: WorkerGuard,
}

impl LogGuard {
    /// Path of this session's log file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Session log file name for the current local time.
pub fn session_log_name() -> String {
    chrono::Local::now()
        .format("image_copier_%Y%m%d_%H%M%S.log")
        .to_string()
}

/// Install the global subscriber writing to `log_dir` and stdout.
pub fn init_logging(log_dir: &Path) -> Result<LogGuard, LoggingError> {
    std::fs::create_dir_all(log_dir).map_err(|source| LoggingError::CreateDir {
        path: log_dir.to_path_buf(),
        source,
    })?;

    let file_name = session_log_name();
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.trim_end_matches(".log"))
        .filename_suffix("log")
        .build(log_dir)?;
    let (file_writer, worker) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_ansi(false)
        .with_writer(std::io::stdout.and(file_writer))
        .try_init()
        .map_err(|e| LoggingError::AlreadyInstalled(e.to_string()))?;

    Ok(LogGuard {
        path: log_dir.join(file_name),
        _worker: worker,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_name_shape() {
        let name = session_log_name();
        assert!(name.starts_with("image_copier_"));
        assert!(name.ends_with(".log"));
        // image_copier_ + 8 digits + _ + 6 digits + .log
        assert_eq!(name.len(), "image_copier_".len() + 15 + ".log".len());
    }
}
