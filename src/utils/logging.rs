//! Logging system initialization
//!
//! Sets up tracing-based logging with file output to `<data dir>/app.log`
//! and rotation on application startup keeping 9 historical files.

use crate::config::ConfigManager;
use crate::error::{HeartboardError, Result, StringError};
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt};

/// Maximum number of historical log files to keep (app.log.1 through app.log.9)
const MAX_LOG_FILES: u8 = 9;

/// Initialize the logging system
///
/// Log level defaults to INFO but can be configured via `RUST_LOG` environment variable.
/// Rotates existing logs on startup to maintain a history of recent sessions.
pub fn init_logging() -> Result<()> {
    let log_dir = ConfigManager::data_dir();
    std::fs::create_dir_all(&log_dir)?;

    let log_path = log_dir.join("app.log");
    rotate_logs_on_startup(&log_path)?;

    // Rotation is handled above, once per session
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix("app")
        .filename_suffix("log")
        .build(&log_dir)
        .map_err(|e| HeartboardError::ConfigError(Box::new(e)))?;

    let subscriber = fmt()
        .with_writer(file_appender)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| HeartboardError::ConfigError(Box::new(e)))?;

    tracing::info!("Heartboard v{} started", env!("CARGO_PKG_VERSION"));

    Ok(())
}

/// Rotate log files on application startup
///
/// app.log.9 is deleted, app.log.N moves to app.log.N+1, and app.log becomes
/// app.log.1. The logger then creates a fresh app.log.
fn rotate_logs_on_startup(log_path: &Path) -> Result<()> {
    if !log_path.exists() {
        return Ok(());
    }

    let log_dir = log_path
        .parent()
        .ok_or_else(|| HeartboardError::ConfigError(StringError::new("Invalid log path")))?;

    let log_name = log_path
        .file_name()
        .ok_or_else(|| HeartboardError::ConfigError(StringError::new("Invalid log filename")))?
        .to_string_lossy();

    let oldest_log = log_dir.join(format!("{log_name}.{MAX_LOG_FILES}"));
    if oldest_log.exists() {
        std::fs::remove_file(&oldest_log)?;
    }

    for i in (1..MAX_LOG_FILES).rev() {
        let current_log = log_dir.join(format!("{log_name}.{i}"));
        let next_log = log_dir.join(format!("{log_name}.{}", i + 1));

        if current_log.exists() {
            std::fs::rename(&current_log, &next_log)?;
        }
    }

    let log_1 = log_dir.join(format!("{log_name}.1"));
    std::fs::rename(log_path, &log_1)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_dir;
    use std::fs;

    #[test]
    fn test_rotate_logs_basic() {
        let temp_dir = create_test_dir();
        let log_path = temp_dir.path().join("app.log");
        fs::write(&log_path, "Session 1").unwrap();

        rotate_logs_on_startup(&log_path).unwrap();

        let log_1 = temp_dir.path().join("app.log.1");
        assert_eq!(fs::read_to_string(&log_1).unwrap(), "Session 1");
        assert!(!log_path.exists());
    }

    #[test]
    fn test_rotate_logs_keeps_newest_first() {
        let temp_dir = create_test_dir();
        let log_path = temp_dir.path().join("app.log");

        for i in 1..=3 {
            fs::write(&log_path, format!("Session {i}")).unwrap();
            rotate_logs_on_startup(&log_path).unwrap();
        }

        for i in 1..=3 {
            let content = fs::read_to_string(temp_dir.path().join(format!("app.log.{i}"))).unwrap();
            assert_eq!(content, format!("Session {}", 4 - i));
        }
    }

    #[test]
    fn test_rotate_logs_respects_max_files() {
        let temp_dir = create_test_dir();
        let log_path = temp_dir.path().join("app.log");

        for i in 1..=12 {
            fs::write(&log_path, format!("Session {i}")).unwrap();
            rotate_logs_on_startup(&log_path).unwrap();
        }

        assert!(temp_dir.path().join("app.log.9").exists());
        assert!(!temp_dir.path().join("app.log.10").exists());
        assert_eq!(
            fs::read_to_string(temp_dir.path().join("app.log.9")).unwrap(),
            "Session 4"
        );
    }

    #[test]
    fn test_rotate_logs_without_existing_log() {
        let temp_dir = create_test_dir();
        let log_path = temp_dir.path().join("app.log");

        assert!(rotate_logs_on_startup(&log_path).is_ok());
        assert!(!temp_dir.path().join("app.log.1").exists());
    }
}
