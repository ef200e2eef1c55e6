//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable holding the log filter directive
pub const LOG_FILTER_ENV: &str = "EDSEL_LOG";

/// Environment variable overriding the log directory
pub const LOG_DIR_ENV: &str = "EDSEL_LOG_DIR";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/edsel/logs/` so stdout stays free
/// for command output. Log level is controlled by `EDSEL_LOG`.
///
/// # Examples
/// ```bash
/// EDSEL_LOG=debug edsel list-editors
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "edsel.log");

    // Default to info, allow override via EDSEL_LOG
    let env_filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new("edsel=info,edsel_app=info,edsel_core=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .try_init()
        .map_err(|e| std::io::Error::other(e.to_string()))?;

    tracing::debug!("Log directory: {}", log_dir.display());

    Ok(())
}

/// Get the log directory path
pub fn get_log_directory() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(LOG_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    Ok(base.join("edsel").join("logs"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_log_directory_override() {
        std::env::set_var(LOG_DIR_ENV, "/tmp/edsel-test-logs");
        let dir = get_log_directory().unwrap();
        std::env::remove_var(LOG_DIR_ENV);
        assert_eq!(dir, PathBuf::from("/tmp/edsel-test-logs"));
    }

    #[test]
    #[serial]
    fn test_log_directory_default_ends_with_app_dir() {
        std::env::remove_var(LOG_DIR_ENV);
        let dir = get_log_directory().unwrap();
        assert!(dir.ends_with("edsel/logs"));
    }
}
