use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;
use crate::error::{AppError, AppResult};

/// Installs the global subscriber. The terminal belongs to the UI, so events
/// only go to a file; without one configured nothing is installed.
pub fn init(config: &LogConfig) -> AppResult<bool> {
    let Some(path) = config.file.as_deref() else {
        return Ok(false);
    };

    let file = open_log_file(path)?;
    let filter = build_filter(&config.filter);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|err| AppError::unsupported(format!("logging already initialized: {err}")))?;

    tracing::info!(path = %path.display(), "logging initialized");
    Ok(true)
}

fn open_log_file(path: &Path) -> AppResult<std::fs::File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| {
            AppError::io_with_context(
                source,
                format!("failed to open log file: {}", path.display()),
            )
        })
}

fn build_filter(configured: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(configured))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

#[cfg(test)]
mod tests {
    use crate::config::LogConfig;

    use super::init;

    #[test]
    fn init_without_file_installs_nothing() {
        let config = LogConfig::default();
        let installed = init(&config).expect("disabled logging should not fail");
        assert!(!installed);
    }

    #[test]
    fn init_reports_unwritable_log_path() {
        let config = LogConfig {
            filter: "debug".to_string(),
            file: Some(std::env::temp_dir().join("desk_missing_dir").join("nested").join("x.log")),
        };
        let err = init(&config).expect_err("missing parent directory should fail");
        assert!(err.to_string().contains("failed to open log file"));
    }
}
