//! Logging Setup
//!
//! Console output plus an optional daily rotated log file.

use crate::constants::APP_NAME;
use crate::error::{Error, Result};
use crate::helpers::get_or_create_log_dir;
use crate::states::LogConfig;
use tracing_appender::non_blocking::WorkerGuard;
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

const LOG_FILE_SUFFIX: &str = "log";

/// Keeps the non-blocking file writer alive. Drop it only at shutdown.
#[must_use = "Dropping this guard stops the background log writer."]
#[derive(Debug)]
pub struct LogGuard {
    _file: Option<WorkerGuard>,
}

/// Build the filter: `RUST_LOG` wins, otherwise the configured level
pub fn build_env_filter(config: &LogConfig) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(&config.level).map_err(|e| Error::Logging {
        message: format!("Invalid log level {:?}: {e}", config.level),
    })
}

/// Build the daily rotated file appender in `dir`
pub fn file_appender(dir: &Path, config: &LogConfig) -> Result<RollingFileAppender> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(APP_NAME)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(config.max_files.max(1))
        .build(dir)
        .map_err(|e| Error::Logging {
            message: format!("Failed to create log file appender: {e}"),
        })
}

/// Install the global tracing subscriber
///
/// A file appender that cannot be created leaves console output in place.
pub fn init(config: &LogConfig) -> Result<LogGuard> {
    let env_filter = build_env_filter(config)?;

    let mut file_error = None;
    let (file_layer, guard) = match config
        .file
        .then(|| get_or_create_log_dir().and_then(|dir| file_appender(&dir, config)))
    {
        Some(Ok(appender)) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (
                Some(fmt::layer().with_writer(writer).with_ansi(false)),
                Some(guard),
            )
        }
        Some(Err(e)) => {
            file_error = Some(e);
            (None, None)
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().compact())
        .with(file_layer)
        .try_init()
        .map_err(|e| Error::Logging {
            message: e.to_string(),
        })?;

    if let Some(e) = file_error {
        tracing::warn!(error = %e, "File logging disabled, logging to console only");
    }

    Ok(LogGuard { _file: guard })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_level() {
        // Only meaningful when RUST_LOG does not override the configured level
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let config = LogConfig {
            level: "showcase=loud".to_string(),
            ..LogConfig::default()
        };
        assert!(matches!(build_env_filter(&config), Err(Error::Logging { .. })));
    }

    #[test]
    fn file_appender_fails_when_dir_is_a_file() {
        let file = tempfile::NamedTempFile::new().expect("temp file");
        let result = file_appender(file.path(), &LogConfig::default());
        assert!(matches!(result, Err(Error::Logging { .. })));
    }

    #[test]
    fn file_appender_builds_in_writable_dir() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(file_appender(dir.path(), &LogConfig::default()).is_ok());
    }

    #[test]
    fn accepts_module_directives() {
        let config = LogConfig {
            level: "showcase_gui=debug,gpui=warn".to_string(),
            ..LogConfig::default()
        };
        assert!(build_env_filter(&config).is_ok());
    }
}
