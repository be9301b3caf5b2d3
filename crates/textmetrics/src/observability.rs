//! Logging setup.
//!
//! Human-readable events go to stderr. When a log file location is configured,
//! events are also written as JSON lines through a non-blocking appender.
//!
//! Log file resolution (first match wins):
//! 1. `TEXTMETRICS_LOG_PATH` — explicit file path
//! 2. `TEXTMETRICS_LOG_DIR` — directory, file named `textmetrics.jsonl`
//! 3. `log_dir` from the config file

use std::path::PathBuf;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

const LOG_PATH_ENV: &str = "TEXTMETRICS_LOG_PATH";
const LOG_DIR_ENV: &str = "TEXTMETRICS_LOG_DIR";
const LOG_FILE_NAME: &str = "textmetrics.jsonl";

/// Where file logs go, if anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Explicit log file path.
    pub log_path: Option<PathBuf>,
    /// Directory for the default log file.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Read log locations from the environment, falling back to `config_log_dir`.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self {
            log_path: std::env::var_os(LOG_PATH_ENV).map(PathBuf::from),
            log_dir: std::env::var_os(LOG_DIR_ENV)
                .map(PathBuf::from)
                .or(config_log_dir),
        }
    }

    /// Resolve the log file as a `(directory, file name)` pair.
    fn log_file(&self) -> Option<(PathBuf, String)> {
        if let Some(ref path) = self.log_path {
            let dir = path
                .parent()
                .map_or_else(|| PathBuf::from("."), PathBuf::from);
            let name = path.file_name()?.to_string_lossy().into_owned();
            return Some((dir, name));
        }
        self.log_dir
            .as_ref()
            .map(|dir| (dir.clone(), LOG_FILE_NAME.to_string()))
    }
}

/// Build the event filter.
///
/// `RUST_LOG` wins when set. Otherwise `--quiet` selects `error`, each `-v`
/// raises verbosity (`debug`, then `trace`), and the configured level applies
/// when neither flag is given.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => config_level,
            1 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::new(level)
}

/// Install the global subscriber.
///
/// The returned guard flushes the file appender on drop; keep it alive for
/// the whole run.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let (file_layer, guard) = match config.log_file() {
        Some((dir, name)) => {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::never(&dir, name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().json().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(guard)
}
