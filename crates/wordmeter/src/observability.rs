//! Logging setup for the CLI.
//!
//! Events always go to stderr (stdout carries command output and, for
//! `serve`, the MCP protocol). A plain-text log file is added when
//! `WORDMETER_LOG_PATH`, `WORDMETER_LOG_DIR`, or the config's `log_dir`
//! names one.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

const LOG_PATH_ENV: &str = "WORDMETER_LOG_PATH";
const LOG_DIR_ENV: &str = "WORDMETER_LOG_DIR";
const LOG_FILE_NAME: &str = "wordmeter.log";

/// Where log output should be written.
#[derive(Debug, Clone, Default)]
pub struct ObservabilityConfig {
    /// Exact log file, highest precedence.
    pub log_path: Option<PathBuf>,
    /// Directory that receives `wordmeter.log`.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Read the environment, falling back to the configured log directory.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self {
            log_path: std::env::var_os(LOG_PATH_ENV).map(PathBuf::from),
            log_dir: std::env::var_os(LOG_DIR_ENV)
                .map(PathBuf::from)
                .or(config_log_dir),
        }
    }

    /// Resolved log file, if file logging is enabled.
    pub fn log_file(&self) -> Option<PathBuf> {
        self.log_path
            .clone()
            .or_else(|| self.log_dir.as_ref().map(|dir| dir.join(LOG_FILE_NAME)))
    }
}

/// Keeps the background log writer alive; drop it last.
pub struct ObservabilityGuard {
    _file: Option<WorkerGuard>,
}

/// Build the event filter.
///
/// `RUST_LOG` wins when set. Otherwise `--quiet` means errors only, each
/// `-v` raises the level one step, and the configured level is the baseline.
pub fn env_filter(quiet: bool, verbose: u8, default_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => default_level,
            1 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::new(level)
}

/// Install the global subscriber.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<ObservabilityGuard> {
    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    let (file_layer, file_guard) = match config.log_file() {
        Some(path) => {
            let (writer, guard) = file_writer(&path)?;
            let layer = fmt::layer().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    Ok(ObservabilityGuard { _file: file_guard })
}

fn file_writer(
    path: &Path,
) -> anyhow::Result<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .with_context(|| format!("log path has no file name: {}", path.display()))?;

    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    Ok(tracing_appender::non_blocking(appender))
}
