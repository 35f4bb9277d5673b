//! Logging setup: human-readable stderr output plus optional JSONL files.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const ENV_LOG_PATH: &str = "NOCURSE_LOG_PATH";
const ENV_LOG_DIR: &str = "NOCURSE_LOG_DIR";

/// File name used when only a log directory is known.
const LOG_FILE_NAME: &str = "nocurse.jsonl";

/// Where structured logs go besides stderr.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// JSONL log file, if file logging is enabled.
    pub log_file: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Resolve from `NOCURSE_LOG_PATH`, then `NOCURSE_LOG_DIR`, then the
    /// configured log directory.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self::resolve(
            non_empty_var(ENV_LOG_PATH),
            non_empty_var(ENV_LOG_DIR),
            config_log_dir,
        )
    }

    fn resolve(
        log_path: Option<PathBuf>,
        env_dir: Option<PathBuf>,
        config_dir: Option<PathBuf>,
    ) -> Self {
        let log_file = log_path.or_else(|| env_dir.or(config_dir).map(|d| d.join(LOG_FILE_NAME)));
        Self { log_file }
    }
}

fn non_empty_var(name: &str) -> Option<PathBuf> {
    env::var_os(name)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Filter directive for the given flags. `-q` wins over `-v`.
fn level_directive(quiet: bool, verbose: u8, level: &str) -> &str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => level,
        1 => "debug",
        _ => "trace",
    }
}

/// Build the event filter: `RUST_LOG` when set, otherwise the CLI flags and
/// configured level.
pub fn env_filter(quiet: bool, verbose: u8, level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_directive(quiet, verbose, level)))
}

/// Install the global subscriber.
///
/// The returned guard flushes the file writer on drop; hold it until exit.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let (file_layer, guard) = match config.log_file {
        Some(ref path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;
            let file_name = path
                .file_name()
                .with_context(|| format!("log path has no file name: {}", path.display()))?;

            let appender = tracing_appender::rolling::never(dir, file_name);
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins() {
        let config = ObservabilityConfig::resolve(
            Some(PathBuf::from("/tmp/x/app.log")),
            Some(PathBuf::from("/tmp/env")),
            Some(PathBuf::from("/tmp/config")),
        );
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/x/app.log")));
    }

    #[test]
    fn env_dir_beats_config_dir() {
        let config = ObservabilityConfig::resolve(
            None,
            Some(PathBuf::from("/tmp/env")),
            Some(PathBuf::from("/tmp/config")),
        );
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/env/nocurse.jsonl")));
    }

    #[test]
    fn config_dir_used_last() {
        let config =
            ObservabilityConfig::resolve(None, None, Some(PathBuf::from("/var/log/nocurse")));
        assert_eq!(
            config.log_file,
            Some(PathBuf::from("/var/log/nocurse/nocurse.jsonl"))
        );
    }

    #[test]
    fn no_file_logging_by_default() {
        assert_eq!(
            ObservabilityConfig::resolve(None, None, None),
            ObservabilityConfig::default()
        );
    }

    #[test]
    fn quiet_overrides_verbose() {
        assert_eq!(level_directive(true, 2, "info"), "error");
        assert_eq!(level_directive(false, 0, "warn"), "warn");
        assert_eq!(level_directive(false, 1, "warn"), "debug");
        assert_eq!(level_directive(false, 3, "warn"), "trace");
    }
}
