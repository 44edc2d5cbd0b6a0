//! Process-wide `tracing` subscriber for the client and CLI.
//!
//! Request and paging diagnostics are emitted at `debug!`, provider
//! failures at `warn!`. Both go to stderr so stdout stays clean for
//! command output, and to a daily `airship.log` file when one can be opened.

use std::path::Path;
use tracing_appender::rolling;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::constants;
use crate::error::UaResult;

/// Install the global subscriber: compact lines on stderr plus a daily
/// rolling file in `log_dir`, written as JSON when `json_output` is set.
///
/// `level` is an `EnvFilter` directive (`"debug"`, `"ua_api=trace"`); an
/// unparsable directive falls back to `info`. Fails with `Io` when the
/// directory cannot be created and with `Other` when a subscriber is
/// already installed, in which case nothing is changed.
pub fn init_logging(level: &str, log_dir: &Path, json_output: bool) -> UaResult<LogGuard> {
    std::fs::create_dir_all(log_dir)?;

    let file_appender = rolling::daily(log_dir, constants::LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact();

    if json_output {
        let file_layer = fmt::layer()
            .with_writer(non_blocking)
            .json()
            .with_target(true)
            .with_file(true)
            .with_line_number(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(console_layer)
            .with(file_layer)
            .try_init()
            .map_err(|e| anyhow::anyhow!("failed to install subscriber: {e}"))?;
    } else {
        let file_layer = fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_target(true)
            .with_file(true)
            .with_line_number(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(console_layer)
            .with(file_layer)
            .try_init()
            .map_err(|e| anyhow::anyhow!("failed to install subscriber: {e}"))?;
    }

    tracing::debug!("logging initialized at level={level}, dir={}", log_dir.display());

    Ok(LogGuard { _guard: guard })
}

/// Keeps the background file writer running; dropping it flushes the file.
pub struct LogGuard {
    _guard: tracing_appender::non_blocking::WorkerGuard,
}

/// Stderr-only subscriber, used when the log directory is unusable.
/// A subscriber that is already installed is left in place.
pub fn init_console_logging(level: &str) {
    let env_filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true).compact())
        .try_init();
}
