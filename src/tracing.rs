//! Tracing setup for applications embedding the editor core
//!
//! The library only emits events; a host calls [`init`] once at startup to
//! see them.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=gridedit::session=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/gridedit/logs/gridedit.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config_paths::LOG_FILE_NAME;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`). File logging writes to
/// `~/.config/gridedit/logs/gridedit.log` with daily rotation.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init() -> bool {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE_NAME);
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    match tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
    {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("Tracing already initialized: {}", e);
            false
        }
    }
}
