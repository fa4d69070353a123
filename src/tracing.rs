//! Tracing infrastructure for cascade diagnostics
//!
//! # Usage
//!
//! The level comes from `CascadeConfig::log_level` (or `--log-level`).
//! `RUST_LOG` still wins for the console when set:
//! - `RUST_LOG=debug` - state switches and transition lifecycle
//! - `RUST_LOG=carddeck::controller=trace` - per-step cascade offsets
//!
//! Per-step cascade events are only emitted when the configured level is
//! `trace`, so they cost nothing at the default level.
//!
//! # Log Files
//!
//! Logs are written to `~/.config/carddeck/logs/carddeck.log` with daily rotation.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::LogLevel;

/// Initialize the tracing subscriber with console and file logging
pub fn init(level: LogLevel) {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_filter()));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .with_filter(console_filter);

    // File layer never drops below debug
    let file_level = level.max(LogLevel::Debug);
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "carddeck.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new(file_level.as_filter())),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {:#}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}
