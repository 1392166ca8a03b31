//! Tracing initialization and subscriber setup.
//!
//! Wires the `tracing` macros to a fmt layer writing through the rotating
//! [`LogWriter`](super::file_writer::LogWriter).

use std::path::PathBuf;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::file_writer::LogWriter;
use crate::Config;

/// Initializes the tracing subscriber with file-based output.
///
/// The filter level comes from `RUST_LOG` when set, otherwise from
/// `config.trace_level`, defaulting to `"info"`. Log lines are written to
/// `unisono.log` in the data directory, rotated at 10MB with 3 backups.
///
/// Safe to call more than once; only the first call installs a subscriber.
/// If the data directory cannot be created, initialization is skipped and
/// the application runs without logging.
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let writer = LogWriter::new(data_dir.join("unisono.log"));

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

/// Resolves the data directory for log files.
///
/// Uses `$XDG_DATA_HOME/unisono` when set, falling back to
/// `$HOME/.local/share/unisono`, then to a relative `.unisono` directory.
fn data_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
        if !xdg.is_empty() {
            return PathBuf::from(xdg).join("unisono");
        }
    }
    if let Ok(home) = std::env::var("HOME") {
        if !home.is_empty() {
            return PathBuf::from(home)
                .join(".local")
                .join("share")
                .join("unisono");
        }
    }
    PathBuf::from(".unisono")
}
