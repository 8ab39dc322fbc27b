// src/log.rs
//
// Tracing setup. The GUI has no console, so it logs to a file under the
// store directory; the CLI logs to stderr.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::consts::{DEBUG_LOG_FILE, DEFAULT_LOG_FILTER};

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into())
}

/// Append log lines to `<store_dir>/debug.log`.
/// Falls back to stderr if the file cannot be opened.
pub fn init_file(store_dir: &Path) {
    let opened = fs::create_dir_all(store_dir).and_then(|_| {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(store_dir.join(DEBUG_LOG_FILE))
    });

    match opened {
        Ok(file) => {
            let _ = tracing_subscriber::registry()
                .with(filter())
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .try_init();
        }
        Err(e) => {
            init_stderr();
            tracing::warn!("log file unavailable in {}: {e}", store_dir.display());
        }
    }
}

/// Log to stderr (CLI).
pub fn init_stderr() {
    let _ = tracing_subscriber::registry()
        .with(filter())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
