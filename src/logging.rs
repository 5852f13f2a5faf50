//! File-backed tracing setup for the terminal frontend.

use std::io;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber, writing to `path`.
///
/// Logs go to a file so output does not interfere with the TUI. Filtering
/// follows `RUST_LOG` and defaults to `info`. Fails if the file cannot be
/// created or a global subscriber is already installed.
pub fn init_file_logging(path: &Path) -> io::Result<()> {
    let log_file = std::fs::File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}
