//! Logging Infrastructure
//!
//! Structured logging setup with support for both development and production environments.

use tracing_subscriber::EnvFilter;

/// Initialize the logger
pub fn init_logger() {
    init_logger_with_level(None);
}

/// Initialize the logger with a default level
///
/// `RUST_LOG` takes precedence over the supplied default.
pub fn init_logger_with_level(default_level: Option<&str>) {
    let level = default_level.unwrap_or("info");

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false)
        .init();
}
