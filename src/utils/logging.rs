//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for bot18n.

use tracing::{debug, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use crate::config::LoggingConfig;
use crate::utils::errors::Result;

/// Initialize logging based on configuration
///
/// The returned guard must be kept alive for the file writer to flush.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::daily(&config.directory, "bot18n.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
        .init();

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log a lookup that had to use the fallback locale
pub fn log_fallback_lookup(key: &str, locale: &str, fallback: &str) {
    debug!(
        key = key,
        locale = locale,
        fallback = fallback,
        "Translation served from fallback locale"
    );
}

/// Log a lookup that found no translation at all
pub fn log_missing_key(key: &str, locale: &str, fallback: &str) {
    warn!(
        key = key,
        locale = locale,
        fallback = fallback,
        "Translation key not found in any language"
    );
}

/// Log the locale bound for an invocation
pub fn log_locale_bound(locale: &str) {
    debug!(locale = locale, "Current locale bound for invocation");
}
