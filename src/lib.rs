//! bot18n
//!
//! Internationalization helpers for Telegram bots built on teloxide.
//! This library provides translation tables with locale fallback, a
//! per-invocation "current locale" carried in task-local storage, and a
//! process-wide default instance for contextual lookups via [`tr!`].

pub mod config;
pub mod handlers;
pub mod i18n;
pub mod middleware;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{I18nError, Result};

// Re-export main components for easy access
pub use i18n::{I18n, I18nExtension, Language, LookupOptions};
pub use middleware::InvocationPipeline;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
