//! Internationalization module
//!
//! This module handles multi-language support for bots.
//! It provides translation loading, language detection, message formatting,
//! per-invocation locale context and the process-wide default instance.

pub mod context;
pub mod extension;
pub mod format;
pub mod language;
pub mod loader;

// Re-export commonly used i18n components
pub use extension::{I18nExtension, LOCALE_HOOK};
pub use format::{FormatArg, ListFormatter, TranslationParams};
pub use language::Language;
pub use loader::{FallbackLocale, I18n, LanguageStats, LookupOptions, TranslationStats};
