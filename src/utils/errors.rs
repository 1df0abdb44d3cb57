//! Error handling for bot18n
//!
//! This module defines the main error type used throughout the library
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for bot18n
#[derive(Error, Debug)]
pub enum I18nError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No default i18n instance has been initialized")]
    NoDefaultInstance,

    #[error("Missing translation for key '{key}' in locale '{locale}'")]
    MissingTranslation { locale: String, key: String },

    #[error("Translation key '{key}' not found in locale '{locale}' nor in fallback locale '{fallback}'")]
    FallbackExhausted {
        locale: String,
        fallback: String,
        key: String,
    },

    #[error("No locale scope is active for the current task")]
    NoLocaleScope,

    #[error("Pre-invocation hook conflict: {0}")]
    HookConflict(String),

    #[error("Settings error: {0}")]
    Settings(#[from] config::ConfigError),

    #[error("Telegram API error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for bot18n operations
pub type Result<T> = std::result::Result<T, I18nError>;

impl I18nError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            I18nError::Config(_) => false,
            I18nError::NoDefaultInstance => false,
            I18nError::MissingTranslation { .. } => false,
            I18nError::FallbackExhausted { .. } => false,
            I18nError::NoLocaleScope => false,
            I18nError::HookConflict(_) => false,
            I18nError::Settings(_) => false,
            I18nError::Telegram(_) => true,
            I18nError::Serialization(_) => false,
            I18nError::Io(_) => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            I18nError::Config(_) => ErrorSeverity::Critical,
            I18nError::NoDefaultInstance => ErrorSeverity::Critical,
            I18nError::HookConflict(_) => ErrorSeverity::Critical,
            I18nError::Settings(_) => ErrorSeverity::Critical,
            I18nError::FallbackExhausted { .. } => ErrorSeverity::Error,
            I18nError::MissingTranslation { .. } => ErrorSeverity::Warning,
            I18nError::NoLocaleScope => ErrorSeverity::Error,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_errors_are_not_recoverable() {
        let err = I18nError::MissingTranslation {
            locale: "fr".to_string(),
            key: "greet".to_string(),
        };
        assert!(!err.is_recoverable());
        assert_eq!(err.severity(), ErrorSeverity::Warning);
        assert_eq!(err.to_string(), "Missing translation for key 'greet' in locale 'fr'");
    }

    #[test]
    fn test_configuration_errors_are_critical() {
        assert_eq!(I18nError::NoDefaultInstance.severity(), ErrorSeverity::Critical);
        assert_eq!(I18nError::HookConflict("i18n.locale".into()).severity(), ErrorSeverity::Critical);
        assert_eq!(ErrorSeverity::Critical.to_string(), "CRITICAL");
    }
}
