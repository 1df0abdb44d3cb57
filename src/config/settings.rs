//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub bot: BotConfig,
    pub i18n: I18nConfig,
    pub logging: LoggingConfig,
}

/// Telegram bot configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BotConfig {
    pub token: String,
}

/// What a lookup returns when neither the requested nor the fallback locale has the key
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingKeyPolicy {
    /// Fail with `I18nError::FallbackExhausted`
    #[default]
    Error,
    /// Return the raw key text
    ReturnKey,
}

/// Internationalization configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct I18nConfig {
    pub fallback_language: String,
    pub supported_languages: Vec<String>,
    #[serde(default = "default_translations_dir")]
    pub translations_dir: String,
    #[serde(default)]
    pub missing_key_policy: MissingKeyPolicy,
}

fn default_translations_dir() -> String {
    "translations".to_string()
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub directory: String,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("BOT18N").separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::I18nError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bot: BotConfig::default(),
            i18n: I18nConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
                directory: "logs".to_string(),
            },
        }
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            fallback_language: "en".to_string(),
            supported_languages: vec!["en".to_string(), "ru".to_string()],
            translations_dir: default_translations_dir(),
            missing_key_policy: MissingKeyPolicy::Error,
        }
    }
}
