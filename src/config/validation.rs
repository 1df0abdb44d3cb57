//! Configuration validation module
//!
//! This module provides validation functions for the configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{I18nError, Result};
use super::Settings;

/// Validate all configuration settings
///
/// The bot token is left to `validate_bot_config` so the library can be
/// configured without a running bot.
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_i18n_config(&settings.i18n)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate bot configuration
pub fn validate_bot_config(config: &super::BotConfig) -> Result<()> {
    if config.token.is_empty() {
        return Err(I18nError::Config(
            "Bot token is required".to_string()
        ));
    }

    Ok(())
}

/// Validate internationalization configuration
pub fn validate_i18n_config(config: &super::I18nConfig) -> Result<()> {
    if config.fallback_language.is_empty() {
        return Err(I18nError::Config(
            "Fallback language is required".to_string()
        ));
    }

    if config.supported_languages.is_empty() {
        return Err(I18nError::Config(
            "At least one supported language is required".to_string()
        ));
    }

    if !config.supported_languages.contains(&config.fallback_language) {
        return Err(I18nError::Config(
            "Fallback language must be in supported languages list".to_string()
        ));
    }

    if config.translations_dir.is_empty() {
        return Err(I18nError::Config(
            "Translations directory is required".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(I18nError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(I18nError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_fallback_must_be_supported() {
        let mut settings = Settings::default();
        settings.i18n.fallback_language = "de".to_string();

        assert_matches!(settings.validate(), Err(I18nError::Config(_)));
    }

    #[test]
    fn test_invalid_log_level() {
        let mut settings = Settings::default();
        settings.logging.level = "verbose".to_string();

        assert_matches!(settings.validate(), Err(I18nError::Config(msg)) if msg.contains("verbose"));
    }

    #[test]
    fn test_empty_bot_token_rejected() {
        assert!(validate_bot_config(&Settings::default().bot).is_err());
    }
}
