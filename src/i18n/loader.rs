//! Translation loader and i18n management
//!
//! This module provides the translation store: loading language tables,
//! language detection, and key lookup with locale fallback.

use std::collections::HashMap;
use std::path::Path;
use serde_json::Value;
use tokio::fs;
use tracing::{debug, error, info, warn};
use crate::config::{I18nConfig, MissingKeyPolicy};
use crate::utils::errors::{I18nError, Result};
use crate::utils::logging;
use super::format::{format_message, ListFormatter, TranslationParams};
use super::language::Language;

/// The fallback locale, by code or by position in the language list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackLocale {
    Code(String),
    Index(usize),
}

impl From<&str> for FallbackLocale {
    fn from(code: &str) -> Self {
        FallbackLocale::Code(code.to_string())
    }
}

impl From<String> for FallbackLocale {
    fn from(code: String) -> Self {
        FallbackLocale::Code(code)
    }
}

impl From<usize> for FallbackLocale {
    fn from(index: usize) -> Self {
        FallbackLocale::Index(index)
    }
}

/// Flags controlling a single lookup
#[derive(Debug, Clone)]
pub struct LookupOptions {
    /// How list-valued parameters are rendered; `None` means [`ListFormatter::And`]
    pub list_formatter: Option<ListFormatter>,
    /// When false the tables are skipped and the key itself is formatted
    pub use_translations: bool,
    /// When false a miss in the requested locale is an error
    pub should_fallback: bool,
}

impl Default for LookupOptions {
    fn default() -> Self {
        Self {
            list_formatter: None,
            use_translations: true,
            should_fallback: true,
        }
    }
}

impl LookupOptions {
    pub fn with_list_formatter(mut self, formatter: ListFormatter) -> Self {
        self.list_formatter = Some(formatter);
        self
    }

    pub fn use_translations(mut self, enabled: bool) -> Self {
        self.use_translations = enabled;
        self
    }

    pub fn should_fallback(mut self, enabled: bool) -> Self {
        self.should_fallback = enabled;
        self
    }
}

/// Main translation store
#[derive(Debug, Clone)]
pub struct I18n {
    /// Loaded languages by code
    languages: HashMap<String, Language>,
    /// Language codes in the order they were given
    order: Vec<String>,
    /// Fallback language code
    fallback: String,
    missing_key_policy: MissingKeyPolicy,
}

impl I18n {
    /// Create a store from a list of languages and a fallback locale
    pub fn new(languages: Vec<Language>, fallback: impl Into<FallbackLocale>) -> Result<Self> {
        if languages.is_empty() {
            return Err(I18nError::Config(
                "At least one language is required".to_string()
            ));
        }

        let order: Vec<String> = languages.iter().map(|l| l.code().to_string()).collect();

        let fallback = match fallback.into() {
            FallbackLocale::Code(code) => code,
            FallbackLocale::Index(index) => order.get(index).cloned().ok_or_else(|| {
                I18nError::Config(format!(
                    "Fallback index {} is out of range for {} languages",
                    index,
                    order.len()
                ))
            })?,
        };

        let mut map = HashMap::with_capacity(languages.len());
        for language in languages {
            let code = language.code().to_string();
            if map.insert(code.clone(), language).is_some() {
                return Err(I18nError::Config(format!("Duplicate language code: {}", code)));
            }
        }

        if !map.contains_key(&fallback) {
            return Err(I18nError::Config(format!(
                "Fallback language '{}' is not among the loaded languages",
                fallback
            )));
        }

        Ok(Self {
            languages: map,
            order,
            fallback,
            missing_key_policy: MissingKeyPolicy::default(),
        })
    }

    /// Set the policy applied when both the requested and fallback locale lack a key
    pub fn with_missing_key_policy(mut self, policy: MissingKeyPolicy) -> Self {
        self.missing_key_policy = policy;
        self
    }

    /// Load all translation files listed in the configuration
    pub async fn load(config: &I18nConfig) -> Result<Self> {
        let translations_dir = Path::new(&config.translations_dir);

        if !translations_dir.exists() {
            return Err(I18nError::Config(format!(
                "Translations directory not found: {}",
                translations_dir.display()
            )));
        }

        let mut languages = Vec::with_capacity(config.supported_languages.len());
        for lang_code in &config.supported_languages {
            let file_path = translations_dir.join(format!("{}.json", lang_code));
            let is_fallback = lang_code == &config.fallback_language;

            if !file_path.exists() {
                warn!("Translation file not found: {}", file_path.display());
                if is_fallback {
                    return Err(I18nError::Config(format!(
                        "Fallback language translation file not found: {}",
                        file_path.display()
                    )));
                }
                continue;
            }

            match Self::load_language_file(&file_path, lang_code).await {
                Ok(language) => {
                    info!("Loaded translations for language: {}", lang_code);
                    languages.push(language);
                }
                Err(e) => {
                    error!("Failed to load translations for {}: {}", lang_code, e);
                    if is_fallback {
                        return Err(I18nError::Config(format!(
                            "Failed to load fallback language translations: {}",
                            e
                        )));
                    }
                }
            }
        }

        Ok(Self::new(languages, config.fallback_language.as_str())?
            .with_missing_key_policy(config.missing_key_policy))
    }

    /// Load a single language file
    async fn load_language_file(file_path: &Path, lang_code: &str) -> Result<Language> {
        let content = fs::read_to_string(file_path).await?;
        let value: Value = serde_json::from_str(&content)?;
        let language = Language::from_json(lang_code, &value)?;

        debug!("Loaded {} translation keys for {}", language.len(), lang_code);
        Ok(language)
    }

    /// Look up and format a translation.
    ///
    /// Resolution order: `(locale, key)`, then `(fallback, key)` when
    /// `should_fallback` is set, then the missing-key policy.
    pub fn get_text(
        &self,
        key: &str,
        locale: &str,
        options: &LookupOptions,
        params: &TranslationParams,
    ) -> Result<String> {
        let formatter = options.list_formatter.as_ref();
        let requested = self.languages.get(locale);

        if !options.use_translations {
            return Ok(format_message(key, params, formatter, requested));
        }

        if let Some(template) = requested.and_then(|l| l.get(key)) {
            return Ok(format_message(template, params, formatter, requested));
        }

        if !options.should_fallback {
            return Err(I18nError::MissingTranslation {
                locale: locale.to_string(),
                key: key.to_string(),
            });
        }

        let fallback = self.languages.get(&self.fallback);
        if let Some(template) = fallback.and_then(|l| l.get(key)) {
            logging::log_fallback_lookup(key, locale, &self.fallback);
            return Ok(format_message(template, params, formatter, fallback));
        }

        logging::log_missing_key(key, locale, &self.fallback);
        match self.missing_key_policy {
            MissingKeyPolicy::ReturnKey => Ok(key.to_string()),
            MissingKeyPolicy::Error => Err(I18nError::FallbackExhausted {
                locale: locale.to_string(),
                fallback: self.fallback.clone(),
                key: key.to_string(),
            }),
        }
    }

    /// Check if a language is loaded
    pub fn is_language_supported(&self, lang: &str) -> bool {
        self.languages.contains_key(lang)
    }

    /// Detect user language from a Telegram language code.
    ///
    /// The full code is tried first (`pt-BR`), then its base language (`pt`).
    /// Matching ignores case and treats `_` like `-`.
    pub fn detect_user_language(&self, telegram_lang: Option<&str>) -> String {
        if let Some(lang) = telegram_lang {
            if let Some(code) = self.find_code(lang) {
                return code.to_string();
            }

            // "en-US" -> "en"
            let base = lang.split(['-', '_']).next().unwrap_or(lang);
            if let Some(code) = self.find_code(base) {
                return code.to_string();
            }
        }

        self.fallback.clone()
    }

    /// Loaded code equal to `lang`, ignoring case and `-`/`_` differences
    fn find_code(&self, lang: &str) -> Option<&str> {
        let wanted = lang.replace('_', "-");
        self.order
            .iter()
            .find(|code| code.replace('_', "-").eq_ignore_ascii_case(&wanted))
            .map(String::as_str)
    }

    /// Get a loaded language by code
    pub fn language(&self, code: &str) -> Option<&Language> {
        self.languages.get(code)
    }

    /// Loaded languages, in the order they were given
    pub fn languages(&self) -> impl Iterator<Item = &Language> {
        self.order.iter().filter_map(|code| self.languages.get(code))
    }

    /// Get fallback language code
    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    pub fn missing_key_policy(&self) -> MissingKeyPolicy {
        self.missing_key_policy
    }

    /// Get translation statistics
    pub fn get_stats(&self) -> TranslationStats {
        let mut stats = TranslationStats {
            languages: Vec::new(),
            total_keys: 0,
        };

        for language in self.languages() {
            let key_count = language.message_count();
            stats.languages.push(LanguageStats {
                code: language.code().to_string(),
                key_count,
            });
            if language.code() == self.fallback {
                stats.total_keys = key_count;
            }
        }

        stats
    }
}

/// Translation statistics
#[derive(Debug, Clone)]
pub struct TranslationStats {
    pub languages: Vec<LanguageStats>,
    /// Key count of the fallback language
    pub total_keys: usize,
}

/// Language-specific statistics
#[derive(Debug, Clone)]
pub struct LanguageStats {
    pub code: String,
    pub key_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn language(code: &str, pairs: &[(&str, &str)]) -> Language {
        let table = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Language::new(code, code, table)
    }

    fn create_test_i18n() -> I18n {
        I18n::new(
            vec![
                language("en", &[("greet", "Hello"), ("welcome", "Welcome, {name}!")]),
                language("fr", &[("welcome", "Bienvenue, {name} !")]),
            ],
            "en",
        )
        .expect("valid languages")
    }

    #[test]
    fn test_lookup_in_requested_locale() {
        let i18n = create_test_i18n();
        let mut params = TranslationParams::new();
        params.insert("name".to_string(), "Zoé".into());

        let text = i18n.get_text("welcome", "fr", &LookupOptions::default(), &params);
        assert_eq!(text.unwrap(), "Bienvenue, Zoé !");
    }

    #[test]
    fn test_lookup_fallback_chain() {
        let i18n = create_test_i18n();
        let params = TranslationParams::new();

        let text = i18n.get_text("greet", "fr", &LookupOptions::default(), &params);
        assert_eq!(text.unwrap(), "Hello");

        let strict = LookupOptions::default().should_fallback(false);
        assert_matches!(
            i18n.get_text("greet", "fr", &strict, &params),
            Err(I18nError::MissingTranslation { locale, key }) if locale == "fr" && key == "greet"
        );
    }

    #[test]
    fn test_unknown_locale_uses_fallback() {
        let i18n = create_test_i18n();
        let text = i18n.get_text("greet", "xx", &LookupOptions::default(), &TranslationParams::new());
        assert_eq!(text.unwrap(), "Hello");
    }

    #[test]
    fn test_missing_key_policy() {
        let params = TranslationParams::new();
        let options = LookupOptions::default();

        let strict = create_test_i18n();
        assert_matches!(
            strict.get_text("nope", "fr", &options, &params),
            Err(I18nError::FallbackExhausted { fallback, .. }) if fallback == "en"
        );

        let lenient = create_test_i18n().with_missing_key_policy(MissingKeyPolicy::ReturnKey);
        assert_eq!(lenient.get_text("nope", "fr", &options, &params).unwrap(), "nope");
    }

    #[test]
    fn test_use_translations_false_formats_key() {
        let i18n = create_test_i18n();
        let mut params = TranslationParams::new();
        params.insert("name".to_string(), "Ana".into());

        let options = LookupOptions::default().use_translations(false);
        let text = i18n.get_text("Hi {name}", "fr", &options, &params);
        assert_eq!(text.unwrap(), "Hi Ana");

        let text = i18n.get_text("greet", "fr", &options, &TranslationParams::new());
        assert_eq!(text.unwrap(), "greet");
    }

    #[test]
    fn test_fallback_by_index() {
        let i18n = I18n::new(vec![language("en", &[]), language("ru", &[])], 1usize).unwrap();
        assert_eq!(i18n.fallback(), "ru");

        let err = I18n::new(vec![language("en", &[])], 3usize);
        assert_matches!(err, Err(I18nError::Config(_)));
    }

    #[test]
    fn test_rejects_bad_language_sets() {
        assert!(I18n::new(vec![], "en").is_err());
        assert!(I18n::new(vec![language("en", &[]), language("en", &[])], "en").is_err());
        assert!(I18n::new(vec![language("en", &[])], "de").is_err());
    }

    #[test]
    fn test_language_detection() {
        let i18n = create_test_i18n();

        assert_eq!(i18n.detect_user_language(Some("en-US")), "en");
        assert_eq!(i18n.detect_user_language(Some("fr_CA")), "fr");
        assert_eq!(i18n.detect_user_language(Some("ru")), "en"); // fallback
        assert_eq!(i18n.detect_user_language(None), "en"); // fallback
        assert_eq!(i18n.detect_user_language(Some("EN-us")), "en");
    }

    #[test]
    fn test_language_detection_prefers_regional_tables() {
        let i18n = I18n::new(
            vec![
                language("en", &[]),
                language("pt-BR", &[]),
                language("pt", &[]),
                language("zh-hans", &[]),
            ],
            "en",
        )
        .unwrap();

        assert_eq!(i18n.detect_user_language(Some("pt-BR")), "pt-BR");
        assert_eq!(i18n.detect_user_language(Some("pt_br")), "pt-BR");
        assert_eq!(i18n.detect_user_language(Some("pt-PT")), "pt");
        assert_eq!(i18n.detect_user_language(Some("zh-hans")), "zh-hans");
        assert_eq!(i18n.detect_user_language(Some("ZH-Hans")), "zh-hans");
        assert_eq!(i18n.detect_user_language(Some("zh-hant")), "en");
    }

    #[test]
    fn test_stats() {
        let stats = create_test_i18n().get_stats();

        assert_eq!(stats.total_keys, 2);
        assert_eq!(stats.languages.len(), 2);
        assert_eq!(stats.languages[0].code, "en");
        assert_eq!(stats.languages[1].key_count, 1);
    }

    #[test]
    fn test_stats_skip_reserved_keys() {
        let i18n = I18n::new(
            vec![language("en", &[("greet", "Hello"), ("_list.and", "and"), ("_list.or", "or")])],
            "en",
        )
        .unwrap();
        let stats = i18n.get_stats();

        assert_eq!(stats.total_keys, 1);
        assert_eq!(stats.languages[0].key_count, 1);
    }
}
