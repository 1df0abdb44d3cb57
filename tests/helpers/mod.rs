//! Test helpers module
//!
//! Builders for translation tables and on-disk translation directories.

#![allow(dead_code)]

use std::collections::HashMap;
use std::path::Path;
use bot18n::config::I18nConfig;
use bot18n::i18n::{I18n, Language};

/// Build a language whose display name is its code
pub fn language(code: &str, pairs: &[(&str, &str)]) -> Language {
    let table: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Language::new(code, code, table)
}

/// `{"en": {"greet": "Hello", "welcome": "Welcome, {name}!"}, "fr": {}}` with fallback `en`
pub fn greet_i18n() -> I18n {
    I18n::new(
        vec![
            language("en", &[("greet", "Hello"), ("welcome", "Welcome, {name}!")]),
            language("fr", &[]),
        ],
        "en",
    )
    .expect("valid test languages")
}

/// Single-language store answering `greet` with `text`
pub fn greeting_i18n(text: &str) -> I18n {
    I18n::new(vec![language("en", &[("greet", text)])], "en").expect("valid test languages")
}

/// Three languages with `es` as fallback, so a leaked `en` or `fr` is detectable
pub fn multi_i18n() -> I18n {
    I18n::new(
        vec![
            language("en", &[("greet", "Hello")]),
            language("fr", &[("greet", "Bonjour")]),
            language("es", &[("greet", "Hola")]),
        ],
        "es",
    )
    .expect("valid test languages")
}

/// Write `<code>.json` into `dir`
pub fn write_translation_file(dir: &Path, code: &str, content: &str) {
    std::fs::write(dir.join(format!("{}.json", code)), content)
        .expect("Failed to write translation file");
}

/// I18n config pointing at `dir`
pub fn test_i18n_config(dir: &Path, supported: &[&str], fallback: &str) -> I18nConfig {
    I18nConfig {
        fallback_language: fallback.to_string(),
        supported_languages: supported.iter().map(|s| s.to_string()).collect(),
        translations_dir: dir.display().to_string(),
        ..I18nConfig::default()
    }
}

/// Config for the translations shipped with the demo bot
pub fn shipped_i18n_config() -> I18nConfig {
    I18nConfig {
        translations_dir: concat!(env!("CARGO_MANIFEST_DIR"), "/translations").to_string(),
        ..I18nConfig::default()
    }
}
