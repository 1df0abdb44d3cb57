//! Single-locale translation table

use std::collections::HashMap;
use serde_json::{Map, Value};
use crate::utils::errors::{I18nError, Result};

/// Top-level JSON key holding a language's display name
const NAME_KEY: &str = "_name";

/// Translations for one locale, keyed by (possibly dotted) translation key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    name: String,
    code: String,
    translations: HashMap<String, String>,
}

impl Language {
    /// Create a language from an already flat key -> template table
    pub fn new(
        name: impl Into<String>,
        code: impl Into<String>,
        translations: HashMap<String, String>,
    ) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            translations,
        }
    }

    /// Build a language from a JSON object.
    ///
    /// Nested objects are flattened with `.` so `{"commands": {"start": "Hi"}}`
    /// yields the key `commands.start`. Non-string leaves are stored in their
    /// JSON text form. A top-level `"_name"` string becomes the display name,
    /// otherwise the code is used.
    pub fn from_json(code: impl Into<String>, value: &Value) -> Result<Self> {
        let code = code.into();
        let Value::Object(map) = value else {
            return Err(I18nError::Config(format!(
                "Invalid translation file format for {}",
                code
            )));
        };

        let name = map
            .get(NAME_KEY)
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| code.clone());

        let mut translations = HashMap::new();
        flatten_into(&mut translations, None, map);
        translations.remove(NAME_KEY);

        Ok(Self {
            name,
            code,
            translations,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// Get the raw template for a key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.translations.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.translations.contains_key(key)
    }

    /// Number of messages, not counting reserved `_`-prefixed keys
    pub fn message_count(&self) -> usize {
        self.translations.keys().filter(|k| !k.starts_with('_')).count()
    }

    pub fn len(&self) -> usize {
        self.translations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.translations.keys().map(String::as_str)
    }
}

fn flatten_into(out: &mut HashMap<String, String>, prefix: Option<&str>, map: &Map<String, Value>) {
    for (key, value) in map {
        let full_key = match prefix {
            Some(prefix) => format!("{}.{}", prefix, key),
            None => key.clone(),
        };

        match value {
            Value::Object(nested) => flatten_into(out, Some(&full_key), nested),
            Value::String(s) => {
                out.insert(full_key, s.clone());
            }
            other => {
                out.insert(full_key, other.to_string());
            }
        }
    }
}
