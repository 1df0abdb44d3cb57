//! Message template formatting
//!
//! Templates use `{name}` placeholders. Placeholders without a matching
//! parameter are left untouched. List-valued parameters are rendered with a
//! [`ListFormatter`].

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, LazyLock};
use regex::{Captures, Regex};
use super::language::Language;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{([A-Za-z0-9_.\-]+)\}").expect("placeholder pattern is valid")
});

/// Language keys holding the conjunction words used by list rendering
pub const LIST_AND_KEY: &str = "_list.and";
pub const LIST_OR_KEY: &str = "_list.or";

/// A single substitution value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatArg {
    Text(String),
    List(Vec<String>),
}

/// Translation parameters for message formatting
pub type TranslationParams = HashMap<String, FormatArg>;

impl From<String> for FormatArg {
    fn from(value: String) -> Self {
        FormatArg::Text(value)
    }
}

impl From<&str> for FormatArg {
    fn from(value: &str) -> Self {
        FormatArg::Text(value.to_string())
    }
}

impl From<&String> for FormatArg {
    fn from(value: &String) -> Self {
        FormatArg::Text(value.clone())
    }
}

impl From<Vec<String>> for FormatArg {
    fn from(value: Vec<String>) -> Self {
        FormatArg::List(value)
    }
}

impl From<Vec<&str>> for FormatArg {
    fn from(value: Vec<&str>) -> Self {
        FormatArg::List(value.into_iter().map(str::to_string).collect())
    }
}

macro_rules! format_arg_from_display {
    ($($t:ty),*) => {
        $(
            impl From<$t> for FormatArg {
                fn from(value: $t) -> Self {
                    FormatArg::Text(value.to_string())
                }
            }
        )*
    };
}

format_arg_from_display!(i32, i64, u32, u64, usize, f64, bool, char);

/// How list-valued parameters are rendered
#[derive(Clone, Default)]
pub enum ListFormatter {
    /// `a, b and c`, using the language's `_list.and` word
    #[default]
    And,
    /// `a, b or c`, using the language's `_list.or` word
    Or,
    /// Items joined with the given separator
    Joined(String),
    /// Caller-supplied rendering
    Custom(Arc<dyn Fn(&[String]) -> String + Send + Sync>),
}

impl fmt::Debug for ListFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListFormatter::And => write!(f, "And"),
            ListFormatter::Or => write!(f, "Or"),
            ListFormatter::Joined(sep) => f.debug_tuple("Joined").field(sep).finish(),
            ListFormatter::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

impl ListFormatter {
    /// Build a custom formatter from a closure
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&[String]) -> String + Send + Sync + 'static,
    {
        ListFormatter::Custom(Arc::new(f))
    }

    /// Render a list of items, taking conjunction words from `language` when present
    pub fn render(&self, items: &[String], language: Option<&Language>) -> String {
        match self {
            ListFormatter::And => join_with_word(items, word(language, LIST_AND_KEY, "and")),
            ListFormatter::Or => join_with_word(items, word(language, LIST_OR_KEY, "or")),
            ListFormatter::Joined(sep) => items.join(sep),
            ListFormatter::Custom(f) => f(items),
        }
    }
}

fn word<'a>(language: Option<&'a Language>, key: &str, default: &'a str) -> &'a str {
    language.and_then(|l| l.get(key)).unwrap_or(default)
}

fn join_with_word(items: &[String], word: &str) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [head @ .., last] => format!("{} {} {}", head.join(", "), word, last),
    }
}

/// Substitute parameters into a template
pub fn format_message(
    template: &str,
    params: &TranslationParams,
    list_formatter: Option<&ListFormatter>,
    language: Option<&Language>,
) -> String {
    if params.is_empty() {
        return template.to_string();
    }

    let default_formatter = ListFormatter::default();
    let formatter = list_formatter.unwrap_or(&default_formatter);

    PLACEHOLDER
        .replace_all(template, |caps: &Captures| match params.get(&caps[1]) {
            Some(FormatArg::Text(text)) => text.clone(),
            Some(FormatArg::List(items)) => formatter.render(items, language),
            None => caps[0].to_string(),
        })
        .into_owned()
}
