//! Start and language command handlers

use crate::i18n::I18nExtension;
use crate::tr;
use crate::utils::errors::Result;

/// Reply to /start
pub fn render_start(first_name: &str) -> Result<String> {
    tr!("commands.start.welcome", name = first_name)
}

/// Reply to /language
pub fn render_language(i18n: &I18nExtension) -> Result<String> {
    let code = i18n.get_current_locale();
    let name = i18n
        .i18n()
        .language(&code)
        .map(|l| l.name().to_string())
        .unwrap_or_else(|| code.clone());

    tr!("commands.language.current", language = name, code = code)
}
