//! Statistics command handler

use crate::i18n::I18nExtension;
use crate::tr;
use crate::utils::errors::Result;

/// Reply to /stats
pub fn render_stats(i18n: &I18nExtension) -> Result<String> {
    let stats = i18n.i18n().get_stats();
    let languages: Vec<String> = stats
        .languages
        .iter()
        .map(|l| format!("{} ({})", l.code, l.key_count))
        .collect();

    tr!(
        "commands.stats.summary",
        count = stats.languages.len(),
        languages = languages,
        total = stats.total_keys,
    )
}
