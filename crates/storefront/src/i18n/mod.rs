//! String localization.
//!
//! Pure lookup plus `{{placeholder}}` substitution. Lookup never fails from
//! the caller's perspective: a missing key falls back to the raw key (logged
//! at `warn`), and a placeholder with no matching variable is substituted
//! with the empty string. All three locales behave identically for the same
//! key and variables.

mod strings;

use std::sync::LazyLock;

use megashop_core::Locale;
use regex::Regex;

/// Regex for matching `{{placeholder}}` markers in templates.
static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{(.*?)\}\}").expect("Invalid regex"));

/// Translate `key` for `locale` without variables.
#[must_use]
pub fn translate(locale: Locale, key: &str) -> String {
    translate_with(locale, key, &[])
}

/// Translate `key` for `locale`, substituting `{{name}}` placeholders from
/// `vars` (name-value pairs). Unmatched placeholders become empty strings;
/// an unknown key is returned as-is.
#[must_use]
pub fn translate_with(locale: Locale, key: &str, vars: &[(&str, &str)]) -> String {
    let Some(template) = strings::table(locale).get(key) else {
        tracing::warn!(%key, %locale, "missing translation key");
        return key.to_owned();
    };

    PLACEHOLDER_RE
        .replace_all(template, |caps: &regex::Captures<'_>| {
            let name = caps.get(1).map_or("", |m| m.as_str()).trim();
            vars.iter()
                .find(|(var, _)| *var == name)
                .map_or(String::new(), |(_, value)| (*value).to_owned())
        })
        .into_owned()
}
