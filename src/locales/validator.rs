//! Syntactic validation of locale identifiers.
//!
//! A locale token must start with an ASCII word character and continue with
//! word characters, hyphens, underscores, or dots ("en", "pt-BR",
//! "zh_Hant.yml-style" are all syntactically fine). Case is preserved, never
//! folded; validation is purely syntactic and says nothing about whether the
//! locale actually exists in the project.

use crate::error::TranslationError;
use regex::Regex;
use std::sync::OnceLock;

// Cached for performance, same pattern as other hot-path regexes
static LOCALE_REGEX: OnceLock<Regex> = OnceLock::new();

fn locale_regex() -> &'static Regex {
    LOCALE_REGEX.get_or_init(|| {
        Regex::new(r"\A[0-9A-Za-z_][0-9A-Za-z_.\-]*\z").expect("locale grammar regex is valid")
    })
}

/// Validate a single locale token against the locale grammar.
///
/// # Returns
/// * `Ok(())` if the token matches the grammar
/// * `Err(TranslationError::InvalidLocale)` carrying the offending token
pub fn validate_locale(locale: &str) -> Result<(), TranslationError> {
    if locale_regex().is_match(locale) {
        Ok(())
    } else {
        Err(TranslationError::InvalidLocale(locale.to_string()))
    }
}
