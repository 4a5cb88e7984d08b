//! Locale-set resolution.
//!
//! Expands the raw locale argument of a command into the concrete ordered
//! list of locales the command operates on. The full locale list is supplied
//! by the caller through a closure so this module never touches the
//! locale-data backend directly.

use crate::error::TranslationError;
use crate::locales::validate_locale;
use regex::Regex;
use std::sync::OnceLock;

// Compound tokens may pack several locales with `,`, `:` or `+`,
// optionally padded with whitespace: "en, fr:pt-BR + de".
static DELIMITER_REGEX: OnceLock<Regex> = OnceLock::new();

fn delimiter_regex() -> &'static Regex {
    DELIMITER_REGEX
        .get_or_init(|| Regex::new(r"\s*[+:,]\s*").expect("delimiter regex is valid"))
}

/// Resolves raw locale arguments against a base locale.
#[derive(Debug, Clone)]
pub struct LocaleResolver {
    base_locale: String,
}

impl LocaleResolver {
    pub fn new(base_locale: impl Into<String>) -> Self {
        Self {
            base_locale: base_locale.into(),
        }
    }

    /// The configured base locale.
    pub fn base_locale(&self) -> &str {
        &self.base_locale
    }

    /// Resolve a raw locale argument into an ordered locale set.
    ///
    /// The argument is the already-flattened sequence of raw tokens from the
    /// command line. Exactly `["all"]`, an empty sequence, or a sequence of
    /// blank tokens resolves to `enumerate_all()` verbatim (enumeration is
    /// trusted, no re-validation). Anything else is split on `,`/`:`/`+`
    /// delimiters, the literal token "base" is mapped to the base locale,
    /// and every resulting token is validated; the first invalid token
    /// aborts resolution.
    ///
    /// Duplicate tokens are preserved in order. Callers that need a unique
    /// set must dedupe themselves.
    pub fn resolve<F>(
        &self,
        raw: &[String],
        enumerate_all: F,
    ) -> Result<Vec<String>, TranslationError>
    where
        F: FnOnce() -> Vec<String>,
    {
        let wants_all = raw.iter().all(|token| token.trim().is_empty())
            || (raw.len() == 1 && raw[0].trim() == "all");

        let locales = if wants_all {
            enumerate_all()
        } else {
            let mut locales = Vec::new();
            for token in raw {
                for part in delimiter_regex().split(token.trim()) {
                    if part.is_empty() {
                        continue;
                    }
                    if part == "base" {
                        locales.push(self.base_locale.clone());
                    } else {
                        locales.push(part.to_string());
                    }
                }
            }
            for locale in &locales {
                validate_locale(locale)?;
            }
            locales
        };

        tracing::debug!("locales for the command are {:?}", locales);
        Ok(locales)
    }

    /// Resolve a single-locale argument.
    ///
    /// Blank, absent, or the literal "base" yields the base locale; any other
    /// value passes through unchanged. No grammar validation is applied here;
    /// callers validate if they need to.
    pub fn resolve_single(&self, raw: Option<&str>) -> String {
        match raw {
            Some(value) if !value.trim().is_empty() && value != "base" => value.to_string(),
            _ => self.base_locale.clone(),
        }
    }
}
