//! User-facing message catalog with `%{name}` interpolation.
//!
//! Error text shown to the operator is looked up here by error kind rather
//! than formatted inline, so the wording lives in one place and can be
//! localized without touching the core. Templates use the same `%{name}`
//! placeholder syntax as i18n interpolation, which keeps them consistent with
//! the translation prompts.

use crate::error::TranslationError;

/// All user-facing message templates for one catalog language.
///
/// Placeholders are documented per field and substituted with [`interpolate`].
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    /// Placeholders: `%{invalid}`
    pub invalid_locale: &'static str,

    /// Placeholders: `%{component}`, `%{hint}`
    pub missing_dependency: &'static str,

    /// Placeholders: `%{message}`
    pub provider_failure: &'static str,

    /// No placeholders
    pub no_results: &'static str,
}

/// English catalog (the default).
pub const ENGLISH_MESSAGES: MessageCatalog = MessageCatalog {
    invalid_locale: "Invalid locale: %{invalid}",
    missing_dependency: "Cannot construct %{component}: %{hint}",
    provider_failure: "Translation failed: %{message}",
    no_results: "The translation backend returned no results",
};

/// Substitute `%{name}` placeholders in a template.
///
/// Unknown placeholders are left in place so a missing variable is visible
/// rather than silently dropped. A literal `%%{` escapes to `%{`.
pub fn interpolate(template: &str, vars: &[(&str, &str)]) -> String {
    // Hide escaped sequences before substituting so `%%{from}` is not
    // treated as a placeholder. U+0000 cannot appear in a valid template.
    let mut out = template.replace("%%{", "\u{0}{");
    for (name, value) in vars {
        out = out.replace(&format!("%{{{}}}", name), value);
    }
    out.replace("\u{0}{", "%{")
}

/// Render the catalog text for an error.
pub fn user_message(catalog: &MessageCatalog, err: &TranslationError) -> String {
    match err {
        TranslationError::InvalidLocale(token) => {
            interpolate(catalog.invalid_locale, &[("invalid", token)])
        }
        TranslationError::MissingDependency { component, hint } => interpolate(
            catalog.missing_dependency,
            &[("component", component), ("hint", hint)],
        ),
        TranslationError::Provider { message, .. } => {
            interpolate(catalog.provider_failure, &[("message", message)])
        }
        TranslationError::NoResults => catalog.no_results.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Interpolation Tests ====================

    #[test]
    fn test_interpolate_single_placeholder() {
        let result = interpolate("Invalid locale: %{invalid}", &[("invalid", "xx!")]);
        assert_eq!(result, "Invalid locale: xx!");
    }

    #[test]
    fn test_interpolate_multiple_placeholders() {
        let result = interpolate(
            "from %{from} to %{to}",
            &[("from", "en"), ("to", "pt-BR")],
        );
        assert_eq!(result, "from en to pt-BR");
    }

    #[test]
    fn test_interpolate_repeated_placeholder() {
        let result = interpolate("%{x} and %{x}", &[("x", "a")]);
        assert_eq!(result, "a and a");
    }

    #[test]
    fn test_interpolate_unknown_placeholder_left_in_place() {
        let result = interpolate("hello %{missing}", &[("other", "value")]);
        assert_eq!(result, "hello %{missing}");
    }

    #[test]
    fn test_interpolate_escaped_percent() {
        let result = interpolate("literal %%{from} and %{from}", &[("from", "en")]);
        assert_eq!(result, "literal %{from} and en");
    }

    // ==================== Catalog Rendering Tests ====================

    #[test]
    fn test_user_message_invalid_locale() {
        let err = TranslationError::InvalidLocale("zz^".to_string());
        let text = user_message(&ENGLISH_MESSAGES, &err);
        assert_eq!(text, "Invalid locale: zz^");
    }

    #[test]
    fn test_user_message_missing_dependency() {
        let err = TranslationError::MissingDependency {
            component: "bedrock".to_string(),
            hint: "enable the `bedrock` cargo feature".to_string(),
        };
        let text = user_message(&ENGLISH_MESSAGES, &err);
        assert!(text.contains("bedrock"));
        assert!(text.contains("cargo feature"));
    }

    #[test]
    fn test_user_message_no_results() {
        let text = user_message(&ENGLISH_MESSAGES, &TranslationError::NoResults);
        assert_eq!(text, "The translation backend returned no results");
    }

    #[test]
    fn test_user_message_provider() {
        let err = TranslationError::provider("connection refused");
        let text = user_message(&ENGLISH_MESSAGES, &err);
        assert!(text.contains("connection refused"));
    }
}
