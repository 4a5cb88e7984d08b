//! Error taxonomy for locale resolution and translation orchestration.
//!
//! Every failure the core can produce is one of these variants. They carry
//! structured data (the offending token, the raw provider response) so the
//! binary can render localized user-facing text via the message catalog
//! instead of baking English into the core.

use thiserror::Error;

/// Errors produced by locale resolution and translation orchestration.
#[derive(Debug, Error)]
pub enum TranslationError {
    /// A user-supplied locale token failed the locale grammar.
    #[error("invalid locale: {0}")]
    InvalidLocale(String),

    /// A provider was requested whose backing dependency is not compiled in.
    #[error("missing dependency for {component}: {hint}")]
    MissingDependency {
        /// The component that could not be constructed (e.g. "bedrock").
        component: String,
        /// What the operator should do about it.
        hint: String,
    },

    /// The remote translation call failed or returned an undecodable response.
    #[error("translation provider error: {message}")]
    Provider {
        message: String,
        /// Raw response body, kept for diagnosis when decoding fails.
        raw_response: Option<String>,
    },

    /// Orchestration finished with zero translated strings for non-empty input.
    #[error("translation returned no results")]
    NoResults,
}

impl TranslationError {
    /// Build a provider error without a captured response body.
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider {
            message: message.into(),
            raw_response: None,
        }
    }

    /// Build a provider error carrying the raw response for diagnosis.
    pub fn provider_with_response(message: impl Into<String>, raw: impl Into<String>) -> Self {
        Self::Provider {
            message: message.into(),
            raw_response: Some(raw.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_locale_display_mentions_token() {
        let err = TranslationError::InvalidLocale("xx!".to_string());
        assert!(err.to_string().contains("xx!"));
    }

    #[test]
    fn test_provider_error_keeps_raw_response() {
        let err = TranslationError::provider_with_response("bad shape", "not json");
        match err {
            TranslationError::Provider { raw_response, .. } => {
                assert_eq!(raw_response.as_deref(), Some("not json"));
            }
            other => panic!("Expected Provider, got {:?}", other),
        }
    }

    #[test]
    fn test_provider_helper_has_no_response() {
        let err = TranslationError::provider("timeout");
        match err {
            TranslationError::Provider { raw_response, .. } => assert!(raw_response.is_none()),
            other => panic!("Expected Provider, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_dependency_display() {
        let err = TranslationError::MissingDependency {
            component: "bedrock".to_string(),
            hint: "enable the `bedrock` cargo feature".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("bedrock"));
        assert!(text.contains("feature"));
    }
}
