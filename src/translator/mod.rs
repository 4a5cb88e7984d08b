//! The translation provider seam.
//!
//! Everything vendor-specific lives behind [`TranslationProvider`]: payload
//! construction, the remote call, and decoding the response back into an
//! ordered list of strings. The orchestrator only ever sees the trait, so
//! alternate backends (other vendors, local models) slot in without touching
//! orchestration logic.

#[cfg(feature = "bedrock")]
mod bedrock;

#[cfg(feature = "bedrock")]
pub use bedrock::{BedrockProvider, DEFAULT_MODEL_ID};

use crate::batch::{ContentKind, TranslationBatch};
use crate::config::Config;
use crate::error::TranslationError;
use async_trait::async_trait;

/// A remote translation backend.
///
/// Implementations must preserve order and count: the returned vector is
/// index-aligned 1:1 with `batch.texts`. A response that cannot be decoded
/// into exactly `batch.len()` strings is a protocol error and must surface
/// as [`TranslationError::Provider`] carrying the raw response.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    async fn translate(&self, batch: &TranslationBatch) -> Result<Vec<String>, TranslationError>;
}

/// Default instruction template for plain-text batches.
///
/// `%{from}` and `%{to}` are filled with the locale pair per batch. The
/// doubled `%%{` renders as a literal `%{` so the instruction can talk about
/// interpolation variables without consuming them.
pub const DEFAULT_PLAIN_INSTRUCTION: &str = "You are a professional translator that translates content from the %{from} locale \
to the %{to} locale in an i18n locale array. \
The array has a structured format and contains multiple strings. Your task is to translate \
each of these strings and create a new array with the translated strings. Please return only \
an array with the translated values and nothing else. \
Variables (starting with %%{ and ending with }) must not be changed under any circumstance. \
Keep in mind the context of all the strings for a more accurate translation.";

/// Default instruction template for markup-bearing batches.
pub const DEFAULT_HTML_INSTRUCTION: &str = "You are a professional translator that translates content from the %{from} locale \
to the %{to} locale in an i18n locale array. \
The array has a structured format and contains multiple strings. Your task is to translate \
each of these strings and create a new array with the translated strings. Please return only \
an array with the translated values and nothing else. \
HTML markups (enclosed in < and > characters) must not be changed under any circumstance. \
Variables (starting with %%{ and ending with }) must not be changed under any circumstance. \
Keep in mind the context of all the strings for a more accurate translation.";

/// The built-in instruction template for a content kind.
pub fn default_instruction(kind: ContentKind) -> &'static str {
    match kind {
        ContentKind::Plain => DEFAULT_PLAIN_INSTRUCTION,
        ContentKind::Html => DEFAULT_HTML_INSTRUCTION,
    }
}

/// Construct the configured provider, or fail with a structured
/// missing-dependency error when its backend is not compiled in.
pub fn provider_from_config(
    config: &Config,
) -> Result<Box<dyn TranslationProvider>, TranslationError> {
    #[cfg(feature = "bedrock")]
    {
        Ok(Box::new(BedrockProvider::new(config)))
    }

    #[cfg(not(feature = "bedrock"))]
    {
        let _ = config;
        Err(TranslationError::MissingDependency {
            component: "bedrock".to_string(),
            hint: "build with the `bedrock` cargo feature to use this provider".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::interpolate;

    #[test]
    fn test_default_instruction_selects_by_kind() {
        assert!(!default_instruction(ContentKind::Plain).contains("HTML"));
        assert!(default_instruction(ContentKind::Html).contains("HTML"));
    }

    #[test]
    fn test_instruction_templates_carry_locale_placeholders() {
        for kind in [ContentKind::Plain, ContentKind::Html] {
            let template = default_instruction(kind);
            assert!(template.contains("%{from}"));
            assert!(template.contains("%{to}"));
        }
    }

    #[test]
    fn test_instruction_interpolates_locale_pair() {
        let text = interpolate(
            DEFAULT_HTML_INSTRUCTION,
            &[("from", "en"), ("to", "pt-BR")],
        );
        assert!(text.contains("from the en locale"));
        assert!(text.contains("to the pt-BR locale"));
        // The escaped variable example survives as a literal %{
        assert!(text.contains("starting with %{ and ending with }"));
        assert!(!text.contains("%%{"));
    }

    #[test]
    fn test_instructions_demand_array_only_output() {
        for kind in [ContentKind::Plain, ContentKind::Html] {
            let template = default_instruction(kind);
            assert!(template.contains("nothing else"));
        }
    }
}
