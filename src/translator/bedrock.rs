//! Reference provider: Anthropic models via the Bedrock InvokeModel REST API.
//!
//! Each batch becomes one invoke call: the JSON-encoded array of source texts
//! is the single user message, and the locale-pair-aware instruction is the
//! system prompt. The model is expected to reply with a text block that is
//! itself a JSON array of translated strings.

use crate::batch::TranslationBatch;
use crate::config::Config;
use crate::error::TranslationError;
use crate::messages::interpolate;
use crate::retry::{with_retry_if, RetryConfig};
use crate::translator::{default_instruction, TranslationProvider};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Model used when no override is configured.
pub const DEFAULT_MODEL_ID: &str = "us.anthropic.claude-3-5-sonnet-20241022-v2:0";

const ANTHROPIC_VERSION: &str = "bedrock-2023-05-31";

/// Bedrock InvokeModel request body (Anthropic messages format)
#[derive(Debug, Serialize)]
struct InvokeRequest {
    anthropic_version: &'static str,
    max_tokens: u32,
    system: String,
    messages: Vec<Message>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct InvokeResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    text: String,
}

/// Translation provider backed by the Bedrock runtime.
///
/// The HTTP client is built once at construction and reused across batches.
pub struct BedrockProvider {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    model_id: String,
    system_prompt_override: Option<String>,
    max_tokens: u32,
    retry: RetryConfig,
}

impl BedrockProvider {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: config.bedrock_endpoint.trim_end_matches('/').to_string(),
            api_key: config.bedrock_api_key.clone(),
            model_id: config
                .bedrock_model_id
                .clone()
                .unwrap_or_else(|| DEFAULT_MODEL_ID.to_string()),
            system_prompt_override: config.bedrock_system_prompt.clone(),
            max_tokens: config.max_tokens,
            retry: RetryConfig::api_call(),
        }
    }

    /// Override the retry policy (mainly for tests).
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// The instruction sent as the system prompt for a batch.
    ///
    /// The configured override wins over the built-in per-kind template;
    /// either way `%{from}`/`%{to}` are filled with the batch's locale pair.
    fn system_prompt(&self, batch: &TranslationBatch) -> String {
        let template = self
            .system_prompt_override
            .as_deref()
            .unwrap_or_else(|| default_instruction(batch.kind));
        interpolate(template, &[("from", &batch.from), ("to", &batch.to)])
    }

    async fn invoke(&self, batch: &TranslationBatch) -> Result<String, TranslationError> {
        let payload = serde_json::to_string(&batch.texts).map_err(|e| {
            TranslationError::provider(format!("Failed to encode batch as JSON: {}", e))
        })?;

        let request = InvokeRequest {
            anthropic_version: ANTHROPIC_VERSION,
            max_tokens: self.max_tokens,
            system: self.system_prompt(batch),
            messages: vec![Message {
                role: "user".to_string(),
                content: payload,
            }],
        };

        let url = format!("{}/model/{}/invoke", self.endpoint, self.model_id);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                TranslationError::provider(format!("Failed to send Bedrock request: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
            return Err(TranslationError::provider_with_response(
                format!("Bedrock API error ({}): {}", status, body),
                body.clone(),
            ));
        }

        let raw = response.text().await.map_err(|e| {
            TranslationError::provider(format!("Failed to read Bedrock response: {}", e))
        })?;

        let decoded: InvokeResponse = serde_json::from_str(&raw).map_err(|e| {
            TranslationError::provider_with_response(
                format!("Failed to parse Bedrock response: {}", e),
                raw.clone(),
            )
        })?;

        decoded
            .content
            .into_iter()
            .next()
            .map(|block| block.text)
            .ok_or_else(|| {
                TranslationError::provider_with_response(
                    "Bedrock response contained no content blocks",
                    raw,
                )
            })
    }
}

#[async_trait]
impl TranslationProvider for BedrockProvider {
    async fn translate(&self, batch: &TranslationBatch) -> Result<Vec<String>, TranslationError> {
        let operation = format!("Bedrock translation {} -> {}", batch.from, batch.to);
        let text = with_retry_if(
            &self.retry,
            &operation,
            || self.invoke(batch),
            is_retryable_error,
        )
        .await?;

        let translations: Vec<String> = serde_json::from_str(&text).map_err(|e| {
            TranslationError::provider_with_response(
                format!("Model output is not a JSON array of strings: {}", e),
                text.clone(),
            )
        })?;

        if translations.len() != batch.len() {
            return Err(TranslationError::provider_with_response(
                format!(
                    "Expected {} translations, got {}",
                    batch.len(),
                    translations.len()
                ),
                text,
            ));
        }

        Ok(translations)
    }
}

/// Retry 429 and 5xx responses plus network failures; other client errors
/// (400, 401, 403) fail immediately.
///
/// Error format: "Bedrock API error (429 Too Many Requests): ..."
fn is_retryable_error(error: &TranslationError) -> bool {
    let TranslationError::Provider { message, .. } = error else {
        return false;
    };

    if message.contains("Bedrock API error") {
        if let Some(start) = message.find('(') {
            if let Some(end) = message[start..].find(')') {
                let status_str = &message[start + 1..start + end];
                let status_num = status_str.split_whitespace().next().unwrap_or("");
                if let Ok(status) = status_num.parse::<u16>() {
                    return status == 429 || status >= 500;
                }
            }
        }
    }

    // Decode failures are never retried; only transport errors remain.
    !message.contains("not a JSON array")
        && !message.contains("Failed to parse Bedrock response")
        && !message.contains("no content blocks")
        && !message.contains("Expected")
}
