use crate::batch::DEFAULT_BATCH_SIZE;
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Locales
    pub base_locale: String,
    pub locales_dir: String,

    // Bedrock
    pub bedrock_endpoint: String,
    pub bedrock_api_key: String,
    pub bedrock_model_id: Option<String>,
    pub bedrock_system_prompt: Option<String>,

    // Batching
    pub max_batch_size: usize,
    pub max_tokens: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Locales
            base_locale: std::env::var("BASE_LOCALE").unwrap_or_else(|_| "en".to_string()),
            locales_dir: std::env::var("LOCALES_DIR")
                .unwrap_or_else(|_| "config/locales".to_string()),

            // Bedrock
            bedrock_endpoint: std::env::var("BEDROCK_ENDPOINT").unwrap_or_else(|_| {
                "https://bedrock-runtime.us-east-1.amazonaws.com".to_string()
            }),
            bedrock_api_key: std::env::var("BEDROCK_API_KEY")
                .context("BEDROCK_API_KEY not set")?,
            bedrock_model_id: std::env::var("BEDROCK_MODEL_ID").ok().filter(|v| !v.is_empty()),
            bedrock_system_prompt: std::env::var("BEDROCK_SYSTEM_PROMPT")
                .ok()
                .filter(|v| !v.is_empty()),

            // Batching
            max_batch_size: std::env::var("MAX_BATCH_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&v| v >= 1)
                .unwrap_or(DEFAULT_BATCH_SIZE),
            max_tokens: std::env::var("BEDROCK_MAX_TOKENS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1024),
        })
    }
}
