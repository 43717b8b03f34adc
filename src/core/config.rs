//! Configuration: API endpoint, model, and reveal pacing. Loaded once at
//! startup and passed by reference to whatever needs it; the key never
//! lives in process-wide mutable state.

use std::env;

use async_openai::config::OpenAIConfig;

use crate::core::api_key;

/// OpenAI-compatible endpoint of the generative-language API.
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai";

/// Model used when `CHRIKI_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Milliseconds between chunk reveals in the TUI.
const DEFAULT_REVEAL_DELAY_MS: u64 = 800;

#[derive(Debug, Clone)]
pub struct Config {
    pub openai_config: OpenAIConfig,
    pub model_id: String,
    pub reveal_delay_ms: u64,
}

#[derive(Debug)]
pub enum ConfigError {
    MissingApiKey,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::MissingApiKey => write!(
                f,
                "GEMINI_API_KEY is not set and no stored key was found. \
                 Run `chriki key set <KEY>` or see env.example."
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load configuration from the environment and the stored credentials.
/// Returns an error if no API key can be resolved.
pub fn load() -> Result<Config, ConfigError> {
    let base_url =
        env::var("CHRIKI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

    let api_key = resolve_api_key().ok_or(ConfigError::MissingApiKey)?;

    let model_id = env::var("CHRIKI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

    let reveal_delay_ms = env::var("CHRIKI_REVEAL_DELAY_MS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_REVEAL_DELAY_MS);

    let openai_config = OpenAIConfig::new()
        .with_api_base(base_url)
        .with_api_key(api_key);

    Ok(Config {
        openai_config,
        model_id,
        reveal_delay_ms,
    })
}

/// The environment wins over the stored key file.
fn resolve_api_key() -> Option<String> {
    env::var("GEMINI_API_KEY")
        .ok()
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
        .or_else(api_key::load_api_key)
}
