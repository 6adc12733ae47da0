//! Environment-derived model configuration.
//!
//! Credentials are read from the process environment on every chat
//! invocation rather than cached at startup, so they can be rotated
//! without restarting the server.

use anyhow::Result;

/// Environment variable naming the model identifier.
pub const ENV_MODEL: &str = "OPENAILIKED_MODEL";
/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "OPENAILIKED_API_KEY";
/// Environment variable holding the chat-completions base URL.
pub const ENV_BASE_URL: &str = "OPENAILIKED_BASE_URL";
/// Model used when `OPENAILIKED_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "glm-4.6";

/// Connection parameters for an OpenAI-compatible endpoint.
#[derive(Debug, Clone)]
pub struct ModelConfig {
    /// The model identifier
    pub model: String,
    /// The bearer credential
    pub api_key: String,
    /// Base URL of the chat-completions service
    pub base_url: String,
}

impl ModelConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through an injectable lookup.
    ///
    /// Only the model identifier has a default; a missing key or base
    /// URL is an error that surfaces as a model-invocation failure.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let model = lookup(ENV_MODEL).unwrap_or_else(|| DEFAULT_MODEL.into());
        let api_key = lookup(ENV_API_KEY)
            .ok_or_else(|| anyhow::anyhow!("{ENV_API_KEY} is not set in the environment"))?;
        let base_url = lookup(ENV_BASE_URL)
            .ok_or_else(|| anyhow::anyhow!("{ENV_BASE_URL} is not set in the environment"))?;
        Ok(Self {
            model,
            api_key,
            base_url,
        })
    }

    /// The full chat-completions endpoint URL.
    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(model: Option<&str>, key: Option<&str>, url: Option<&str>) -> Result<ModelConfig> {
        ModelConfig::from_lookup(|var| match var {
            ENV_MODEL => model.map(String::from),
            ENV_API_KEY => key.map(String::from),
            ENV_BASE_URL => url.map(String::from),
            _ => None,
        })
    }

    #[test]
    fn model_defaults_to_glm() {
        let config = env(None, Some("sk-1"), Some("https://api.example.com/v1")).unwrap();
        assert_eq!(config.model, DEFAULT_MODEL);
    }

    #[test]
    fn model_override() {
        let config = env(Some("gpt-4o"), Some("sk-1"), Some("https://x/v1")).unwrap();
        assert_eq!(config.model, "gpt-4o");
    }

    #[test]
    fn missing_api_key_is_an_error() {
        let err = env(None, None, Some("https://x/v1")).unwrap_err();
        assert!(err.to_string().contains(ENV_API_KEY));
    }

    #[test]
    fn missing_base_url_is_an_error() {
        let err = env(None, Some("sk-1"), None).unwrap_err();
        assert!(err.to_string().contains(ENV_BASE_URL));
    }

    #[test]
    fn endpoint_strips_trailing_slash() {
        let config = env(None, Some("sk-1"), Some("https://api.example.com/v1/")).unwrap();
        assert_eq!(config.endpoint(), "https://api.example.com/v1/chat/completions");
    }
}
