//! OpenAI-compatible chat completions provider.
//!
//! Targets any service exposing the OpenAI chat completions API: the
//! endpoint, credential and model come from `OPENAILIKED_BASE_URL`,
//! `OPENAILIKED_API_KEY` and `OPENAILIKED_MODEL`.

use crate::{ChatModel, ChatRequest, Message, ModelConfig, Response};
use anyhow::Result;
use reqwest::{Client, header};
use serde_json::{Value, json};

/// An OpenAI-compatible chat provider.
#[derive(Clone, Default)]
pub struct OpenAiCompatible {
    /// The HTTP client
    client: Client,
}

impl OpenAiCompatible {
    /// Create a provider over the given HTTP client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl ChatModel for OpenAiCompatible {
    async fn send(&self, request: ChatRequest) -> Result<Message> {
        // Environment is re-read on every invocation so credentials can
        // be rotated while the server is running.
        let config = ModelConfig::from_env()?;
        let body = body(&config, &request);
        tracing::debug!("request: {body}");

        let response = self
            .client
            .post(config.endpoint())
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT, "application/json")
            .bearer_auth(&config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            anyhow::bail!("chat completions request failed with {status}: {text}");
        }
        tracing::debug!("response: {text}");

        let parsed: Response = serde_json::from_str(&text)?;
        parsed
            .message()
            .ok_or_else(|| anyhow::anyhow!("model response contained no choices"))
    }
}

/// Build the chat completions request body.
fn body(config: &ModelConfig, request: &ChatRequest) -> Value {
    let mut body = json!({
        "model": config.model,
        "messages": request.messages,
        "stream": false,
    });
    if !request.tools.is_empty() {
        let tools: Vec<Value> = request
            .tools
            .iter()
            .map(|tool| {
                json!({
                    "type": "function",
                    "function": {
                        "name": tool.name,
                        "description": tool.description,
                        "parameters": tool.parameters,
                        "strict": tool.strict,
                    },
                })
            })
            .collect();
        body["tools"] = Value::Array(tools);
        body["tool_choice"] = json!("auto");
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tool;

    fn config() -> ModelConfig {
        ModelConfig {
            model: "glm-4.6".into(),
            api_key: "sk-test".into(),
            base_url: "https://api.example.com/v1".into(),
        }
    }

    #[test]
    fn body_without_tools_omits_tool_fields() {
        let body = body(&config(), &ChatRequest::default());
        assert_eq!(body["model"], "glm-4.6");
        assert_eq!(body["stream"], false);
        assert!(body.get("tools").is_none());
        assert!(body.get("tool_choice").is_none());
    }

    #[test]
    fn body_wraps_tools_as_functions() {
        let request = ChatRequest {
            messages: vec![Message::user("hi")],
            tools: vec![Tool {
                name: "get_weather".into(),
                description: "Get the weather for a given location.".into(),
                parameters: json!({"type": "object"}),
                strict: false,
            }],
        };
        let body = body(&config(), &request);
        assert_eq!(body["tools"][0]["type"], "function");
        assert_eq!(body["tools"][0]["function"]["name"], "get_weather");
        assert_eq!(body["tool_choice"], "auto");
        assert_eq!(body["messages"][0]["content"], "hi");
    }
}
