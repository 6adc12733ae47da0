//! Chat completion response types.

use crate::{Message, Role, ToolCall};
use serde::Deserialize;

/// A chat completion response from the model
#[derive(Debug, Clone, Deserialize)]
pub struct Response {
    /// A unique identifier for the chat completion
    #[serde(default)]
    pub id: String,

    /// The model used for the completion
    #[serde(default)]
    pub model: String,

    /// The list of completion choices
    pub choices: Vec<Choice>,

    /// Token usage statistics
    #[serde(default)]
    pub usage: Option<Usage>,
}

impl Response {
    /// Extract the assistant message from the first choice.
    pub fn message(&self) -> Option<Message> {
        let choice = self.choices.first()?;
        Some(Message::assistant(
            choice.message.content.clone().unwrap_or_default(),
            choice.message.tool_calls.as_deref(),
        ))
    }

    /// Get the reason the model stopped generating
    pub fn reason(&self) -> Option<&FinishReason> {
        self.choices
            .first()
            .and_then(|choice| choice.finish_reason.as_ref())
    }
}

/// A completion choice in the response
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    /// The index of this choice in the list
    #[serde(default)]
    pub index: u32,

    /// The generated message
    pub message: ResponseMessage,

    /// The reason the model stopped generating
    pub finish_reason: Option<FinishReason>,
}

/// Message content in a completion response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponseMessage {
    /// The role of the message author
    pub role: Option<Role>,

    /// The content of the message
    pub content: Option<String>,

    /// Tool calls made by the model
    pub tool_calls: Option<Vec<ToolCall>>,
}

/// The reason the model stopped generating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    /// The model finished naturally
    Stop,

    /// The model hit the max token limit
    Length,

    /// The model called one or more tools
    ToolCalls,

    /// Content was omitted due to a filter
    ContentFilter,
}

/// Token usage statistics
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Usage {
    /// Tokens in the prompt
    #[serde(default)]
    pub prompt_tokens: u64,

    /// Tokens in the completion
    #[serde(default)]
    pub completion_tokens: u64,

    /// Total tokens billed
    #[serde(default)]
    pub total_tokens: u64,
}
