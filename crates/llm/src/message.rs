//! Chat messages in the OpenAI-compatible wire format.

use crate::ToolCall;
use serde::{Deserialize, Serialize};

/// A message in the chat
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Message {
    /// The role of the message
    pub role: Role,

    /// The content of the message
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub content: String,

    /// The tool call this message responds to (tool role only)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub tool_call_id: String,

    /// The tool calls made by the model (assistant role only)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tool_calls: Vec<ToolCall>,
}

impl Message {
    /// Create a new system message
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
            ..Default::default()
        }
    }

    /// Create a new user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            ..Default::default()
        }
    }

    /// Create a new assistant message
    pub fn assistant(content: impl Into<String>, tool_calls: Option<&[ToolCall]>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            tool_calls: tool_calls.map(<[ToolCall]>::to_vec).unwrap_or_default(),
            ..Default::default()
        }
    }

    /// Create a new tool-result message echoing the originating call id
    pub fn tool(content: impl Into<String>, call: impl Into<String>) -> Self {
        Self {
            role: Role::Tool,
            content: content.into(),
            tool_call_id: call.into(),
            ..Default::default()
        }
    }
}

/// The role of a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, Default)]
pub enum Role {
    /// The user role
    #[serde(rename = "user")]
    #[default]
    User,
    /// The assistant role
    #[serde(rename = "assistant")]
    Assistant,
    /// The system role
    #[serde(rename = "system")]
    System,
    /// The tool role
    #[serde(rename = "tool")]
    Tool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FunctionCall;

    #[test]
    fn constructors_set_roles() {
        assert_eq!(Message::system("s").role, Role::System);
        assert_eq!(Message::user("u").role, Role::User);
        assert_eq!(Message::assistant("a", None).role, Role::Assistant);
        assert_eq!(Message::tool("t", "c1").role, Role::Tool);
    }

    #[test]
    fn tool_message_carries_call_id() {
        let msg = Message::tool("output", "call_1");
        assert_eq!(msg.tool_call_id, "call_1");
        assert_eq!(msg.content, "output");
    }

    #[test]
    fn empty_fields_are_omitted_on_the_wire() {
        let json = serde_json::to_value(Message::user("hi")).unwrap();
        assert_eq!(json, serde_json::json!({"role": "user", "content": "hi"}));
    }

    #[test]
    fn assistant_serializes_tool_calls() {
        let call = ToolCall {
            id: "c1".into(),
            call_type: "function".into(),
            function: FunctionCall {
                name: "get_weather".into(),
                arguments: r#"{"location":"Paris"}"#.into(),
            },
        };
        let json = serde_json::to_value(Message::assistant("", Some(&[call]))).unwrap();
        assert_eq!(json["tool_calls"][0]["function"]["name"], "get_weather");
        assert!(json.get("content").is_none());
    }
}
