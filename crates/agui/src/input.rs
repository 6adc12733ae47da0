//! Run input and message wire types.

use llm::{Message, Role};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The body of a run request.
///
/// The client supplies the full transcript and shared state on every
/// request; `thread_id` is stable across the round-trips of a session
/// while `run_id` identifies one traversal.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RunAgentInput {
    /// Session identifier, stable across round-trips
    pub thread_id: String,

    /// Identifier of this run
    pub run_id: String,

    /// Shared agent state as the client last saw it
    pub state: Value,

    /// The conversation transcript
    pub messages: Vec<AguiMessage>,

    /// Tools the client executes on its own side
    pub tools: Vec<FrontendTool>,

    /// Additional context entries (opaque)
    pub context: Vec<Value>,

    /// Properties forwarded verbatim by the client (opaque)
    pub forwarded_props: Value,
}

/// A conversation message on the wire.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AguiMessage {
    /// Message identifier
    pub id: String,

    /// One of "system", "user", "assistant", "tool", "developer"
    pub role: String,

    /// Text content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Tool calls (assistant messages)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tool_calls: Vec<llm::ToolCall>,

    /// Originating call id (tool messages)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
}

impl AguiMessage {
    /// Convert to a chat message. Returns `None` for roles the chat
    /// model does not know.
    pub fn to_chat(&self) -> Option<Message> {
        let content = self.content.clone().unwrap_or_default();
        let message = match self.role.as_str() {
            "user" => Message::user(content),
            // "developer" is the protocol's name for a system turn
            "system" | "developer" => Message::system(content),
            "assistant" => Message::assistant(content, Some(&self.tool_calls)),
            "tool" => Message::tool(content, self.tool_call_id.clone().unwrap_or_default()),
            _ => return None,
        };
        Some(message)
    }

    /// Convert a chat message to the wire shape, minting a fresh id.
    pub fn from_chat(message: &Message) -> Self {
        let role = match message.role {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::Tool => "tool",
        };
        Self {
            id: ulid::Ulid::new().to_string(),
            role: role.into(),
            content: (!message.content.is_empty()).then(|| message.content.clone()),
            tool_calls: message.tool_calls.clone(),
            tool_call_id: (!message.tool_call_id.is_empty())
                .then(|| message.tool_call_id.clone()),
        }
    }
}

/// A tool owned and executed by the UI client. The backend only binds
/// its schema and forwards calls.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct FrontendTool {
    /// Unique tool name
    pub name: String,

    /// Description shown to the model
    pub description: String,

    /// JSON schema of the arguments
    pub parameters: Value,
}

impl From<&FrontendTool> for llm::Tool {
    fn from(tool: &FrontendTool) -> Self {
        Self {
            name: tool.name.clone(),
            description: tool.description.clone(),
            parameters: tool.parameters.clone(),
            strict: false,
        }
    }
}
