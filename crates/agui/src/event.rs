//! Protocol events streamed to the client.

use crate::AguiMessage;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An AG-UI protocol event.
///
/// Serialized with a SCREAMING_SNAKE `type` tag and camelCase fields,
/// e.g. `{"type":"RUN_STARTED","threadId":"t1","runId":"r1"}`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE", rename_all_fields = "camelCase")]
pub enum Event {
    /// A run has been accepted and started
    RunStarted {
        /// Session identifier
        thread_id: String,
        /// Run identifier
        run_id: String,
    },

    /// The run completed
    RunFinished {
        /// Session identifier
        thread_id: String,
        /// Run identifier
        run_id: String,
    },

    /// The run failed; always terminal
    RunError {
        /// Human-readable failure description
        message: String,
        /// Optional machine-readable code
        #[serde(skip_serializing_if = "Option::is_none")]
        code: Option<String>,
    },

    /// An assistant text message begins
    TextMessageStart {
        /// Message identifier
        message_id: String,
        /// Always "assistant"
        role: String,
    },

    /// A chunk of assistant text
    TextMessageContent {
        /// Message identifier
        message_id: String,
        /// The text chunk
        delta: String,
    },

    /// The assistant text message is complete
    TextMessageEnd {
        /// Message identifier
        message_id: String,
    },

    /// The model started a tool call
    ToolCallStart {
        /// Call identifier
        tool_call_id: String,
        /// Name of the tool being called
        tool_call_name: String,
        /// The assistant message carrying the call
        #[serde(skip_serializing_if = "Option::is_none")]
        parent_message_id: Option<String>,
    },

    /// A chunk of tool-call arguments
    ToolCallArgs {
        /// Call identifier
        tool_call_id: String,
        /// The argument chunk (JSON text)
        delta: String,
    },

    /// The tool call is complete
    ToolCallEnd {
        /// Call identifier
        tool_call_id: String,
    },

    /// The result of a backend-executed tool call
    ToolCallResult {
        /// Identifier of the tool-result message
        message_id: String,
        /// The call this result answers
        tool_call_id: String,
        /// The result payload
        content: String,
        /// Always "tool"
        #[serde(skip_serializing_if = "Option::is_none")]
        role: Option<String>,
    },

    /// Full shared state (minus the transcript)
    StateSnapshot {
        /// The state object
        snapshot: Value,
    },

    /// Full transcript
    MessagesSnapshot {
        /// All messages of the session
        messages: Vec<AguiMessage>,
    },
}
