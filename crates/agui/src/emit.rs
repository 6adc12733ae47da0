//! Framing of chat messages into protocol events.

use crate::Event;
use llm::{Message, Role};

/// Frame one appended chat message as protocol events.
///
/// Assistant text becomes a start/content/end triple; each tool call
/// becomes a start/args/end triple under the same parent message; a
/// tool-result message becomes a single result event. User and system
/// turns originate from the client and are never echoed back.
pub fn message_events(message: &Message) -> Vec<Event> {
    match message.role {
        Role::Assistant => assistant_events(message),
        Role::Tool => vec![Event::ToolCallResult {
            message_id: ulid::Ulid::new().to_string(),
            tool_call_id: message.tool_call_id.clone(),
            content: message.content.clone(),
            role: Some("tool".into()),
        }],
        Role::User | Role::System => Vec::new(),
    }
}

fn assistant_events(message: &Message) -> Vec<Event> {
    let message_id = ulid::Ulid::new().to_string();
    let mut events = Vec::new();

    if !message.content.is_empty() {
        events.push(Event::TextMessageStart {
            message_id: message_id.clone(),
            role: "assistant".into(),
        });
        events.push(Event::TextMessageContent {
            message_id: message_id.clone(),
            delta: message.content.clone(),
        });
        events.push(Event::TextMessageEnd {
            message_id: message_id.clone(),
        });
    }

    for call in &message.tool_calls {
        events.push(Event::ToolCallStart {
            tool_call_id: call.id.clone(),
            tool_call_name: call.function.name.clone(),
            parent_message_id: Some(message_id.clone()),
        });
        if !call.function.arguments.is_empty() {
            events.push(Event::ToolCallArgs {
                tool_call_id: call.id.clone(),
                delta: call.function.arguments.clone(),
            });
        }
        events.push(Event::ToolCallEnd {
            tool_call_id: call.id.clone(),
        });
    }

    events
}
