//! The two graph nodes.

use crate::{AgentState, StatePatch, ToolRegistry, needs_backend};
use anyhow::Result;
use graph::Command;
use llm::{ChatModel, ChatRequest, Message, Role, Tool};
use std::sync::Arc;

/// Name of the inference node.
pub const CHAT_NODE: &str = "chat_node";

/// Name of the backend tool execution node.
pub const TOOL_NODE: &str = "tool_node";

/// One turn of inference.
///
/// Binds the client's tools and the backend registry to the model and
/// sends the transcript behind a system prompt. If the reply calls any
/// backend tool the run jumps to [`TOOL_NODE`]; otherwise it ends and
/// the reply (pending client-side calls included) goes back to the
/// client.
pub async fn chat_node<M: ChatModel>(
    model: M,
    registry: Arc<ToolRegistry>,
    state: AgentState,
) -> Result<Command<AgentState>> {
    let frontend = frontend_names(&state, &registry);

    let mut tools: Vec<Tool> = state
        .tools
        .iter()
        .filter(|tool| frontend.contains(&tool.name))
        .map(Tool::from)
        .collect();
    tools.extend(registry.schemas());

    let mut messages = vec![Message::system(system_prompt(&state))];
    messages.extend(state.messages.iter().cloned());

    let reply = model.send(ChatRequest { messages, tools }).await?;
    tracing::debug!(
        calls = reply.tool_calls.len(),
        "model replied with {} bytes of text",
        reply.content.len(),
    );

    let command = if needs_backend(&reply.tool_calls, &frontend) {
        Command::goto(TOOL_NODE)
    } else {
        Command::end()
    };
    Ok(command.update(StatePatch::from(reply)))
}

/// Execute the backend-owned calls of the latest assistant turn.
///
/// Client-owned calls are left untouched for the client to run; every
/// executed call appends one tool-result message. Control then follows
/// the static edge back to [`CHAT_NODE`].
pub async fn tool_node(
    registry: Arc<ToolRegistry>,
    state: AgentState,
) -> Result<Command<AgentState>> {
    let frontend = frontend_names(&state, &registry);

    let calls: Vec<_> = state
        .messages
        .iter()
        .rev()
        .find(|message| message.role == Role::Assistant)
        .map(|message| message.tool_calls.clone())
        .unwrap_or_default()
        .into_iter()
        .filter(|call| !frontend.contains(&call.function.name))
        .collect();

    let messages = registry.dispatch(&calls).await;
    Ok(Command::advance().update(StatePatch { messages }))
}

/// Names of the tools the client runs itself. A client tool shadowed by
/// a registered backend tool is dropped; the backend owns the name.
fn frontend_names(state: &AgentState, registry: &ToolRegistry) -> Vec<String> {
    state
        .tools
        .iter()
        .filter(|tool| !registry.contains(&tool.name))
        .map(|tool| tool.name.clone())
        .collect()
}

fn system_prompt(state: &AgentState) -> String {
    format!(
        "You are a helpful assistant. The current proverbs are {:?}.",
        state.proverbs,
    )
}
