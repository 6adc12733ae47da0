//! Wiring of the agent graph.

use crate::{AgentState, CHAT_NODE, TOOL_NODE, ToolRegistry, chat_node, tool_node};
use anyhow::Result;
use graph::{CompiledGraph, MemorySaver, StateGraph};
use llm::ChatModel;
use std::sync::Arc;

/// Build the compiled agent graph: chat entry, tool node looping back
/// to chat, in-memory checkpointing.
pub fn build_graph<M: ChatModel>(
    model: M,
    registry: Arc<ToolRegistry>,
) -> Result<CompiledGraph<AgentState>> {
    let mut graph = StateGraph::new();

    let chat_registry = registry.clone();
    graph.add_node(CHAT_NODE, move |state, _config| {
        let model = model.clone();
        let registry = chat_registry.clone();
        async move { chat_node(model, registry, state).await }
    });

    graph.add_node(TOOL_NODE, move |state, _config| {
        let registry = registry.clone();
        async move { tool_node(registry, state).await }
    });

    graph.add_edge(TOOL_NODE, CHAT_NODE);
    graph.set_entry(CHAT_NODE);
    graph.compile(Arc::new(MemorySaver::new()))
}
