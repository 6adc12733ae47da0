//! The proverbs agent.
//!
//! A two-node control graph over a chat model: the chat node runs one
//! turn of inference with the union of client-owned and backend tools
//! bound, and either ends the run or hands the model's tool calls to
//! the tool node, which executes the backend-owned ones and loops back.
//! Calls to client-owned tools are never executed here; they ride out
//! on the final assistant message for the UI client to handle.

pub use bridge::ProverbsAgent;
pub use nodes::{CHAT_NODE, TOOL_NODE, chat_node, tool_node};
pub use registry::{Handler, ToolRegistry};
pub use route::needs_backend;
pub use state::{AgentState, StatePatch};
pub use workflow::build_graph;

mod bridge;
mod nodes;
mod registry;
mod route;
mod state;
mod workflow;
