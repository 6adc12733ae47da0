//! Minimal state-machine runtime for conversational agents.
//!
//! A graph is a set of named async nodes over a shared state type.
//! Each node receives a snapshot of the state and returns a
//! [`Command`]: a patch to merge plus the next transition. Static edges
//! cover unconditional transitions; a node overrides them by returning
//! [`Next::Goto`] or [`Next::End`]. After every completed node the
//! merged state is committed to the attached [`Checkpointer`], keyed by
//! the thread id of the run.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut workflow = StateGraph::new();
//! workflow.add_node("chat", chat);
//! workflow.add_node("tool", tool);
//! workflow.add_edge("tool", "chat");
//! workflow.set_entry("chat");
//! let graph = workflow.compile(Arc::new(MemorySaver::new()))?;
//! let final_state = graph.invoke(state, RunConfig::new("thread-1", "run-1")).await?;
//! ```

pub use checkpoint::{Checkpointer, MemorySaver};
pub use command::{Command, Next};
pub use graph::{CompiledGraph, RunConfig, StateGraph, Step};
pub use state::GraphState;

mod checkpoint;
mod command;
mod graph;
mod state;
