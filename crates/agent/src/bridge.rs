//! The agent as seen by the streaming endpoint.

use crate::AgentState;
use agui::{AgentBridge, AguiMessage, Event, RunAgentInput, emit::message_events};
use anyhow::Result;
use futures_core::Stream;
use futures_util::StreamExt;
use graph::{CompiledGraph, RunConfig};
use std::sync::Arc;

/// The mounted agent: owns the compiled graph and translates runs into
/// protocol events.
#[derive(Clone)]
pub struct ProverbsAgent {
    graph: Arc<CompiledGraph<AgentState>>,
}

impl ProverbsAgent {
    /// The name the agent is mounted under.
    pub const NAME: &str = "sample_agent";

    /// Human-readable description of the agent.
    pub const DESCRIPTION: &str =
        "An example agent to use as a starting point for your own agent.";

    /// Wrap a compiled graph.
    pub fn new(graph: CompiledGraph<AgentState>) -> Self {
        Self {
            graph: Arc::new(graph),
        }
    }
}

impl AgentBridge for ProverbsAgent {
    fn name(&self) -> &str {
        Self::NAME
    }

    /// Drive one run of the graph.
    ///
    /// Emits `RUN_STARTED`, the events for every message a node
    /// appends, then a state snapshot, the full transcript and
    /// `RUN_FINISHED`. A request on a known `thread_id` resumes the
    /// checkpointed session state; the request transcript is taken as
    /// is, so tool results the client appended while the run was
    /// suspended flow straight into the next inference turn.
    fn run(&self, input: RunAgentInput) -> impl Stream<Item = Result<Event>> + Send + 'static {
        let graph = self.graph.clone();

        async_stream::try_stream! {
            let thread_id = id_or_fresh(&input.thread_id);
            let run_id = id_or_fresh(&input.run_id);
            tracing::info!(%thread_id, %run_id, "run started");

            yield Event::RunStarted {
                thread_id: thread_id.clone(),
                run_id: run_id.clone(),
            };

            let mut state = AgentState::from_input(&input);
            if let Some(snapshot) = graph.checkpoint(&thread_id) {
                state = state.resume(snapshot);
            }

            let mut current = state.clone();
            let steps = graph.stream(state, RunConfig::new(&thread_id, &run_id));
            futures_util::pin_mut!(steps);
            while let Some(step) = steps.next().await {
                let step = step?;
                tracing::debug!(node = step.node, "node completed");
                if let Some(patch) = &step.patch {
                    for message in &patch.messages {
                        for event in message_events(message) {
                            yield event;
                        }
                    }
                }
                current = step.state;
            }

            yield Event::StateSnapshot {
                snapshot: current.snapshot(),
            };
            yield Event::MessagesSnapshot {
                messages: current.messages.iter().map(AguiMessage::from_chat).collect(),
            };
            yield Event::RunFinished {
                thread_id,
                run_id,
            };
        }
    }
}

/// Use the client-supplied id, or mint one when the field came empty.
fn id_or_fresh(id: &str) -> String {
    if id.is_empty() {
        ulid::Ulid::new().to_string()
    } else {
        id.to_string()
    }
}
