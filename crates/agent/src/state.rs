//! Shared agent state and its patch type.

use agui::{AguiMessage, FrontendTool, RunAgentInput};
use graph::GraphState;
use llm::Message;
use serde_json::{Map, Value, json};

/// The state a run threads through the graph.
///
/// `messages` is the working transcript and the only field nodes write
/// to. `proverbs` and `tools` are client-owned: the client sends them on
/// every request and the agent reads but never mutates them. Unknown
/// state keys ride along in `extra` so a client can round-trip its own
/// data without the agent understanding it.
#[derive(Debug, Clone, Default)]
pub struct AgentState {
    /// The conversation transcript
    pub messages: Vec<Message>,

    /// Proverbs the client wants reflected in the system prompt
    pub proverbs: Vec<String>,

    /// Tools the client executes on its own side
    pub tools: Vec<FrontendTool>,

    /// State keys the agent does not interpret
    pub extra: Map<String, Value>,
}

/// A patch produced by one node: messages to append to the transcript.
#[derive(Debug, Clone, Default)]
pub struct StatePatch {
    /// Messages to append
    pub messages: Vec<Message>,
}

impl From<Message> for StatePatch {
    fn from(message: Message) -> Self {
        Self {
            messages: vec![message],
        }
    }
}

impl GraphState for AgentState {
    type Patch = StatePatch;

    fn apply(&mut self, patch: StatePatch) {
        self.messages.extend(patch.messages);
    }
}

impl AgentState {
    /// Build the run's initial state from a client request.
    ///
    /// The request transcript is authoritative: it replaces whatever a
    /// checkpoint holds, because the client appends results of its own
    /// tool executions there. Front-end tools declared in the request
    /// body and in the state object are merged, first declaration of a
    /// name wins.
    pub fn from_input(input: &RunAgentInput) -> Self {
        let mut state = Self::default();

        if let Value::Object(entries) = &input.state {
            for (key, value) in entries {
                match key.as_str() {
                    "proverbs" => {
                        state.proverbs =
                            serde_json::from_value(value.clone()).unwrap_or_default();
                    }
                    "tools" => {
                        state.tools = serde_json::from_value(value.clone()).unwrap_or_default();
                    }
                    // the transcript travels in the messages field, not
                    // the state object
                    "messages" => {}
                    _ => {
                        state.extra.insert(key.clone(), value.clone());
                    }
                }
            }
        }

        for tool in &input.tools {
            if !state.tools.iter().any(|t| t.name == tool.name) {
                state.tools.push(tool.clone());
            }
        }

        state.messages = input.messages.iter().filter_map(AguiMessage::to_chat).collect();
        state
    }

    /// Fold a checkpointed snapshot into this state.
    ///
    /// Only `extra` keys are carried over, and the request wins on
    /// conflicts; everything else is resupplied by the client each
    /// round-trip.
    pub fn resume(mut self, snapshot: AgentState) -> Self {
        for (key, value) in snapshot.extra {
            self.extra.entry(key).or_insert(value);
        }
        self
    }

    /// The state object as the client sees it. The transcript is
    /// streamed separately and is not part of the snapshot.
    pub fn snapshot(&self) -> Value {
        let mut object = Map::new();
        object.insert("proverbs".into(), json!(self.proverbs));
        object.insert("tools".into(), json!(self.tools));
        for (key, value) in &self.extra {
            object.insert(key.clone(), value.clone());
        }
        Value::Object(object)
    }
}
