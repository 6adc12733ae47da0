//! Graph builder and runner.

use crate::{Checkpointer, Command, GraphState, Next};
use anyhow::Result;
use futures_core::Stream;
use futures_util::StreamExt;
use std::{collections::BTreeMap, pin::Pin, sync::Arc};

/// Upper bound on node executions per run; a graph that keeps cycling
/// past this is aborted with an error.
const MAX_STEPS: usize = 25;

/// A type-erased async node function.
pub type NodeFn<S> = Arc<
    dyn Fn(S, RunConfig) -> Pin<Box<dyn Future<Output = Result<Command<S>>> + Send>> + Send + Sync,
>;

/// Per-run configuration handed to every node.
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    /// Checkpointer key; stable across the round-trips of one session.
    pub thread_id: String,
    /// Identifier of this traversal.
    pub run_id: String,
}

impl RunConfig {
    /// Create a run configuration.
    pub fn new(thread_id: impl Into<String>, run_id: impl Into<String>) -> Self {
        Self {
            thread_id: thread_id.into(),
            run_id: run_id.into(),
        }
    }
}

/// One completed node execution.
pub struct Step<S: GraphState> {
    /// The node that ran
    pub node: &'static str,
    /// The patch it produced, if any
    pub patch: Option<S::Patch>,
    /// The state after merging the patch
    pub state: S,
}

/// Graph under construction: nodes, static edges, entry point.
pub struct StateGraph<S: GraphState> {
    nodes: BTreeMap<&'static str, NodeFn<S>>,
    edges: BTreeMap<&'static str, &'static str>,
    entry: Option<&'static str>,
}

impl<S: GraphState> Default for StateGraph<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: GraphState> StateGraph<S> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            nodes: BTreeMap::new(),
            edges: BTreeMap::new(),
            entry: None,
        }
    }

    /// Register a node under a unique name. Replaces any previous node
    /// with the same name.
    pub fn add_node<F, Fut>(&mut self, name: &'static str, node: F) -> &mut Self
    where
        F: Fn(S, RunConfig) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Command<S>>> + Send + 'static,
    {
        let node: NodeFn<S> = Arc::new(move |state, config| Box::pin(node(state, config)));
        self.nodes.insert(name, node);
        self
    }

    /// Add a static edge taken when `from` returns [`Next::Continue`].
    pub fn add_edge(&mut self, from: &'static str, to: &'static str) -> &mut Self {
        self.edges.insert(from, to);
        self
    }

    /// Set the node the run starts at.
    pub fn set_entry(&mut self, name: &'static str) -> &mut Self {
        self.entry = Some(name);
        self
    }

    /// Validate the wiring and attach a checkpointer.
    pub fn compile(self, checkpointer: Arc<dyn Checkpointer<S>>) -> Result<CompiledGraph<S>> {
        let entry = self
            .entry
            .ok_or_else(|| anyhow::anyhow!("graph has no entry node"))?;
        if !self.nodes.contains_key(entry) {
            anyhow::bail!("entry node '{entry}' is not registered");
        }
        for (from, to) in &self.edges {
            if !self.nodes.contains_key(from) {
                anyhow::bail!("edge source '{from}' is not registered");
            }
            if !self.nodes.contains_key(to) {
                anyhow::bail!("edge target '{to}' is not registered");
            }
        }
        Ok(CompiledGraph {
            nodes: self.nodes,
            edges: self.edges,
            entry,
            checkpointer,
        })
    }
}

/// An executable graph.
pub struct CompiledGraph<S: GraphState> {
    nodes: BTreeMap<&'static str, NodeFn<S>>,
    edges: BTreeMap<&'static str, &'static str>,
    entry: &'static str,
    checkpointer: Arc<dyn Checkpointer<S>>,
}

impl<S: GraphState> CompiledGraph<S> {
    /// The last committed snapshot for a thread, if any.
    pub fn checkpoint(&self, thread_id: &str) -> Option<S> {
        self.checkpointer.get(thread_id)
    }

    /// Run the graph, yielding one [`Step`] per completed node.
    ///
    /// The state is committed to the checkpointer after each node.
    /// Dropping the stream abandons the run at the next suspension
    /// point; the in-flight node's patch is never merged and the last
    /// committed snapshot stays in place.
    pub fn stream<'a>(
        &'a self,
        state: S,
        config: RunConfig,
    ) -> impl Stream<Item = Result<Step<S>>> + Send + 'a {
        async_stream::try_stream! {
            let mut state = state;
            let mut node = self.entry;

            for _ in 0..MAX_STEPS {
                let run = self
                    .nodes
                    .get(node)
                    .ok_or_else(|| anyhow::anyhow!("unknown graph node '{node}'"))?
                    .clone();
                let command = run(state.clone(), config.clone()).await?;

                if let Some(ref patch) = command.update {
                    state.apply(patch.clone());
                }
                self.checkpointer.put(&config.thread_id, state.clone());
                yield Step {
                    node,
                    patch: command.update,
                    state: state.clone(),
                };

                match command.next {
                    Next::End => return,
                    Next::Goto(target) => node = target,
                    Next::Continue => match self.edges.get(node).copied() {
                        Some(target) => node = target,
                        None => return,
                    },
                }
            }

            Err(anyhow::anyhow!("graph exceeded {MAX_STEPS} steps"))?;
        }
    }

    /// Run the graph to completion and return the final state.
    pub async fn invoke(&self, state: S, config: RunConfig) -> Result<S> {
        let mut current = state.clone();
        let steps = self.stream(state, config);
        futures_util::pin_mut!(steps);
        while let Some(step) = steps.next().await {
            current = step?.state;
        }
        Ok(current)
    }
}
