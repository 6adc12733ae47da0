//! Graph state and patch semantics.

/// State threaded through a graph run.
///
/// Nodes never mutate the state they receive; they return a patch and
/// the runner merges it. The patch type is defined by the state so that
/// merging stays append-only where the domain requires it.
pub trait GraphState: Clone + Send + 'static {
    /// The update a node may produce.
    type Patch: Clone + Send + 'static;

    /// Merge a patch into this state.
    fn apply(&mut self, patch: Self::Patch);
}
