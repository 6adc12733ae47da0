//! Node transition commands.

use crate::GraphState;

/// Where the run goes after a node completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Next {
    /// Follow the static edge out of the current node; if there is
    /// none, the run ends.
    Continue,
    /// Jump to the named node.
    Goto(&'static str),
    /// Stop and return the current state.
    End,
}

/// The result of one node execution: a transition plus an optional
/// state patch. Patches are merged by the runner before the transition
/// is taken; a failed node produces neither.
pub struct Command<S: GraphState> {
    /// The transition to take
    pub next: Next,
    /// The patch to merge into the state
    pub update: Option<S::Patch>,
}

impl<S: GraphState> Command<S> {
    /// Jump to the named node.
    pub fn goto(node: &'static str) -> Self {
        Self {
            next: Next::Goto(node),
            update: None,
        }
    }

    /// Follow the static edge out of the current node.
    pub fn advance() -> Self {
        Self {
            next: Next::Continue,
            update: None,
        }
    }

    /// Stop the run.
    pub fn end() -> Self {
        Self {
            next: Next::End,
            update: None,
        }
    }

    /// Attach a state patch to this command.
    pub fn update(mut self, patch: S::Patch) -> Self {
        self.update = Some(patch);
        self
    }
}
