//! The contract between the endpoint and a mounted agent.

use crate::{Event, RunAgentInput};
use anyhow::Result;
use futures_core::Stream;

/// An agent that can be mounted behind the streaming endpoint.
///
/// One call to [`run`](AgentBridge::run) handles one client request end
/// to end: the implementation emits `RUN_STARTED`, the events for every
/// state patch the run produces, and a terminal `RUN_FINISHED`. An
/// `Err` item aborts the stream; the endpoint converts it into a
/// terminal `RUN_ERROR`.
///
/// A `RUN_FINISHED` whose final assistant message still carries calls
/// to client-owned tools is a *suspended* run, not a completed one: the
/// client is expected to execute those calls and POST a follow-up
/// request on the same `thread_id` with the tool results appended to
/// the transcript. The protocol carries no separate flag for this; the
/// pending calls in the message are the signal.
pub trait AgentBridge: Clone + Send + Sync + 'static {
    /// Name of the mounted agent (used for logging).
    fn name(&self) -> &str;

    /// Execute one run and stream its events.
    fn run(&self, input: RunAgentInput) -> impl Stream<Item = Result<Event>> + Send + 'static;
}
