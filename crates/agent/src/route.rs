//! Routing predicate between the chat and tool nodes.

use llm::ToolCall;

/// Whether any of the model's calls must be executed by the backend.
///
/// A call belongs to the backend unless its name appears in the
/// client-owned set, so an unknown name routes to the backend and
/// surfaces there as an error result rather than silently reaching the
/// client.
pub fn needs_backend(calls: &[ToolCall], frontend: &[String]) -> bool {
    calls
        .iter()
        .any(|call| !frontend.contains(&call.function.name))
}
