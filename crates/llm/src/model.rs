//! The model trait invoked by graph nodes.

use crate::{Message, Tool};
use anyhow::Result;

/// A single model invocation: the assembled prompt plus the tools bound
/// for this turn. Tool binding is per-invocation; callers rebuild the
/// tool list on every turn.
#[derive(Debug, Clone, Default)]
pub struct ChatRequest {
    /// The messages to send, system prompt first
    pub messages: Vec<Message>,

    /// The tools the model may call this turn
    pub tools: Vec<Tool>,
}

/// A chat model that produces one assistant turn per invocation.
pub trait ChatModel: Clone + Send + Sync + 'static {
    /// Send the request and await the assistant message.
    fn send(&self, request: ChatRequest) -> impl Future<Output = Result<Message>> + Send;
}
