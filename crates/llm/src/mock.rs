//! Scriptable model for tests.

use crate::{ChatModel, ChatRequest, Message};
use anyhow::Result;
use parking_lot::Mutex;
use std::{collections::VecDeque, sync::Arc};

/// A model that replays scripted responses and records every request.
///
/// Clones share the same script and recording, so a clone handed to a
/// graph can be inspected through the original handle.
#[derive(Clone, Default)]
pub struct MockModel {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    script: VecDeque<Result<Message, String>>,
    requests: Vec<ChatRequest>,
}

impl MockModel {
    /// Create an empty mock. Invoking it without a script is an error.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response message.
    pub fn reply(&self, message: Message) -> &Self {
        self.inner.lock().script.push_back(Ok(message));
        self
    }

    /// Queue a failure.
    pub fn fail(&self, error: impl Into<String>) -> &Self {
        self.inner.lock().script.push_back(Err(error.into()));
        self
    }

    /// All requests the mock has received, in order.
    pub fn requests(&self) -> Vec<ChatRequest> {
        self.inner.lock().requests.clone()
    }

    /// Number of invocations so far.
    pub fn calls(&self) -> usize {
        self.inner.lock().requests.len()
    }
}

impl ChatModel for MockModel {
    async fn send(&self, request: ChatRequest) -> Result<Message> {
        let next = {
            let mut inner = self.inner.lock();
            inner.requests.push(request);
            inner.script.pop_front()
        };
        match next {
            Some(Ok(message)) => Ok(message),
            Some(Err(error)) => anyhow::bail!(error),
            None => anyhow::bail!("mock model script exhausted"),
        }
    }
}
