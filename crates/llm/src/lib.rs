//! OpenAI-compatible chat client for the proverbs agent.
//!
//! This crate provides the shared chat types (`Message`, `Tool`,
//! `ToolCall`, `Response`), the [`ChatModel`] trait that nodes invoke,
//! and the [`OpenAiCompatible`] provider targeting any service exposing
//! the OpenAI chat completions API. The provider is configured entirely
//! from the process environment and re-reads it on every invocation.

pub use config::{DEFAULT_MODEL, ENV_API_KEY, ENV_BASE_URL, ENV_MODEL, ModelConfig};
pub use message::{Message, Role};
#[cfg(feature = "testing")]
pub use mock::MockModel;
pub use model::{ChatModel, ChatRequest};
pub use openai::OpenAiCompatible;
pub use response::{Choice, FinishReason, Response, ResponseMessage, Usage};
pub use tool::{FunctionCall, Tool, ToolCall};

mod config;
mod message;
#[cfg(feature = "testing")]
mod mock;
mod model;
mod openai;
mod response;
mod tool;
