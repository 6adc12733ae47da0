//! AG-UI streaming protocol adapter.
//!
//! The AG-UI protocol connects an agent backend to a UI client over a
//! single HTTP endpoint: the client POSTs a [`RunAgentInput`] and the
//! server answers with a server-sent-event stream of [`Event`]s
//! describing the run as it unfolds. This crate provides the wire
//! types, the framing of chat messages into protocol events, the
//! [`AgentBridge`] trait an agent implements to be mounted, and the
//! axum [`router`] that serves the endpoint.

pub use bridge::AgentBridge;
pub use event::Event;
pub use input::{AguiMessage, FrontendTool, RunAgentInput};
pub use router::router;

pub mod emit;

mod bridge;
mod event;
mod input;
mod router;
