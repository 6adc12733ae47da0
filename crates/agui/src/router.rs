//! The HTTP endpoint serving the protocol.

use crate::{AgentBridge, Event, RunAgentInput};
use axum::{
    Json, Router,
    extract::State,
    response::sse::{Event as SseEvent, KeepAlive, Sse},
    routing::post,
};
use futures_core::Stream;
use futures_util::StreamExt;
use std::convert::Infallible;

/// Build the router mounting the agent at `/`.
pub fn router<A: AgentBridge>(agent: A) -> Router {
    Router::new().route("/", post(run_agent::<A>)).with_state(agent)
}

/// POST `/`: execute one run and stream its events as SSE.
async fn run_agent<A: AgentBridge>(
    State(agent): State<A>,
    Json(input): Json<RunAgentInput>,
) -> Sse<impl Stream<Item = Result<SseEvent, Infallible>>> {
    tracing::info!(
        thread_id = %input.thread_id,
        run_id = %input.run_id,
        "run request for agent '{}'",
        agent.name(),
    );

    let stream = async_stream::stream! {
        let events = agent.run(input);
        futures_util::pin_mut!(events);
        while let Some(result) = events.next().await {
            match result {
                Ok(event) => yield Ok(encode(&event)),
                Err(error) => {
                    tracing::error!("agent run failed: {error:#}");
                    yield Ok(encode(&Event::RunError {
                        message: format!("{error:#}"),
                        code: None,
                    }));
                    break;
                }
            }
        }
    };

    Sse::new(stream).keep_alive(KeepAlive::default())
}

/// Encode a protocol event as an SSE data frame.
fn encode(event: &Event) -> SseEvent {
    match serde_json::to_string(event) {
        Ok(data) => SseEvent::default().data(data),
        Err(error) => {
            tracing::error!("failed to encode event: {error}");
            let fallback = serde_json::json!({
                "type": "RUN_ERROR",
                "message": format!("event encoding failed: {error}"),
            });
            SseEvent::default().data(fallback.to_string())
        }
    }
}
