//! End-to-end runs of the agent graph against a scripted model.

use proverbs_agent::{AgentState, CHAT_NODE, TOOL_NODE, ToolRegistry, build_graph};
use agui::FrontendTool;
use futures_util::StreamExt;
use graph::RunConfig;
use llm::{Message, MockModel, Role, ToolCall};
use serde_json::json;
use std::sync::Arc;

fn state_with(messages: Vec<Message>) -> AgentState {
    AgentState {
        messages,
        ..Default::default()
    }
}

fn frontend_tool(name: &str) -> FrontendTool {
    FrontendTool {
        name: name.into(),
        description: format!("The {name} tool"),
        parameters: json!({"type": "object"}),
    }
}

/// Run the graph to completion, returning the visited node names and
/// the final state.
async fn run(mock: &MockModel, state: AgentState) -> (Vec<&'static str>, AgentState) {
    let graph = build_graph(mock.clone(), Arc::new(ToolRegistry::builtin())).unwrap();
    let steps = graph.stream(state, RunConfig::new("t1", "r1"));
    futures_util::pin_mut!(steps);

    let mut visited = Vec::new();
    let mut current = AgentState::default();
    while let Some(step) = steps.next().await {
        let step = step.unwrap();
        visited.push(step.node);
        current = step.state;
    }
    (visited, current)
}

#[tokio::test]
async fn plain_chat_ends_after_one_turn() {
    let mock = MockModel::new();
    mock.reply(Message::assistant("hello there", None));

    let (visited, state) = run(&mock, state_with(vec![Message::user("hi")])).await;

    assert_eq!(visited, [CHAT_NODE]);
    assert_eq!(mock.calls(), 1);
    assert_eq!(state.messages.len(), 2);
    assert_eq!(state.messages[1].role, Role::Assistant);
    assert_eq!(state.messages[1].content, "hello there");
}

#[tokio::test]
async fn backend_call_loops_through_the_tool_node() {
    let mock = MockModel::new();
    mock.reply(Message::assistant(
        "",
        Some(&[ToolCall::function(
            "c1",
            "get_weather",
            r#"{"location":"Paris"}"#,
        )]),
    ));
    mock.reply(Message::assistant("It is 70 degrees in Paris.", None));

    let (visited, state) =
        run(&mock, state_with(vec![Message::user("weather in Paris?")])).await;

    assert_eq!(visited, [CHAT_NODE, TOOL_NODE, CHAT_NODE]);
    assert_eq!(mock.calls(), 2);

    // user, call, result, answer
    assert_eq!(state.messages.len(), 4);
    assert_eq!(state.messages[2].role, Role::Tool);
    assert_eq!(state.messages[2].tool_call_id, "c1");
    assert_eq!(state.messages[2].content, "The weather for Paris is 70 degrees.");
    assert_eq!(state.messages[3].content, "It is 70 degrees in Paris.");

    // the second inference turn sees the tool result
    let second = &mock.requests()[1];
    assert!(second.messages.iter().any(|m| m.role == Role::Tool));
}

#[tokio::test]
async fn frontend_call_suspends_the_run() {
    let mock = MockModel::new();
    mock.reply(Message::assistant(
        "",
        Some(&[ToolCall::function("c1", "open_url", r#"{"url":"x"}"#)]),
    ));

    let mut state = state_with(vec![Message::user("open my dashboard")]);
    state.tools.push(frontend_tool("open_url"));

    let (visited, state) = run(&mock, state).await;

    // the client runs open_url; the backend is done after one turn
    assert_eq!(visited, [CHAT_NODE]);
    assert_eq!(mock.calls(), 1);
    let last = state.messages.last().unwrap();
    assert_eq!(last.tool_calls[0].function.name, "open_url");
    assert!(!state.messages.iter().any(|m| m.role == Role::Tool));
}

#[tokio::test]
async fn mixed_calls_execute_only_backend_tools() {
    let mock = MockModel::new();
    mock.reply(Message::assistant(
        "",
        Some(&[
            ToolCall::function("c1", "open_url", r#"{"url":"x"}"#),
            ToolCall::function("c2", "get_weather", r#"{"location":"Tokyo"}"#),
        ]),
    ));
    mock.reply(Message::assistant("done", None));

    let mut state = state_with(vec![Message::user("hi")]);
    state.tools.push(frontend_tool("open_url"));

    let (visited, state) = run(&mock, state).await;

    assert_eq!(visited, [CHAT_NODE, TOOL_NODE, CHAT_NODE]);
    let results: Vec<_> = state
        .messages
        .iter()
        .filter(|m| m.role == Role::Tool)
        .collect();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].tool_call_id, "c2");
    assert!(results[0].content.contains("Tokyo"));
}

#[tokio::test]
async fn unknown_tool_surfaces_as_error_result() {
    let mock = MockModel::new();
    mock.reply(Message::assistant(
        "",
        Some(&[ToolCall::function("c1", "launch_rocket", "{}")]),
    ));
    mock.reply(Message::assistant("that tool does not exist", None));

    let (visited, state) = run(&mock, state_with(vec![Message::user("launch!")])).await;

    assert_eq!(visited, [CHAT_NODE, TOOL_NODE, CHAT_NODE]);
    let result = state.messages.iter().find(|m| m.role == Role::Tool).unwrap();
    let payload: serde_json::Value = serde_json::from_str(&result.content).unwrap();
    assert!(payload["error"].as_str().unwrap().contains("launch_rocket"));
}

#[tokio::test]
async fn system_prompt_quotes_proverbs_verbatim() {
    let mock = MockModel::new();
    mock.reply(Message::assistant("ok", None));

    let mut state = state_with(vec![Message::user("hi")]);
    state.proverbs.push("A watched pot never boils".into());
    run(&mock, state).await;

    let first = &mock.requests()[0].messages[0];
    assert_eq!(first.role, Role::System);
    assert!(first.content.contains("\"A watched pot never boils\""));
}

#[tokio::test]
async fn model_sees_frontend_and_backend_tools() {
    let mock = MockModel::new();
    mock.reply(Message::assistant("ok", None));

    let mut state = state_with(vec![Message::user("hi")]);
    state.tools.push(frontend_tool("open_url"));
    run(&mock, state).await;

    let bound: Vec<_> = mock.requests()[0]
        .tools
        .iter()
        .map(|t| t.name.clone())
        .collect();
    assert!(bound.contains(&"open_url".to_string()));
    assert!(bound.contains(&"get_weather".to_string()));
}

#[tokio::test]
async fn backend_wins_tool_name_collisions() {
    let mock = MockModel::new();
    mock.reply(Message::assistant(
        "",
        Some(&[ToolCall::function(
            "c1",
            "get_weather",
            r#"{"location":"Oslo"}"#,
        )]),
    ));
    mock.reply(Message::assistant("done", None));

    // the client declares its own get_weather; the backend owns the name
    let mut state = state_with(vec![Message::user("weather?")]);
    state.tools.push(frontend_tool("get_weather"));

    let (visited, state) = run(&mock, state).await;

    assert_eq!(visited, [CHAT_NODE, TOOL_NODE, CHAT_NODE]);
    let result = state.messages.iter().find(|m| m.role == Role::Tool).unwrap();
    assert_eq!(result.content, "The weather for Oslo is 70 degrees.");

    // only one schema for the contested name was bound
    let requests = mock.requests();
    let bound: Vec<_> = requests[0]
        .tools
        .iter()
        .filter(|t| t.name == "get_weather")
        .collect();
    assert_eq!(bound.len(), 1);
    assert_eq!(bound[0].description, "Get the weather for a given location.");
}

#[tokio::test]
async fn each_step_patches_only_its_own_messages() {
    let mock = MockModel::new();
    mock.reply(Message::assistant(
        "",
        Some(&[ToolCall::function(
            "c1",
            "get_weather",
            r#"{"location":"Paris"}"#,
        )]),
    ));
    mock.reply(Message::assistant("answer", None));

    let graph = build_graph(mock.clone(), Arc::new(ToolRegistry::builtin())).unwrap();
    let steps = graph.stream(
        state_with(vec![Message::user("weather?")]),
        RunConfig::new("t1", "r1"),
    );
    futures_util::pin_mut!(steps);

    let mut patch_sizes = Vec::new();
    while let Some(step) = steps.next().await {
        let step = step.unwrap();
        patch_sizes.push(step.patch.map(|p| p.messages.len()).unwrap_or(0));
    }
    assert_eq!(patch_sizes, [1, 1, 1]);
}

#[tokio::test]
async fn model_failure_aborts_the_run() {
    let mock = MockModel::new();
    mock.fail("upstream 500");

    let graph = build_graph(mock.clone(), Arc::new(ToolRegistry::builtin())).unwrap();
    let steps = graph.stream(
        state_with(vec![Message::user("hi")]),
        RunConfig::new("t1", "r1"),
    );
    futures_util::pin_mut!(steps);

    let first = steps.next().await.unwrap();
    assert!(first.is_err());
    assert!(steps.next().await.is_none());
}
