//! Backend tool registry and dispatch.

use anyhow::Result;
use llm::{Message, Tool, ToolCall};
use schemars::JsonSchema;
use serde::Deserialize;
use std::{collections::BTreeMap, pin::Pin, sync::Arc};

/// A type-erased async tool handler. Takes the call's raw JSON
/// arguments and returns the result content.
pub type Handler =
    Arc<dyn Fn(String) -> Pin<Box<dyn Future<Output = Result<String>> + Send>> + Send + Sync>;

/// The tools the backend executes itself.
#[derive(Clone, Default)]
pub struct ToolRegistry {
    tools: BTreeMap<String, (Tool, Handler)>,
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in tool set.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(
            Tool {
                name: "get_weather".into(),
                description: "Get the weather for a given location.".into(),
                parameters: schemars::schema_for!(WeatherParams).into(),
                strict: false,
            },
            |arguments| async move {
                let params: WeatherParams = serde_json::from_str(&arguments)?;
                Ok(get_weather(&params.location))
            },
        );
        registry
    }

    /// Register a tool under its schema name. Replaces any previous
    /// tool with the same name.
    pub fn register<F, Fut>(&mut self, tool: Tool, handler: F) -> &mut Self
    where
        F: Fn(String) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<String>> + Send + 'static,
    {
        let handler: Handler = Arc::new(move |arguments| Box::pin(handler(arguments)));
        self.tools.insert(tool.name.clone(), (tool, handler));
        self
    }

    /// Whether a tool with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Schemas of every registered tool, for binding to the model.
    pub fn schemas(&self) -> Vec<Tool> {
        self.tools.values().map(|(tool, _)| tool.clone()).collect()
    }

    /// Execute the given calls in order, producing one tool-result
    /// message per call.
    ///
    /// A failed or unknown tool still produces a result message, with
    /// an error payload as its content; the model decides what to do
    /// with it on the next turn.
    pub async fn dispatch(&self, calls: &[ToolCall]) -> Vec<Message> {
        let mut results = Vec::with_capacity(calls.len());
        for call in calls {
            let name = &call.function.name;
            let content = match self.tools.get(name) {
                Some((_, handler)) => {
                    match handler(call.function.arguments.clone()).await {
                        Ok(output) => output,
                        Err(error) => {
                            tracing::warn!(tool = %name, "tool failed: {error:#}");
                            error_payload(&format!("{error:#}"))
                        }
                    }
                }
                None => {
                    tracing::warn!(tool = %name, "call to unregistered tool");
                    error_payload(&format!("tool '{name}' is not available"))
                }
            };
            results.push(Message::tool(content, &call.id));
        }
        results
    }
}

fn error_payload(message: &str) -> String {
    serde_json::json!({ "error": message }).to_string()
}

#[derive(JsonSchema, Deserialize)]
struct WeatherParams {
    /// The location to get the weather for
    location: String,
}

fn get_weather(location: &str) -> String {
    format!("The weather for {location} is 70 degrees.")
}
